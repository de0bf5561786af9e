use maxdefense_algorithms::{exhaustive::*, greedy::greedy_max_value, Solver};
use maxdefense_challenges::*;

fn item(description: &str, cost: f64, value: f64) -> Item {
    Item::new(description, cost, value).unwrap()
}

fn descriptions(selection: &Selection) -> Vec<&str> {
    selection.iter().map(Item::description).collect()
}

#[test]
fn test_finds_optimal_subset() {
    let items = vec![
        item("A", 10.0, 20.0),
        item("B", 5.0, 15.0),
        item("C", 5.0, 5.0),
    ];
    let selection = exhaustive_max_value(&items, 15.0).unwrap();
    assert_eq!(descriptions(&selection), vec!["A", "B"]);
    assert_eq!(
        selection.totals(),
        Totals {
            cost: 15.0,
            value: 35.0
        }
    );
}

#[test]
fn test_beats_greedy_on_counterexample() {
    // One high-ratio item blocks the two cheaper items that together are worth more
    let items = vec![
        item("X", 6.0, 7.0),
        item("Y", 5.0, 5.0),
        item("Z", 5.0, 5.0),
    ];
    let greedy = greedy_max_value(&items, 10.0);
    let exhaustive = exhaustive_max_value(&items, 10.0).unwrap();

    assert_eq!(descriptions(&greedy), vec!["X"]);
    assert_eq!(descriptions(&exhaustive), vec!["Y", "Z"]);
    assert!(exhaustive.totals().value > greedy.totals().value);
}

#[test]
fn test_empty_catalog() {
    let selection = exhaustive_max_value(&[], 100.0).unwrap();
    assert!(selection.is_empty());
    assert_eq!(selection.totals().value, 0.0);
}

#[test]
fn test_nothing_fits() {
    let items = vec![item("A", 10.0, 20.0)];
    assert!(exhaustive_max_value(&items, 5.0).unwrap().is_empty());
    assert!(exhaustive_max_value(&items, -1.0).unwrap().is_empty());
}

#[test]
fn test_first_subset_wins_ties() {
    let items = vec![item("U", 1.0, 5.0), item("V", 1.0, 5.0)];
    let selection = exhaustive_max_value(&items, 1.0).unwrap();
    assert_eq!(descriptions(&selection), vec!["U"]);
}

#[test]
fn test_zero_value_subset_replaces_empty() {
    let items = vec![item("W", 1.0, 0.0)];
    let selection = exhaustive_max_value(&items, 1.0).unwrap();
    assert_eq!(descriptions(&selection), vec!["W"]);
}

#[test]
fn test_too_many_items() {
    let items: Vec<Item> = (0..64)
        .map(|i| item(&format!("item {}", i), 1.0, 1.0))
        .collect();
    assert_eq!(
        exhaustive_max_value(&items, 10.0),
        Err(SearchError::CatalogTooLarge { len: 64 })
    );

    let challenge = Challenge::new(Catalog::from(items), 10.0);
    assert!(Solver::Exhaustive.solve(&challenge).is_err());
}

#[test]
fn test_solver_dispatch() {
    let challenge = Challenge::new(
        Catalog::from(vec![
            item("X", 6.0, 7.0),
            item("Y", 5.0, 5.0),
            item("Z", 5.0, 5.0),
        ]),
        10.0,
    );
    assert_eq!("greedy".parse::<Solver>().unwrap(), Solver::Greedy);
    assert_eq!("exhaustive".parse::<Solver>().unwrap(), Solver::Exhaustive);
    assert!("dynamic".parse::<Solver>().is_err());

    let greedy = Solver::Greedy.solve(&challenge).unwrap();
    let exhaustive = Solver::Exhaustive.solve(&challenge).unwrap();
    assert_eq!(greedy.totals().value, 7.0);
    assert_eq!(exhaustive.totals().value, 10.0);
}
