use maxdefense_algorithms::greedy::*;
use maxdefense_challenges::*;

fn item(description: &str, cost: f64, value: f64) -> Item {
    Item::new(description, cost, value).unwrap()
}

fn abc() -> Vec<Item> {
    vec![
        item("A", 10.0, 20.0),
        item("B", 5.0, 15.0),
        item("C", 5.0, 5.0),
    ]
}

fn descriptions(selection: &Selection) -> Vec<&str> {
    selection.iter().map(Item::description).collect()
}

#[test]
fn test_picks_by_ratio_until_budget_runs_out() {
    let selection = greedy_max_value(&abc(), 15.0);
    assert_eq!(descriptions(&selection), vec!["B", "A"]);
    assert_eq!(
        selection.totals(),
        Totals {
            cost: 15.0,
            value: 35.0
        }
    );
}

#[test]
fn test_zero_value_items_still_fill_budget() {
    let items = vec![item("A", 10.0, 20.0), item("D", 5.0, 0.0)];
    let selection = greedy_max_value(&items, 15.0);
    assert_eq!(descriptions(&selection), vec!["A", "D"]);
}

#[test]
fn test_ties_go_to_first_item() {
    let items = vec![item("P", 2.0, 4.0), item("Q", 1.0, 2.0)];
    let selection = greedy_max_value(&items, 2.0);
    assert_eq!(descriptions(&selection), vec!["P"]);
}

#[test]
fn test_skips_items_that_do_not_fit() {
    let items = vec![item("big", 100.0, 1000.0), item("small", 1.0, 1.0)];
    let selection = greedy_max_value(&items, 50.0);
    assert_eq!(descriptions(&selection), vec!["small"]);
}

#[test]
fn test_nothing_fits() {
    assert!(greedy_max_value(&abc(), 4.0).is_empty());
    assert!(greedy_max_value(&abc(), -1.0).is_empty());
    assert!(greedy_max_value(&[], 100.0).is_empty());
}

#[test]
fn test_solve_challenge() {
    let challenge = Challenge::new(Catalog::from(abc()), 15.0);
    let selection = solve_challenge(&challenge).unwrap();
    assert_eq!(descriptions(&selection), vec!["B", "A"]);
    assert!(challenge.verify_selection(&selection).is_ok());
}
