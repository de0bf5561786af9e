use maxdefense_challenges::*;

fn item(description: &str, cost: f64, value: f64) -> Item {
    Item::new(description, cost, value).unwrap()
}

fn challenge() -> Challenge {
    Challenge::new(
        Catalog::from(vec![
            item("helmet", 10.0, 20.0),
            item("boots", 5.0, 15.0),
            item("boots", 5.0, 15.0),
            item("gloves", 5.0, 5.0),
        ]),
        15.0,
    )
}

#[test]
fn test_verify_valid_selection() {
    let selection = Selection::from(vec![item("boots", 5.0, 15.0), item("helmet", 10.0, 20.0)]);
    assert_eq!(
        challenge().verify_selection(&selection).unwrap(),
        Totals {
            cost: 15.0,
            value: 35.0
        }
    );
    assert_eq!(
        challenge().verify_selection(&Selection::new()).unwrap(),
        Totals::default()
    );
}

#[test]
fn test_verify_respects_multiplicity() {
    let twice = Selection::from(vec![item("boots", 5.0, 15.0), item("boots", 5.0, 15.0)]);
    assert!(challenge().verify_selection(&twice).is_ok());

    let thrice = Selection::from(vec![
        item("boots", 5.0, 15.0),
        item("boots", 5.0, 15.0),
        item("boots", 5.0, 15.0),
    ]);
    assert!(challenge().verify_selection(&thrice).is_err());
}

#[test]
fn test_verify_rejects_unknown_item() {
    let selection = Selection::from(vec![item("boots", 5.0, 16.0)]);
    assert!(challenge().verify_selection(&selection).is_err());
}

#[test]
fn test_verify_rejects_over_budget() {
    let selection = Selection::from(vec![
        item("helmet", 10.0, 20.0),
        item("boots", 5.0, 15.0),
        item("gloves", 5.0, 5.0),
    ]);
    let err = challenge().verify_selection(&selection).unwrap_err();
    assert!(err.to_string().contains("exceeded budget"));
}

#[test]
fn test_generate_instance_is_reproducible() {
    let track = Track { num_items: 20 };
    let a = Challenge::generate_instance(&[7; 32], &track).unwrap();
    let b = Challenge::generate_instance(&[7; 32], &track).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.catalog.len(), 20);

    let total_cost: f64 = a.catalog.iter().map(Item::cost).sum();
    assert_eq!(a.budget, total_cost / 2.0);
    for item in a.catalog.iter() {
        assert!((1.0..=50.0).contains(&item.cost()));
        assert!((0.0..=100.0).contains(&item.value()));
    }
}
