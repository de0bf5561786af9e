use anyhow::Result;
use maxdefense_challenges::{Challenge, Item, Selection};
use tracing::debug;

pub fn solve_challenge(challenge: &Challenge) -> Result<Selection> {
    Ok(greedy_max_value(&challenge.catalog, challenge.budget))
}

/// Repeatedly takes the remaining item with the best value/cost ratio that
/// still fits in the budget. Ties go to the item seen first. Not optimal for
/// 0/1 selection; runs in O(n^2).
pub fn greedy_max_value(items: &[Item], budget: f64) -> Selection {
    let mut todo: Vec<&Item> = items.iter().collect();
    let mut selection = Selection::new();
    let mut total_cost = 0.0;

    loop {
        let mut best: Option<(usize, f64)> = None;
        for (i, item) in todo.iter().enumerate() {
            if total_cost + item.cost() > budget {
                continue;
            }
            let ratio = item.ratio();
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((i, ratio));
            }
        }

        let Some((index, _)) = best else {
            break;
        };
        let item = todo.remove(index);
        total_cost += item.cost();
        selection.push(item.clone());
    }

    debug!(
        candidates = items.len(),
        selected = selection.len(),
        total_cost,
        "greedy selection done"
    );
    selection
}
