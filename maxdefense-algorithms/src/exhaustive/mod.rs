use anyhow::Result;
use maxdefense_challenges::{Challenge, Item, Selection, Totals};
use thiserror::Error;
use tracing::debug;

/// Largest catalog the subset bitmask can index.
pub const MAX_ITEMS: usize = 63;

/// Beyond this many items a full enumeration takes noticeably long.
pub const RECOMMENDED_MAX_ITEMS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("exhaustive search supports at most {max} items, got {len}", max = MAX_ITEMS)]
    CatalogTooLarge { len: usize },
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Selection> {
    Ok(exhaustive_max_value(&challenge.catalog, challenge.budget)?)
}

/// Enumerates every subset of `items` and returns the highest-value one
/// whose cost fits in `budget`. The first feasible subset in bitmask order
/// wins ties, and the empty selection is returned when nothing fits.
pub fn exhaustive_max_value(items: &[Item], budget: f64) -> Result<Selection, SearchError> {
    let n = items.len();
    if n > MAX_ITEMS {
        return Err(SearchError::CatalogTooLarge { len: n });
    }

    let mut best: Option<(u64, Totals)> = None;
    for mask in 0..(1u64 << n) {
        let candidate = Totals::of(subset(items, mask));
        if candidate.cost > budget {
            continue;
        }
        let replace = match best {
            None => true,
            Some((best_mask, best_totals)) => {
                best_mask == 0 || candidate.value > best_totals.value
            }
        };
        if replace {
            best = Some((mask, candidate));
        }
    }

    let selection: Selection = match best {
        Some((mask, _)) => subset(items, mask).cloned().collect(),
        None => Selection::new(),
    };
    debug!(
        candidates = n,
        selected = selection.len(),
        "exhaustive selection done"
    );
    Ok(selection)
}

fn subset(items: &[Item], mask: u64) -> impl Iterator<Item = &Item> {
    items
        .iter()
        .enumerate()
        .filter(move |&(j, _)| (mask >> j) & 1 == 1)
        .map(|(_, item)| item)
}
