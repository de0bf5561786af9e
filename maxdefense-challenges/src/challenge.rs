use crate::{
    catalog::Catalog,
    item::Item,
    selection::{Selection, Totals},
};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
}

/// A catalog and the budget a selection from it must fit within.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Challenge {
    pub catalog: Catalog,
    pub budget: f64,
}

impl Challenge {
    pub fn new(catalog: Catalog, budget: f64) -> Self {
        Self { catalog, budget }
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Challenge> {
        let mut rng = SmallRng::from_seed(*seed);

        // Costs in [1, 50], values in [0, 100]
        let items = (0..track.num_items)
            .map(|i| {
                let cost = rng.gen_range(1..=50u32) as f64;
                let value = rng.gen_range(0..=100u32) as f64;
                Item::new(format!("item {}", i), cost, value)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let budget = items.iter().map(Item::cost).sum::<f64>() / 2.0;

        Ok(Challenge {
            catalog: Catalog::from(items),
            budget,
        })
    }

    /// Checks that `selection` only uses catalog items, each no more often
    /// than it appears in the catalog, and that its cost fits the budget.
    pub fn verify_selection(&self, selection: &Selection) -> Result<Totals> {
        let mut used = vec![false; self.catalog.len()];
        for item in selection.iter() {
            let slot = self
                .catalog
                .iter()
                .enumerate()
                .position(|(i, candidate)| !used[i] && candidate == item)
                .ok_or_else(|| {
                    anyhow!(
                        "Item ({}) is not in the catalog or is selected too many times",
                        item.description()
                    )
                })?;
            used[slot] = true;
        }

        let totals = selection.totals();
        if totals.cost > self.budget {
            return Err(anyhow!(
                "Total cost ({}) exceeded budget ({})",
                totals.cost,
                self.budget
            ));
        }
        Ok(totals)
    }
}
