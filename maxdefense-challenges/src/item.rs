use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    #[error("item description must be non-empty")]
    EmptyDescription,
    #[error("item cost must be positive, got {0}")]
    NonPositiveCost(f64),
    #[error("item value must be non-negative, got {0}")]
    NegativeValue(f64),
    #[error("item cost must be finite, got {0}")]
    NonFiniteCost(f64),
    #[error("item value must be finite, got {0}")]
    NonFiniteValue(f64),
}

/// One purchasable item. The fields are private so every `Item` in the
/// workspace has passed through [`Item::new`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ItemData")]
pub struct Item {
    description: String,
    cost: f64,
    value: f64,
}

#[derive(Deserialize)]
struct ItemData {
    description: String,
    cost: f64,
    value: f64,
}

impl TryFrom<ItemData> for Item {
    type Error = ItemError;

    fn try_from(data: ItemData) -> Result<Self, Self::Error> {
        Item::new(data.description, data.cost, data.value)
    }
}

impl Item {
    pub fn new(description: impl Into<String>, cost: f64, value: f64) -> Result<Self, ItemError> {
        let description = description.into();
        if description.is_empty() {
            return Err(ItemError::EmptyDescription);
        }
        // Negated comparisons so NaN is rejected too
        if !(cost > 0.0) {
            return Err(ItemError::NonPositiveCost(cost));
        }
        if !(value >= 0.0) {
            return Err(ItemError::NegativeValue(value));
        }
        if !cost.is_finite() {
            return Err(ItemError::NonFiniteCost(cost));
        }
        if !value.is_finite() {
            return Err(ItemError::NonFiniteValue(value));
        }
        Ok(Self {
            description,
            cost,
            value,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value per unit of cost.
    pub fn ratio(&self) -> f64 {
        self.value / self.cost
    }
}
