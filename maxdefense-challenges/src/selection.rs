use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub cost: f64,
    pub value: f64,
}

impl Totals {
    pub fn of<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        items.into_iter().fold(Totals::default(), |acc, item| Totals {
            cost: acc.cost + item.cost(),
            value: acc.value + item.value(),
        })
    }
}

/// Items picked by a selector, in the order they were picked.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub items: Vec<Item>,
}

impl Selection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.items)
    }
}

impl From<Vec<Item>> for Selection {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Selection {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Deref for Selection {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** Selection ***")?;
        if self.items.is_empty() {
            return writeln!(f, "[empty selection]");
        }
        for item in &self.items {
            writeln!(
                f,
                "{} ==> Cost of {}; Value = {}",
                item.description(),
                item.cost(),
                item.value()
            )?;
        }
        let totals = self.totals();
        writeln!(f, "> Grand total cost: {}", totals.cost)?;
        writeln!(f, "> Grand total value: {}", totals.value)
    }
}

pub fn print_selection(selection: &Selection) {
    print!("{}", selection);
}
