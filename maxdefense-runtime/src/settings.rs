use anyhow::{Context, Result};
use maxdefense_challenges::{Bounds, CatalogFormat, ValueWindow, DEFAULT_DELIMITER};
use maxdefense_utils::dejsonify;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunSettings {
    pub catalog: PathBuf,
    pub delimiter: char,
    pub budget: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub inclusive_bounds: bool,
    pub max_items: usize,
    pub sizes: Vec<usize>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("armor.csv"),
            delimiter: DEFAULT_DELIMITER,
            budget: 3000.0,
            min_value: 1.0,
            max_value: 2500.0,
            inclusive_bounds: false,
            max_items: 24,
            sizes: vec![6, 12, 18, 24],
        }
    }
}

impl RunSettings {
    pub fn format(&self) -> CatalogFormat {
        CatalogFormat {
            delimiter: self.delimiter,
        }
    }

    pub fn window(&self) -> ValueWindow {
        ValueWindow {
            min_value: self.min_value,
            max_value: self.max_value,
            bounds: if self.inclusive_bounds {
                Bounds::Inclusive
            } else {
                Bounds::Exclusive
            },
        }
    }
}

/// Accepts either a json string or a path to a `.json` file.
pub fn load_settings(settings: &str) -> Result<RunSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .with_context(|| format!("Failed to read settings file: {}", settings))?
    } else {
        settings.to_string()
    };

    dejsonify::<RunSettings>(&settings).context("Failed to parse settings")
}
