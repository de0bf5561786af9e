use crate::item::{Item, ItemError};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    ops::Deref,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_DELIMITER: char = '^';
pub const FIELDS_PER_ROW: usize = 3;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open catalog file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading catalog at line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },
    #[error("invalid field count at line {line_number}; want 3 but got {found}. Line: {line}")]
    FieldCount {
        line_number: usize,
        found: usize,
        line: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    UnparsableCost(String),
    UnparsableValue(String),
    InvalidItem(ItemError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line_number: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogFormat {
    pub delimiter: char,
}

impl Default for CatalogFormat {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// Which ends of a [`ValueWindow`] admit an item whose value equals the bound.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Bounds {
    #[default]
    Exclusive,
    Inclusive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ValueWindow {
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub bounds: Bounds,
}

impl ValueWindow {
    pub fn exclusive(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            bounds: Bounds::Exclusive,
        }
    }

    pub fn inclusive(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            bounds: Bounds::Inclusive,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        match self.bounds {
            Bounds::Exclusive => self.min_value < value && value < self.max_value,
            Bounds::Inclusive => self.min_value <= value && value <= self.max_value,
        }
    }
}

/// Ordered, read-only list of items.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

/// A catalog together with the rows that were dropped while loading it.
#[derive(Debug, Clone, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRow>,
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Deref for Catalog {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
        Self::load_with_report(path, CatalogFormat::default()).map(|loaded| loaded.catalog)
    }

    pub fn load_with_report(
        path: impl AsRef<Path>,
        format: CatalogFormat,
    ) -> Result<Loaded, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = Self::parse(BufReader::new(file), format)?;
        debug!(
            path = %path.display(),
            items = loaded.catalog.len(),
            skipped = loaded.skipped.len(),
            "loaded catalog"
        );
        Ok(loaded)
    }

    /// Parses a header line followed by `description<d>cost<d>value` rows.
    ///
    /// A row with the wrong number of fields aborts the whole parse. Rows
    /// whose numbers do not parse, or that describe an invalid item, are
    /// dropped and listed in [`Loaded::skipped`]. Text that is not valid
    /// UTF-8 is decoded lossily rather than rejected.
    pub fn parse<R: BufRead>(mut reader: R, format: CatalogFormat) -> Result<Loaded, LoadError> {
        let mut loaded = Loaded::default();
        let mut buf = Vec::new();
        let mut line_number = 0;
        loop {
            buf.clear();
            line_number += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::Read {
                    line_number,
                    source,
                })?;
            if read == 0 {
                break;
            }
            // Bytes that are not UTF-8 become replacement characters
            let line = String::from_utf8_lossy(trim_line_ending(&buf)).into_owned();
            if line_number == 1 {
                continue;
            }

            let fields = split_fields(&line, format.delimiter);
            if fields.len() != FIELDS_PER_ROW {
                return Err(LoadError::FieldCount {
                    line_number,
                    found: fields.len(),
                    line,
                });
            }

            match parse_row(&fields) {
                Ok(item) => loaded.catalog.items.push(item),
                Err(reason) => {
                    warn!(line_number, ?reason, "skipping catalog row");
                    loaded.skipped.push(SkippedRow {
                        line_number,
                        reason,
                    });
                }
            }
        }
        Ok(loaded)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// First `max_len` items, in catalog order, whose value lies strictly
    /// between `min_value` and `max_value`.
    pub fn filter(&self, min_value: f64, max_value: f64, max_len: usize) -> Catalog {
        self.filter_window(&ValueWindow::exclusive(min_value, max_value), max_len)
    }

    pub fn filter_window(&self, window: &ValueWindow, max_len: usize) -> Catalog {
        self.items
            .iter()
            .filter(|item| window.contains(item.value()))
            .take(max_len)
            .cloned()
            .collect()
    }
}

fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

fn parse_row(fields: &[&str]) -> Result<Item, SkipReason> {
    let cost = parse_leading_f64(fields[1])
        .ok_or_else(|| SkipReason::UnparsableCost(fields[1].to_string()))?;
    let value = parse_leading_f64(fields[2])
        .ok_or_else(|| SkipReason::UnparsableValue(fields[2].to_string()))?;
    Item::new(fields[0], cost, value).map_err(SkipReason::InvalidItem)
}

/// Splits a row the way a delimiter-driven line reader does: an empty line
/// has no fields and a trailing delimiter does not open an empty last field.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let mut fields: Vec<&str> = line.split(delimiter).collect();
    if line.ends_with(delimiter) {
        fields.pop();
    }
    fields
}

/// Parses the longest floating point prefix of `field` after any leading
/// whitespace, ignoring whatever follows it. Returns `None` when there is no
/// digit to read.
pub fn parse_leading_f64(field: &str) -> Option<f64> {
    let s = field.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
