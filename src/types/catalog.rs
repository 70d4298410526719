//! Catalog types
//!
//! A [`CatalogRecord`] is one row of the catalog file: a mapping from column
//! name to the raw string value. A [`Catalog`] is the immutable, ordered
//! collection of those rows with catalog numbers normalized once at
//! construction.

use std::collections::BTreeMap;

/// Column holding the product code
pub const CATALOG_NO_COLUMN: &str = "CATALOG-NO";

/// Column holding the product title
pub const TITLE_COLUMN: &str = "TITLE";

/// Column holding the unit price
pub const UNIT_PRICE_COLUMN: &str = "UNIT-PRICE";

/// Format a numeric catalog number as its canonical code, e.g. `42` → `MSM-00042`
pub fn format_catalog_no(number: u32) -> String {
    format!("MSM-{:05}", number)
}

/// One row of the catalog file
///
/// Values are kept as strings; no type coercion happens at this level.
/// A column missing from a short row is simply absent, so [`CatalogRecord::get`]
/// returns `None` for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogRecord {
    fields: BTreeMap<String, String>,
}

impl CatalogRecord {
    /// Create a record from `(column, value)` pairs
    ///
    /// When a column name repeats, the later value wins.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get the value of a column, if the row had one
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Column names present in this record
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of columns present in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The record's catalog number
    pub fn catalog_no(&self) -> Option<&str> {
        self.get(CATALOG_NO_COLUMN)
    }

    /// Rewrite a purely numeric catalog number into its canonical code
    ///
    /// Only ASCII digits count; signs and values beyond `u32` are kept as is.
    fn normalize_catalog_no(&mut self) {
        let Some(raw) = self.fields.get_mut(CATALOG_NO_COLUMN) else {
            return;
        };
        let digits = raw.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return;
        }
        if let Ok(number) = digits.parse::<u32>() {
            let canonical = format_catalog_no(number);
            log::debug!("Normalized catalog number '{}' to {}", raw, canonical);
            *raw = canonical;
        }
    }
}

/// The loaded product catalog
///
/// Records keep file order. Lookups return the first record whose catalog
/// number matches, so duplicate codes resolve to the earliest row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    /// Build a catalog from raw records, normalizing catalog numbers
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                record.normalize_catalog_no();
                record
            })
            .collect();
        Self { records }
    }

    /// Find the first record with the given catalog number
    pub fn find(&self, catalog_no: &str) -> Option<&CatalogRecord> {
        self.records
            .iter()
            .find(|record| record.catalog_no() == Some(catalog_no))
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
