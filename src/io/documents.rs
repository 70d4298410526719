//! Structured document loading
//!
//! The business-info file and the order description are small human-readable
//! documents with nested maps and lists. YAML is the default format; a file
//! with a `.toml` extension is read as TOML. Both go through serde into the
//! same typed structures, so a missing required key surfaces as
//! [`SlipError::InvalidDocument`].

use crate::types::{BusinessInfo, SlipError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Serialization format of a structured document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension (`.toml` → TOML, anything else → YAML)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    /// Deserialize a document from text
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, String> {
        match self {
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// One entry of the order's `manifest` list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderEntry {
    /// Numeric catalog number (formatted to `MSM-%05d` during resolution)
    pub catalog_no: u32,

    /// Ordered quantity, written either as a number or as a string
    pub qty: Quantity,
}

/// Quantity as written in the order description
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(i64),
    Text(String),
}

impl Quantity {
    /// Parse into a non-negative count
    ///
    /// Returns `None` for negative numbers, out-of-range numbers, and text
    /// that is not an integer.
    pub fn to_count(&self) -> Option<u32> {
        match self {
            Quantity::Count(n) => u32::try_from(*n).ok(),
            Quantity::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Count(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A scalar kept for display only
///
/// The order date is printed verbatim, so any scalar is accepted and shown as
/// it was written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarText {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ScalarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarText::Text(s) => write!(f, "{}", s),
            ScalarText::Integer(n) => write!(f, "{}", n),
            ScalarText::Float(x) => write!(f, "{}", x),
            ScalarText::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The order description document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderDescription {
    /// Ordered entries, in slip order
    pub manifest: Vec<OrderEntry>,
    pub bill_to: String,
    pub ship_to: String,
    pub order_no: u64,
    pub order_date: ScalarText,
}

/// Read and deserialize a structured document
///
/// # Errors
///
/// * [`SlipError::FileNotFound`] / [`SlipError::IoError`] if the file cannot be read
/// * [`SlipError::InvalidDocument`] on syntax errors or missing keys
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, SlipError> {
    let text = fs::read_to_string(path).map_err(|e| SlipError::open_failed(path, e))?;
    DocumentFormat::from_path(path)
        .parse(&text)
        .map_err(|message| SlipError::invalid_document(path, message))
}

/// Load the business-info document
pub fn load_business_info(path: &Path) -> Result<BusinessInfo, SlipError> {
    let info: BusinessInfo = load_document(path)?;
    log::info!("Loaded business info for '{}' from {}", info.name, path.display());
    Ok(info)
}

/// Load the order description document
pub fn load_order_description(path: &Path) -> Result<OrderDescription, SlipError> {
    let order: OrderDescription = load_document(path)?;
    log::info!(
        "Loaded order {} with {} entries from {}",
        order.order_no,
        order.manifest.len(),
        path.display()
    );
    Ok(order)
}
