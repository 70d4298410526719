//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: Catalog records and the immutable catalog
//! - `line_item`: Resolved, priced order rows
//! - `manifest`: The resolved order and business metadata
//! - `money`: Currency formatting
//! - `error`: Error types for the packing slip generator

pub mod catalog;
pub mod error;
pub mod line_item;
pub mod manifest;
pub mod money;

pub use catalog::{
    format_catalog_no, Catalog, CatalogRecord, CATALOG_NO_COLUMN, TITLE_COLUMN, UNIT_PRICE_COLUMN,
};
pub use error::SlipError;
pub use line_item::{LineItem, UNTITLED};
pub use manifest::{format_order_no, BusinessInfo, Manifest};
pub use money::format_currency;
