//! I/O module
//!
//! Handles loading of the three input files.
//!
//! # Components
//!
//! - `tsv_reader` - Tab-separated catalog reader with iterator interface
//! - `documents` - Structured documents (business info, order description)

pub mod documents;
pub mod tsv_reader;

pub use documents::{
    load_business_info, load_document, load_order_description, DocumentFormat, OrderDescription,
    OrderEntry, Quantity, ScalarText,
};
pub use tsv_reader::{load_catalog, read_table, TsvReader};
