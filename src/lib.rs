//! Packing Slip Generator Library
//! # Overview
//!
//! This library turns one customer order into a printable PDF packing slip.
//! It joins the order's entries against a tab-separated product catalog,
//! prices them, and lays the result out on US Letter pages.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Catalog, LineItem, Manifest, SlipError, etc.)
//! - [`cli`] - CLI arguments parsing and the top-level run
//! - [`io`] - Input loading:
//!   - [`io::tsv_reader`] - Tab-separated catalog reader
//!   - [`io::documents`] - YAML/TOML business info and order description
//! - [`core`] - Business logic components:
//!   - [`core::builder`] - Resolves order entries against the catalog
//!   - [`core::totals`] - Subtotal, shipping & handling, and total
//! - [`render`] - PDF output:
//!   - [`render::layout`] - Pagination into positioned drawing operations
//!   - [`render::pdf`] - Serialization with `lopdf`
//!
//! # Data Flow
//!
//! ```text
//! catalog.tsv ─┐
//! business ────┼─> ManifestBuilder ─> Manifest ─> SlipRenderer ─> slip.pdf
//! order ───────┘
//! ```
//!
//! # Catalog Numbers
//!
//! Order entries reference products by number; `42` refers to the catalog
//! record whose `CATALOG-NO` is `MSM-00042`. Catalog records that store a bare
//! number are rewritten to the same form when the catalog is loaded.
//!
//! # Money
//!
//! Prices and totals are exact `Decimal` values, printed as `$` followed by
//! two decimals.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod render;
pub mod types;

pub use core::{ManifestBuilder, ManifestSources, Totals};
pub use render::{RenderOptions, SlipRenderer};
pub use types::{BusinessInfo, Catalog, CatalogRecord, LineItem, Manifest, SlipError};
