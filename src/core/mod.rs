//! Core business logic module
//!
//! This module contains the order processing components:
//! - `builder` - Loads the inputs and joins order entries against the catalog
//! - `totals` - Subtotal, shipping & handling, and total computation

pub mod builder;
pub mod totals;

pub use builder::{assemble, resolve_entry, ManifestBuilder, ManifestSources};
pub use totals::Totals;
