//! Manifest types
//!
//! The [`Manifest`] is one fully resolved customer order together with the
//! business details printed in the slip header and footer.

use super::line_item::LineItem;
use serde::Deserialize;

/// Format an order number as an 8-digit zero-padded string
pub fn format_order_no(order_no: u64) -> String {
    format!("{:08}", order_no)
}

/// Business metadata printed on every slip
///
/// Loaded from the business-info document; all three keys are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BusinessInfo {
    /// Business name (header, bold and centered)
    pub name: String,

    /// Postal address, one line per address line
    pub address: String,

    /// Closing text printed at the end of the slip
    pub signoff: String,
}

impl BusinessInfo {
    /// Address split into its lines
    pub fn address_lines(&self) -> impl Iterator<Item = &str> {
        self.address.lines()
    }
}

/// A resolved customer order
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Line items in the order they were listed in the order description
    pub items: Vec<LineItem>,

    /// Billing address (free text)
    pub bill_to: String,

    /// Shipping address (free text)
    pub ship_to: String,

    /// Order number, 8-digit zero-padded
    pub order_no: String,

    /// Order date as written in the order description
    pub order_date: String,

    pub business_info: BusinessInfo,
}
