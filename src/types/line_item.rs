//! Line item type
//!
//! A [`LineItem`] is one resolved, priced row of an order: a catalog product
//! together with the ordered quantity.

use super::error::SlipError;
use super::money::format_currency;
use rust_decimal::Decimal;

/// Name used when a catalog record has no title
pub const UNTITLED: &str = "(untitled)";

/// One resolved row of an order
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    /// Product title from the catalog
    pub name: String,

    /// Canonical catalog number (`MSM-` + 5 digits)
    pub catalog_no: String,

    /// Ordered quantity
    pub quantity: u32,

    /// Price of a single unit
    pub unit_price: Decimal,
}

impl LineItem {
    /// Unit price as a currency string
    pub fn unit_price_display(&self) -> String {
        format_currency(self.unit_price)
    }

    /// Total price of the row: `unit_price × quantity`
    ///
    /// # Errors
    ///
    /// Returns [`SlipError::ArithmeticOverflow`] if the product does not fit
    /// in a `Decimal`.
    pub fn total_price(&self) -> Result<Decimal, SlipError> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| SlipError::arithmetic_overflow("line total"))
    }

    /// Total price as a currency string
    pub fn total_price_display(&self) -> Result<String, SlipError> {
        self.total_price().map(format_currency)
    }

    /// The row as shown in the packing slip table:
    /// catalog no., name, unit price, quantity, amount
    pub fn table_row(&self) -> Result<Vec<String>, SlipError> {
        Ok(vec![
            self.catalog_no.clone(),
            self.name.clone(),
            self.unit_price_display(),
            self.quantity.to_string(),
            self.total_price_display()?,
        ])
    }
}
