//! Order totals
//!
//! `subtotal = Σ(unit_price × quantity)` over all line items, and
//! `total = subtotal + shipping_and_handling`. All arithmetic is checked
//! `Decimal` arithmetic, so the sums are exact.

use crate::types::{format_currency, LineItem, Manifest, SlipError};
use rust_decimal::Decimal;

/// Money summary printed at the bottom of the slip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub shipping_and_handling: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Compute the totals for a set of line items
    ///
    /// # Errors
    ///
    /// Returns [`SlipError::ArithmeticOverflow`] if a line total or a sum
    /// does not fit in a `Decimal`.
    pub fn compute(items: &[LineItem], shipping_and_handling: Decimal) -> Result<Self, SlipError> {
        let subtotal = items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.total_price()?)
                .ok_or_else(|| SlipError::arithmetic_overflow("subtotal"))
        })?;

        let total = subtotal
            .checked_add(shipping_and_handling)
            .ok_or_else(|| SlipError::arithmetic_overflow("total"))?;

        Ok(Self {
            subtotal,
            shipping_and_handling,
            total,
        })
    }

    /// Compute the totals for a manifest
    pub fn for_manifest(
        manifest: &Manifest,
        shipping_and_handling: Decimal,
    ) -> Result<Self, SlipError> {
        Self::compute(&manifest.items, shipping_and_handling)
    }

    pub fn subtotal_display(&self) -> String {
        format_currency(self.subtotal)
    }

    pub fn shipping_and_handling_display(&self) -> String {
        format_currency(self.shipping_and_handling)
    }

    pub fn total_display(&self) -> String {
        format_currency(self.total)
    }
}
