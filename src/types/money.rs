//! Currency formatting
//!
//! All money in the crate is a [`Decimal`]. Display strings are fixed to two
//! decimal places with a leading dollar sign, rounding half away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as a currency string, e.g. `$12.34`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole_number(Decimal::new(9, 0), "$9.00")]
    #[case::one_decimal(Decimal::new(195, 1), "$19.50")]
    #[case::zero(Decimal::ZERO, "$0.00")]
    #[case::two_decimals(Decimal::new(1234, 2), "$12.34")]
    #[case::rounds_half_up(Decimal::new(1005, 3), "$1.01")]
    #[case::rounds_down(Decimal::new(12344, 3), "$12.34")]
    #[case::large_amount(Decimal::new(123456789, 2), "$1234567.89")]
    fn test_format_currency(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }
}
