//! Money rounding.
//!
//! Line items are rounded to the nearest cent once, when they are finalized.
//! Intermediate sums (such as the per-bracket PAYE portions) stay unrounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a money amount.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to the nearest cent, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("916.666575").unwrap()), Decimal::from_str("916.67").unwrap());
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec("2.345")), dec("2.35"));
        assert_eq!(round_money(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_rounds_down_below_half() {
        assert_eq!(round_money(dec("1999.9949")), dec("1999.99"));
    }

    #[test]
    fn test_leaves_cents_untouched() {
        assert_eq!(round_money(dec("1234.56")), dec("1234.56"));
        assert_eq!(round_money(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_whole_amount_has_at_most_two_places() {
        assert!(round_money(dec("1.23456789")).scale() <= MONEY_DECIMAL_PLACES);
    }
}
