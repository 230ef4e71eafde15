//! Monetary rounding and display helpers shared by the calculation steps.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to 2 decimal places, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     round_currency(Decimal::from_str("253.4136").unwrap()),
///     Decimal::from_str("253.41").unwrap()
/// );
/// assert_eq!(
///     round_currency(Decimal::from_str("0.125").unwrap()),
///     Decimal::from_str("0.13").unwrap()
/// );
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount as `R$ 1234.56` for step descriptions.
pub(crate) fn brl(value: Decimal) -> String {
    format!("R$ {:.2}", round_currency(value))
}

/// Renders a rate such as `0.075` as `7.5%`.
pub(crate) fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_rounds_half_away_from_zero() {
        assert_eq!(round_currency(dec("2.345")), dec("2.35"));
        assert_eq!(round_currency(dec("2.344")), dec("2.34"));
    }

    #[test]
    fn test_brl_pads_to_two_places() {
        assert_eq!(brl(dec("1518")), "R$ 1518.00");
        assert_eq!(brl(dec("114.8292")), "R$ 114.83");
    }

    #[test]
    fn test_percent_drops_trailing_zeros() {
        assert_eq!(percent(dec("0.075")), "7.5%");
        assert_eq!(percent(dec("0.14")), "14%");
        assert_eq!(percent(dec("0.225")), "22.5%");
    }
}
