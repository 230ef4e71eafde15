//! IRRF (income tax) withholding.
//!
//! Unlike INSS, IRRF applies a single bracket to the whole base: the first
//! bracket whose upper bound is at least the base, minus that bracket's
//! fixed deduction.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{brl, percent, round_currency};

/// One bracket of the IRRF table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrrfBracket {
    /// The inclusive upper bound, or `None` for the top bracket.
    pub upper_bound: Option<Decimal>,
    /// The rate applied to the whole base.
    pub rate: Decimal,
    /// The fixed amount subtracted after applying the rate.
    pub deduction: Decimal,
}

/// Bases up to this amount are exempt.
pub const IRRF_EXEMPTION_LIMIT: Decimal = Decimal::from_parts(211_200, 0, 0, false, 2);

/// The IRRF table, exempt bracket first.
pub const IRRF_BRACKETS: [IrrfBracket; 5] = [
    IrrfBracket {
        upper_bound: Some(IRRF_EXEMPTION_LIMIT),
        rate: Decimal::ZERO,
        deduction: Decimal::ZERO,
    },
    IrrfBracket {
        upper_bound: Some(Decimal::from_parts(282_665, 0, 0, false, 2)),
        rate: Decimal::from_parts(75, 0, 0, false, 3),
        deduction: Decimal::from_parts(15_840, 0, 0, false, 2),
    },
    IrrfBracket {
        upper_bound: Some(Decimal::from_parts(375_105, 0, 0, false, 2)),
        rate: Decimal::from_parts(15, 0, 0, false, 2),
        deduction: Decimal::from_parts(37_040, 0, 0, false, 2),
    },
    IrrfBracket {
        upper_bound: Some(Decimal::from_parts(466_468, 0, 0, false, 2)),
        rate: Decimal::from_parts(225, 0, 0, false, 3),
        deduction: Decimal::from_parts(65_173, 0, 0, false, 2),
    },
    IrrfBracket {
        upper_bound: None,
        rate: Decimal::from_parts(275, 0, 0, false, 3),
        deduction: Decimal::from_parts(88_496, 0, 0, false, 2),
    },
];

/// Returns the index into [`IRRF_BRACKETS`] that applies to `base`.
fn bracket_index(base: Decimal) -> usize {
    IRRF_BRACKETS
        .iter()
        .position(|bracket| bracket.upper_bound.is_none_or(|upper| base <= upper))
        .unwrap_or(IRRF_BRACKETS.len() - 1)
}

/// The arithmetic of a single IRRF lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrrfExplanation {
    /// The taxable base (gross minus INSS), floored at zero.
    pub base: Decimal,
    /// The taxed bracket number (1..=4), or `None` when exempt.
    pub bracket: Option<usize>,
    /// The bracket's rate.
    pub rate: Decimal,
    /// The bracket's fixed deduction.
    pub deduction: Decimal,
    /// `base * rate`, unrounded.
    pub gross_tax: Decimal,
    /// The rounded IRRF amount; always equal to `compute_irrf(base, 0)`.
    pub total: Decimal,
}

fn irrf_on_base(base: Decimal) -> (usize, Decimal, Decimal) {
    let base = base.max(Decimal::ZERO);
    let index = bracket_index(base);
    let bracket = &IRRF_BRACKETS[index];
    let gross_tax = base * bracket.rate;
    let total = round_currency((gross_tax - bracket.deduction).max(Decimal::ZERO));
    (index, gross_tax, total)
}

/// Computes the IRRF withheld on `gross_base - inss_amount`, rounded to 2
/// decimal places and never negative.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::compute_irrf;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = Decimal::from_str("3000.00").unwrap();
/// let inss = Decimal::from_str("253.41").unwrap();
/// // (2746.59 x 7.5%) - 158.40 = 47.59425
/// assert_eq!(compute_irrf(gross, inss), Decimal::from_str("47.59").unwrap());
/// ```
pub fn compute_irrf(gross_base: Decimal, inss_amount: Decimal) -> Decimal {
    let (_, _, total) = irrf_on_base(gross_base - inss_amount);
    total
}

/// Describes the bracket lookup and arithmetic for an already INSS-reduced base.
pub fn explain_irrf(base: Decimal) -> IrrfExplanation {
    let (index, gross_tax, total) = irrf_on_base(base);
    let bracket = &IRRF_BRACKETS[index];
    IrrfExplanation {
        base: base.max(Decimal::ZERO),
        bracket: (index > 0).then_some(index),
        rate: bracket.rate,
        deduction: bracket.deduction,
        gross_tax,
        total,
    }
}

impl fmt::Display for IrrfExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation base: {}", brl(self.base))?;
        let Some(bracket) = self.bracket else {
            return write!(f, "Exempt (up to {})", brl(IRRF_EXEMPTION_LIMIT));
        };
        writeln!(
            f,
            "Bracket {}: rate {} with deduction of {}",
            bracket,
            percent(self.rate),
            brl(self.deduction)
        )?;
        writeln!(
            f,
            "Calculation: ({} x {}) - {}",
            brl(self.base),
            percent(self.rate),
            brl(self.deduction)
        )?;
        write!(f, "Total IRRF: {}", brl(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_exempt_up_to_limit() {
        assert_eq!(compute_irrf(dec("2112.00"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_first_taxed_bracket_just_above_limit() {
        // 2112.01 x 7.5% - 158.40 = 0.00075
        assert_eq!(compute_irrf(dec("2112.01"), Decimal::ZERO), dec("0.00"));
    }

    #[test]
    fn test_inss_is_subtracted_before_lookup() {
        // 3000.00 - 253.41 = 2746.59 falls in the 7.5% bracket
        assert_eq!(compute_irrf(dec("3000.00"), dec("253.41")), dec("47.59"));
    }

    #[test]
    fn test_fifteen_percent_bracket() {
        // 3500.00 x 15% - 370.40 = 154.60
        assert_eq!(compute_irrf(dec("3500.00"), Decimal::ZERO), dec("154.60"));
    }

    #[test]
    fn test_upper_bound_belongs_to_lower_bracket() {
        // 3751.05 x 15% - 370.40 = 192.2575
        assert_eq!(compute_irrf(dec("3751.05"), Decimal::ZERO), dec("192.26"));
    }

    #[test]
    fn test_twenty_two_and_a_half_percent_bracket() {
        // 4000.00 x 22.5% - 651.73 = 248.27
        assert_eq!(compute_irrf(dec("4000.00"), Decimal::ZERO), dec("248.27"));
    }

    #[test]
    fn test_top_bracket() {
        // 10000.00 x 27.5% - 884.96 = 1865.04
        assert_eq!(compute_irrf(dec("10000.00"), Decimal::ZERO), dec("1865.04"));
    }

    #[test]
    fn test_negative_base_is_zero() {
        assert_eq!(compute_irrf(dec("100.00"), dec("500.00")), Decimal::ZERO);
    }

    #[test]
    fn test_explanation_for_exempt_base() {
        let explanation = explain_irrf(dec("1800.00"));
        assert_eq!(explanation.bracket, None);
        assert_eq!(explanation.total, Decimal::ZERO);
        let text = explanation.to_string();
        assert!(text.contains("Calculation base: R$ 1800.00"));
        assert!(text.contains("Exempt (up to R$ 2112.00)"));
    }

    #[test]
    fn test_explanation_for_taxed_base() {
        let explanation = explain_irrf(dec("2746.59"));
        assert_eq!(explanation.bracket, Some(1));
        assert_eq!(explanation.rate, dec("0.075"));
        assert_eq!(explanation.deduction, dec("158.40"));
        assert_eq!(explanation.total, dec("47.59"));

        let text = explanation.to_string();
        assert!(text.contains("Bracket 1: rate 7.5% with deduction of R$ 158.40"));
        assert!(text.contains("Calculation: (R$ 2746.59 x 7.5%) - R$ 158.40"));
        assert!(text.ends_with("Total IRRF: R$ 47.59"));
    }

    proptest! {
        #[test]
        fn prop_exempt_below_limit(cents in 0i64..=211_200) {
            let base = Decimal::new(cents, 2);
            prop_assert_eq!(compute_irrf(base, Decimal::ZERO), Decimal::ZERO);
        }

        #[test]
        fn prop_explanation_total_matches_compute(cents in 0i64..=3_000_000) {
            let base = Decimal::new(cents, 2);
            prop_assert_eq!(explain_irrf(base).total, compute_irrf(base, Decimal::ZERO));
        }

        #[test]
        fn prop_never_negative(gross in 0i64..=3_000_000, inss in 0i64..=100_000) {
            let irrf = compute_irrf(Decimal::new(gross, 2), Decimal::new(inss, 2));
            prop_assert!(irrf >= Decimal::ZERO);
        }
    }
}
