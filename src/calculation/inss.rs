//! INSS (social security) withholding.
//!
//! INSS is progressive: each bracket's rate applies only to the part of the
//! base that falls inside that bracket, and nothing above the last bracket's
//! upper bound is taxed.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{brl, percent, round_currency};

/// One bracket of the INSS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InssBracket {
    /// The inclusive upper bound of the bracket.
    pub upper_bound: Decimal,
    /// The marginal rate applied inside the bracket.
    pub rate: Decimal,
}

/// The 2025 INSS table.
pub const INSS_BRACKETS: [InssBracket; 4] = [
    InssBracket {
        upper_bound: Decimal::from_parts(151_800, 0, 0, false, 2),
        rate: Decimal::from_parts(75, 0, 0, false, 3),
    },
    InssBracket {
        upper_bound: Decimal::from_parts(279_388, 0, 0, false, 2),
        rate: Decimal::from_parts(9, 0, 0, false, 2),
    },
    InssBracket {
        upper_bound: Decimal::from_parts(419_083, 0, 0, false, 2),
        rate: Decimal::from_parts(12, 0, 0, false, 2),
    },
    InssBracket {
        upper_bound: Decimal::from_parts(815_741, 0, 0, false, 2),
        rate: Decimal::from_parts(14, 0, 0, false, 2),
    },
];

/// The contribution ceiling; income above it is never taxed.
pub const INSS_CEILING: Decimal = INSS_BRACKETS[INSS_BRACKETS.len() - 1].upper_bound;

/// The share of a base that falls inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssBracketLine {
    /// The 1-based bracket number.
    pub bracket: usize,
    /// The previous bracket's upper bound (zero for the first bracket).
    pub lower_bound: Decimal,
    /// This bracket's upper bound.
    pub upper_bound: Decimal,
    /// The marginal rate.
    pub rate: Decimal,
    /// The portion of the base taxed in this bracket.
    pub taxed_amount: Decimal,
    /// `taxed_amount * rate`, unrounded.
    pub contribution: Decimal,
    /// The sum of contributions up to and including this bracket, unrounded.
    pub running_total: Decimal,
}

/// A bracket-by-bracket breakdown of [`compute_inss`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssExplanation {
    /// The calculation base.
    pub base: Decimal,
    /// One line per applicable bracket, in table order.
    pub lines: Vec<InssBracketLine>,
    /// The rounded INSS amount; always equal to `compute_inss(base)`.
    pub total: Decimal,
    /// `base - total`.
    pub remaining: Decimal,
}

fn bracket_lines(base: Decimal) -> Vec<InssBracketLine> {
    let base = base.max(Decimal::ZERO);
    let mut lines = Vec::with_capacity(INSS_BRACKETS.len());
    let mut lower_bound = Decimal::ZERO;
    let mut running_total = Decimal::ZERO;

    for (index, bracket) in INSS_BRACKETS.iter().enumerate() {
        if index > 0 && base <= lower_bound {
            break;
        }
        let taxed_amount = base.min(bracket.upper_bound) - lower_bound;
        let contribution = taxed_amount * bracket.rate;
        running_total += contribution;
        lines.push(InssBracketLine {
            bracket: index + 1,
            lower_bound,
            upper_bound: bracket.upper_bound,
            rate: bracket.rate,
            taxed_amount,
            contribution,
            running_total,
        });
        lower_bound = bracket.upper_bound;
    }

    lines
}

/// Computes the INSS withheld from `base`, rounded to 2 decimal places.
///
/// Negative bases are treated as zero. Bases above [`INSS_CEILING`] pay the
/// same as the ceiling.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::compute_inss;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inss = compute_inss(Decimal::from_str("3000.00").unwrap());
/// assert_eq!(inss, Decimal::from_str("253.41").unwrap());
/// ```
pub fn compute_inss(base: Decimal) -> Decimal {
    let total: Decimal = bracket_lines(base).iter().map(|line| line.contribution).sum();
    round_currency(total)
}

/// Breaks the INSS computation for `base` into one line per bracket.
///
/// The explanation's `total` is [`compute_inss`] of the same base.
pub fn explain_inss(base: Decimal) -> InssExplanation {
    let total = compute_inss(base);
    InssExplanation {
        base,
        lines: bracket_lines(base),
        total,
        remaining: base - total,
    }
}

impl fmt::Display for InssExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            if line.bracket == 1 {
                writeln!(
                    f,
                    "Bracket 1: up to {} - {}",
                    brl(line.upper_bound),
                    percent(line.rate)
                )?;
            } else {
                writeln!(
                    f,
                    "Bracket {}: from {} to {} - {}",
                    line.bracket,
                    brl(line.lower_bound + Decimal::new(1, 2)),
                    brl(line.upper_bound),
                    percent(line.rate)
                )?;
            }
            writeln!(
                f,
                "{} x {} = {} (running total {})",
                brl(line.taxed_amount),
                percent(line.rate),
                brl(line.contribution),
                brl(line.running_total)
            )?;
        }
        writeln!(f, "Total INSS: {}", brl(self.total))?;
        write!(
            f,
            "Amount after deduction: {} - {} = {}",
            brl(self.base),
            brl(self.total),
            brl(self.remaining)
        )
    }
}
