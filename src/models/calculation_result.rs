//! Calculation result models for the year-end bonus engine.
//!
//! This module contains the [`CalculationResult`] type and the ordered
//! [`CalculationStep`] list that documents how the net amount was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Installment;

/// A single step of the calculation, recorded in the order it was computed.
///
/// Steps are never changed after creation; the sequence is the audit trail
/// of the calculation.
///
/// # Example
///
/// ```
/// use decimo_engine::models::CalculationStep;
/// use rust_decimal::Decimal;
///
/// let step = CalculationStep {
///     title: "INSS Withholding".to_string(),
///     description: "Total INSS: R$ 253.41".to_string(),
///     value: Decimal::new(25341, 2),
///     is_deduction: true,
/// };
/// assert!(step.is_deduction);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Short title of the step.
    pub title: String,
    /// Multi-line, human-readable derivation.
    pub description: String,
    /// The monetary value produced by the step.
    pub value: Decimal,
    /// Whether `value` is subtracted from the running base.
    pub is_deduction: bool,
}

impl CalculationStep {
    /// Creates a step that reports a full (non-deducted) amount.
    pub fn amount(title: impl Into<String>, description: impl Into<String>, value: Decimal) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            value,
            is_deduction: false,
        }
    }

    /// Creates a step whose value is subtracted from the running base.
    pub fn deduction(
        title: impl Into<String>,
        description: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            value,
            is_deduction: true,
        }
    }
}

/// The complete result of a year-end bonus calculation.
///
/// `net_amount` is fully determined by the proportional bonus, the
/// installment and the two withholding amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The employee's name, carried for display.
    pub employee_name: String,
    /// The monthly gross salary the bonus was derived from.
    pub monthly_gross_salary: Decimal,
    /// The number of months counted, in 1..=12.
    pub months_worked: u32,
    /// The installment that was calculated.
    pub installment: Installment,
    /// The proportional bonus before any deduction.
    pub gross_proportional_bonus: Decimal,
    /// INSS withheld (zero when not deducted).
    pub inss_amount: Decimal,
    /// IRRF withheld (zero when not deducted).
    pub irrf_amount: Decimal,
    /// The amount to be received.
    ///
    /// Rounded to 2 decimal places, except that FIRST and SECOND use the
    /// unrounded half of the proportional bonus, so an odd-cent bonus gives
    /// a third decimal (83.33 gives an advance of 41.665).
    pub net_amount: Decimal,
    /// The ordered audit trail of the calculation.
    pub steps: Vec<CalculationStep>,
}

impl CalculationResult {
    /// The sum of INSS and IRRF withheld.
    pub fn total_deductions(&self) -> Decimal {
        self.inss_amount + self.irrf_amount
    }
}
