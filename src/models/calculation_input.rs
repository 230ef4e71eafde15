//! Calculation input model.
//!
//! This module defines the [`CalculationInput`] handed to the engine and the
//! [`Installment`] selector choosing which part of the bonus is paid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthSelection;
use crate::error::{EngineError, EngineResult};

/// Which part of the year-end bonus is being paid.
///
/// # Example
///
/// ```
/// use decimo_engine::models::Installment;
///
/// let installment: Installment = serde_json::from_str("\"second\"").unwrap();
/// assert_eq!(installment, Installment::Second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Installment {
    /// The 50% advance, always paid without withholding.
    First,
    /// The final installment, carrying all withholding minus the advance.
    Second,
    /// The whole bonus paid at once.
    #[default]
    Full,
}

/// Everything the engine needs for a single bonus calculation.
///
/// A fresh input is built for every calculation. When
/// `manually_selected_months` is `None`, the months worked are inferred from
/// the admission and calculation dates.
///
/// # Example
///
/// ```
/// use decimo_engine::models::{CalculationInput, Installment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     employee_name: "Maria".to_string(),
///     monthly_gross_salary: Decimal::new(300000, 2),
///     admission_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     calculation_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     installment: Installment::Full,
///     deduct_inss: true,
///     deduct_irrf: true,
///     manually_selected_months: None,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The employee's name, used only for display.
    pub employee_name: String,
    /// The monthly gross salary; must be positive.
    pub monthly_gross_salary: Decimal,
    /// The date the employee was admitted.
    pub admission_date: NaiveDate,
    /// The reference date of the calculation.
    pub calculation_date: NaiveDate,
    /// Which installment is being paid.
    pub installment: Installment,
    /// Whether INSS is withheld.
    pub deduct_inss: bool,
    /// Whether IRRF is withheld.
    pub deduct_irrf: bool,
    /// Manual month override; `None` means infer from the dates.
    #[serde(default)]
    pub manually_selected_months: Option<MonthSelection>,
}

impl CalculationInput {
    /// Checks the input before any calculation is attempted.
    ///
    /// Returns `InvalidInput` when the salary is zero or negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_gross_salary <= Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "monthly_gross_salary",
                "must be a positive number",
            ));
        }
        Ok(())
    }
}
