//! Request types for the year-end bonus API.
//!
//! This module defines the JSON request structures and the conversion from
//! the raw form values to a validated [`CalculationInput`].

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::MonthResolution;
use crate::config::FormDefaults;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, Installment};

/// A monetary form value sent either as a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// Text as typed, e.g. `"3000,50"`.
    Text(String),
    /// A JSON number.
    Number(serde_json::Number),
}

impl RawAmount {
    fn to_text(&self) -> String {
        match self {
            RawAmount::Text(text) => text.clone(),
            RawAmount::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Mirrors the calculation form: values arrive raw and may be missing.
/// Omitted selectors fall back to the configured [`FormDefaults`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee's name, display only.
    #[serde(default)]
    pub employee_name: String,
    /// The monthly gross salary; `.` or `,` may separate the decimals.
    #[serde(default)]
    pub monthly_gross_salary: Option<RawAmount>,
    /// Admission date as `YYYY-MM-DD`.
    #[serde(default)]
    pub admission_date: Option<String>,
    /// Calculation date as `YYYY-MM-DD`.
    #[serde(default)]
    pub calculation_date: Option<String>,
    /// The installment to calculate.
    #[serde(default)]
    pub installment: Option<Installment>,
    /// Whether to withhold INSS.
    #[serde(default)]
    pub deduct_inss: Option<bool>,
    /// Whether to withhold IRRF.
    #[serde(default)]
    pub deduct_irrf: Option<bool>,
    /// Re-infer months from the dates, replacing the manual selection.
    #[serde(default = "default_force_infer_months")]
    pub force_infer_months: bool,
}

fn default_force_infer_months() -> bool {
    true
}

/// Request body for the `/months/toggle` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthToggleRequest {
    /// The month to toggle, 1..=12.
    pub month: u32,
    /// The form to recalculate with after toggling.
    #[serde(default)]
    pub form: CalculationRequest,
}

impl CalculationRequest {
    /// How this request wants the months worked resolved.
    pub fn resolution(&self) -> MonthResolution {
        if self.force_infer_months {
            MonthResolution::ForceInference
        } else {
            MonthResolution::Manual
        }
    }

    /// Parses the raw form into a validated [`CalculationInput`].
    ///
    /// The returned input carries no month override; the session supplies it.
    pub fn into_input(self, defaults: FormDefaults) -> EngineResult<CalculationInput> {
        let monthly_gross_salary = parse_salary(self.monthly_gross_salary.as_ref())?;
        let admission_date = parse_date("admission_date", self.admission_date.as_deref())?;
        let calculation_date = parse_date("calculation_date", self.calculation_date.as_deref())?;

        Ok(CalculationInput {
            employee_name: self.employee_name,
            monthly_gross_salary,
            admission_date,
            calculation_date,
            installment: self.installment.unwrap_or(defaults.installment),
            deduct_inss: self.deduct_inss.unwrap_or(defaults.deduct_inss),
            deduct_irrf: self.deduct_irrf.unwrap_or(defaults.deduct_irrf),
            manually_selected_months: None,
        })
    }
}

/// Parses a salary, accepting a comma as the decimal separator.
fn parse_salary(raw: Option<&RawAmount>) -> EngineResult<Decimal> {
    const FIELD: &str = "monthly_gross_salary";

    let text = raw
        .map(RawAmount::to_text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| EngineError::invalid_input(FIELD, "is required"))?;

    let salary = Decimal::from_str(&text.trim().replace(',', "."))
        .map_err(|_| EngineError::invalid_input(FIELD, format!("'{}' is not a number", text)))?;

    if salary <= Decimal::ZERO {
        return Err(EngineError::invalid_input(FIELD, "must be a positive number"));
    }
    Ok(salary)
}

/// Parses a calendar date in `YYYY-MM-DD` form, without any time zone.
fn parse_date(field: &str, raw: Option<&str>) -> EngineResult<NaiveDate> {
    let text = raw
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| EngineError::invalid_input(field, "is required"))?;

    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        EngineError::invalid_input(field, format!("'{}' is not a valid YYYY-MM-DD date", text))
    })
}
