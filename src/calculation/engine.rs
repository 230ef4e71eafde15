//! Year-end bonus calculation.
//!
//! This module combines month resolution, the proportional bonus, the chosen
//! installment and the optional INSS/IRRF withholding into a
//! [`CalculationResult`] with an ordered list of steps.

use rust_decimal::Decimal;
use tracing::debug;

use super::inss::{compute_inss, explain_inss};
use super::irrf::{compute_irrf, explain_irrf};
use super::money::{brl, round_currency};
use super::month_inference::infer_months;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationInput, CalculationResult, CalculationStep, Installment, MONTHS_IN_YEAR,
};

/// Resolves the months worked: the manual selection's size when present,
/// otherwise the months inferred from the dates.
pub fn resolve_months(input: &CalculationInput) -> u32 {
    match &input.manually_selected_months {
        Some(selection) => selection.len(),
        None => infer_months(input.admission_date, input.calculation_date),
    }
}

/// Computes the proportional bonus: `monthly_salary / 12 * months`, rounded
/// to 2 decimal places.
///
/// # Errors
///
/// `InvalidInput` on `monthly_gross_salary` when the salary is too large to
/// multiply by the month count.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::proportional_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let bonus = proportional_bonus(Decimal::from_str("2000.00").unwrap(), 6).unwrap();
/// assert_eq!(bonus, Decimal::from_str("1000.00").unwrap());
/// ```
pub fn proportional_bonus(
    monthly_gross_salary: Decimal,
    months_worked: u32,
) -> EngineResult<Decimal> {
    monthly_gross_salary
        .checked_mul(Decimal::from(months_worked))
        .and_then(|total| total.checked_div(Decimal::from(MONTHS_IN_YEAR)))
        .map(round_currency)
        .ok_or_else(|| {
            EngineError::invalid_input("monthly_gross_salary", "is too large to calculate")
        })
}

/// The first-installment advance: half of the proportional bonus.
pub fn first_installment_advance(gross_proportional_bonus: Decimal) -> Decimal {
    gross_proportional_bonus / Decimal::TWO
}

/// Calculates the year-end bonus for a single employee.
///
/// # Errors
///
/// - `InvalidInput` when the salary is not positive or too large.
/// - `NoMonthsWorked` when the resolved month count is zero.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::calculate;
/// use decimo_engine::models::{CalculationInput, Installment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     employee_name: "Maria".to_string(),
///     monthly_gross_salary: Decimal::from_str("3000.00").unwrap(),
///     admission_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     calculation_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     installment: Installment::Full,
///     deduct_inss: true,
///     deduct_irrf: true,
///     manually_selected_months: None,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.months_worked, 12);
/// assert_eq!(result.net_amount, Decimal::from_str("2699.00").unwrap());
/// ```
pub fn calculate(input: &CalculationInput) -> EngineResult<CalculationResult> {
    input.validate()?;

    let months_worked = resolve_months(input);
    if months_worked == 0 {
        return Err(EngineError::NoMonthsWorked);
    }

    let salary = input.monthly_gross_salary;
    let gross = proportional_bonus(salary, months_worked)?;
    let mut steps = vec![CalculationStep::amount(
        "Proportional Year-End Bonus",
        format!(
            "Proportional bonus = (monthly salary / 12) x months worked\n{} / 12 x {} = {}",
            brl(salary),
            months_worked,
            brl(gross)
        ),
        gross,
    )];

    let mut inss_amount = Decimal::ZERO;
    let mut irrf_amount = Decimal::ZERO;

    let net_amount = match input.installment {
        Installment::First => {
            let advance = first_installment_advance(gross);
            steps.push(CalculationStep::amount(
                "First Installment (Advance - 50%)",
                format!(
                    "50% of the gross amount: {}\nNo INSS/IRRF is withheld from the first installment.",
                    brl(advance)
                ),
                advance,
            ));
            advance
        }
        Installment::Second | Installment::Full => {
            steps.push(CalculationStep::amount(
                "Full Installment (100% of the amount)",
                format!("Full amount: {}", brl(gross)),
                gross,
            ));

            let mut base = gross;

            if input.deduct_inss {
                inss_amount = compute_inss(gross);
                base -= inss_amount;
                steps.push(CalculationStep::deduction(
                    "INSS Withholding",
                    format!(
                        "INSS 2025 progressive table\nCalculation base: {}\n{}",
                        brl(gross),
                        explain_inss(gross)
                    ),
                    inss_amount,
                ));
            }

            if input.deduct_irrf {
                // The IRRF base starts from the gross bonus, not the running base.
                irrf_amount = compute_irrf(gross, inss_amount);
                base -= irrf_amount;
                steps.push(CalculationStep::deduction(
                    "IRRF Withholding",
                    format!(
                        "IRRF progressive table (base after INSS)\n{}",
                        explain_irrf(gross - inss_amount)
                    ),
                    irrf_amount,
                ));
            }

            if input.installment == Installment::Second {
                let advance = first_installment_advance(gross);
                steps.push(CalculationStep::deduction(
                    "Advance Already Paid",
                    format!(
                        "Net total ({}) - gross first installment already paid ({})",
                        brl(gross - inss_amount - irrf_amount),
                        brl(advance)
                    ),
                    advance,
                ));
                base -= advance;
            }

            base
        }
    };

    debug!(
        months_worked,
        installment = ?input.installment,
        gross = %gross,
        inss = %inss_amount,
        irrf = %irrf_amount,
        net = %net_amount,
        "Year-end bonus calculated"
    );

    Ok(CalculationResult {
        employee_name: input.employee_name.clone(),
        monthly_gross_salary: salary,
        months_worked,
        installment: input.installment,
        gross_proportional_bonus: gross,
        inss_amount,
        irrf_amount,
        net_amount,
        steps,
    })
}
