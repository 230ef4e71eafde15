//! Presentation of a calculation result.
//!
//! Turns a [`CalculationResult`] into the summary, numbered step list and
//! two-slice composition that a client renders, with pt-BR currency strings.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::round_currency;
use crate::models::CalculationResult;

/// The summary block shown above the steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// The employee's name.
    pub employee_name: String,
    /// The monthly salary.
    pub base_salary: String,
    /// E.g. `"12 months"`.
    pub months_worked: String,
    /// The proportional bonus.
    pub proportional_bonus: String,
    /// INSS withheld.
    pub inss: String,
    /// IRRF withheld.
    pub irrf: String,
}

/// One numbered calculation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepView {
    /// 1-based position in the step list.
    pub number: usize,
    /// The step title.
    pub title: String,
    /// The multi-line derivation.
    pub description: String,
    /// `"Full amount"` or `"Amount after deduction"`.
    pub value_label: String,
    /// The formatted step value.
    pub value: String,
}

/// One slice of the composition chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionSlice {
    /// The slice label.
    pub label: String,
    /// The raw amount.
    pub amount: Decimal,
    /// The formatted amount.
    pub formatted: String,
    /// Share of the total, to 1 decimal place; zero when the total is zero.
    pub percent: Decimal,
}

/// Everything needed to render a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    /// The summary block.
    pub summary: SummaryView,
    /// The numbered steps, in calculation order.
    pub steps: Vec<StepView>,
    /// The formatted net amount.
    pub final_value: String,
    /// Net amount versus INSS + IRRF.
    pub composition: Vec<CompositionSlice>,
}

/// Formats an amount as Brazilian currency, e.g. `R$ 1.234,56`.
///
/// # Examples
///
/// ```
/// use decimo_engine::api::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
/// assert_eq!(format_brl(Decimal::new(5, 1)), "R$ 0,50");
/// ```
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_currency(value);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, fraction)
}

fn share(part: Decimal, total: Decimal) -> Decimal {
    if total <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (part / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn slice(label: &str, amount: Decimal, total: Decimal) -> CompositionSlice {
    CompositionSlice {
        label: label.to_string(),
        amount,
        formatted: format_brl(amount),
        percent: share(amount, total),
    }
}

/// Builds the view of a calculation result.
pub fn present(result: &CalculationResult) -> ResultView {
    let deductions = result.total_deductions();
    let total = result.net_amount + deductions;

    let steps = result
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| StepView {
            number: index + 1,
            title: step.title.clone(),
            description: step.description.clone(),
            value_label: if step.is_deduction {
                "Amount after deduction".to_string()
            } else {
                "Full amount".to_string()
            },
            value: format_brl(step.value),
        })
        .collect();

    ResultView {
        summary: SummaryView {
            employee_name: result.employee_name.clone(),
            base_salary: format_brl(result.monthly_gross_salary),
            months_worked: format!("{} months", result.months_worked),
            proportional_bonus: format_brl(result.gross_proportional_bonus),
            inss: format_brl(result.inss_amount),
            irrf: format_brl(result.irrf_amount),
        },
        steps,
        final_value: format_brl(result.net_amount),
        composition: vec![
            slice("Net amount", result.net_amount, total),
            slice("Deductions (INSS + IRRF)", deductions, total),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate;
    use crate::models::{CalculationInput, Installment};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_result(installment: Installment) -> CalculationResult {
        calculate(&CalculationInput {
            employee_name: "Maria".to_string(),
            monthly_gross_salary: dec("3000.00"),
            admission_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            calculation_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            installment,
            deduct_inss: true,
            deduct_irrf: true,
            manually_selected_months: None,
        })
        .unwrap()
    }

    #[test]
    fn test_format_brl_groups_thousands() {
        assert_eq!(format_brl(dec("1234567.891")), "R$ 1.234.567,89");
        assert_eq!(format_brl(dec("999.999")), "R$ 1.000,00");
        assert_eq!(format_brl(dec("100")), "R$ 100,00");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(dec("-1500.5")), "-R$ 1.500,50");
    }

    #[test]
    fn test_summary_fields() {
        let view = present(&create_test_result(Installment::Full));
        assert_eq!(view.summary.base_salary, "R$ 3.000,00");
        assert_eq!(view.summary.months_worked, "12 months");
        assert_eq!(view.summary.inss, "R$ 253,41");
        assert_eq!(view.summary.irrf, "R$ 47,59");
        assert_eq!(view.final_value, "R$ 2.699,00");
    }

    #[test]
    fn test_steps_are_numbered_and_labelled() {
        let view = present(&create_test_result(Installment::Full));
        let numbers: Vec<usize> = view.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(view.steps[0].value_label, "Full amount");
        assert_eq!(view.steps[2].value_label, "Amount after deduction");
    }

    #[test]
    fn test_composition_percentages() {
        let view = present(&create_test_result(Installment::Full));
        // 2699.00 / 3000.00 = 89.97%
        assert_eq!(view.composition[0].percent, dec("90.0"));
        assert_eq!(view.composition[1].amount, dec("301.00"));
        assert_eq!(view.composition[1].percent, dec("10.0"));
    }

    #[test]
    fn test_first_installment_has_no_deduction_slice() {
        let view = present(&create_test_result(Installment::First));
        assert_eq!(view.composition[0].percent, dec("100.0"));
        assert_eq!(view.composition[1].percent, Decimal::ZERO);
    }

    #[test]
    fn test_zero_total_gives_zero_percent() {
        assert_eq!(share(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }
}
