//! Calculation session.
//!
//! A [`CalculationSession`] owns the user's month selection between
//! calculations. Forced inference replaces the selection; toggling a month
//! edits it; every other recalculation reuses it as-is.

use tracing::{debug, info};

use super::engine::calculate;
use super::month_inference::infer_months;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, CalculationResult, MonthSelection};

/// How a recalculation resolves the months worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthResolution {
    /// Infer months from the dates and replace the selection with them.
    ForceInference,
    /// Use the current selection unchanged.
    Manual,
}

/// Caller-owned state that survives between recalculations.
///
/// # Example
///
/// ```
/// use decimo_engine::calculation::{CalculationSession, MonthResolution};
/// use decimo_engine::models::{CalculationInput, Installment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     employee_name: "Maria".to_string(),
///     monthly_gross_salary: Decimal::new(240000, 2),
///     admission_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
///     calculation_date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
///     installment: Installment::Full,
///     deduct_inss: false,
///     deduct_irrf: false,
///     manually_selected_months: None,
/// };
///
/// let mut session = CalculationSession::new();
/// let result = session
///     .recalculate(input.clone(), MonthResolution::ForceInference)
///     .unwrap();
/// assert_eq!(result.months_worked, 6);
///
/// session.toggle_month(6).unwrap();
/// let result = session.recalculate(input, MonthResolution::Manual).unwrap();
/// assert_eq!(result.months_worked, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculationSession {
    selection: MonthSelection,
    showing_result: bool,
}

impl CalculationSession {
    /// Creates a session with no selected months and no result shown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current month selection.
    pub fn selection(&self) -> &MonthSelection {
        &self.selection
    }

    /// Whether the last recalculation produced a result.
    pub fn is_showing_result(&self) -> bool {
        self.showing_result
    }

    /// Flips one month in the selection.
    pub fn toggle_month(&mut self, month: u32) -> EngineResult<bool> {
        let selected = self.selection.toggle(month)?;
        debug!(month, selected, "Month selection toggled");
        Ok(selected)
    }

    /// Clears the selection and any shown result.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.showing_result = false;
    }

    /// Records that the caller could not build a valid input.
    ///
    /// A shown result is cleared; otherwise nothing changes. The error is
    /// returned for propagation.
    pub fn reject_input(&mut self, error: EngineError) -> EngineError {
        if self.showing_result {
            info!(error = %error, "Invalid input, clearing previous result");
            self.reset();
        }
        error
    }

    /// Recalculates the bonus for `input` using this session's months.
    ///
    /// Any month override already on `input` is replaced by the session's
    /// selection.
    pub fn recalculate(
        &mut self,
        mut input: CalculationInput,
        resolution: MonthResolution,
    ) -> EngineResult<CalculationResult> {
        if let Err(error) = input.validate() {
            return Err(self.reject_input(error));
        }

        if resolution == MonthResolution::ForceInference {
            let months = infer_months(input.admission_date, input.calculation_date);
            self.selection = MonthSelection::first_n(months);
        }
        input.manually_selected_months = Some(self.selection.clone());

        match calculate(&input) {
            Ok(result) => {
                self.showing_result = true;
                Ok(result)
            }
            Err(EngineError::NoMonthsWorked) => {
                self.showing_result = false;
                Err(EngineError::NoMonthsWorked)
            }
            Err(error) => Err(self.reject_input(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    use crate::models::Installment;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_input(admission: NaiveDate) -> CalculationInput {
        CalculationInput {
            employee_name: "Joao".to_string(),
            monthly_gross_salary: dec("1200.00"),
            admission_date: admission,
            calculation_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            installment: Installment::Full,
            deduct_inss: false,
            deduct_irrf: false,
            manually_selected_months: None,
        }
    }

    fn january() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_forced_inference_replaces_selection() {
        let mut session = CalculationSession::new();
        session.toggle_month(12).unwrap();

        let input = create_test_input(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        let result = session
            .recalculate(input, MonthResolution::ForceInference)
            .unwrap();

        assert_eq!(result.months_worked, 4);
        assert_eq!(session.selection().iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(session.is_showing_result());
    }

    #[test]
    fn test_manual_resolution_uses_selection() {
        let mut session = CalculationSession::new();
        session
            .recalculate(create_test_input(january()), MonthResolution::ForceInference)
            .unwrap();
        session.toggle_month(1).unwrap();
        session.toggle_month(2).unwrap();

        let result = session
            .recalculate(create_test_input(january()), MonthResolution::Manual)
            .unwrap();
        assert_eq!(result.months_worked, 10);
        assert_eq!(result.gross_proportional_bonus, dec("1000.00"));
    }

    #[test]
    fn test_manual_override_on_input_is_ignored() {
        let mut session = CalculationSession::new();
        session.toggle_month(5).unwrap();

        let mut input = create_test_input(january());
        input.manually_selected_months = Some(MonthSelection::first_n(12));
        let result = session.recalculate(input, MonthResolution::Manual).unwrap();
        assert_eq!(result.months_worked, 1);
    }

    #[test]
    fn test_empty_selection_reports_no_months() {
        let mut session = CalculationSession::new();
        let result = session.recalculate(create_test_input(january()), MonthResolution::Manual);
        assert!(matches!(result, Err(EngineError::NoMonthsWorked)));
        assert!(!session.is_showing_result());
    }

    #[test]
    fn test_forced_inference_of_zero_still_replaces_selection() {
        let mut session = CalculationSession::new();
        session.toggle_month(3).unwrap();

        let input = create_test_input(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let result = session.recalculate(input, MonthResolution::ForceInference);

        assert!(matches!(result, Err(EngineError::NoMonthsWorked)));
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_invalid_input_after_result_resets_session() {
        let mut session = CalculationSession::new();
        session
            .recalculate(create_test_input(january()), MonthResolution::ForceInference)
            .unwrap();

        let mut input = create_test_input(january());
        input.monthly_gross_salary = Decimal::ZERO;
        let result = session.recalculate(input, MonthResolution::Manual);

        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
        assert!(session.selection().is_empty());
        assert!(!session.is_showing_result());
    }

    #[test]
    fn test_invalid_input_without_result_keeps_selection() {
        let mut session = CalculationSession::new();
        session.toggle_month(4).unwrap();

        let mut input = create_test_input(january());
        input.monthly_gross_salary = dec("-1");
        assert!(session.recalculate(input, MonthResolution::Manual).is_err());
        assert!(session.selection().contains(4));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = CalculationSession::new();
        session
            .recalculate(create_test_input(january()), MonthResolution::ForceInference)
            .unwrap();
        session.reset();
        assert!(session.selection().is_empty());
        assert!(!session.is_showing_result());
    }
}
