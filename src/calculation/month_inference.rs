//! Worked-month inference.
//!
//! This module derives how many months count towards the bonus from the
//! admission date and the calculation date.

use chrono::{Datelike, NaiveDate};

use crate::models::MONTHS_IN_YEAR;

/// The last day of the admission month that still counts the month as worked.
///
/// A month in which the employee worked at least 15 days counts as a full month.
pub const ADMISSION_DAY_THRESHOLD: u32 = 15;

/// Infers the number of months worked in the calculation year, in 0..=12.
///
/// - Admission after the calculation year: 0.
/// - Admission in the calculation year: months from the admission month up
///   to the calculation month, counting the admission month only when the
///   admission day is on or before the 15th.
/// - Admission in an earlier year: every month of the calculation year up to
///   and including the calculation month.
///
/// # Examples
///
/// ```
/// use decimo_engine::calculation::infer_months;
/// use chrono::NaiveDate;
///
/// let admission = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
/// let calculation = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// assert_eq!(infer_months(admission, calculation), 6);
///
/// let admission = NaiveDate::from_ymd_opt(2019, 3, 4).unwrap();
/// let calculation = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
/// assert_eq!(infer_months(admission, calculation), 8);
/// ```
pub fn infer_months(admission_date: NaiveDate, calculation_date: NaiveDate) -> u32 {
    if admission_date.year() > calculation_date.year() {
        return 0;
    }

    let calculation_month = i64::from(calculation_date.month0());
    let months = if admission_date.year() == calculation_date.year() {
        let admission_month_counts = admission_date.day() <= ADMISSION_DAY_THRESHOLD;
        calculation_month - i64::from(admission_date.month0())
            + i64::from(admission_month_counts)
    } else {
        calculation_month + 1
    };

    months.clamp(0, i64::from(MONTHS_IN_YEAR)) as u32
}
