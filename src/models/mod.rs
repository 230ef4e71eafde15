//! Core data models for the year-end bonus engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod month_selection;

pub use calculation_input::{CalculationInput, Installment};
pub use calculation_result::{CalculationResult, CalculationStep};
pub use month_selection::{MONTHS_IN_YEAR, MonthSelection};
