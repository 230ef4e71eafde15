//! Calculation logic for the year-end bonus engine.
//!
//! This module contains the worked-month inference rule, the INSS and IRRF
//! withholding tables with their bracket-by-bracket explanations, the
//! calculation that composes them into a net amount, and the session that
//! carries the month selection between recalculations.

mod engine;
mod inss;
mod irrf;
mod money;
mod month_inference;
mod session;

pub use engine::{calculate, first_installment_advance, proportional_bonus, resolve_months};
pub use inss::{
    INSS_BRACKETS, INSS_CEILING, InssBracket, InssBracketLine, InssExplanation, compute_inss,
    explain_inss,
};
pub use irrf::{
    IRRF_BRACKETS, IRRF_EXEMPTION_LIMIT, IrrfBracket, IrrfExplanation, compute_irrf, explain_irrf,
};
pub use money::round_currency;
pub use month_inference::{ADMISSION_DAY_THRESHOLD, infer_months};
pub use session::{CalculationSession, MonthResolution};
