//! HTTP API module for the year-end bonus engine.
//!
//! This module provides the REST endpoints for calculating the bonus and
//! for editing the worked-month selection kept between calculations.

mod handlers;
mod presenter;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use presenter::{
    CompositionSlice, ResultView, StepView, SummaryView, format_brl, present,
};
pub use request::{CalculationRequest, MonthToggleRequest, RawAmount};
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ResetResponse, SelectionResponse,
};
pub use state::AppState;
