//! HTTP request handlers for the year-end bonus API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::MonthResolution;
use crate::error::EngineResult;
use crate::models::{CalculationResult, MonthSelection};

use super::presenter::present;
use super::request::{CalculationRequest, MonthToggleRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, ResetResponse, SelectionResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/months", get(months_handler))
        .route("/months/toggle", post(toggle_month_handler))
        .route("/reset", post(reset_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let api_error = error.into();
    json_response(api_error.status, api_error.error)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Builds the response for a finished recalculation.
fn calculation_response(
    correlation_id: Uuid,
    start_time: Instant,
    outcome: EngineResult<(CalculationResult, MonthSelection)>,
) -> Response {
    match outcome {
        Ok((result, selected_months)) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                months_worked = result.months_worked,
                installment = ?result.installment,
                net_amount = %result.net_amount,
                duration_us,
                "Calculation completed successfully"
            );
            let view = present(&result);
            json_response(
                StatusCode::OK,
                CalculationResponse {
                    calculation_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    duration_us,
                    selected_months,
                    result,
                    view,
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation not performed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /calculate.
///
/// Parses the form, resolves the months worked (forcing inference unless the
/// request opts out) and returns the result with its rendered view.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let resolution = request.resolution();
    let defaults = state.config().form_defaults();
    let outcome = state.with_session(|session| {
        let input = request
            .into_input(defaults)
            .map_err(|err| session.reject_input(err))?;
        let result = session.recalculate(input, resolution)?;
        Ok((result, session.selection().clone()))
    });

    calculation_response(correlation_id, start_time, outcome)
}

/// Handler for POST /months/toggle.
///
/// Flips one month in the selection, then recalculates without inference.
async fn toggle_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthToggleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(correlation_id = %correlation_id, month = request.month, "Toggling month");

    let start_time = Instant::now();
    let defaults = state.config().form_defaults();
    let outcome = state.with_session(|session| {
        session.toggle_month(request.month)?;
        let input = request
            .form
            .into_input(defaults)
            .map_err(|err| session.reject_input(err))?;
        let result = session.recalculate(input, MonthResolution::Manual)?;
        Ok((result, session.selection().clone()))
    });

    calculation_response(correlation_id, start_time, outcome)
}

/// Handler for GET /months.
async fn months_handler(State(state): State<AppState>) -> Response {
    match state.with_session(|session| Ok(session.selection().clone())) {
        Ok(selected_months) => json_response(StatusCode::OK, SelectionResponse { selected_months }),
        Err(err) => error_response(err),
    }
}

/// Handler for POST /reset.
///
/// Clears the session and returns the values a blank form starts with.
async fn reset_handler(State(state): State<AppState>) -> Response {
    let outcome = state.with_session(|session| {
        session.reset();
        Ok(session.selection().clone())
    });

    match outcome {
        Ok(selected_months) => {
            info!("Calculation form reset");
            json_response(
                StatusCode::OK,
                ResetResponse {
                    form_defaults: state.config().form_defaults(),
                    calculation_date: Local::now().date_naive(),
                    selected_months,
                },
            )
        }
        Err(err) => error_response(err),
    }
}
