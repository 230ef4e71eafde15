//! Error types for the year-end bonus engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating a bonus.

use thiserror::Error;

/// The main error type for the year-end bonus engine.
///
/// Every failure the engine can report is a variant here, so callers
/// always receive an explicit result they must check.
///
/// # Example
///
/// ```
/// use decimo_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "monthly_gross_salary".to_string(),
///     message: "must be a positive number".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'monthly_gross_salary': must be a positive number"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The salary or one of the dates was missing or unusable.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was rejected.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The input was valid but no worked month was counted.
    #[error("No worked month was counted.")]
    NoMonthsWorked,

    /// A month number outside 1..=12 was supplied.
    #[error("Invalid month: {month} (expected 1 to 12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
