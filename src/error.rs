//! Error types for the NLAT compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating a claim or
//! computing a benefit.

use thiserror::Error;

/// The main error type for the compensation engine.
///
/// Every calculation either fully succeeds or returns exactly one of these
/// errors; no partial result is ever produced.
///
/// # Example
///
/// ```
/// use nlat_engine::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "annual_remuneration".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required field is missing: annual_remuneration");
/// assert_eq!(error.kind(), "MISSING_FIELD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A required input field was empty or absent.
    #[error("Required field is missing: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// An input parsed but violates a domain constraint.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// The redemption table has no coefficient for the computed age.
    #[error("No redemption rate found for the computed age of {age} years")]
    RateNotFound {
        /// The age used for the lookup.
        age: u32,
    },

    /// A year-indexed table has no entry for the requested year.
    #[error("The {table} table has no value for the year {year}")]
    UnsupportedYear {
        /// The table that was queried (e.g. "IAS").
        table: String,
        /// The year that was requested.
        year: i32,
    },

    /// The requested scenario has no statutory formula implemented yet.
    #[error("Calculation not yet available for scenario '{scenario}'")]
    NotImplemented {
        /// The scenario identifier.
        scenario: String,
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
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::MissingField`].
    pub fn missing(field: impl Into<String>) -> Self {
        EngineError::MissingField {
            field: field.into(),
        }
    }

    /// Returns a stable, machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::MissingField { .. } => "MISSING_FIELD",
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
            EngineError::RateNotFound { .. } => "RATE_NOT_FOUND",
            EngineError::UnsupportedYear { .. } => "UNSUPPORTED_YEAR",
            EngineError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
