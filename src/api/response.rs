//! Response types for the compensation engine API.
//!
//! This module defines the error response structures, the mapping from
//! [`EngineError`] to HTTP statuses, and the calculator catalogue returned
//! by `GET /calculators`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::EngineMetadata;
use crate::error::EngineError;
use crate::models::CalculatorKind;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("Required field is missing: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let code = error.kind();
        let message = error.to_string();
        match error {
            EngineError::MissingField { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::missing_field(field),
            },
            EngineError::InvalidInput { field, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    message,
                    format!("The value supplied for '{}' is outside the accepted range or format", field),
                ),
            },
            EngineError::RateNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    message,
                    "Check the birth and discharge dates",
                ),
            },
            EngineError::UnsupportedYear { table, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    message,
                    format!("The {} table does not cover the requested year", table),
                ),
            },
            EngineError::NotImplemented { .. } => ApiErrorResponse {
                status: StatusCode::NOT_IMPLEMENTED,
                error: ApiError::new(code, message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    code,
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    code,
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

/// One entry of the calculator catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorInfo {
    /// Route identifier.
    pub id: String,
    /// Portuguese title.
    pub title: String,
    /// Portuguese description.
    pub description: String,
    /// Path accepting the calculator's form.
    pub path: String,
}

impl From<CalculatorKind> for CalculatorInfo {
    fn from(kind: CalculatorKind) -> Self {
        Self {
            id: kind.id().to_string(),
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            path: format!("/calculate/{}", kind.id()),
        }
    }
}

/// Body of `GET /calculators`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorCatalogue {
    /// The legal regime the engine implements.
    pub engine: EngineMetadata,
    /// Available calculators, in menu order.
    pub calculators: Vec<CalculatorInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::missing("birth_date").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MISSING_FIELD");
        assert!(response.error.message.contains("birth_date"));
    }

    #[test]
    fn test_not_implemented_maps_to_501() {
        let response: ApiErrorResponse = EngineError::NotImplemented {
            scenario: "absolute_habitual".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(response.error.code, "NOT_IMPLEMENTED");
    }

    #[test]
    fn test_lookup_errors_map_to_bad_request() {
        let rate: ApiErrorResponse = EngineError::RateNotFound { age: 120 }.into();
        assert_eq!(rate.status, StatusCode::BAD_REQUEST);
        assert_eq!(rate.error.code, "RATE_NOT_FOUND");

        let year: ApiErrorResponse = EngineError::UnsupportedYear {
            table: "IAS".to_string(),
            year: 2001,
        }
        .into();
        assert_eq!(year.status, StatusCode::BAD_REQUEST);
        assert_eq!(year.error.code, "UNSUPPORTED_YEAR");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "engine.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_calculator_info_path() {
        let info = CalculatorInfo::from(CalculatorKind::FatalAccident);
        assert_eq!(info.path, "/calculate/fatal-accident");
    }
}
