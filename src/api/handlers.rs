//! HTTP request handlers for the compensation engine API.
//!
//! Every calculator is served by the same generic handler, instantiated
//! once per form type.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::forms::{
    AbsolutePermanentHabitualForm, AbsolutePermanentTotalForm, CalculationContext,
    CalculatorForm, FatalAccidentForm, HighIncapacitySubsidyForm, PartialPermanentForm,
    PensionRevaluationForm, TemporaryIncapacityForm,
};
use crate::models::{CalculationEnvelope, CalculatorKind};

use super::response::{ApiError, ApiErrorResponse, CalculatorCatalogue, CalculatorInfo};
use super::state::AppState;

fn calculate_path<F: CalculatorForm>() -> String {
    format!("/calculate/{}", F::KIND.id())
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculators", get(list_calculators))
        .route(
            &calculate_path::<PartialPermanentForm>(),
            post(calculate_handler::<PartialPermanentForm>),
        )
        .route(
            &calculate_path::<AbsolutePermanentTotalForm>(),
            post(calculate_handler::<AbsolutePermanentTotalForm>),
        )
        .route(
            &calculate_path::<AbsolutePermanentHabitualForm>(),
            post(calculate_handler::<AbsolutePermanentHabitualForm>),
        )
        .route(
            &calculate_path::<TemporaryIncapacityForm>(),
            post(calculate_handler::<TemporaryIncapacityForm>),
        )
        .route(
            &calculate_path::<HighIncapacitySubsidyForm>(),
            post(calculate_handler::<HighIncapacitySubsidyForm>),
        )
        .route(
            &calculate_path::<PensionRevaluationForm>(),
            post(calculate_handler::<PensionRevaluationForm>),
        )
        .route(
            &calculate_path::<FatalAccidentForm>(),
            post(calculate_handler::<FatalAccidentForm>),
        )
        .with_state(state)
}

/// Handler for GET /calculators.
async fn list_calculators(State(state): State<AppState>) -> Json<CalculatorCatalogue> {
    Json(CalculatorCatalogue {
        engine: state.config().engine().clone(),
        calculators: CalculatorKind::ALL
            .into_iter()
            .map(CalculatorInfo::from)
            .collect(),
    })
}

fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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
    }
}

/// Handler for POST /calculate/{calculator}.
///
/// Parses the form, runs the calculation and wraps the result in a
/// [`CalculationEnvelope`].
async fn calculate_handler<F>(
    State(state): State<AppState>,
    payload: Result<Json<F>, JsonRejection>,
) -> Response
where
    F: CalculatorForm + DeserializeOwned + Send + 'static,
{
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    let calculator = F::KIND;
    info!(
        correlation_id = %correlation_id,
        calculator = calculator.id(),
        "Processing calculation request"
    );

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(rejection_to_error(rejection, correlation_id)),
            )
                .into_response();
        }
    };

    let ctx = CalculationContext::from_loader(state.config(), state.today());
    let start_time = Instant::now();
    match form.calculate(&ctx) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculator = calculator.id(),
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            let envelope = CalculationEnvelope {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                calculator,
                result,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(envelope),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                calculator = calculator.id(),
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
