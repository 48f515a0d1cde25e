//! HTTP API module for the compensation engine.
//!
//! This module exposes one `POST /calculate/{calculator}` endpoint per
//! calculator, taking the calculator's form as JSON, plus
//! `GET /calculators` listing them.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, CalculatorCatalogue, CalculatorInfo};
pub use state::AppState;
