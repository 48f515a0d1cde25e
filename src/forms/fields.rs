//! Parsing of raw form field values.
//!
//! Every helper reports the offending field by name and logs the rejection
//! at `warn` level.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::format::{parse_date_field, parse_decimal};

fn log_rejection(field: &str, error: &EngineError) {
    warn!(field, error = %error, "form field rejected");
}

/// Fails with `MissingField` for the first blank entry.
pub(crate) fn require_filled(fields: &[(&str, &str)]) -> EngineResult<()> {
    for (field, raw) in fields {
        if raw.trim().is_empty() {
            let error = EngineError::missing(*field);
            log_rejection(field, &error);
            return Err(error);
        }
    }
    Ok(())
}

/// Parses a required decimal.
pub(crate) fn decimal(field: &str, raw: &str) -> EngineResult<Decimal> {
    parse_decimal(field, raw).inspect_err(|e| log_rejection(field, e))
}

/// Parses a decimal that may be left blank.
pub(crate) fn optional_decimal(field: &str, raw: &str) -> EngineResult<Option<Decimal>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    decimal(field, raw).map(Some)
}

/// Parses a required date.
pub(crate) fn date(field: &str, raw: &str) -> EngineResult<NaiveDate> {
    parse_date_field(field, raw).inspect_err(|e| log_rejection(field, e))
}

/// Parses a required calendar year.
pub(crate) fn year(field: &str, raw: &str) -> EngineResult<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        let error = EngineError::missing(field);
        log_rejection(field, &error);
        return Err(error);
    }
    trimmed.parse::<i32>().map_err(|_| {
        let error = EngineError::invalid(field, format!("'{}' is not a valid year", trimmed));
        log_rejection(field, &error);
        error
    })
}

/// Parses a head count; blank means zero.
pub(crate) fn count(field: &str, raw: &str) -> EngineResult<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse::<u32>().map_err(|_| {
        let error = EngineError::invalid(
            field,
            format!("'{}' is not a valid non-negative whole number", trimmed),
        );
        log_rejection(field, &error);
        error
    })
}
