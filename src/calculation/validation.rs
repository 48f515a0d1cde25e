//! Domain-range checks shared by the calculators.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Largest amount accepted for any monetary input (one trillion euros).
///
/// Keeps every product the calculators form well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

fn ensure_within_ceiling(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value > MAX_AMOUNT {
        return Err(EngineError::invalid(
            field,
            format!("must not exceed {}", MAX_AMOUNT),
        ));
    }
    Ok(value)
}

/// Unwraps a required optional input.
pub(crate) fn require<T>(field: &str, value: Option<T>) -> EngineResult<T> {
    value.ok_or_else(|| EngineError::missing(field))
}

/// Requires a strictly positive amount no larger than [`MAX_AMOUNT`].
pub(crate) fn ensure_positive(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value <= Decimal::ZERO {
        return Err(EngineError::invalid(field, "must be greater than zero"));
    }
    ensure_within_ceiling(field, value)
}

/// Requires a non-negative amount no larger than [`MAX_AMOUNT`].
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid(field, "must not be negative"));
    }
    ensure_within_ceiling(field, value)
}

/// Requires a percentage in (0, 100].
pub(crate) fn ensure_percentage(field: &str, value: Decimal) -> EngineResult<Decimal> {
    if value <= Decimal::ZERO || value > ONE_HUNDRED {
        return Err(EngineError::invalid(
            field,
            "must be greater than 0 and at most 100",
        ));
    }
    Ok(value)
}

/// Requires a percentage in `[min, 100]`.
pub(crate) fn ensure_percentage_at_least(
    field: &str,
    value: Decimal,
    min: Decimal,
) -> EngineResult<Decimal> {
    if value < min || value > ONE_HUNDRED {
        return Err(EngineError::invalid(
            field,
            format!("must be between {} and 100", min.normalize()),
        ));
    }
    Ok(value)
}

/// Requires the birth date to precede the discharge date.
pub(crate) fn ensure_born_before(birth: NaiveDate, discharge: NaiveDate) -> EngineResult<()> {
    if birth >= discharge {
        return Err(EngineError::invalid(
            "birth_date",
            "must be before the discharge date",
        ));
    }
    Ok(())
}

/// Converts a percentage to a fraction (25 -> 0.25).
pub(crate) fn fraction(percentage: Decimal) -> Decimal {
    percentage / ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_percentage_bounds() {
        assert!(ensure_percentage("p", Decimal::ZERO).is_err());
        assert!(ensure_percentage("p", Decimal::new(1, 2)).is_ok());
        assert!(ensure_percentage("p", ONE_HUNDRED).is_ok());
        assert!(ensure_percentage("p", Decimal::new(10001, 2)).is_err());
    }

    #[test]
    fn test_ensure_percentage_at_least_is_inclusive() {
        let min = Decimal::new(70, 0);
        assert!(ensure_percentage_at_least("p", Decimal::new(6999, 2), min).is_err());
        assert!(ensure_percentage_at_least("p", min, min).is_ok());
        assert!(ensure_percentage_at_least("p", ONE_HUNDRED, min).is_ok());
    }

    #[test]
    fn test_ensure_non_negative_accepts_zero() {
        assert!(ensure_non_negative("x", Decimal::ZERO).is_ok());
        assert!(ensure_non_negative("x", Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_max_amount_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000_000, 0));
    }

    #[test]
    fn test_amounts_above_ceiling_are_rejected() {
        assert!(ensure_positive("x", MAX_AMOUNT).is_ok());
        assert!(ensure_non_negative("x", MAX_AMOUNT).is_ok());
        let above = MAX_AMOUNT + Decimal::new(1, 2);
        assert!(matches!(
            ensure_positive("annual_remuneration", above),
            Err(EngineError::InvalidInput { field, .. }) if field == "annual_remuneration"
        ));
        assert!(ensure_non_negative("funeral_expenses", above).is_err());
    }

    #[test]
    fn test_require_reports_field() {
        let result: EngineResult<u32> = require("incapacity_percentage", None);
        assert_eq!(result, Err(EngineError::missing("incapacity_percentage")));
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(Decimal::new(75, 1)), Decimal::new(75, 3));
    }
}
