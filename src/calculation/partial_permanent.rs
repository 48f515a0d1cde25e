//! Permanent partial incapacity (IPP) pension calculation.
//!
//! This module computes the annual pension under Art. 48.º, n.º 3, al. c)
//! NLAT: 70% of the reduction in earning capacity.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, PensionResult, WorkerClaim};
use crate::tables::ReferenceTables;

use super::permanent::{settle_pension, validate_worker_claim};
use super::validation::{ensure_percentage, fraction, require};

/// Share of the remuneration reduction paid as pension.
pub const PARTIAL_PENSION_FACTOR: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Calculates the pension, redemption capital and accrued amount for a
/// permanent partial incapacity.
///
/// # Arguments
///
/// * `claim` - The worker claim; `incapacity_percentage` is required
/// * `tables` - Reference tables for the redemption-rate lookup
/// * `today` - Evaluation date for the accrued pension
///
/// # Errors
///
/// - `MissingField` when the incapacity percentage is absent
/// - `InvalidInput` for a non-positive remuneration, a percentage outside
///   (0, 100], or a birth date not before the discharge date
/// - `RateNotFound` when the age has no redemption coefficient
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::calculate_partial_permanent;
/// use nlat_engine::models::WorkerClaim;
/// use nlat_engine::tables::ReferenceTables;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let claim = WorkerClaim {
///     worker_name: "Maria Silva".to_string(),
///     annual_remuneration: Decimal::new(14000, 0),
///     incapacity_percentage: Some(Decimal::new(7, 0)),
///     discharge_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     birth_date: NaiveDate::from_ymd_opt(1980, 5, 20).unwrap(),
/// };
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let result = calculate_partial_permanent(&claim, ReferenceTables::statutory(), today).unwrap();
/// // 14000 × 0.70 × 7% = 686
/// assert_eq!(result.annual_pension, Decimal::new(686, 0));
/// assert_eq!(result.age_for_rate, 44);
/// ```
pub fn calculate_partial_permanent(
    claim: &WorkerClaim,
    tables: &ReferenceTables,
    today: NaiveDate,
) -> EngineResult<PensionResult> {
    let percentage = require("incapacity_percentage", claim.incapacity_percentage)?;
    validate_worker_claim(claim)?;
    ensure_percentage("incapacity_percentage", percentage)?;

    let annual_pension = claim.annual_remuneration * PARTIAL_PENSION_FACTOR * fraction(percentage);

    debug!(
        worker = %claim.worker_name,
        %annual_pension,
        "partial permanent pension computed"
    );

    let pension_step = AuditStep {
        step_number: 1,
        rule_id: "partial_permanent_pension".to_string(),
        rule_name: "Permanent Partial Incapacity Pension".to_string(),
        clause_ref: "Art. 48.º, n.º 3, al. c) NLAT".to_string(),
        input: serde_json::json!({
            "annual_remuneration": claim.annual_remuneration.normalize().to_string(),
            "incapacity_percentage": percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "factor": PARTIAL_PENSION_FACTOR.normalize().to_string(),
            "annual_pension": annual_pension.normalize().to_string()
        }),
        reasoning: format!(
            "IPP pension: €{} × {} × {}% = €{}",
            claim.annual_remuneration.normalize(),
            PARTIAL_PENSION_FACTOR.normalize(),
            percentage.normalize(),
            annual_pension.normalize()
        ),
    };

    settle_pension(annual_pension, claim, tables, today, vec![pension_step])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_claim(remuneration: &str, percentage: Option<&str>) -> WorkerClaim {
        WorkerClaim {
            worker_name: "Maria Silva".to_string(),
            annual_remuneration: dec(remuneration),
            incapacity_percentage: percentage.map(dec),
            discharge_date: date("2024-03-10"),
            birth_date: date("1980-05-20"),
        }
    }

    #[test]
    fn test_annual_pension_is_70_percent_of_reduction() {
        let claim = create_claim("14000", Some("7"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"))
                .unwrap();
        assert_eq!(result.annual_pension, dec("686"));
    }

    #[test]
    fn test_age_rounds_up_and_rate_is_applied() {
        let claim = create_claim("14000", Some("7"));
        let tables = ReferenceTables::statutory();
        let result = calculate_partial_permanent(&claim, tables, date("2025-01-01")).unwrap();

        assert_eq!(result.age_at_discharge, 43);
        assert_eq!(result.age_for_rate, 44);
        assert_eq!(result.redemption_rate, tables.redemption_rate(44).unwrap());
        assert_eq!(
            result.redemption_capital,
            dec("686") * tables.redemption_rate(44).unwrap()
        );
    }

    #[test]
    fn test_pension_due_from_day_after_discharge() {
        let claim = WorkerClaim {
            annual_remuneration: dec("36500"),
            incapacity_percentage: Some(dec("20")),
            ..create_claim("36500", None)
        };
        // 36500 × 0.70 × 0.20 = 5110 per year = 14 per day.
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2024-03-20"))
                .unwrap();
        assert_eq!(result.pension_start_date, date("2024-03-11"));
        assert_eq!(result.pension_due, dec("140"));
    }

    #[test]
    fn test_pension_due_is_zero_before_start() {
        let claim = create_claim("14000", Some("7"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2024-03-10"))
                .unwrap();
        assert_eq!(result.pension_due, Decimal::ZERO);
    }

    #[test]
    fn test_audit_trail_order() {
        let claim = create_claim("14000", Some("7"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"))
                .unwrap();
        let rule_ids: Vec<&str> = result
            .audit_steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "partial_permanent_pension",
                "nearest_birthday_age",
                "redemption_capital",
                "pension_due"
            ]
        );
        assert_eq!(result.audit_steps[0].clause_ref, "Art. 48.º, n.º 3, al. c) NLAT");
    }

    #[test]
    fn test_missing_percentage() {
        let claim = create_claim("14000", None);
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"));
        assert_eq!(result, Err(EngineError::missing("incapacity_percentage")));
    }

    #[test]
    fn test_percentage_out_of_range() {
        for value in ["0", "-5", "100.01"] {
            let claim = create_claim("14000", Some(value));
            let result =
                calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"));
            assert!(
                matches!(&result, Err(EngineError::InvalidInput { field, .. }) if field == "incapacity_percentage"),
                "expected InvalidInput for {}",
                value
            );
        }
    }

    #[test]
    fn test_full_incapacity_is_accepted() {
        let claim = create_claim("10000", Some("100"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"))
                .unwrap();
        assert_eq!(result.annual_pension, dec("7000"));
    }

    #[test]
    fn test_non_positive_remuneration() {
        let claim = create_claim("0", Some("10"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "annual_remuneration"
        ));
    }

    #[test]
    fn test_remuneration_above_ceiling_is_rejected() {
        let claim = create_claim("70000000000000000000000000000", Some("100"));
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "annual_remuneration"
        ));
    }

    #[test]
    fn test_birth_after_discharge() {
        let mut claim = create_claim("14000", Some("7"));
        claim.birth_date = date("2025-01-01");
        let result =
            calculate_partial_permanent(&claim, ReferenceTables::statutory(), date("2025-01-01"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "birth_date"
        ));
    }

    proptest! {
        #[test]
        fn prop_annual_pension_identity(remuneration in 1u32..1_000_000, percentage in 1u32..=100) {
            let claim = WorkerClaim {
                annual_remuneration: Decimal::from(remuneration),
                incapacity_percentage: Some(Decimal::from(percentage)),
                ..create_claim("1", None)
            };
            let result = calculate_partial_permanent(
                &claim,
                ReferenceTables::statutory(),
                date("2025-01-01"),
            ).unwrap();
            let expected = Decimal::from(remuneration) * dec("0.70") * Decimal::from(percentage) / dec("100");
            prop_assert_eq!(result.annual_pension, expected);
            prop_assert!(result.redemption_capital >= result.annual_pension);
        }
    }
}
