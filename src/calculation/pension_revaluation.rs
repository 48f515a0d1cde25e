//! Annual pension revaluation.
//!
//! A pension fixed in a given year is updated on 1 January of every
//! following year by that year's coefficient, compounding up to the
//! reference year. Years without a published coefficient leave the value
//! unchanged.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PensionRevaluationClaim, RevaluationResult, RevaluationRow};
use crate::tables::ReferenceTables;

use super::validation::{ensure_positive, fraction};

const REVALUATION_CLAUSE: &str = "Decreto-Lei n.º 142/99; portarias anuais de atualização";

/// Revalues a pension from its fixing year to the reference year.
///
/// # Errors
///
/// - `InvalidInput` for a non-positive initial value, or a fixing year
///   outside `revaluation_first_year..=reference_year`
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::calculate_pension_revaluation;
/// use nlat_engine::config::EngineSettings;
/// use nlat_engine::models::PensionRevaluationClaim;
/// use nlat_engine::tables::ReferenceTables;
/// use rust_decimal::Decimal;
///
/// let claim = PensionRevaluationClaim { initial_value: Decimal::new(1000, 0), fixing_year: 2025 };
/// let result = calculate_pension_revaluation(
///     &claim,
///     ReferenceTables::statutory(),
///     &EngineSettings::default(),
/// ).unwrap();
/// assert_eq!(result.rows.len(), 1);
/// assert_eq!(result.final_value, Decimal::new(1000, 0));
/// ```
pub fn calculate_pension_revaluation(
    claim: &PensionRevaluationClaim,
    tables: &ReferenceTables,
    settings: &EngineSettings,
) -> EngineResult<RevaluationResult> {
    ensure_positive("initial_value", claim.initial_value)?;

    let first_year = settings.revaluation_first_year;
    let reference_year = settings.reference_year;
    if claim.fixing_year < first_year || claim.fixing_year > reference_year {
        return Err(EngineError::invalid(
            "fixing_year",
            format!("must be between {} and {}", first_year, reference_year),
        ));
    }

    let mut rows = vec![RevaluationRow {
        year: claim.fixing_year,
        coefficient: None,
        value: claim.initial_value,
    }];
    let mut audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "pension_fixation".to_string(),
        rule_name: "Pension Fixation".to_string(),
        clause_ref: REVALUATION_CLAUSE.to_string(),
        input: serde_json::json!({
            "initial_value": claim.initial_value.normalize().to_string(),
            "fixing_year": claim.fixing_year
        }),
        output: serde_json::json!({
            "value": claim.initial_value.normalize().to_string()
        }),
        reasoning: format!(
            "Pension fixed at €{} in {}",
            claim.initial_value.normalize(),
            claim.fixing_year
        ),
    }];

    let mut value = claim.initial_value;
    for year in (claim.fixing_year + 1)..=reference_year {
        let published = tables.revaluation_coefficient(year);
        let coefficient = published.unwrap_or(Decimal::ZERO);
        let previous = value;
        value = previous
            .checked_mul(Decimal::ONE + fraction(coefficient))
            .ok_or_else(|| {
                EngineError::invalid(
                    "initial_value",
                    format!("revalued amount overflows in {}", year),
                )
            })?;

        debug!(year, %coefficient, %value, "pension revalued");

        audit_steps.push(AuditStep {
            step_number: audit_steps.len() as u32 + 1,
            rule_id: "annual_revaluation".to_string(),
            rule_name: "Annual Pension Revaluation".to_string(),
            clause_ref: REVALUATION_CLAUSE.to_string(),
            input: serde_json::json!({
                "year": year,
                "previous_value": previous.normalize().to_string(),
                "coefficient": coefficient.normalize().to_string(),
                "published": published.is_some()
            }),
            output: serde_json::json!({
                "value": value.normalize().to_string()
            }),
            reasoning: match published {
                Some(_) => format!(
                    "{}: €{} × (1 + {}%) = €{}",
                    year,
                    previous.normalize(),
                    coefficient.normalize(),
                    value.normalize()
                ),
                None => format!("{}: no coefficient published, value unchanged", year),
            },
        });

        rows.push(RevaluationRow {
            year,
            coefficient: Some(coefficient),
            value,
        });
    }

    Ok(RevaluationResult {
        rows,
        final_value: value,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn settings(reference_year: i32) -> EngineSettings {
        EngineSettings {
            reference_year,
            revaluation_first_year: 1999,
        }
    }

    fn claim(value: &str, year: i32) -> PensionRevaluationClaim {
        PensionRevaluationClaim {
            initial_value: dec(value),
            fixing_year: year,
        }
    }

    #[test]
    fn test_compounds_year_over_year() {
        let tables = ReferenceTables::statutory().clone().with_revaluation_coefficients(
            BTreeMap::from([(2021, dec("1.0")), (2023, dec("2.0"))]),
        );
        let result =
            calculate_pension_revaluation(&claim("1000", 2020), &tables, &settings(2023)).unwrap();

        let values: Vec<Decimal> = result.rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![dec("1000"), dec("1010"), dec("1010"), dec("1030.2")]);
        assert_eq!(result.rows[0].coefficient, None);
        assert_eq!(result.rows[2].coefficient, Some(Decimal::ZERO));
        assert_eq!(result.final_value, dec("1030.2"));
        assert_eq!(result.audit_steps.len(), 4);
    }

    #[test]
    fn test_fixing_in_reference_year_yields_single_row() {
        let result = calculate_pension_revaluation(
            &claim("750", 2025),
            ReferenceTables::statutory(),
            &settings(2025),
        )
        .unwrap();
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.final_value, dec("750"));
    }

    #[test]
    fn test_full_range_from_first_year() {
        let result = calculate_pension_revaluation(
            &claim("1000", 1999),
            ReferenceTables::statutory(),
            &settings(2025),
        )
        .unwrap();
        assert_eq!(result.rows.len(), 27);
        assert_eq!(result.rows.last().unwrap().year, 2025);
        assert!(result.final_value > dec("1000"));
    }

    #[test]
    fn test_fixing_year_out_of_range() {
        for year in [1998, 2026] {
            let result = calculate_pension_revaluation(
                &claim("1000", year),
                ReferenceTables::statutory(),
                &settings(2025),
            );
            assert!(matches!(
                result,
                Err(EngineError::InvalidInput { field, .. }) if field == "fixing_year"
            ));
        }
    }

    #[test]
    fn test_non_positive_initial_value() {
        let result = calculate_pension_revaluation(
            &claim("0", 2020),
            ReferenceTables::statutory(),
            &settings(2025),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "initial_value"
        ));
    }

    #[test]
    fn test_initial_value_above_ceiling() {
        let result = calculate_pension_revaluation(
            &claim("50000000000000000000000000000", 2020),
            ReferenceTables::statutory(),
            &settings(2025),
        );
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "initial_value"
        ));
    }

    #[test]
    fn test_overflowing_coefficient_is_an_error() {
        let tables = ReferenceTables::statutory().clone().with_revaluation_coefficients(
            BTreeMap::from([(2021, dec("100000000000000000000"))]),
        );
        let result =
            calculate_pension_revaluation(&claim("1000000000000", 2020), &tables, &settings(2021));
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field, .. }) if field == "initial_value"
        ));
    }

    proptest! {
        #[test]
        fn prop_each_row_compounds_previous(value in 1u32..100_000, year in 1999i32..=2025) {
            let tables = ReferenceTables::statutory();
            let result = calculate_pension_revaluation(
                &claim(&value.to_string(), year),
                tables,
                &settings(2025),
            ).unwrap();
            prop_assert_eq!(result.rows.len() as i32, 2025 - year + 1);
            for pair in result.rows.windows(2) {
                let coefficient = tables.revaluation_coefficient(pair[1].year).unwrap_or_default();
                prop_assert_eq!(pair[1].value, pair[0].value * (Decimal::ONE + coefficient / dec("100")));
                prop_assert!(pair[1].value >= pair[0].value);
            }
        }
    }
}
