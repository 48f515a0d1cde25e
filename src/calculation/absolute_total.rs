//! Absolute permanent incapacity for any work (IPATQT).
//!
//! The annual pension is a share of the full remuneration that depends on
//! the number of dependents (Art. 48.º, n.º 3, al. a) NLAT).

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, Dependents, PensionResult, WorkerClaim};
use crate::tables::ReferenceTables;

use super::permanent::{settle_pension, validate_worker_claim};

/// Calculates the pension, redemption capital and accrued amount for an
/// absolute permanent incapacity for any work.
///
/// The incapacity percentage on the claim is ignored: the pension factor is
/// 80% with no dependents, 90% with one and 100% with two or more.
///
/// # Errors
///
/// - `InvalidInput` for a non-positive remuneration or a birth date not
///   before the discharge date
/// - `RateNotFound` when the age has no redemption coefficient
pub fn calculate_absolute_permanent_total(
    claim: &WorkerClaim,
    dependents: Dependents,
    tables: &ReferenceTables,
    today: NaiveDate,
) -> EngineResult<PensionResult> {
    validate_worker_claim(claim)?;

    let factor = dependents.pension_factor();
    let annual_pension = claim.annual_remuneration * factor;

    debug!(
        worker = %claim.worker_name,
        dependents = dependents.as_str(),
        %annual_pension,
        "absolute total pension computed"
    );

    let pension_step = AuditStep {
        step_number: 1,
        rule_id: "absolute_total_pension".to_string(),
        rule_name: "Absolute Permanent Incapacity Pension (Any Work)".to_string(),
        clause_ref: "Art. 48.º, n.º 3, al. a) NLAT".to_string(),
        input: serde_json::json!({
            "annual_remuneration": claim.annual_remuneration.normalize().to_string(),
            "dependents": dependents.as_str()
        }),
        output: serde_json::json!({
            "factor": factor.normalize().to_string(),
            "annual_pension": annual_pension.normalize().to_string()
        }),
        reasoning: format!(
            "IPATQT pension with {} dependents: €{} × {} = €{}",
            dependents.as_str(),
            claim.annual_remuneration.normalize(),
            factor.normalize(),
            annual_pension.normalize()
        ),
    };

    settle_pension(annual_pension, claim, tables, today, vec![pension_step])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn create_claim(remuneration: &str) -> WorkerClaim {
        WorkerClaim {
            worker_name: "Rui Santos".to_string(),
            annual_remuneration: dec(remuneration),
            incapacity_percentage: None,
            discharge_date: date("2023-09-30"),
            birth_date: date("1975-02-14"),
        }
    }

    fn calculate(remuneration: &str, dependents: Dependents) -> PensionResult {
        calculate_absolute_permanent_total(
            &create_claim(remuneration),
            dependents,
            ReferenceTables::statutory(),
            date("2025-01-01"),
        )
        .unwrap()
    }

    #[test]
    fn test_no_dependents_is_80_percent() {
        assert_eq!(calculate("20000", Dependents::None).annual_pension, dec("16000"));
    }

    #[test]
    fn test_one_dependent_is_90_percent() {
        assert_eq!(calculate("20000", Dependents::One).annual_pension, dec("18000"));
    }

    #[test]
    fn test_two_or_more_dependents_is_full_remuneration() {
        assert_eq!(
            calculate("20000", Dependents::TwoOrMore).annual_pension,
            dec("20000")
        );
    }

    #[test]
    fn test_percentage_is_not_required() {
        let mut claim = create_claim("20000");
        claim.incapacity_percentage = Some(dec("5"));
        let result = calculate_absolute_permanent_total(
            &claim,
            Dependents::None,
            ReferenceTables::statutory(),
            date("2025-01-01"),
        )
        .unwrap();
        assert_eq!(result.annual_pension, dec("16000"));
        assert_eq!(result.audit_steps[0].clause_ref, "Art. 48.º, n.º 3, al. a) NLAT");
    }

    #[test]
    fn test_rejects_zero_remuneration() {
        let result = calculate_absolute_permanent_total(
            &create_claim("0"),
            Dependents::One,
            ReferenceTables::statutory(),
            date("2025-01-01"),
        );
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_pension_factor_is_one_of_three(remuneration in 1u32..1_000_000, choice in 0usize..3) {
            let dependents = [Dependents::None, Dependents::One, Dependents::TwoOrMore][choice];
            let result = calculate_absolute_permanent_total(
                &create_claim(&remuneration.to_string()),
                dependents,
                ReferenceTables::statutory(),
                date("2025-01-01"),
            ).unwrap();
            let factor = result.annual_pension / Decimal::from(remuneration);
            prop_assert!([dec("0.80"), dec("0.90"), dec("1")].contains(&factor));
        }
    }
}
