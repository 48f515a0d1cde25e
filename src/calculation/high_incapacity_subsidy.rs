//! High-incapacity subsidy (Art. 67.º NLAT).
//!
//! The subsidy is a one-off payment indexed to the IAS (Indexante de Apoios
//! Sociais) of the accident year.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, HighIncapacityClaim, HighIncapacityScenario, HighIncapacitySubsidyResult,
};
use crate::tables::ReferenceTables;

use super::validation::{ensure_percentage_at_least, fraction, require};

/// Multiplier applied to the IAS to obtain the subsidy unit.
pub const IAS_MULTIPLIER: Decimal = Decimal::from_parts(11, 0, 0, false, 1);
/// Number of monthly units in a full subsidy.
pub const SUBSIDY_MONTHS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
/// Minimum incapacity for the partial scenario.
pub const PARTIAL_MINIMUM_PERCENTAGE: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

const HIGH_INCAPACITY_CLAUSE: &str = "Art. 67.º NLAT";

/// Calculates the high-incapacity subsidy.
///
/// - `absolute_total`: `12 × 1.1 × IAS`
/// - `partial_70`: `(IAS × 12) × p/100 × 1.1`, with p in [70, 100]
/// - `absolute_habitual`: requires the residual capacity percentage, then
///   reports `NotImplemented`
///
/// The IAS year is checked before the scenario inputs.
///
/// # Errors
///
/// - `UnsupportedYear` when the accident year has no IAS value
/// - `MissingField` for an absent percentage required by the scenario
/// - `InvalidInput` for a percentage outside its range
/// - `NotImplemented` for the `absolute_habitual` scenario
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::calculate_high_incapacity_subsidy;
/// use nlat_engine::models::{HighIncapacityClaim, HighIncapacityScenario};
/// use nlat_engine::tables::ReferenceTables;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let claim = HighIncapacityClaim {
///     worker_name: "Luís Rocha".to_string(),
///     accident_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     scenario: HighIncapacityScenario::AbsoluteTotal,
///     incapacity_percentage: None,
///     residual_capacity_percentage: None,
/// };
/// let result = calculate_high_incapacity_subsidy(&claim, ReferenceTables::statutory()).unwrap();
/// // 12 × 1.1 × 509.26
/// assert_eq!(result.subsidy, Decimal::new(6722232, 3));
/// ```
pub fn calculate_high_incapacity_subsidy(
    claim: &HighIncapacityClaim,
    tables: &ReferenceTables,
) -> EngineResult<HighIncapacitySubsidyResult> {
    let ias_year = claim.accident_date.year();
    let ias_value = tables.ias(ias_year)?;

    let percentage = match claim.scenario {
        HighIncapacityScenario::AbsoluteTotal => None,
        HighIncapacityScenario::Partial70 => {
            let percentage = require("incapacity_percentage", claim.incapacity_percentage)?;
            Some(ensure_percentage_at_least(
                "incapacity_percentage",
                percentage,
                PARTIAL_MINIMUM_PERCENTAGE,
            )?)
        }
        HighIncapacityScenario::AbsoluteHabitual => {
            require(
                "residual_capacity_percentage",
                claim.residual_capacity_percentage,
            )?;
            debug!(
                worker = %claim.worker_name,
                "absolute habitual high-incapacity subsidy requested"
            );
            return Err(EngineError::NotImplemented {
                scenario: claim.scenario.as_str().to_string(),
            });
        }
    };

    let unit = IAS_MULTIPLIER * ias_value;

    let (subsidy, reasoning) = match percentage {
        None => {
            let subsidy = SUBSIDY_MONTHS * unit;
            (
                subsidy,
                format!(
                    "Absolute incapacity for any work: 12 × 1.1 × IAS {} (€{}) = €{}",
                    ias_year,
                    ias_value.normalize(),
                    subsidy.normalize()
                ),
            )
        }
        Some(percentage) => {
            let subsidy = ias_value * SUBSIDY_MONTHS * fraction(percentage) * IAS_MULTIPLIER;
            (
                subsidy,
                format!(
                    "Partial incapacity of {}%: €{} × 12 × {}% × 1.1 = €{}",
                    percentage.normalize(),
                    ias_value.normalize(),
                    percentage.normalize(),
                    subsidy.normalize()
                ),
            )
        }
    };

    debug!(
        worker = %claim.worker_name,
        scenario = claim.scenario.as_str(),
        ias_year,
        %subsidy,
        "high-incapacity subsidy computed"
    );

    let audit_steps = vec![
        AuditStep {
            step_number: 1,
            rule_id: "ias_lookup".to_string(),
            rule_name: "IAS Lookup".to_string(),
            clause_ref: HIGH_INCAPACITY_CLAUSE.to_string(),
            input: serde_json::json!({
                "accident_date": claim.accident_date.to_string(),
                "year": ias_year
            }),
            output: serde_json::json!({
                "ias": ias_value.normalize().to_string(),
                "unit": unit.normalize().to_string()
            }),
            reasoning: format!(
                "IAS for {} is €{}; subsidy unit 1.1 × IAS = €{}",
                ias_year,
                ias_value.normalize(),
                unit.normalize()
            ),
        },
        AuditStep {
            step_number: 2,
            rule_id: "high_incapacity_subsidy".to_string(),
            rule_name: "High-Incapacity Subsidy".to_string(),
            clause_ref: HIGH_INCAPACITY_CLAUSE.to_string(),
            input: serde_json::json!({
                "scenario": claim.scenario.as_str(),
                "incapacity_percentage": percentage.map(|p| p.normalize().to_string())
            }),
            output: serde_json::json!({
                "subsidy": subsidy.normalize().to_string()
            }),
            reasoning,
        },
    ];

    Ok(HighIncapacitySubsidyResult {
        scenario: claim.scenario,
        ias_year,
        ias_value,
        subsidy,
        audit_steps,
    })
}
