//! Settlement shared by the permanent-incapacity calculators.
//!
//! Once a calculator has fixed the annual pension, the remaining figures are
//! computed identically for all three permanent-incapacity regimes: the
//! redemption capital at the age nearest to the discharge date, and the
//! pension accrued since the day after discharge.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, PensionResult, WorkerClaim};
use crate::tables::ReferenceTables;

use super::dates::{age_for_rate, pension_due, pension_start_date};
use super::validation::{ensure_born_before, ensure_positive};

/// Clause governing the redemption coefficients.
pub const REDEMPTION_TABLE_CLAUSE: &str = "Portaria n.º 11/2000, de 13 de janeiro";

/// Checks the fields every permanent-incapacity claim must satisfy.
pub(crate) fn validate_worker_claim(claim: &WorkerClaim) -> EngineResult<()> {
    ensure_positive("annual_remuneration", claim.annual_remuneration)?;
    ensure_born_before(claim.birth_date, claim.discharge_date)
}

/// Completes a permanent-incapacity result from its annual pension.
///
/// `audit_steps` holds the steps already recorded by the calling calculator;
/// the redemption and accrual steps are appended after them.
pub(crate) fn settle_pension(
    annual_pension: Decimal,
    claim: &WorkerClaim,
    tables: &ReferenceTables,
    today: NaiveDate,
    mut audit_steps: Vec<AuditStep>,
) -> EngineResult<PensionResult> {
    let age = age_for_rate(claim.birth_date, claim.discharge_date);
    let redemption_rate = tables.redemption_rate(age.age_for_rate)?;
    let redemption_capital = annual_pension * redemption_rate;

    debug!(
        age_at_discharge = age.completed_age,
        age_for_rate = age.age_for_rate,
        %redemption_rate,
        "redemption rate selected"
    );

    let next_step = audit_steps.len() as u32 + 1;
    audit_steps.push(AuditStep {
        step_number: next_step,
        rule_id: "nearest_birthday_age".to_string(),
        rule_name: "Age at Nearest Birthday".to_string(),
        clause_ref: REDEMPTION_TABLE_CLAUSE.to_string(),
        input: serde_json::json!({
            "birth_date": claim.birth_date.to_string(),
            "discharge_date": claim.discharge_date.to_string()
        }),
        output: serde_json::json!({
            "completed_age": age.completed_age,
            "days_since_last_birthday": age.days_since_last_birthday,
            "days_to_next_birthday": age.days_to_next_birthday,
            "age_for_rate": age.age_for_rate
        }),
        reasoning: if age.rounded_up() {
            format!(
                "Next birthday is {} days away against {} since the last: age {} rounded up to {}",
                age.days_to_next_birthday,
                age.days_since_last_birthday,
                age.completed_age,
                age.age_for_rate
            )
        } else {
            format!(
                "Last birthday is not further than the next: age {} is used",
                age.completed_age
            )
        },
    });

    audit_steps.push(AuditStep {
        step_number: next_step + 1,
        rule_id: "redemption_capital".to_string(),
        rule_name: "Pension Redemption Capital".to_string(),
        clause_ref: format!("Art. 75.º NLAT; {}", REDEMPTION_TABLE_CLAUSE),
        input: serde_json::json!({
            "annual_pension": annual_pension.normalize().to_string(),
            "age_for_rate": age.age_for_rate
        }),
        output: serde_json::json!({
            "redemption_rate": redemption_rate.normalize().to_string(),
            "redemption_capital": redemption_capital.normalize().to_string()
        }),
        reasoning: format!(
            "Redemption capital: €{} × {} = €{}",
            annual_pension.normalize(),
            redemption_rate.normalize(),
            redemption_capital.normalize()
        ),
    });

    let start = pension_start_date(claim.discharge_date)?;
    let (days_due, amount_due) = pension_due(annual_pension, start, today);

    audit_steps.push(AuditStep {
        step_number: next_step + 2,
        rule_id: "pension_due".to_string(),
        rule_name: "Accrued Pension".to_string(),
        clause_ref: "Art. 50.º, n.º 2 NLAT".to_string(),
        input: serde_json::json!({
            "annual_pension": annual_pension.normalize().to_string(),
            "pension_start_date": start.to_string(),
            "evaluation_date": today.to_string()
        }),
        output: serde_json::json!({
            "days": days_due,
            "pension_due": amount_due.normalize().to_string()
        }),
        reasoning: if days_due == 0 {
            format!("Evaluation date precedes the pension start on {}: nothing accrued", start)
        } else {
            format!(
                "{} days from {} to {} at €{}/365 per day = €{}",
                days_due,
                start,
                today,
                annual_pension.normalize(),
                amount_due.normalize()
            )
        },
    });

    Ok(PensionResult {
        annual_pension,
        pension_due: amount_due,
        redemption_capital,
        pension_start_date: start,
        age_at_discharge: age.completed_age,
        age_for_rate: age.age_for_rate,
        redemption_rate,
        audit_steps,
    })
}
