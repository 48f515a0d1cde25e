//! Absolute permanent incapacity for habitual work (IPATH).
//!
//! Under Art. 48.º, n.º 3, al. b) NLAT the pension lies between 50% and 70%
//! of the remuneration, scaled by the residual functional capacity loss for
//! other work.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AuditStep, PensionResult, WorkerClaim};
use crate::tables::ReferenceTables;

use super::permanent::{settle_pension, validate_worker_claim};
use super::validation::{ensure_percentage, fraction, require};

/// Lower bound of the pension as a share of remuneration.
pub const HABITUAL_BASE_FACTOR: Decimal = Decimal::from_parts(50, 0, 0, false, 2);
/// Upper bound of the pension as a share of remuneration.
pub const HABITUAL_CEILING_FACTOR: Decimal = Decimal::from_parts(70, 0, 0, false, 2);

/// Calculates the pension, redemption capital and accrued amount for an
/// absolute permanent incapacity for habitual work.
///
/// `annual_pension = 0.50R + (0.70R − 0.50R) × p/100`
///
/// # Errors
///
/// Same as [`calculate_partial_permanent`](super::calculate_partial_permanent).
pub fn calculate_absolute_permanent_habitual(
    claim: &WorkerClaim,
    tables: &ReferenceTables,
    today: NaiveDate,
) -> EngineResult<PensionResult> {
    let percentage = require("incapacity_percentage", claim.incapacity_percentage)?;
    validate_worker_claim(claim)?;
    ensure_percentage("incapacity_percentage", percentage)?;

    let remuneration = claim.annual_remuneration;
    let base = remuneration * HABITUAL_BASE_FACTOR;
    let ceiling = remuneration * HABITUAL_CEILING_FACTOR;
    let annual_pension = base + (ceiling - base) * fraction(percentage);

    debug!(
        worker = %claim.worker_name,
        %annual_pension,
        "absolute habitual pension computed"
    );

    let pension_step = AuditStep {
        step_number: 1,
        rule_id: "absolute_habitual_pension".to_string(),
        rule_name: "Absolute Permanent Incapacity Pension (Habitual Work)".to_string(),
        clause_ref: "Art. 48.º, n.º 3, al. b) NLAT".to_string(),
        input: serde_json::json!({
            "annual_remuneration": remuneration.normalize().to_string(),
            "incapacity_percentage": percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "base": base.normalize().to_string(),
            "ceiling": ceiling.normalize().to_string(),
            "annual_pension": annual_pension.normalize().to_string()
        }),
        reasoning: format!(
            "IPATH pension: €{} + (€{} − €{}) × {}% = €{}",
            base.normalize(),
            ceiling.normalize(),
            base.normalize(),
            percentage.normalize(),
            annual_pension.normalize()
        ),
    };

    settle_pension(annual_pension, claim, tables, today, vec![pension_step])
}
