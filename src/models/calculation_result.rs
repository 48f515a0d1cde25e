//! Calculation result models for the compensation engine.
//!
//! Each calculator returns its own result record. All of them carry the
//! ordered [`AuditStep`]s that explain which statutory rules were applied.
//! Amounts are kept at full precision; rounding to cents happens only when
//! they are formatted for display.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Beneficiary, CalculatorKind, HighIncapacityScenario, IncapacityType};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statutory provision for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The result of a permanent-incapacity pension calculation.
///
/// Shared by the partial, absolute-total and absolute-habitual calculators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionResult {
    /// The annual pension.
    pub annual_pension: Decimal,
    /// Pension accrued from the start date up to the evaluation date.
    pub pension_due: Decimal,
    /// Lump-sum capital that redeems the pension.
    pub redemption_capital: Decimal,
    /// First day of entitlement (the day after discharge).
    pub pension_start_date: NaiveDate,
    /// Age in completed years at discharge.
    pub age_at_discharge: u32,
    /// Age used for the redemption table after nearest-birthday rounding.
    pub age_for_rate: u32,
    /// Redemption coefficient applied.
    pub redemption_rate: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Per-period detail of a temporary incapacity calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    /// Zero-based position of the period in the claim.
    pub index: usize,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
    /// Absolute or partial incapacity.
    pub incapacity_type: IncapacityType,
    /// Inclusive day count.
    pub days: i64,
    /// Indemnity for the period.
    pub compensation: Decimal,
}

/// The result of a temporary incapacity calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryIncapacityResult {
    /// Annual remuneration divided by 365.
    pub daily_remuneration: Decimal,
    /// Sum of all period indemnities.
    pub total_compensation: Decimal,
    /// Sum of all period day counts.
    pub total_days: i64,
    /// Detail for each period, in input order.
    pub periods: Vec<PeriodResult>,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// The result of a high-incapacity subsidy calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighIncapacitySubsidyResult {
    /// The scenario that was computed.
    pub scenario: HighIncapacityScenario,
    /// Year used for the IAS lookup.
    pub ias_year: i32,
    /// IAS value for that year.
    pub ias_value: Decimal,
    /// The one-off subsidy.
    pub subsidy: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// One year of a pension revaluation sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevaluationRow {
    /// Calendar year.
    pub year: i32,
    /// Coefficient applied in this year, in percent; `None` on the fixation row.
    pub coefficient: Option<Decimal>,
    /// Pension value after this year's update.
    pub value: Decimal,
}

/// The result of a pension revaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevaluationResult {
    /// One row per year, starting with the fixation year.
    pub rows: Vec<RevaluationRow>,
    /// Value in the reference year.
    pub final_value: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// The result of a fatal accident calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatalAccidentResult {
    /// IAS value for the year of death.
    pub ias_value: Decimal,
    /// Beneficiaries with their computed pensions.
    pub beneficiaries: Vec<Beneficiary>,
    /// Sum of nominal statutory shares, before capping.
    pub total_statutory_share: Decimal,
    /// Total annual pension distributed among the non-ex-spouse beneficiaries.
    pub pension_pool: Decimal,
    /// Death subsidy (12 × 1.1 × IAS).
    pub death_subsidy: Decimal,
    /// Funeral expenses reimbursed, capped by the IAS limit.
    pub funeral_subsidy: Decimal,
    /// One-off redemption owed to the spouse on remarriage.
    pub spouse_remarriage_redemption: Decimal,
    /// Amount reverting to the guarantee fund when there are no beneficiaries.
    pub guarantee_fund_reversion: Decimal,
    /// The rules applied, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// The envelope returned for every successful calculation.
///
/// # Example
///
/// ```
/// use nlat_engine::models::{CalculationEnvelope, CalculatorKind};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let envelope = CalculationEnvelope {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     calculator: CalculatorKind::PensionRevaluation,
///     result: (),
/// };
/// assert_eq!(envelope.calculator.id(), "pension-revaluation");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationEnvelope<T> {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the result.
    pub engine_version: String,
    /// Which calculator produced the result.
    pub calculator: CalculatorKind,
    /// The calculator-specific result.
    pub result: T,
}
