//! Temporary incapacity indemnity over multiple periods.
//!
//! This module computes the daily indemnities for absolute (ITA) and partial
//! (ITP) temporary incapacity under Art. 48.º, n.º 3, al. d) and e) NLAT.
//!
//! ## Absolute incapacity tiering
//!
//! An absolute period is paid at 70% of the daily remuneration for its first
//! 365 days and at 75% for every day beyond that. The tier boundary is
//! applied per period, not across the whole claim.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, IncapacityType, Period, PeriodResult, TemporaryIncapacityClaim,
    TemporaryIncapacityResult,
};

use super::dates::DAYS_PER_YEAR;
use super::validation::{ensure_percentage, ensure_positive, fraction, require};

/// Indemnity rate for the first 365 days of absolute incapacity, and for
/// partial incapacity.
pub const TEMPORARY_BASE_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
/// Indemnity rate for absolute incapacity beyond 365 days.
pub const TEMPORARY_EXTENDED_RATE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);
/// Number of days paid at the base rate before the extended rate applies.
pub const EXTENDED_RATE_THRESHOLD_DAYS: i64 = 365;

/// A period's incapacity once its fields have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CheckedIncapacity {
    /// Absolute incapacity.
    Absolute,
    /// Partial incapacity with its validated percentage.
    Partial {
        /// Incapacity percentage in (0, 100].
        percentage: Decimal,
    },
}

/// Rejects a period whose end is not after its start.
pub(crate) fn ensure_period_order(
    index: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> EngineResult<()> {
    if end_date <= start_date {
        return Err(EngineError::invalid(
            format!("periods[{}].end_date", index),
            "must be after the start date",
        ));
    }
    Ok(())
}

/// Checks one period: date order first, then the percentage of a partial
/// period.
pub(crate) fn check_period(index: usize, period: &Period) -> EngineResult<CheckedIncapacity> {
    ensure_period_order(index, period.start_date, period.end_date)?;
    match period.incapacity_type {
        IncapacityType::Absolute => Ok(CheckedIncapacity::Absolute),
        IncapacityType::Partial => {
            let field = format!("periods[{}].incapacity_percentage", index);
            let percentage = require(&field, period.incapacity_percentage)?;
            ensure_percentage(&field, percentage)?;
            Ok(CheckedIncapacity::Partial { percentage })
        }
    }
}

/// Checks every period in order, failing on the first invalid one.
fn check_periods(periods: &[Period]) -> EngineResult<Vec<CheckedIncapacity>> {
    if periods.is_empty() {
        return Err(EngineError::missing("periods"));
    }
    periods
        .iter()
        .enumerate()
        .map(|(index, period)| check_period(index, period))
        .collect()
}

/// Computes the indemnity for an absolute period of `days` days.
pub fn absolute_period_compensation(days: i64, daily_remuneration: Decimal) -> Decimal {
    let base_days = days.min(EXTENDED_RATE_THRESHOLD_DAYS);
    let extended_days = (days - EXTENDED_RATE_THRESHOLD_DAYS).max(0);

    Decimal::from(base_days) * daily_remuneration * TEMPORARY_BASE_RATE
        + Decimal::from(extended_days) * daily_remuneration * TEMPORARY_EXTENDED_RATE
}

/// Computes the indemnity for a partial period of `days` days.
pub fn partial_period_compensation(
    days: i64,
    daily_remuneration: Decimal,
    percentage: Decimal,
) -> Decimal {
    daily_remuneration * fraction(percentage) * TEMPORARY_BASE_RATE * Decimal::from(days)
}

/// Calculates the indemnities for every period of a temporary incapacity
/// claim.
///
/// # Errors
///
/// - `MissingField` when there are no periods, or a partial period lacks its
///   percentage
/// - `InvalidInput` for a non-positive remuneration, a period whose end is
///   not after its start, or a percentage outside (0, 100]
///
/// Field names in errors identify the offending period, for example
/// `periods[1].end_date`.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::calculate_temporary_incapacity;
/// use nlat_engine::models::{IncapacityType, Period, TemporaryIncapacityClaim};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let claim = TemporaryIncapacityClaim {
///     worker_name: "Pedro Alves".to_string(),
///     annual_remuneration: Decimal::new(36500, 0),
///     periods: vec![Period {
///         start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///         incapacity_type: IncapacityType::Absolute,
///         incapacity_percentage: None,
///     }],
/// };
/// let result = calculate_temporary_incapacity(&claim).unwrap();
/// // 10 days × €100 × 0.70
/// assert_eq!(result.total_compensation, Decimal::new(700, 0));
/// ```
pub fn calculate_temporary_incapacity(
    claim: &TemporaryIncapacityClaim,
) -> EngineResult<TemporaryIncapacityResult> {
    ensure_positive("annual_remuneration", claim.annual_remuneration)?;
    let checked = check_periods(&claim.periods)?;

    let daily_remuneration = claim.annual_remuneration / Decimal::from(DAYS_PER_YEAR);
    let mut audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "daily_remuneration".to_string(),
        rule_name: "Daily Remuneration".to_string(),
        clause_ref: "Art. 48.º, n.º 3, al. d) NLAT".to_string(),
        input: serde_json::json!({
            "annual_remuneration": claim.annual_remuneration.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_remuneration": daily_remuneration.normalize().to_string()
        }),
        reasoning: format!(
            "Daily remuneration: €{} / {} = €{}",
            claim.annual_remuneration.normalize(),
            DAYS_PER_YEAR,
            daily_remuneration.normalize()
        ),
    }];

    let mut periods = Vec::with_capacity(claim.periods.len());
    let mut total_compensation = Decimal::ZERO;
    let mut total_days = 0i64;

    for (index, (period, incapacity)) in claim.periods.iter().zip(checked).enumerate() {
        let days = period.inclusive_days();
        let step_number = audit_steps.len() as u32 + 1;

        let (compensation, step) = match incapacity {
            CheckedIncapacity::Absolute => {
                let compensation = absolute_period_compensation(days, daily_remuneration);
                let extended_days = (days - EXTENDED_RATE_THRESHOLD_DAYS).max(0);
                let step = AuditStep {
                    step_number,
                    rule_id: "absolute_temporary_indemnity".to_string(),
                    rule_name: "Absolute Temporary Incapacity Indemnity".to_string(),
                    clause_ref: "Art. 48.º, n.º 3, al. d) NLAT".to_string(),
                    input: serde_json::json!({
                        "period": index,
                        "start_date": period.start_date.to_string(),
                        "end_date": period.end_date.to_string(),
                        "days": days
                    }),
                    output: serde_json::json!({
                        "base_rate_days": days - extended_days,
                        "extended_rate_days": extended_days,
                        "compensation": compensation.normalize().to_string()
                    }),
                    reasoning: if extended_days > 0 {
                        format!(
                            "ITA period {}: {} days at {} and {} days at {} = €{}",
                            index + 1,
                            EXTENDED_RATE_THRESHOLD_DAYS,
                            TEMPORARY_BASE_RATE.normalize(),
                            extended_days,
                            TEMPORARY_EXTENDED_RATE.normalize(),
                            compensation.normalize()
                        )
                    } else {
                        format!(
                            "ITA period {}: {} days × €{} × {} = €{}",
                            index + 1,
                            days,
                            daily_remuneration.normalize(),
                            TEMPORARY_BASE_RATE.normalize(),
                            compensation.normalize()
                        )
                    },
                };
                (compensation, step)
            }
            CheckedIncapacity::Partial { percentage } => {
                let compensation =
                    partial_period_compensation(days, daily_remuneration, percentage);
                let step = AuditStep {
                    step_number,
                    rule_id: "partial_temporary_indemnity".to_string(),
                    rule_name: "Partial Temporary Incapacity Indemnity".to_string(),
                    clause_ref: "Art. 48.º, n.º 3, al. e) NLAT".to_string(),
                    input: serde_json::json!({
                        "period": index,
                        "start_date": period.start_date.to_string(),
                        "end_date": period.end_date.to_string(),
                        "days": days,
                        "incapacity_percentage": percentage.normalize().to_string()
                    }),
                    output: serde_json::json!({
                        "compensation": compensation.normalize().to_string()
                    }),
                    reasoning: format!(
                        "ITP period {}: {} days × €{} × {}% × {} = €{}",
                        index + 1,
                        days,
                        daily_remuneration.normalize(),
                        percentage.normalize(),
                        TEMPORARY_BASE_RATE.normalize(),
                        compensation.normalize()
                    ),
                };
                (compensation, step)
            }
        };

        debug!(
            period = index,
            incapacity_type = period.incapacity_type.as_str(),
            days,
            %compensation,
            "temporary incapacity period computed"
        );

        audit_steps.push(step);
        total_compensation += compensation;
        total_days += days;
        periods.push(PeriodResult {
            index,
            start_date: period.start_date,
            end_date: period.end_date,
            incapacity_type: period.incapacity_type,
            days,
            compensation,
        });
    }

    audit_steps.push(AuditStep {
        step_number: audit_steps.len() as u32 + 1,
        rule_id: "temporary_indemnity_total".to_string(),
        rule_name: "Total Temporary Incapacity Indemnity".to_string(),
        clause_ref: "Art. 48.º, n.º 3 NLAT".to_string(),
        input: serde_json::json!({
            "periods": periods.len()
        }),
        output: serde_json::json!({
            "total_days": total_days,
            "total_compensation": total_compensation.normalize().to_string()
        }),
        reasoning: format!(
            "{} periods totalling {} days: €{}",
            periods.len(),
            total_days,
            total_compensation.normalize()
        ),
    });

    Ok(TemporaryIncapacityResult {
        daily_remuneration,
        total_compensation,
        total_days,
        periods,
        audit_steps,
    })
}
