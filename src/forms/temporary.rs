//! Form for the multi-period temporary incapacity calculator.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{calculate_temporary_incapacity, check_period, ensure_period_order};
use crate::error::EngineResult;
use crate::models::{
    CalculatorKind, IncapacityType, Period, TemporaryIncapacityClaim, TemporaryIncapacityResult,
};

use super::fields::{date, decimal, require_filled};
use super::{CalculationContext, CalculatorForm};

/// One period row of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodForm {
    /// First day of the period.
    pub start_date: String,
    /// Last day of the period.
    pub end_date: String,
    /// Absolute or partial.
    pub incapacity_type: IncapacityType,
    /// Incapacity percentage, required for partial periods.
    pub incapacity_percentage: String,
}

/// Raw input for the temporary incapacity calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporaryIncapacityForm {
    /// Worker's name.
    pub worker_name: String,
    /// Annual remuneration in euros.
    pub annual_remuneration: String,
    /// Incapacity periods, in order.
    pub periods: Vec<PeriodForm>,
}

impl TemporaryIncapacityForm {
    fn to_claim(&self) -> EngineResult<TemporaryIncapacityClaim> {
        require_filled(&[
            ("worker_name", self.worker_name.as_str()),
            ("annual_remuneration", self.annual_remuneration.as_str()),
        ])?;

        // Each row is fully checked before the next one is read, so the
        // first invalid period is the one reported.
        let mut periods = Vec::with_capacity(self.periods.len());
        for (index, row) in self.periods.iter().enumerate() {
            let start_field = format!("periods[{}].start_date", index);
            let end_field = format!("periods[{}].end_date", index);
            let percentage_field = format!("periods[{}].incapacity_percentage", index);

            require_filled(&[
                (start_field.as_str(), row.start_date.as_str()),
                (end_field.as_str(), row.end_date.as_str()),
            ])?;
            let start_date = date(&start_field, &row.start_date)?;
            let end_date = date(&end_field, &row.end_date)?;
            ensure_period_order(index, start_date, end_date)
                .inspect_err(|e| warn!(period = index, error = %e, "period rejected"))?;

            let incapacity_percentage = match row.incapacity_type {
                IncapacityType::Partial => {
                    require_filled(&[(
                        percentage_field.as_str(),
                        row.incapacity_percentage.as_str(),
                    )])?;
                    Some(decimal(&percentage_field, &row.incapacity_percentage)?)
                }
                IncapacityType::Absolute => None,
            };
            let period = Period {
                start_date,
                end_date,
                incapacity_type: row.incapacity_type,
                incapacity_percentage,
            };
            check_period(index, &period)
                .inspect_err(|e| warn!(period = index, error = %e, "period rejected"))?;
            periods.push(period);
        }

        Ok(TemporaryIncapacityClaim {
            worker_name: self.worker_name.trim().to_string(),
            annual_remuneration: decimal("annual_remuneration", &self.annual_remuneration)?,
            periods,
        })
    }
}

impl CalculatorForm for TemporaryIncapacityForm {
    type Output = TemporaryIncapacityResult;
    const KIND: CalculatorKind = CalculatorKind::TemporaryIncapacity;

    fn calculate(&self, _ctx: &CalculationContext<'_>) -> EngineResult<TemporaryIncapacityResult> {
        calculate_temporary_incapacity(&self.to_claim()?)
    }
}
