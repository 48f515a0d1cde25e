//! Forms for the high-incapacity subsidy and pension revaluation.

use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_high_incapacity_subsidy, calculate_pension_revaluation};
use crate::error::EngineResult;
use crate::models::{
    CalculatorKind, HighIncapacityClaim, HighIncapacityScenario, HighIncapacitySubsidyResult,
    PensionRevaluationClaim, RevaluationResult,
};

use super::fields::{date, decimal, optional_decimal, require_filled, year};
use super::{CalculationContext, CalculatorForm};

/// Raw input for the high-incapacity subsidy calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighIncapacitySubsidyForm {
    /// Worker's name.
    pub worker_name: String,
    /// Accident date; its year selects the IAS.
    pub accident_date: String,
    /// Which subsidy scenario applies.
    pub scenario: HighIncapacityScenario,
    /// Fixed incapacity, for `partial_70`.
    pub incapacity_percentage: String,
    /// Residual functional capacity, for `absolute_habitual`.
    pub residual_capacity_percentage: String,
}

impl CalculatorForm for HighIncapacitySubsidyForm {
    type Output = HighIncapacitySubsidyResult;
    const KIND: CalculatorKind = CalculatorKind::HighIncapacitySubsidy;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<HighIncapacitySubsidyResult> {
        require_filled(&[
            ("worker_name", self.worker_name.as_str()),
            ("accident_date", self.accident_date.as_str()),
        ])?;
        let claim = HighIncapacityClaim {
            worker_name: self.worker_name.trim().to_string(),
            accident_date: date("accident_date", &self.accident_date)?,
            scenario: self.scenario,
            incapacity_percentage: optional_decimal(
                "incapacity_percentage",
                &self.incapacity_percentage,
            )?,
            residual_capacity_percentage: optional_decimal(
                "residual_capacity_percentage",
                &self.residual_capacity_percentage,
            )?,
        };
        calculate_high_incapacity_subsidy(&claim, ctx.tables)
    }
}

/// Raw input for the pension revaluation calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PensionRevaluationForm {
    /// Pension value at fixation.
    pub initial_value: String,
    /// Year the pension was fixed.
    pub fixing_year: String,
}

impl CalculatorForm for PensionRevaluationForm {
    type Output = RevaluationResult;
    const KIND: CalculatorKind = CalculatorKind::PensionRevaluation;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<RevaluationResult> {
        require_filled(&[
            ("initial_value", self.initial_value.as_str()),
            ("fixing_year", self.fixing_year.as_str()),
        ])?;
        let claim = PensionRevaluationClaim {
            initial_value: decimal("initial_value", &self.initial_value)?,
            fixing_year: year("fixing_year", &self.fixing_year)?,
        };
        calculate_pension_revaluation(&claim, ctx.tables, ctx.settings)
    }
}
