//! Claim models for the high-incapacity subsidy and pension revaluation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The incapacity situation that qualifies for the high-incapacity subsidy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighIncapacityScenario {
    /// Absolute permanent incapacity for any work.
    #[default]
    AbsoluteTotal,
    /// Absolute permanent incapacity for habitual work.
    AbsoluteHabitual,
    /// Partial permanent incapacity of 70% or more.
    #[serde(rename = "partial_70")]
    Partial70,
}

impl HighIncapacityScenario {
    /// Returns the serialized identifier of this scenario.
    pub fn as_str(self) -> &'static str {
        match self {
            HighIncapacityScenario::AbsoluteTotal => "absolute_total",
            HighIncapacityScenario::AbsoluteHabitual => "absolute_habitual",
            HighIncapacityScenario::Partial70 => "partial_70",
        }
    }
}

/// A claim for the high-incapacity subsidy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighIncapacityClaim {
    /// The injured worker's name (display only).
    pub worker_name: String,
    /// Date of the accident; only its year is used, to select the IAS.
    pub accident_date: NaiveDate,
    /// The qualifying scenario.
    pub scenario: HighIncapacityScenario,
    /// Fixed incapacity percentage, required for [`HighIncapacityScenario::Partial70`].
    #[serde(default)]
    pub incapacity_percentage: Option<Decimal>,
    /// Residual functional capacity, required for [`HighIncapacityScenario::AbsoluteHabitual`].
    #[serde(default)]
    pub residual_capacity_percentage: Option<Decimal>,
}

/// A pension to be revalued from its fixing year up to the reference year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionRevaluationClaim {
    /// Annual pension value at fixation, in euros.
    pub initial_value: Decimal,
    /// Year in which the pension was fixed.
    pub fixing_year: i32,
}
