//! Form for the fatal accident calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_fatal_accident;
use crate::error::EngineResult;
use crate::models::{
    AscendantScenario, CalculatorKind, FatalAccidentClaim, FatalAccidentResult, SpouseScenario,
};

use super::fields::{count, decimal, optional_decimal, require_filled, year};
use super::{CalculationContext, CalculatorForm};

/// Raw input for the fatal accident calculator.
///
/// Blank counts mean zero and blank amounts (alimony, funeral expenses)
/// mean nothing was claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatalAccidentForm {
    /// Deceased worker's name.
    pub deceased_name: String,
    /// Annual remuneration in euros.
    pub annual_remuneration: String,
    /// Year of death; selects the IAS.
    pub year_of_death: String,
    /// Employer acted with aggravated responsibility.
    pub aggravated_responsibility: bool,
    /// A spouse or de facto partner survives.
    pub has_spouse: bool,
    /// The spouse's age bracket.
    pub spouse_scenario: SpouseScenario,
    /// An ex-spouse entitled to alimony survives.
    pub has_ex_spouse: bool,
    /// Annual alimony owed to the ex-spouse.
    pub ex_spouse_alimony: String,
    /// Number of children.
    pub children_count: String,
    /// Children are orphans of both parents.
    pub double_orphan: bool,
    /// Number of ascendants.
    pub ascendants_count: String,
    /// Ascendants' situation.
    pub ascendants_scenario: AscendantScenario,
    /// Funeral expenses incurred.
    pub funeral_expenses: String,
    /// The body was moved to another place for burial.
    pub body_translation: bool,
}

impl FatalAccidentForm {
    fn to_claim(&self) -> EngineResult<FatalAccidentClaim> {
        require_filled(&[
            ("annual_remuneration", self.annual_remuneration.as_str()),
            ("year_of_death", self.year_of_death.as_str()),
        ])?;

        let ex_spouse_alimony = if self.has_ex_spouse {
            Some(optional_decimal("ex_spouse_alimony", &self.ex_spouse_alimony)?.unwrap_or_default())
        } else {
            None
        };

        Ok(FatalAccidentClaim {
            deceased_name: self.deceased_name.trim().to_string(),
            annual_remuneration: decimal("annual_remuneration", &self.annual_remuneration)?,
            year_of_death: year("year_of_death", &self.year_of_death)?,
            aggravated_responsibility: self.aggravated_responsibility,
            spouse: self.has_spouse.then_some(self.spouse_scenario),
            ex_spouse_alimony,
            children_count: count("children_count", &self.children_count)?,
            double_orphan: self.double_orphan,
            ascendants_count: count("ascendants_count", &self.ascendants_count)?,
            ascendants_scenario: self.ascendants_scenario,
            funeral_expenses: optional_decimal("funeral_expenses", &self.funeral_expenses)?
                .unwrap_or(Decimal::ZERO),
            body_translation: self.body_translation,
        })
    }
}

impl CalculatorForm for FatalAccidentForm {
    type Output = FatalAccidentResult;
    const KIND: CalculatorKind = CalculatorKind::FatalAccident;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<FatalAccidentResult> {
        calculate_fatal_accident(&self.to_claim()?, ctx.tables, ctx.settings)
    }
}
