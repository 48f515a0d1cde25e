//! Fatal accident claim and beneficiary models.
//!
//! A fatal accident gives rise to survivor pensions for a set of statutory
//! beneficiaries (Arts. 59.º to 61.º NLAT). Children and ascendants are each
//! treated as a single aggregate beneficiary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The surviving spouse's situation, which fixes their statutory share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpouseScenario {
    /// Under retirement age (30%).
    #[default]
    UnderRetirement,
    /// At or over retirement age, or affected by a disability (40%).
    OverRetirement,
}

/// How the ascendants stand relative to other beneficiaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AscendantScenario {
    /// Concurrent with a spouse or children: 10% each, up to 30%.
    #[default]
    Concurrent,
    /// Sole beneficiaries, under retirement age: 15% each, up to 80%.
    AloneUnderRetirement,
    /// Sole beneficiaries, over retirement age: 20% each, up to 80%.
    AloneOverRetirement,
}

/// The input record for the fatal accident calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FatalAccidentClaim {
    /// The deceased worker's name (display only).
    pub deceased_name: String,
    /// Annual gross remuneration of the deceased, in euros.
    pub annual_remuneration: Decimal,
    /// Year of death; selects the IAS.
    pub year_of_death: i32,
    /// Employer's aggravated responsibility lifts the pension pool to 100%.
    #[serde(default)]
    pub aggravated_responsibility: bool,
    /// The surviving spouse, if any.
    #[serde(default)]
    pub spouse: Option<SpouseScenario>,
    /// Court-fixed alimony owed to an ex-spouse, if there is one.
    #[serde(default)]
    pub ex_spouse_alimony: Option<Decimal>,
    /// Number of children and stepchildren entitled to a pension.
    #[serde(default)]
    pub children_count: u32,
    /// Whether the children have lost both parents.
    #[serde(default)]
    pub double_orphan: bool,
    /// Number of ascendants entitled to a pension.
    #[serde(default)]
    pub ascendants_count: u32,
    /// Ascendants' situation relative to other beneficiaries.
    #[serde(default)]
    pub ascendants_scenario: AscendantScenario,
    /// Funeral expenses claimed, in euros.
    #[serde(default)]
    pub funeral_expenses: Decimal,
    /// Whether the body had to be translated or repatriated.
    #[serde(default)]
    pub body_translation: bool,
}

/// The category of a survivor-pension beneficiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeneficiaryKind {
    /// Spouse or de facto partner.
    Spouse,
    /// Former spouse entitled to alimony.
    ExSpouse,
    /// All children and stepchildren, as one aggregate.
    Children,
    /// All ascendants, as one aggregate.
    Ascendants,
}

/// A beneficiary and the annual pension computed for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beneficiary {
    /// The beneficiary category.
    pub kind: BeneficiaryKind,
    /// A human-readable label (e.g. "Filhos (2)").
    pub label: String,
    /// Number of people aggregated in this entry.
    pub count: u32,
    /// Nominal statutory share of remuneration, as a fraction (0.30 = 30%).
    pub statutory_share: Decimal,
    /// The computed annual pension.
    pub annual_pension: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_claim_uses_defaults() {
        let json = r#"{
            "deceased_name": "João Costa",
            "annual_remuneration": "20000",
            "year_of_death": 2024
        }"#;
        let claim: FatalAccidentClaim = serde_json::from_str(json).unwrap();
        assert!(!claim.aggravated_responsibility);
        assert_eq!(claim.spouse, None);
        assert_eq!(claim.children_count, 0);
        assert_eq!(claim.ascendants_scenario, AscendantScenario::Concurrent);
        assert_eq!(claim.funeral_expenses, Decimal::ZERO);
    }

    #[test]
    fn test_scenario_serialization() {
        assert_eq!(
            serde_json::to_string(&AscendantScenario::AloneOverRetirement).unwrap(),
            "\"alone_over_retirement\""
        );
        assert_eq!(
            serde_json::to_string(&SpouseScenario::UnderRetirement).unwrap(),
            "\"under_retirement\""
        );
        assert_eq!(
            serde_json::to_string(&BeneficiaryKind::ExSpouse).unwrap(),
            "\"ex_spouse\""
        );
    }
}
