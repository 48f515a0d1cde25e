//! Fatal accident survivor pensions and subsidies.
//!
//! This module implements Arts. 59.º to 66.º NLAT:
//! - statutory shares for the spouse, ex-spouse, children and ascendants,
//! - the pension pool, capped at 80% of remuneration unless responsibility
//!   is aggravated, and its pro-rata distribution,
//! - the death subsidy and the funeral expenses subsidy,
//! - the spouse remarriage redemption,
//! - the reversion to the guarantee fund (FAT) when nobody is entitled.
//!
//! The ex-spouse's nominal 30% counts towards the total used for the
//! distribution, but the ex-spouse is paid the alimony amount (capped at 30%
//! of remuneration) rather than a share of the pool.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AscendantScenario, AuditStep, Beneficiary, BeneficiaryKind, FatalAccidentClaim,
    FatalAccidentResult, SpouseScenario,
};
use crate::tables::ReferenceTables;

use super::validation::{ensure_non_negative, ensure_positive};

const fn pct(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 2)
}

/// Spouse share below retirement age.
pub const SPOUSE_SHARE_UNDER_RETIREMENT: Decimal = pct(30);
/// Spouse share at or above retirement age.
pub const SPOUSE_SHARE_OVER_RETIREMENT: Decimal = pct(40);
/// Nominal ex-spouse share, also the cap on the alimony paid.
pub const EX_SPOUSE_SHARE: Decimal = pct(30);
/// Ceiling for the children's share and for the overall pool.
pub const SURVIVOR_CAP: Decimal = pct(80);
/// Ceiling for ascendants concurrent with other beneficiaries.
pub const CONCURRENT_ASCENDANTS_CAP: Decimal = pct(30);

const IAS_MULTIPLIER: Decimal = Decimal::from_parts(11, 0, 0, false, 1);
const DEATH_SUBSIDY_MONTHS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const FUNERAL_MONTHS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);
const FUNERAL_MONTHS_WITH_TRANSLATION: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
const REMARRIAGE_YEARS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
const REVERSION_YEARS: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Returns the spouse's statutory share.
pub fn spouse_share(scenario: SpouseScenario) -> Decimal {
    match scenario {
        SpouseScenario::UnderRetirement => SPOUSE_SHARE_UNDER_RETIREMENT,
        SpouseScenario::OverRetirement => SPOUSE_SHARE_OVER_RETIREMENT,
    }
}

/// Returns the aggregate share of `count` children.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::children_share;
/// use rust_decimal::Decimal;
///
/// assert_eq!(children_share(2, false), Decimal::new(40, 2));
/// assert_eq!(children_share(3, true), Decimal::new(80, 2));
/// ```
pub fn children_share(count: u32, double_orphan: bool) -> Decimal {
    let base = match count {
        0 => return Decimal::ZERO,
        1 => pct(20),
        2 => pct(40),
        _ => pct(50),
    };
    if double_orphan {
        (base * Decimal::TWO).min(SURVIVOR_CAP)
    } else {
        base
    }
}

/// Returns the aggregate share of `count` ascendants.
pub fn ascendants_share(count: u32, scenario: AscendantScenario) -> Decimal {
    let n = Decimal::from(count);
    match scenario {
        AscendantScenario::Concurrent => (pct(10) * n).min(CONCURRENT_ASCENDANTS_CAP),
        AscendantScenario::AloneUnderRetirement => (pct(15) * n).min(SURVIVOR_CAP),
        AscendantScenario::AloneOverRetirement => (pct(20) * n).min(SURVIVOR_CAP),
    }
}

fn validate(claim: &FatalAccidentClaim, settings: &EngineSettings) -> EngineResult<()> {
    ensure_positive("annual_remuneration", claim.annual_remuneration)?;
    if claim.year_of_death > settings.reference_year {
        return Err(EngineError::invalid(
            "year_of_death",
            format!("must not be after {}", settings.reference_year),
        ));
    }
    if let Some(alimony) = claim.ex_spouse_alimony {
        ensure_non_negative("ex_spouse_alimony", alimony)?;
    }
    ensure_non_negative("funeral_expenses", claim.funeral_expenses)?;
    Ok(())
}

/// Builds the beneficiary list with statutory shares; pensions are filled in
/// once the pool is known.
fn statutory_beneficiaries(claim: &FatalAccidentClaim) -> Vec<Beneficiary> {
    let mut beneficiaries = Vec::new();

    if let Some(scenario) = claim.spouse {
        beneficiaries.push(Beneficiary {
            kind: BeneficiaryKind::Spouse,
            label: "Cônjuge".to_string(),
            count: 1,
            statutory_share: spouse_share(scenario),
            annual_pension: Decimal::ZERO,
        });
    }
    if claim.ex_spouse_alimony.is_some() {
        beneficiaries.push(Beneficiary {
            kind: BeneficiaryKind::ExSpouse,
            label: "Ex-cônjuge".to_string(),
            count: 1,
            statutory_share: EX_SPOUSE_SHARE,
            annual_pension: Decimal::ZERO,
        });
    }
    if claim.children_count > 0 {
        beneficiaries.push(Beneficiary {
            kind: BeneficiaryKind::Children,
            label: format!("Filhos ({})", claim.children_count),
            count: claim.children_count,
            statutory_share: children_share(claim.children_count, claim.double_orphan),
            annual_pension: Decimal::ZERO,
        });
    }
    if claim.ascendants_count > 0 {
        beneficiaries.push(Beneficiary {
            kind: BeneficiaryKind::Ascendants,
            label: format!("Ascendentes ({})", claim.ascendants_count),
            count: claim.ascendants_count,
            statutory_share: ascendants_share(claim.ascendants_count, claim.ascendants_scenario),
            annual_pension: Decimal::ZERO,
        });
    }

    beneficiaries
}

/// Calculates survivor pensions, subsidies and the guarantee fund reversion
/// for a fatal accident.
///
/// # Errors
///
/// - `InvalidInput` for a non-positive remuneration, a year of death after
///   the configured reference year, or negative alimony or funeral expenses
/// - `UnsupportedYear` when the year of death has no IAS value
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::calculate_fatal_accident;
/// use nlat_engine::config::EngineSettings;
/// use nlat_engine::models::{AscendantScenario, FatalAccidentClaim};
/// use nlat_engine::tables::ReferenceTables;
/// use rust_decimal::Decimal;
///
/// let claim = FatalAccidentClaim {
///     deceased_name: "João Costa".to_string(),
///     annual_remuneration: Decimal::new(20000, 0),
///     year_of_death: 2024,
///     aggravated_responsibility: false,
///     spouse: None,
///     ex_spouse_alimony: None,
///     children_count: 0,
///     double_orphan: false,
///     ascendants_count: 0,
///     ascendants_scenario: AscendantScenario::Concurrent,
///     funeral_expenses: Decimal::ZERO,
///     body_translation: false,
/// };
/// let result = calculate_fatal_accident(
///     &claim,
///     ReferenceTables::statutory(),
///     &EngineSettings::default(),
/// ).unwrap();
/// assert!(result.beneficiaries.is_empty());
/// assert_eq!(result.guarantee_fund_reversion, Decimal::new(60000, 0));
/// ```
pub fn calculate_fatal_accident(
    claim: &FatalAccidentClaim,
    tables: &ReferenceTables,
    settings: &EngineSettings,
) -> EngineResult<FatalAccidentResult> {
    validate(claim, settings)?;
    let ias_value = tables.ias(claim.year_of_death)?;
    let remuneration = claim.annual_remuneration;

    let mut beneficiaries = statutory_beneficiaries(claim);
    let total_statutory_share: Decimal = beneficiaries.iter().map(|b| b.statutory_share).sum();

    let mut audit_steps = vec![AuditStep {
        step_number: 1,
        rule_id: "survivor_shares".to_string(),
        rule_name: "Statutory Survivor Shares".to_string(),
        clause_ref: "Arts. 59.º a 61.º NLAT".to_string(),
        input: serde_json::json!({
            "spouse": claim.spouse.is_some(),
            "ex_spouse": claim.ex_spouse_alimony.is_some(),
            "children_count": claim.children_count,
            "double_orphan": claim.double_orphan,
            "ascendants_count": claim.ascendants_count
        }),
        output: serde_json::json!({
            "shares": beneficiaries
                .iter()
                .map(|b| serde_json::json!({
                    "kind": b.kind,
                    "share": b.statutory_share.normalize().to_string()
                }))
                .collect::<Vec<_>>(),
            "total": total_statutory_share.normalize().to_string()
        }),
        reasoning: format!(
            "{} beneficiaries with statutory shares totalling {}",
            beneficiaries.len(),
            total_statutory_share.normalize()
        ),
    }];

    let pension_pool = if total_statutory_share.is_zero() {
        Decimal::ZERO
    } else if claim.aggravated_responsibility {
        remuneration
    } else {
        total_statutory_share.min(SURVIVOR_CAP) * remuneration
    };

    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "pension_pool".to_string(),
        rule_name: "Survivor Pension Pool".to_string(),
        clause_ref: if claim.aggravated_responsibility {
            "Art. 18.º, n.º 4, al. b) NLAT".to_string()
        } else {
            "Art. 59.º, n.º 2 NLAT".to_string()
        },
        input: serde_json::json!({
            "annual_remuneration": remuneration.normalize().to_string(),
            "total_statutory_share": total_statutory_share.normalize().to_string(),
            "aggravated_responsibility": claim.aggravated_responsibility
        }),
        output: serde_json::json!({
            "pension_pool": pension_pool.normalize().to_string()
        }),
        reasoning: if claim.aggravated_responsibility {
            format!(
                "Aggravated responsibility: pool equals the full remuneration of €{}",
                remuneration.normalize()
            )
        } else {
            format!(
                "Pool: min(80%, {}) × €{} = €{}",
                total_statutory_share.normalize(),
                remuneration.normalize(),
                pension_pool.normalize()
            )
        },
    });

    for beneficiary in &mut beneficiaries {
        beneficiary.annual_pension = match beneficiary.kind {
            BeneficiaryKind::ExSpouse => claim
                .ex_spouse_alimony
                .unwrap_or_default()
                .min(EX_SPOUSE_SHARE * remuneration),
            _ => pension_pool * beneficiary.statutory_share / total_statutory_share,
        };
        debug!(
            beneficiary = %beneficiary.label,
            share = %beneficiary.statutory_share,
            pension = %beneficiary.annual_pension,
            "survivor pension computed"
        );
    }

    if !beneficiaries.is_empty() {
        audit_steps.push(AuditStep {
            step_number: audit_steps.len() as u32 + 1,
            rule_id: "survivor_pensions".to_string(),
            rule_name: "Survivor Pension Distribution".to_string(),
            clause_ref: "Arts. 59.º a 61.º NLAT".to_string(),
            input: serde_json::json!({
                "pension_pool": pension_pool.normalize().to_string(),
                "total_statutory_share": total_statutory_share.normalize().to_string()
            }),
            output: serde_json::json!(beneficiaries
                .iter()
                .map(|b| serde_json::json!({
                    "kind": b.kind,
                    "annual_pension": b.annual_pension.normalize().to_string()
                }))
                .collect::<Vec<_>>()),
            reasoning: "Each beneficiary receives pool × share / total; the ex-spouse receives the alimony, capped at 30% of remuneration".to_string(),
        });
    }

    let death_subsidy = DEATH_SUBSIDY_MONTHS * IAS_MULTIPLIER * ias_value;
    audit_steps.push(AuditStep {
        step_number: audit_steps.len() as u32 + 1,
        rule_id: "death_subsidy".to_string(),
        rule_name: "Death Subsidy".to_string(),
        clause_ref: "Art. 65.º NLAT".to_string(),
        input: serde_json::json!({
            "year_of_death": claim.year_of_death,
            "ias": ias_value.normalize().to_string()
        }),
        output: serde_json::json!({
            "death_subsidy": death_subsidy.normalize().to_string()
        }),
        reasoning: format!(
            "Death subsidy: 12 × 1.1 × €{} = €{}",
            ias_value.normalize(),
            death_subsidy.normalize()
        ),
    });

    let funeral_months = if claim.body_translation {
        FUNERAL_MONTHS_WITH_TRANSLATION
    } else {
        FUNERAL_MONTHS
    };
    let funeral_cap = funeral_months * IAS_MULTIPLIER * ias_value;
    let funeral_subsidy = claim.funeral_expenses.min(funeral_cap);
    audit_steps.push(AuditStep {
        step_number: audit_steps.len() as u32 + 1,
        rule_id: "funeral_subsidy".to_string(),
        rule_name: "Funeral Expenses Subsidy".to_string(),
        clause_ref: "Art. 66.º NLAT".to_string(),
        input: serde_json::json!({
            "funeral_expenses": claim.funeral_expenses.normalize().to_string(),
            "body_translation": claim.body_translation
        }),
        output: serde_json::json!({
            "cap": funeral_cap.normalize().to_string(),
            "funeral_subsidy": funeral_subsidy.normalize().to_string()
        }),
        reasoning: format!(
            "Funeral subsidy: min(€{}, {} × 1.1 × €{}) = €{}",
            claim.funeral_expenses.normalize(),
            funeral_months,
            ias_value.normalize(),
            funeral_subsidy.normalize()
        ),
    });

    let spouse_pension = beneficiaries
        .iter()
        .find(|b| b.kind == BeneficiaryKind::Spouse)
        .map(|b| b.annual_pension);
    let spouse_remarriage_redemption =
        spouse_pension.map_or(Decimal::ZERO, |pension| REMARRIAGE_YEARS * pension);
    if let Some(pension) = spouse_pension {
        audit_steps.push(AuditStep {
            step_number: audit_steps.len() as u32 + 1,
            rule_id: "remarriage_redemption".to_string(),
            rule_name: "Spouse Remarriage Redemption".to_string(),
            clause_ref: "Art. 60.º, n.º 3 NLAT".to_string(),
            input: serde_json::json!({
                "spouse_pension": pension.normalize().to_string()
            }),
            output: serde_json::json!({
                "redemption": spouse_remarriage_redemption.normalize().to_string()
            }),
            reasoning: format!(
                "On remarriage the spouse receives 3 × €{} = €{}",
                pension.normalize(),
                spouse_remarriage_redemption.normalize()
            ),
        });
    }

    let guarantee_fund_reversion = if beneficiaries.is_empty() {
        let reversion = REVERSION_YEARS * remuneration;
        audit_steps.push(AuditStep {
            step_number: audit_steps.len() as u32 + 1,
            rule_id: "guarantee_fund_reversion".to_string(),
            rule_name: "Reversion to the Guarantee Fund".to_string(),
            clause_ref: "Art. 63.º NLAT".to_string(),
            input: serde_json::json!({
                "annual_remuneration": remuneration.normalize().to_string()
            }),
            output: serde_json::json!({
                "reversion": reversion.normalize().to_string()
            }),
            reasoning: format!(
                "No beneficiaries: 3 × €{} = €{} reverts to the FAT",
                remuneration.normalize(),
                reversion.normalize()
            ),
        });
        reversion
    } else {
        Decimal::ZERO
    };

    debug!(
        deceased = %claim.deceased_name,
        beneficiaries = beneficiaries.len(),
        %pension_pool,
        %death_subsidy,
        "fatal accident computed"
    );

    Ok(FatalAccidentResult {
        ias_value,
        beneficiaries,
        total_statutory_share,
        pension_pool,
        death_subsidy,
        funeral_subsidy,
        spouse_remarriage_redemption,
        guarantee_fund_reversion,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_claim() -> FatalAccidentClaim {
        FatalAccidentClaim {
            deceased_name: "João Costa".to_string(),
            annual_remuneration: dec("20000"),
            year_of_death: 2024,
            aggravated_responsibility: false,
            spouse: None,
            ex_spouse_alimony: None,
            children_count: 0,
            double_orphan: false,
            ascendants_count: 0,
            ascendants_scenario: AscendantScenario::Concurrent,
            funeral_expenses: Decimal::ZERO,
            body_translation: false,
        }
    }

    fn calculate(claim: &FatalAccidentClaim) -> EngineResult<FatalAccidentResult> {
        calculate_fatal_accident(claim, ReferenceTables::statutory(), &EngineSettings::default())
    }

    fn pension_of(result: &FatalAccidentResult, kind: BeneficiaryKind) -> Decimal {
        result
            .beneficiaries
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.annual_pension)
            .unwrap()
    }

    #[test]
    fn test_children_shares() {
        assert_eq!(children_share(0, false), Decimal::ZERO);
        assert_eq!(children_share(1, false), dec("0.20"));
        assert_eq!(children_share(2, false), dec("0.40"));
        assert_eq!(children_share(5, false), dec("0.50"));
        assert_eq!(children_share(1, true), dec("0.40"));
        assert_eq!(children_share(2, true), dec("0.80"));
        assert_eq!(children_share(3, true), dec("0.80"));
    }

    #[test]
    fn test_ascendants_shares() {
        assert_eq!(ascendants_share(2, AscendantScenario::Concurrent), dec("0.20"));
        assert_eq!(ascendants_share(4, AscendantScenario::Concurrent), dec("0.30"));
        assert_eq!(
            ascendants_share(2, AscendantScenario::AloneUnderRetirement),
            dec("0.30")
        );
        assert_eq!(
            ascendants_share(6, AscendantScenario::AloneUnderRetirement),
            dec("0.80")
        );
        assert_eq!(
            ascendants_share(3, AscendantScenario::AloneOverRetirement),
            dec("0.60")
        );
        assert_eq!(
            ascendants_share(5, AscendantScenario::AloneOverRetirement),
            dec("0.80")
        );
    }

    #[test]
    fn test_spouse_alone_below_cap() {
        let claim = FatalAccidentClaim {
            spouse: Some(SpouseScenario::UnderRetirement),
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        assert_eq!(result.total_statutory_share, dec("0.30"));
        assert_eq!(result.pension_pool, dec("6000"));
        assert_eq!(pension_of(&result, BeneficiaryKind::Spouse), dec("6000"));
        assert_eq!(result.spouse_remarriage_redemption, dec("18000"));
        assert_eq!(result.guarantee_fund_reversion, Decimal::ZERO);
    }

    #[test]
    fn test_pool_capped_at_80_percent_and_shared_pro_rata() {
        let claim = FatalAccidentClaim {
            spouse: Some(SpouseScenario::OverRetirement),
            children_count: 3,
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        assert_eq!(result.total_statutory_share, dec("0.90"));
        assert_eq!(result.pension_pool, dec("16000"));
        assert_eq!(
            pension_of(&result, BeneficiaryKind::Spouse).round_dp(2),
            dec("7111.11")
        );
        assert_eq!(
            pension_of(&result, BeneficiaryKind::Children).round_dp(2),
            dec("8888.89")
        );
        assert_eq!(result.spouse_remarriage_redemption.round_dp(2), dec("21333.33"));
    }

    #[test]
    fn test_aggravated_responsibility_uses_full_remuneration() {
        let claim = FatalAccidentClaim {
            aggravated_responsibility: true,
            spouse: Some(SpouseScenario::UnderRetirement),
            children_count: 1,
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        assert_eq!(result.pension_pool, dec("20000"));
        assert_eq!(pension_of(&result, BeneficiaryKind::Spouse), dec("12000"));
        assert_eq!(pension_of(&result, BeneficiaryKind::Children), dec("8000"));
        assert_eq!(result.audit_steps[1].clause_ref, "Art. 18.º, n.º 4, al. b) NLAT");
    }

    #[test]
    fn test_ex_spouse_paid_alimony_capped_and_counted_in_total() {
        let claim = FatalAccidentClaim {
            spouse: Some(SpouseScenario::UnderRetirement),
            ex_spouse_alimony: Some(dec("9000")),
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        // Total 0.60, pool 12000; spouse receives 12000 × 0.30 / 0.60.
        assert_eq!(result.total_statutory_share, dec("0.60"));
        assert_eq!(pension_of(&result, BeneficiaryKind::Spouse), dec("6000"));
        assert_eq!(pension_of(&result, BeneficiaryKind::ExSpouse), dec("6000"));
        assert_eq!(result.spouse_remarriage_redemption, dec("18000"));
    }

    #[test]
    fn test_ex_spouse_alone_does_not_earn_remarriage_redemption() {
        let claim = FatalAccidentClaim {
            ex_spouse_alimony: Some(dec("2400")),
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        assert_eq!(pension_of(&result, BeneficiaryKind::ExSpouse), dec("2400"));
        assert_eq!(result.spouse_remarriage_redemption, Decimal::ZERO);
        assert_eq!(result.guarantee_fund_reversion, Decimal::ZERO);
    }

    #[test]
    fn test_no_beneficiaries_reverts_to_guarantee_fund() {
        let result = calculate(&base_claim()).unwrap();
        assert!(result.beneficiaries.is_empty());
        assert_eq!(result.pension_pool, Decimal::ZERO);
        assert_eq!(result.guarantee_fund_reversion, dec("60000"));
        assert_eq!(
            result.audit_steps.last().unwrap().rule_id,
            "guarantee_fund_reversion"
        );
    }

    #[test]
    fn test_death_and_funeral_subsidies() {
        let claim = FatalAccidentClaim {
            funeral_expenses: dec("3000"),
            ..base_claim()
        };
        let result = calculate(&claim).unwrap();
        assert_eq!(result.ias_value, dec("509.26"));
        assert_eq!(result.death_subsidy, dec("6722.232"));
        // Cap 4 × 1.1 × 509.26 = 2240.744
        assert_eq!(result.funeral_subsidy, dec("2240.744"));

        let translated = calculate(&FatalAccidentClaim {
            body_translation: true,
            ..claim
        })
        .unwrap();
        assert_eq!(translated.funeral_subsidy, dec("3000"));
    }

    #[test]
    fn test_year_after_reference_year() {
        let claim = FatalAccidentClaim {
            year_of_death: 2026,
            ..base_claim()
        };
        assert!(matches!(
            calculate(&claim),
            Err(EngineError::InvalidInput { field, .. }) if field == "year_of_death"
        ));
    }

    #[test]
    fn test_year_without_ias() {
        let claim = FatalAccidentClaim {
            year_of_death: 2001,
            ..base_claim()
        };
        assert!(matches!(
            calculate(&claim),
            Err(EngineError::UnsupportedYear { year: 2001, .. })
        ));
    }

    #[test]
    fn test_negative_amounts_are_rejected() {
        let claim = FatalAccidentClaim {
            funeral_expenses: dec("-1"),
            ..base_claim()
        };
        assert!(matches!(calculate(&claim), Err(EngineError::InvalidInput { .. })));

        let claim = FatalAccidentClaim {
            ex_spouse_alimony: Some(dec("-100")),
            ..base_claim()
        };
        assert!(matches!(calculate(&claim), Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_amounts_above_ceiling_are_rejected() {
        let claim = FatalAccidentClaim {
            annual_remuneration: dec("50000000000000000000000000000"),
            ..base_claim()
        };
        assert!(matches!(
            calculate(&claim),
            Err(EngineError::InvalidInput { field, .. }) if field == "annual_remuneration"
        ));

        let claim = FatalAccidentClaim {
            funeral_expenses: dec("50000000000000000000000000000"),
            ..base_claim()
        };
        assert!(matches!(
            calculate(&claim),
            Err(EngineError::InvalidInput { field, .. }) if field == "funeral_expenses"
        ));
    }

    proptest! {
        #[test]
        fn prop_distribution_fills_the_pool(
            remuneration in 1000u32..200_000,
            spouse in proptest::option::of(0usize..2),
            children in 0u32..6,
            double_orphan in any::<bool>(),
            ascendants in 0u32..5,
            aggravated in any::<bool>(),
        ) {
            let claim = FatalAccidentClaim {
                annual_remuneration: Decimal::from(remuneration),
                aggravated_responsibility: aggravated,
                spouse: spouse.map(|s| [SpouseScenario::UnderRetirement, SpouseScenario::OverRetirement][s]),
                children_count: children,
                double_orphan,
                ascendants_count: ascendants,
                ..base_claim()
            };
            let result = calculate(&claim).unwrap();
            let distributed: Decimal = result.beneficiaries.iter().map(|b| b.annual_pension).sum();
            prop_assert!((distributed - result.pension_pool).abs() < dec("0.0001"));
            prop_assert!(result.pension_pool <= Decimal::from(remuneration));
            if !aggravated {
                prop_assert!(result.pension_pool <= Decimal::from(remuneration) * dec("0.80"));
            }
        }
    }
}
