//! Forms for the three permanent-incapacity calculators.

use serde::{Deserialize, Serialize};

use crate::calculation::{
    calculate_absolute_permanent_habitual, calculate_absolute_permanent_total,
    calculate_partial_permanent,
};
use crate::error::EngineResult;
use crate::models::{CalculatorKind, Dependents, PensionResult, WorkerClaim};

use super::fields::{date, decimal, require_filled};
use super::{CalculationContext, CalculatorForm};

/// Raw input for the permanent partial incapacity calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPermanentForm {
    /// Worker's name.
    pub worker_name: String,
    /// Annual remuneration in euros.
    pub annual_remuneration: String,
    /// Incapacity percentage.
    pub incapacity_percentage: String,
    /// Discharge date.
    pub discharge_date: String,
    /// Birth date.
    pub birth_date: String,
}

impl PartialPermanentForm {
    fn to_claim(&self) -> EngineResult<WorkerClaim> {
        require_filled(&[
            ("worker_name", self.worker_name.as_str()),
            ("annual_remuneration", self.annual_remuneration.as_str()),
            ("incapacity_percentage", self.incapacity_percentage.as_str()),
            ("discharge_date", self.discharge_date.as_str()),
            ("birth_date", self.birth_date.as_str()),
        ])?;
        Ok(WorkerClaim {
            worker_name: self.worker_name.trim().to_string(),
            annual_remuneration: decimal("annual_remuneration", &self.annual_remuneration)?,
            incapacity_percentage: Some(decimal(
                "incapacity_percentage",
                &self.incapacity_percentage,
            )?),
            discharge_date: date("discharge_date", &self.discharge_date)?,
            birth_date: date("birth_date", &self.birth_date)?,
        })
    }
}

impl CalculatorForm for PartialPermanentForm {
    type Output = PensionResult;
    const KIND: CalculatorKind = CalculatorKind::PartialPermanent;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<PensionResult> {
        calculate_partial_permanent(&self.to_claim()?, ctx.tables, ctx.today)
    }
}

/// Raw input for the absolute permanent incapacity (any work) calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsolutePermanentTotalForm {
    /// Worker's name.
    pub worker_name: String,
    /// Annual remuneration in euros.
    pub annual_remuneration: String,
    /// Discharge date.
    pub discharge_date: String,
    /// Birth date.
    pub birth_date: String,
    /// Number of dependents.
    pub dependents: Dependents,
}

impl CalculatorForm for AbsolutePermanentTotalForm {
    type Output = PensionResult;
    const KIND: CalculatorKind = CalculatorKind::AbsolutePermanentTotal;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<PensionResult> {
        require_filled(&[
            ("worker_name", self.worker_name.as_str()),
            ("annual_remuneration", self.annual_remuneration.as_str()),
            ("discharge_date", self.discharge_date.as_str()),
            ("birth_date", self.birth_date.as_str()),
        ])?;
        let claim = WorkerClaim {
            worker_name: self.worker_name.trim().to_string(),
            annual_remuneration: decimal("annual_remuneration", &self.annual_remuneration)?,
            incapacity_percentage: None,
            discharge_date: date("discharge_date", &self.discharge_date)?,
            birth_date: date("birth_date", &self.birth_date)?,
        };
        calculate_absolute_permanent_total(&claim, self.dependents, ctx.tables, ctx.today)
    }
}

/// Raw input for the absolute permanent incapacity (habitual work)
/// calculator. Same fields as [`PartialPermanentForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbsolutePermanentHabitualForm(pub PartialPermanentForm);

impl CalculatorForm for AbsolutePermanentHabitualForm {
    type Output = PensionResult;
    const KIND: CalculatorKind = CalculatorKind::AbsolutePermanentHabitual;

    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<PensionResult> {
        calculate_absolute_permanent_habitual(&self.0.to_claim()?, ctx.tables, ctx.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineSettings;
    use crate::error::EngineError;
    use crate::tables::ReferenceTables;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn partial_form() -> PartialPermanentForm {
        PartialPermanentForm {
            worker_name: "Maria Silva".to_string(),
            annual_remuneration: "14000".to_string(),
            incapacity_percentage: "7".to_string(),
            discharge_date: "2024-03-10".to_string(),
            birth_date: "1980-05-20".to_string(),
        }
    }

    fn run<F: CalculatorForm>(form: &F) -> EngineResult<F::Output> {
        let settings = EngineSettings::default();
        let ctx = CalculationContext::new(
            ReferenceTables::statutory(),
            &settings,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        form.calculate(&ctx)
    }

    #[test]
    fn test_partial_form_accepts_comma_decimal() {
        let form = PartialPermanentForm {
            annual_remuneration: "14000,00".to_string(),
            incapacity_percentage: "7,0".to_string(),
            ..partial_form()
        };
        assert_eq!(run(&form).unwrap().annual_pension, dec("686"));
    }

    #[test]
    fn test_required_fields_checked_before_parsing() {
        let form = PartialPermanentForm {
            annual_remuneration: "abc".to_string(),
            birth_date: String::new(),
            ..partial_form()
        };
        assert_eq!(run(&form), Err(EngineError::missing("birth_date")));
    }

    #[test]
    fn test_decimal_parse_error_names_field() {
        let form = PartialPermanentForm {
            incapacity_percentage: "sete".to_string(),
            ..partial_form()
        };
        assert!(matches!(
            run(&form),
            Err(EngineError::InvalidInput { field, .. }) if field == "incapacity_percentage"
        ));
    }

    #[test]
    fn test_date_parse_error_names_field() {
        let form = PartialPermanentForm {
            discharge_date: "2024-13-01".to_string(),
            ..partial_form()
        };
        assert!(matches!(
            run(&form),
            Err(EngineError::InvalidInput { field, .. }) if field == "discharge_date"
        ));
    }

    #[test]
    fn test_oversized_remuneration_is_an_input_error() {
        let form = PartialPermanentForm {
            annual_remuneration: "70000000000000000000000000000".to_string(),
            incapacity_percentage: "100".to_string(),
            ..partial_form()
        };
        assert!(matches!(
            run(&form),
            Err(EngineError::InvalidInput { field, .. }) if field == "annual_remuneration"
        ));
    }

    #[test]
    fn test_absolute_total_form() {
        let form = AbsolutePermanentTotalForm {
            worker_name: "Rui Santos".to_string(),
            annual_remuneration: "20000".to_string(),
            discharge_date: "2023-09-30".to_string(),
            birth_date: "1975-02-14".to_string(),
            dependents: Dependents::One,
        };
        assert_eq!(run(&form).unwrap().annual_pension, dec("18000"));
    }

    #[test]
    fn test_habitual_form_deserializes_flat_fields() {
        let json = r#"{
            "worker_name": "Carla Mendes",
            "annual_remuneration": "20000",
            "incapacity_percentage": "25",
            "discharge_date": "2022-11-15",
            "birth_date": "1968-08-01"
        }"#;
        let form: AbsolutePermanentHabitualForm = serde_json::from_str(json).unwrap();
        assert_eq!(run(&form).unwrap().annual_pension, dec("11000"));
    }

    #[test]
    fn test_missing_json_fields_become_missing_field_errors() {
        let form: PartialPermanentForm = serde_json::from_str("{}").unwrap();
        assert_eq!(run(&form), Err(EngineError::missing("worker_name")));
    }
}
