//! Raw-input forms for each calculator.
//!
//! A form holds the values exactly as a user typed them: every field is a
//! string, apart from checkboxes and selects. Calling
//! [`CalculatorForm::calculate`] checks that the required fields are
//! present, parses numbers (accepting `.` or `,` as decimal separator) and
//! dates, and then hands typed claims to the functions in
//! [`crate::calculation`], which enforce the domain ranges.
//!
//! # Example
//!
//! ```
//! use nlat_engine::forms::{CalculationContext, CalculatorForm, PartialPermanentForm};
//! use nlat_engine::config::EngineSettings;
//! use nlat_engine::tables::ReferenceTables;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let form = PartialPermanentForm {
//!     worker_name: "Maria Silva".to_string(),
//!     annual_remuneration: "14000".to_string(),
//!     incapacity_percentage: "7,0".to_string(),
//!     discharge_date: "2024-03-10".to_string(),
//!     birth_date: "20/05/1980".to_string(),
//! };
//! let settings = EngineSettings::default();
//! let ctx = CalculationContext::new(
//!     ReferenceTables::statutory(),
//!     &settings,
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//! );
//! let result = form.calculate(&ctx).unwrap();
//! assert_eq!(result.annual_pension, Decimal::new(686, 0));
//! ```

mod fatal;
mod fields;
mod permanent;
mod subsidy;
mod temporary;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{ConfigLoader, EngineSettings};
use crate::error::EngineResult;
use crate::models::CalculatorKind;
use crate::tables::ReferenceTables;

pub use fatal::FatalAccidentForm;
pub use permanent::{
    AbsolutePermanentHabitualForm, AbsolutePermanentTotalForm, PartialPermanentForm,
};
pub use subsidy::{HighIncapacitySubsidyForm, PensionRevaluationForm};
pub use temporary::{PeriodForm, TemporaryIncapacityForm};

/// Everything a calculation needs besides the form itself.
#[derive(Debug, Clone, Copy)]
pub struct CalculationContext<'a> {
    /// Lookup tables.
    pub tables: &'a ReferenceTables,
    /// Engine settings (reference year, revaluation horizon).
    pub settings: &'a EngineSettings,
    /// Evaluation date for accrued amounts.
    pub today: NaiveDate,
}

impl<'a> CalculationContext<'a> {
    /// Creates a context from its parts.
    pub fn new(tables: &'a ReferenceTables, settings: &'a EngineSettings, today: NaiveDate) -> Self {
        Self {
            tables,
            settings,
            today,
        }
    }

    /// Creates a context backed by a loaded configuration.
    pub fn from_loader(loader: &'a ConfigLoader, today: NaiveDate) -> Self {
        Self::new(loader.tables(), loader.settings(), today)
    }
}

/// A calculator input form.
pub trait CalculatorForm {
    /// The result produced on success.
    type Output: Serialize;

    /// Which calculator this form drives.
    const KIND: CalculatorKind;

    /// Validates and parses the form, then runs the calculation.
    fn calculate(&self, ctx: &CalculationContext<'_>) -> EngineResult<Self::Output>;
}
