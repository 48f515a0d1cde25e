//! Worker claim model for permanent-incapacity pensions.
//!
//! This module defines the [`WorkerClaim`] record shared by the three
//! permanent-incapacity calculators, and the [`Dependents`] choice used by
//! the absolute-total calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of dependents living at the worker's expense.
///
/// This is a three-way statutory choice, not a numeric count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependents {
    /// No dependents (80% of remuneration).
    #[default]
    None,
    /// One dependent (90% of remuneration).
    One,
    /// Two or more dependents (100% of remuneration).
    TwoOrMore,
}

impl Dependents {
    /// Returns the fraction of remuneration paid as annual pension.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlat_engine::models::Dependents;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Dependents::None.pension_factor(), Decimal::new(80, 2));
    /// assert_eq!(Dependents::One.pension_factor(), Decimal::new(90, 2));
    /// assert_eq!(Dependents::TwoOrMore.pension_factor(), Decimal::ONE);
    /// ```
    pub fn pension_factor(self) -> Decimal {
        match self {
            Dependents::None => Decimal::new(80, 2),
            Dependents::One => Decimal::new(90, 2),
            Dependents::TwoOrMore => Decimal::ONE,
        }
    }

    /// Returns the serialized identifier of this choice.
    pub fn as_str(self) -> &'static str {
        match self {
            Dependents::None => "none",
            Dependents::One => "one",
            Dependents::TwoOrMore => "two_or_more",
        }
    }
}

/// A claim for a permanent-incapacity pension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerClaim {
    /// The injured worker's name (display only).
    pub worker_name: String,
    /// Annual gross remuneration, in euros.
    pub annual_remuneration: Decimal,
    /// Fixed incapacity percentage, required for percentage-based pensions.
    #[serde(default)]
    pub incapacity_percentage: Option<Decimal>,
    /// Date of medical discharge.
    pub discharge_date: NaiveDate,
    /// The worker's date of birth. Must precede the discharge date.
    pub birth_date: NaiveDate,
}
