//! Statutory reference tables.
//!
//! The engine depends on three read-only lookup tables:
//!
//! - redemption coefficients by age (Portaria 11/2000),
//! - the IAS (Indexante de Apoios Sociais) by year,
//! - annual pension revaluation coefficients by year.
//!
//! [`ReferenceTables::statutory`] exposes the compiled-in values as a
//! process-wide constant. A [`crate::config::ConfigLoader`] may replace any
//! table with one read from YAML.

mod statutory;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

static STATUTORY: LazyLock<ReferenceTables> = LazyLock::new(|| ReferenceTables {
    redemption_rates: statutory::REDEMPTION_RATES
        .iter()
        .map(|&(age, rate)| (age, Decimal::new(rate, statutory::REDEMPTION_RATE_SCALE)))
        .collect(),
    ias: statutory::IAS_VALUES
        .iter()
        .map(|&(year, value)| (year, Decimal::new(value, statutory::IAS_SCALE)))
        .collect(),
    revaluation_coefficients: statutory::REVALUATION_COEFFICIENTS
        .iter()
        .map(|&(year, coef)| (year, Decimal::new(coef, statutory::REVALUATION_SCALE)))
        .collect(),
});

/// The set of lookup tables used by every calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    redemption_rates: BTreeMap<u32, Decimal>,
    ias: BTreeMap<i32, Decimal>,
    revaluation_coefficients: BTreeMap<i32, Decimal>,
}

impl ReferenceTables {
    /// Creates a table set from explicit maps.
    pub fn new(
        redemption_rates: BTreeMap<u32, Decimal>,
        ias: BTreeMap<i32, Decimal>,
        revaluation_coefficients: BTreeMap<i32, Decimal>,
    ) -> Self {
        Self {
            redemption_rates,
            ias,
            revaluation_coefficients,
        }
    }

    /// Returns the compiled-in statutory tables.
    ///
    /// # Example
    ///
    /// ```
    /// use nlat_engine::tables::ReferenceTables;
    /// use rust_decimal::Decimal;
    ///
    /// let tables = ReferenceTables::statutory();
    /// assert_eq!(tables.ias(2025).unwrap(), Decimal::new(52250, 2));
    /// assert!(tables.ias(2006).is_err());
    /// ```
    pub fn statutory() -> &'static ReferenceTables {
        &STATUTORY
    }

    /// Looks up the redemption coefficient for an age.
    ///
    /// A missing age is an error; it never defaults to zero.
    pub fn redemption_rate(&self, age: u32) -> EngineResult<Decimal> {
        self.redemption_rates
            .get(&age)
            .copied()
            .ok_or(EngineError::RateNotFound { age })
    }

    /// Looks up the IAS value for a calendar year.
    pub fn ias(&self, year: i32) -> EngineResult<Decimal> {
        self.ias
            .get(&year)
            .copied()
            .ok_or_else(|| EngineError::UnsupportedYear {
                table: "IAS".to_string(),
                year,
            })
    }

    /// Returns the revaluation coefficient (in percent) published for a year.
    pub fn revaluation_coefficient(&self, year: i32) -> Option<Decimal> {
        self.revaluation_coefficients.get(&year).copied()
    }

    /// Returns the redemption table.
    pub fn redemption_rates(&self) -> &BTreeMap<u32, Decimal> {
        &self.redemption_rates
    }

    /// Returns the IAS table.
    pub fn ias_values(&self) -> &BTreeMap<i32, Decimal> {
        &self.ias
    }

    /// Returns the revaluation coefficient table.
    pub fn revaluation_coefficients(&self) -> &BTreeMap<i32, Decimal> {
        &self.revaluation_coefficients
    }

    /// Replaces the redemption table.
    pub fn with_redemption_rates(mut self, rates: BTreeMap<u32, Decimal>) -> Self {
        self.redemption_rates = rates;
        self
    }

    /// Replaces the IAS table.
    pub fn with_ias(mut self, ias: BTreeMap<i32, Decimal>) -> Self {
        self.ias = ias;
        self
    }

    /// Replaces the revaluation coefficient table.
    pub fn with_revaluation_coefficients(mut self, coefficients: BTreeMap<i32, Decimal>) -> Self {
        self.revaluation_coefficients = coefficients;
        self
    }
}
