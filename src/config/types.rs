//! Configuration types for the compensation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tables::ReferenceTables;

/// Metadata identifying the legal regime the engine implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineMetadata {
    /// The statute code (e.g., "Lei 98/2009").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The version of the published tables.
    pub version: String,
    /// URL to the official statute.
    pub source_url: String,
}

impl Default for EngineMetadata {
    fn default() -> Self {
        Self {
            code: "Lei 98/2009".to_string(),
            name: "Regime de reparação de acidentes de trabalho".to_string(),
            version: "2025".to_string(),
            source_url: "https://diariodarepublica.pt/dr/detalhe/lei/98-2009-489505".to_string(),
        }
    }
}

/// Tunable horizons used by the calculators.
///
/// The reference year is explicit configuration rather than the system
/// clock, so results stay reproducible until the tables are updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Last year to which pensions are revalued, and the latest
    /// selectable year of death.
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    /// Earliest accepted pension fixing year for revaluation.
    #[serde(default = "default_revaluation_first_year")]
    pub revaluation_first_year: i32,
}

fn default_reference_year() -> i32 {
    2025
}

fn default_revaluation_first_year() -> i32 {
    1999
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            revaluation_first_year: default_revaluation_first_year(),
        }
    }
}

/// Structure of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Regime metadata.
    pub engine: EngineMetadata,
    /// Calculator settings.
    #[serde(default)]
    pub settings: EngineSettings,
}

/// Structure of `tables/redemption_rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RedemptionRatesFile {
    /// Coefficient by age in years.
    pub rates: BTreeMap<u32, Decimal>,
}

/// Structure of `tables/ias.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IasFile {
    /// IAS value by calendar year.
    pub ias: BTreeMap<i32, Decimal>,
}

/// Structure of `tables/revaluation_coefficients.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RevaluationCoefficientsFile {
    /// Percentage coefficient by calendar year.
    pub coefficients: BTreeMap<i32, Decimal>,
}

/// The complete engine configuration.
///
/// This struct aggregates the metadata, settings and reference tables
/// loaded from a configuration directory (or built from statutory defaults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    metadata: EngineMetadata,
    settings: EngineSettings,
    tables: ReferenceTables,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: EngineMetadata, settings: EngineSettings, tables: ReferenceTables) -> Self {
        Self {
            metadata,
            settings,
            tables,
        }
    }

    /// Returns the regime metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.metadata
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the reference tables.
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }
}
