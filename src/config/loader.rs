//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::tables::ReferenceTables;

use super::types::{
    EngineConfig, EngineFile, EngineMetadata, EngineSettings, IasFile, RedemptionRatesFile,
    RevaluationCoefficientsFile,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/nlat/
/// ├── engine.yaml                        # Metadata and settings (required)
/// └── tables/
///     ├── ias.yaml                       # IAS by year (optional)
///     ├── redemption_rates.yaml          # Redemption coefficients by age (optional)
///     └── revaluation_coefficients.yaml  # Revaluation coefficients by year (optional)
/// ```
///
/// Table files that are absent fall back to the statutory tables compiled
/// into the engine.
///
/// # Example
///
/// ```no_run
/// use nlat_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/nlat").unwrap();
/// println!("Loaded regime: {}", loader.engine().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - Any present file contains invalid YAML
    /// - The settings are inconsistent (first revaluation year after the reference year)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_path = path.join("engine.yaml");
        let engine_file = Self::load_yaml::<EngineFile>(&engine_path)?;

        if engine_file.settings.revaluation_first_year > engine_file.settings.reference_year {
            return Err(EngineError::ConfigParseError {
                path: engine_path.display().to_string(),
                message: format!(
                    "revaluation_first_year ({}) is after reference_year ({})",
                    engine_file.settings.revaluation_first_year,
                    engine_file.settings.reference_year
                ),
            });
        }

        let tables = Self::load_tables(&path.join("tables"))?;

        debug!(
            path = %path.display(),
            reference_year = engine_file.settings.reference_year,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(engine_file.engine, engine_file.settings, tables),
        })
    }

    /// Builds the configuration from compiled-in statutory data only.
    pub fn statutory() -> Self {
        Self {
            config: EngineConfig::new(
                EngineMetadata::default(),
                EngineSettings::default(),
                ReferenceTables::statutory().clone(),
            ),
        }
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads an optional YAML file, returning `None` when it does not exist.
    fn load_optional_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if path.exists() {
            Self::load_yaml(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Starts from the statutory tables and applies any overrides found.
    fn load_tables(tables_dir: &Path) -> EngineResult<ReferenceTables> {
        let mut tables = ReferenceTables::statutory().clone();

        if let Some(file) =
            Self::load_optional_yaml::<RedemptionRatesFile>(&tables_dir.join("redemption_rates.yaml"))?
        {
            debug!(entries = file.rates.len(), "Overriding redemption rate table");
            tables = tables.with_redemption_rates(file.rates);
        }

        if let Some(file) = Self::load_optional_yaml::<IasFile>(&tables_dir.join("ias.yaml"))? {
            debug!(entries = file.ias.len(), "Overriding IAS table");
            tables = tables.with_ias(file.ias);
        }

        if let Some(file) = Self::load_optional_yaml::<RevaluationCoefficientsFile>(
            &tables_dir.join("revaluation_coefficients.yaml"),
        )? {
            debug!(
                entries = file.coefficients.len(),
                "Overriding revaluation coefficient table"
            );
            tables = tables.with_revaluation_coefficients(file.coefficients);
        }

        Ok(tables)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the regime metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the calculator settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the reference tables in effect.
    pub fn tables(&self) -> &ReferenceTables {
        self.config.tables()
    }
}
