//! Configuration loading and management for the compensation engine.
//!
//! This module loads engine metadata, calculator settings and optional
//! reference-table overrides from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use nlat_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nlat").unwrap();
//! println!("Reference year: {}", config.settings().reference_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, EngineFile, EngineMetadata, EngineSettings, IasFile, RedemptionRatesFile,
    RevaluationCoefficientsFile,
};
