//! Compensation engine for Portuguese workplace-accident claims
//!
//! This crate implements the indemnity and pension calculators of the
//! workplace-accident regime (Lei n.º 98/2009, NLAT): permanent
//! incapacity pensions and their redemption capital, temporary
//! incapacity indemnities, the high-incapacity subsidy, pension
//! revaluation, and survivor pensions after a fatal accident.
//!
//! Every calculation returns a result record with an audit trail citing
//! the legal provision applied at each step.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod tables;
pub mod telemetry;
