//! Core data models for the compensation engine.
//!
//! This module contains the claim records accepted by the calculators and
//! the result records they produce.

mod calculation_result;
mod calculator;
mod claim;
mod fatal;
mod period;
mod subsidy;

pub use calculation_result::{
    AuditStep, CalculationEnvelope, FatalAccidentResult, HighIncapacitySubsidyResult,
    PensionResult, PeriodResult, RevaluationResult, RevaluationRow, TemporaryIncapacityResult,
};
pub use calculator::CalculatorKind;
pub use claim::{Dependents, WorkerClaim};
pub use fatal::{AscendantScenario, Beneficiary, BeneficiaryKind, FatalAccidentClaim, SpouseScenario};
pub use period::{IncapacityType, Period, TemporaryIncapacityClaim};
pub use subsidy::{HighIncapacityClaim, HighIncapacityScenario, PensionRevaluationClaim};
