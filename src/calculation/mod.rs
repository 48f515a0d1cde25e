//! Calculation logic for the NLAT compensation engine.
//!
//! This module contains the benefit calculators for workplace accidents
//! under Lei 98/2009: the three permanent-incapacity pensions with their
//! redemption capital and accrued amounts, multi-period temporary
//! incapacity indemnities, the high-incapacity subsidy, annual pension
//! revaluation, and survivor benefits for fatal accidents. The date
//! arithmetic they share (nearest-birthday ages, inclusive day counts) is
//! exposed as well.

mod absolute_habitual;
mod absolute_total;
mod dates;
mod fatal_accident;
mod high_incapacity_subsidy;
mod partial_permanent;
mod pension_revaluation;
mod permanent;
mod temporary_incapacity;
mod validation;

pub use absolute_habitual::{
    HABITUAL_BASE_FACTOR, HABITUAL_CEILING_FACTOR, calculate_absolute_permanent_habitual,
};
pub use absolute_total::calculate_absolute_permanent_total;
pub use dates::{
    AgeForRate, DAYS_PER_YEAR, age_at, age_for_rate, anniversary, inclusive_days, pension_due,
    pension_start_date,
};
pub use fatal_accident::{
    CONCURRENT_ASCENDANTS_CAP, EX_SPOUSE_SHARE, SPOUSE_SHARE_OVER_RETIREMENT,
    SPOUSE_SHARE_UNDER_RETIREMENT, SURVIVOR_CAP, ascendants_share, calculate_fatal_accident,
    children_share, spouse_share,
};
pub use high_incapacity_subsidy::{
    IAS_MULTIPLIER, PARTIAL_MINIMUM_PERCENTAGE, SUBSIDY_MONTHS, calculate_high_incapacity_subsidy,
};
pub use partial_permanent::{PARTIAL_PENSION_FACTOR, calculate_partial_permanent};
pub use pension_revaluation::calculate_pension_revaluation;
pub use permanent::REDEMPTION_TABLE_CLAUSE;
pub use temporary_incapacity::{
    EXTENDED_RATE_THRESHOLD_DAYS, TEMPORARY_BASE_RATE, TEMPORARY_EXTENDED_RATE,
    absolute_period_compensation, calculate_temporary_incapacity, partial_period_compensation,
};
pub use validation::MAX_AMOUNT;

pub(crate) use temporary_incapacity::{check_period, ensure_period_order};
