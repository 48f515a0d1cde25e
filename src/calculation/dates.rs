//! Age and date arithmetic.
//!
//! This module computes ages at a reference date, applies the
//! nearest-birthday convention used for redemption-table lookups, and
//! counts inclusive calendar days for accruals and indemnity periods.
//!
//! ## Nearest-birthday rule
//!
//! The redemption table is entered with the age at the birthday nearest to
//! the reference date. The completed age is rounded up only when the next
//! anniversary is *strictly* closer than the last one, so an exact tie keeps
//! the completed age.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Days in the year used to derive daily amounts from annual ones.
pub const DAYS_PER_YEAR: i64 = 365;

/// The outcome of applying the nearest-birthday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeForRate {
    /// Age in completed years at the reference date.
    pub completed_age: u32,
    /// Age to use for the redemption-table lookup.
    pub age_for_rate: u32,
    /// Days elapsed since the most recent anniversary.
    pub days_since_last_birthday: i64,
    /// Days remaining until the next anniversary.
    pub days_to_next_birthday: i64,
}

impl AgeForRate {
    /// Returns true if the age was rounded up to the next birthday.
    pub fn rounded_up(&self) -> bool {
        self.age_for_rate > self.completed_age
    }
}

/// Returns the birthday anniversary falling in `year`.
///
/// A 29 February birthday falls on 1 March in non-leap years.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::anniversary;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
/// assert_eq!(anniversary(birth, 2023), NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
/// assert_eq!(anniversary(birth, 2024), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn anniversary(birth: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birth)
}

/// Returns the age in completed years at `reference`.
///
/// Returns 0 when `reference` is not after `birth`.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::age_at;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1980, 5, 20).unwrap();
/// assert_eq!(age_at(birth, NaiveDate::from_ymd_opt(2024, 5, 19).unwrap()), 43);
/// assert_eq!(age_at(birth, NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()), 44);
/// ```
pub fn age_at(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Applies the nearest-birthday rule at `reference`.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::age_for_rate;
/// use chrono::NaiveDate;
///
/// // 182 days after the 30th birthday, 183 days before the 31st: no rounding.
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let result = age_for_rate(birth, NaiveDate::from_ymd_opt(2030, 7, 2).unwrap());
/// assert_eq!(result.completed_age, 30);
/// assert_eq!(result.age_for_rate, 30);
/// ```
pub fn age_for_rate(birth: NaiveDate, reference: NaiveDate) -> AgeForRate {
    let completed_age = age_at(birth, reference);

    let mut last_birthday = anniversary(birth, reference.year());
    if last_birthday > reference {
        last_birthday = anniversary(birth, reference.year() - 1);
    }
    let next_birthday = anniversary(birth, last_birthday.year() + 1);

    let days_since_last_birthday = (reference - last_birthday).num_days();
    let days_to_next_birthday = (next_birthday - reference).num_days();

    let age_for_rate = if days_to_next_birthday < days_since_last_birthday {
        completed_age + 1
    } else {
        completed_age
    };

    AgeForRate {
        completed_age,
        age_for_rate,
        days_since_last_birthday,
        days_to_next_birthday,
    }
}

/// Counts the calendar days from `start` to `end`, both inclusive.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns the first day of pension entitlement: the day after discharge.
pub fn pension_start_date(discharge: NaiveDate) -> EngineResult<NaiveDate> {
    discharge
        .succ_opt()
        .ok_or_else(|| EngineError::invalid("discharge_date", "date is out of the supported range"))
}

/// Computes the pension accrued from `start` up to and including `today`.
///
/// Returns the number of accrued days and the amount, which is zero when
/// `today` is before `start`.
///
/// # Examples
///
/// ```
/// use nlat_engine::calculation::pension_due;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// let (days, due) = pension_due(Decimal::new(3650, 0), start, today);
/// assert_eq!(days, 10);
/// assert_eq!(due, Decimal::new(100, 0));
/// ```
pub fn pension_due(annual_pension: Decimal, start: NaiveDate, today: NaiveDate) -> (i64, Decimal) {
    if today < start {
        return (0, Decimal::ZERO);
    }
    let days = inclusive_days(start, today);
    let daily_pension = annual_pension / Decimal::from(DAYS_PER_YEAR);
    (days, Decimal::from(days) * daily_pension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_age_at_before_and_on_birthday() {
        let birth = date("1990-06-15");
        assert_eq!(age_at(birth, date("2020-06-14")), 29);
        assert_eq!(age_at(birth, date("2020-06-15")), 30);
        assert_eq!(age_at(birth, date("2020-12-31")), 30);
    }

    #[test]
    fn test_age_at_reference_before_birth_is_zero() {
        assert_eq!(age_at(date("2000-01-01"), date("1999-01-01")), 0);
    }

    #[test]
    fn test_age_for_rate_rounds_up_when_next_birthday_is_closer() {
        let birth = date("1980-05-20");
        // 2024-03-10: 295 days since 2023-05-20, 71 days to 2024-05-20.
        let result = age_for_rate(birth, date("2024-03-10"));
        assert_eq!(result.completed_age, 43);
        assert_eq!(result.age_for_rate, 44);
        assert!(result.rounded_up());
    }

    #[test]
    fn test_age_for_rate_keeps_age_when_last_birthday_is_closer() {
        let birth = date("1980-05-20");
        let result = age_for_rate(birth, date("2024-07-01"));
        assert_eq!(result.completed_age, 44);
        assert_eq!(result.age_for_rate, 44);
        assert!(!result.rounded_up());
    }

    #[test]
    fn test_age_for_rate_182_vs_183_days_does_not_round_up() {
        let result = age_for_rate(date("2000-01-01"), date("2030-07-02"));
        assert_eq!(result.days_since_last_birthday, 182);
        assert_eq!(result.days_to_next_birthday, 183);
        assert_eq!(result.age_for_rate, 30);
    }

    #[test]
    fn test_age_for_rate_exact_tie_does_not_round_up() {
        // 2027-07-01 to 2028-07-01 spans 29 Feb 2028, so 2027-12-31 is 183 days from each.
        let result = age_for_rate(date("2000-07-01"), date("2027-12-31"));
        assert_eq!(result.days_since_last_birthday, 183);
        assert_eq!(result.days_to_next_birthday, 183);
        assert_eq!(result.completed_age, 27);
        assert_eq!(result.age_for_rate, 27);
    }

    #[test]
    fn test_age_for_rate_one_day_past_tie_rounds_up() {
        let result = age_for_rate(date("2000-07-01"), date("2028-01-01"));
        assert_eq!(result.days_since_last_birthday, 184);
        assert_eq!(result.days_to_next_birthday, 182);
        assert_eq!(result.age_for_rate, 28);
    }

    #[test]
    fn test_age_for_rate_on_birthday() {
        let result = age_for_rate(date("1970-03-03"), date("2020-03-03"));
        assert_eq!(result.days_since_last_birthday, 0);
        assert_eq!(result.age_for_rate, 50);
    }

    #[test]
    fn test_leap_day_birth_in_common_year() {
        let birth = date("2000-02-29");
        assert_eq!(age_at(birth, date("2023-02-28")), 22);
        assert_eq!(age_at(birth, date("2023-03-01")), 23);
        let result = age_for_rate(birth, date("2023-03-01"));
        assert_eq!(result.days_since_last_birthday, 0);
    }

    #[test]
    fn test_inclusive_days() {
        assert_eq!(inclusive_days(date("2024-01-01"), date("2024-01-01")), 1);
        assert_eq!(inclusive_days(date("2023-01-01"), date("2023-12-31")), 365);
        assert_eq!(inclusive_days(date("2024-01-01"), date("2024-12-31")), 366);
    }

    #[test]
    fn test_pension_start_date_is_next_day() {
        assert_eq!(pension_start_date(date("2024-12-31")).unwrap(), date("2025-01-01"));
    }

    #[test]
    fn test_pension_due_zero_before_start() {
        let (days, due) = pension_due(Decimal::new(1000, 0), date("2025-01-02"), date("2025-01-01"));
        assert_eq!(days, 0);
        assert_eq!(due, Decimal::ZERO);
    }

    #[test]
    fn test_pension_due_counts_start_day() {
        let (days, due) = pension_due(Decimal::new(365, 0), date("2025-01-01"), date("2025-01-01"));
        assert_eq!(days, 1);
        assert_eq!(due, Decimal::ONE);
    }
}
