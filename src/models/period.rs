//! Temporary incapacity period model.
//!
//! This module defines the [`Period`] and [`TemporaryIncapacityClaim`] types
//! used by the multi-period temporary incapacity calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a temporary incapacity period is absolute (ITA) or partial (ITP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncapacityType {
    /// Absolute temporary incapacity.
    #[default]
    Absolute,
    /// Partial temporary incapacity; carries a percentage.
    Partial,
}

impl IncapacityType {
    /// Returns the serialized identifier of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            IncapacityType::Absolute => "absolute",
            IncapacityType::Partial => "partial",
        }
    }
}

/// A date range of temporary incapacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of incapacity (inclusive).
    pub start_date: NaiveDate,
    /// Last day of incapacity (inclusive). Must be after the start date.
    pub end_date: NaiveDate,
    /// Absolute or partial incapacity.
    pub incapacity_type: IncapacityType,
    /// Incapacity percentage, required for partial periods.
    #[serde(default)]
    pub incapacity_percentage: Option<Decimal>,
}

impl Period {
    /// Returns the number of calendar days covered, counting both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use nlat_engine::models::{IncapacityType, Period};
    /// use chrono::NaiveDate;
    ///
    /// let period = Period {
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    ///     incapacity_type: IncapacityType::Absolute,
    ///     incapacity_percentage: None,
    /// };
    /// assert_eq!(period.inclusive_days(), 31);
    /// ```
    pub fn inclusive_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// A claim for temporary incapacity indemnities over one or more periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporaryIncapacityClaim {
    /// The injured worker's name (display only).
    pub worker_name: String,
    /// Annual gross remuneration, in euros.
    pub annual_remuneration: Decimal,
    /// Incapacity periods, in the order they were reported.
    pub periods: Vec<Period>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_inclusive_days_across_leap_day() {
        let period = Period {
            start_date: date("2024-02-28"),
            end_date: date("2024-03-01"),
            incapacity_type: IncapacityType::Absolute,
            incapacity_percentage: None,
        };
        assert_eq!(period.inclusive_days(), 3);
    }

    #[test]
    fn test_deserialize_partial_period() {
        let json = r#"{
            "start_date": "2024-01-01",
            "end_date": "2024-02-15",
            "incapacity_type": "partial",
            "incapacity_percentage": "25"
        }"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert_eq!(period.incapacity_type, IncapacityType::Partial);
        assert_eq!(period.incapacity_percentage, Some(Decimal::new(25, 0)));
    }
}
