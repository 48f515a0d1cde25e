//! Portuguese (pt-PT) formatting and parsing of amounts, dates and
//! percentages.
//!
//! Amounts are rounded half away from zero to cents only here, at the
//! display boundary. Currency strings follow the pt-PT conventions:
//! comma as decimal separator, a no-break space (U+00A0) to group thousands
//! once the integer part reaches five digits, and a no-break space before
//! the euro sign.
//!
//! ```
//! use nlat_engine::format::{format_currency, format_date, format_percentage};
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(format_currency(Decimal::new(12345, 1)), "1234,50\u{a0}€");
//! assert_eq!(format_currency(Decimal::new(12345678, 3)), "12\u{a0}345,68\u{a0}€");
//! assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()), "11/03/2024");
//! assert_eq!(format_percentage(Decimal::new(75, 1)), "7,5%");
//! ```

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

const NO_BREAK_SPACE: char = '\u{a0}';
const NARROW_NO_BREAK_SPACE: char = '\u{202f}';
const MIN_GROUPING_DIGITS: usize = 5;

/// Rounds an amount to cents, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn group_thousands(digits: &str) -> String {
    if digits.len() < MIN_GROUPING_DIGITS {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NO_BREAK_SPACE);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as pt-PT euros.
pub fn format_currency(value: Decimal) -> String {
    let mut rounded = round_to_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (integer, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{}{},{}{}€",
        if negative { "-" } else { "" },
        group_thousands(integer),
        cents,
        NO_BREAK_SPACE
    )
}

/// Parses a currency amount.
///
/// Accepts the output of [`format_currency`], plain or no-break spaces as
/// grouping, dot grouping (`1.234,50`) and a plain dot decimal (`1234.5`).
/// The euro sign is optional.
pub fn parse_currency(input: &str) -> EngineResult<Decimal> {
    let invalid = || EngineError::invalid("amount", format!("'{}' is not a valid amount", input));

    let cleaned: String = input
        .trim()
        .trim_end_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != NO_BREAK_SPACE && *c != NARROW_NO_BREAK_SPACE)
        .collect();
    if cleaned.is_empty() {
        return Err(invalid());
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else if is_dot_grouped(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).map_err(|_| invalid())
}

/// True for `1.234` or `12.345.678`: every dot followed by exactly three
/// digits and more than one group, or several dots.
fn is_dot_grouped(value: &str) -> bool {
    let unsigned = value.trim_start_matches('-');
    let mut groups = unsigned.split('.');
    let Some(head) = groups.next() else {
        return false;
    };
    let tail: Vec<&str> = groups.collect();
    !tail.is_empty()
        && !head.is_empty()
        && head.len() <= 3
        && tail
            .iter()
            .all(|g| g.len() == 3 && g.chars().all(|c| c.is_ascii_digit()))
}

/// Parses a decimal typed into a form field; `.` and `,` are both accepted
/// as the decimal separator.
pub fn parse_decimal(field: &str, raw: &str) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::missing(field));
    }
    Decimal::from_str(&trimmed.replace(',', "."))
        .map_err(|_| EngineError::invalid(field, format!("'{}' is not a valid number", trimmed)))
}

/// Formats a date as `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a date in ISO `yyyy-mm-dd` or pt-PT `dd/mm/yyyy` form.
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    parse_date_field("date", input)
}

/// Parses a date for a named form field.
pub fn parse_date_field(field: &str, raw: &str) -> EngineResult<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::missing(field));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .map_err(|_| EngineError::invalid(field, format!("'{}' is not a valid date", trimmed)))
}

/// Formats a percentage with up to two decimals, for example `7,5%`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{}%", rounded.to_string().replace('.', ","))
}
