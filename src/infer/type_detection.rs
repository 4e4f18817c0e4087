//! Type detection for single field values.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::regexes::{DECIMAL_PATTERN, INTEGER_PATTERN};
use crate::field_type::Type;

const BOOLEAN_WORDS: [&str; 6] = ["true", "false", "yes", "no", "on", "off"];

/// Date-time layouts tried after RFC 3339 and RFC 2822.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%y, %I:%M %p",
    "%b %d, %Y, %I:%M:%S %p",
    "%B %d, %Y at %I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%A, %B %d, %Y",
];

const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%I:%M %p", "%I:%M:%S %p"];

/// ISO dates and times carrying a UTC offset, e.g. `2023-01-15+01:00`.
const OFFSET_DATE_FORMAT: &str = "%Y-%m-%d%:z";
const OFFSET_TIME_FORMAT: &str = "%H:%M:%S%.f%:z";

/// Classify one value.
///
/// Empty values are `Null`. Purely alphabetic values are `Boolean` or
/// `String`. Anything else is tried as (in order) a 32-bit, 64-bit and
/// unbounded integer, a finite double, an arbitrary-precision decimal, a
/// date-time, a date and a time; the first strict parse of the whole value
/// wins and `String` is the fallback.
pub fn detect_value_type(value: &str) -> Type {
    if value.is_empty() {
        return Type::Null;
    }

    if value.chars().all(char::is_alphabetic) {
        return if is_boolean(value) {
            Type::Boolean
        } else {
            Type::String
        };
    }

    if INTEGER_PATTERN.is_match(value) {
        return if value.parse::<i32>().is_ok() {
            Type::Integer
        } else if value.parse::<i64>().is_ok() {
            Type::Long
        } else {
            Type::BigInteger
        };
    }

    if DECIMAL_PATTERN.is_match(value) {
        if value.parse::<f64>().is_ok_and(f64::is_finite) {
            return Type::Double;
        }
        if BigDecimal::from_str(value).is_ok() {
            return Type::BigDecimal;
        }
    }

    if is_date_time(value) {
        Type::DateTime
    } else if is_date(value) {
        Type::Date
    } else if is_time(value) {
        Type::Time
    } else {
        Type::String
    }
}

/// Fold one more value into a column's type.
#[inline]
pub fn merge_value_type(existing: Type, value: &str) -> Type {
    existing.merge(detect_value_type(value))
}

fn is_boolean(value: &str) -> bool {
    BOOLEAN_WORDS.iter().any(|word| value.eq_ignore_ascii_case(word))
}

fn is_date_time(value: &str) -> bool {
    if !(6..=80).contains(&value.len()) {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
        || DATE_TIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

fn is_date(value: &str) -> bool {
    if !(4..=60).contains(&value.len()) {
        return false;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || parse_with_offset(value, OFFSET_DATE_FORMAT).is_some_and(|p| p.to_naive_date().is_ok())
}

fn is_time(value: &str) -> bool {
    if value.len() > 30 {
        return false;
    }
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(value, fmt).is_ok())
        || parse_with_offset(value, OFFSET_TIME_FORMAT).is_some_and(|p| p.to_naive_time().is_ok())
}

/// Parse a date or a time followed by a UTC offset, which none of the
/// `Naive*` or `DateTime` parsers accept on their own.
fn parse_with_offset(value: &str, fmt: &str) -> Option<Parsed> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value, StrftimeItems::new(fmt)).ok()?;
    parsed.to_fixed_offset().ok()?;
    Some(parsed)
}
