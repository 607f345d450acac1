//! Calendar date parsing and display.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::config::FormatConfig;

/// Parses a record date, truncating any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339
/// timestamps. The calendar date as written is kept; an offset is never
/// used to shift the day.
///
/// # Examples
///
/// ```
/// use payroll_ledger::money::parse_record_date;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 9, 16).unwrap();
/// assert_eq!(parse_record_date("2025-09-16"), Some(day));
/// assert_eq!(parse_record_date("2025-09-16T23:59:59.999Z"), Some(day));
/// assert_eq!(parse_record_date("2025-02-30"), None);
/// ```
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_local().date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Deserializes a stored record date through [`parse_record_date`], so
/// timestamps decode to their calendar day.
pub fn deserialize_record_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_record_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid record date '{}'", raw)))
}

/// Returns true when `pattern` is a strftime pattern chrono can render.
pub fn is_valid_date_format(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

/// Formats a date with the configured pattern.
///
/// An unrenderable pattern falls back to `YYYY-MM-DD`; the loader rejects
/// such patterns before they reach here.
pub fn format_date(date: NaiveDate, config: &FormatConfig) -> String {
    let mut out = String::new();
    if !is_valid_date_format(&config.date_format)
        || write!(out, "{}", date.format(&config.date_format)).is_err()
    {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
