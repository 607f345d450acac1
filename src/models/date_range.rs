//! Date range model.
//!
//! This module contains [`DateRange`], the possibly open-ended window that
//! every ledger query and summary is computed over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// An inclusive calendar date range, open on either side when a bound is `None`.
///
/// Bounds are calendar dates, so an end bound covers the whole of its day.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::DateRange;
/// use chrono::NaiveDate;
///
/// let september = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 9, 1),
///     NaiveDate::from_ymd_opt(2025, 9, 30),
/// )?;
///
/// assert!(september.contains(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())); // start date
/// assert!(september.contains(NaiveDate::from_ymd_opt(2025, 9, 30).unwrap())); // end date
/// assert!(!september.contains(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())); // after
/// assert!(DateRange::unbounded().contains(NaiveDate::MIN));
/// # Ok::<(), payroll_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DateRange {
    /// The first date included, if bounded.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// The last date included, if bounded.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates a range, rejecting a start that falls after the end.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> LedgerResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// A range with both bounds closed.
    pub fn between(start: NaiveDate, end: NaiveDate) -> LedgerResult<Self> {
        Self::new(Some(start), Some(end))
    }

    /// A range that matches every date.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Checks the start is not after the end when both are given.
    ///
    /// Ranges built with struct literal syntax or deserialized from requests
    /// bypass [`DateRange::new`]; the engine calls this before filtering.
    pub fn validate(&self) -> LedgerResult<()> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => {
                Err(LedgerError::InvalidRange { start, end })
            }
            _ => Ok(()),
        }
    }

    /// Checks if a given date falls within this range, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// Returns true when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true when `other` lies entirely inside this range.
    pub fn covers(&self, other: &DateRange) -> bool {
        let start_ok = match (self.start, other.start) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(mine), Some(theirs)) => mine <= theirs,
        };
        let end_ok = match (self.end, other.end) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(mine), Some(theirs)) => mine >= theirs,
        };
        start_ok && end_ok
    }

    /// Closes open bounds: a missing start becomes `default_start` and a
    /// missing end becomes `as_of`.
    pub fn resolve(&self, default_start: NaiveDate, as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
        (self.start.unwrap_or(default_start), self.end.unwrap_or(as_of))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = DateRange::new(Some(date(2025, 9, 30)), Some(date(2025, 9, 1)));
        match result {
            Err(LedgerError::InvalidRange { start, end }) => {
                assert_eq!(start, date(2025, 9, 30));
                assert_eq!(end, date(2025, 9, 1));
            }
            other => panic!("Expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let range = DateRange::between(date(2025, 9, 16), date(2025, 9, 16)).unwrap();
        assert!(range.contains(date(2025, 9, 16)));
        assert!(!range.contains(date(2025, 9, 15)));
        assert!(!range.contains(date(2025, 9, 17)));
    }

    #[test]
    fn test_open_start() {
        let range = DateRange::new(None, Some(date(2025, 9, 15))).unwrap();
        assert!(range.contains(date(1999, 1, 1)));
        assert!(range.contains(date(2025, 9, 15)));
        assert!(!range.contains(date(2025, 9, 16)));
    }

    #[test]
    fn test_open_end() {
        let range = DateRange::new(Some(date(2025, 9, 15)), None).unwrap();
        assert!(!range.contains(date(2025, 9, 14)));
        assert!(range.contains(date(2099, 12, 31)));
    }

    #[test]
    fn test_unbounded_matches_everything() {
        let range = DateRange::unbounded();
        assert!(range.is_unbounded());
        assert!(range.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_validate_catches_literal_construction() {
        let range = DateRange {
            start: Some(date(2025, 10, 1)),
            end: Some(date(2025, 9, 1)),
        };
        assert!(range.validate().is_err());
    }

    #[test]
    fn test_covers() {
        let september = DateRange::between(date(2025, 9, 1), date(2025, 9, 30)).unwrap();
        let mid = DateRange::between(date(2025, 9, 10), date(2025, 9, 20)).unwrap();
        assert!(september.covers(&mid));
        assert!(!mid.covers(&september));
        assert!(DateRange::unbounded().covers(&september));
        assert!(!september.covers(&DateRange::unbounded()));
    }

    #[test]
    fn test_resolve_fills_open_bounds() {
        let range = DateRange::new(None, None).unwrap();
        assert_eq!(
            range.resolve(date(2024, 1, 1), date(2025, 9, 30)),
            (date(2024, 1, 1), date(2025, 9, 30))
        );

        let closed = DateRange::between(date(2025, 9, 1), date(2025, 9, 15)).unwrap();
        assert_eq!(
            closed.resolve(date(2024, 1, 1), date(2025, 9, 30)),
            (date(2025, 9, 1), date(2025, 9, 15))
        );
    }

    #[test]
    fn test_deserialize_partial_range() {
        let range: DateRange = serde_json::from_str(r#"{"start": "2025-09-01"}"#).unwrap();
        assert_eq!(range.start, Some(date(2025, 9, 1)));
        assert_eq!(range.end, None);
    }
}
