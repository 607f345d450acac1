//! Request types for the payroll ledger API.
//!
//! Record and employee bodies reuse the raw input types from
//! [`crate::validation`]; this module holds the query strings and the
//! remaining small bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::DateRange;
use crate::money::parse_record_date;
use crate::report::ReportKind;

/// Query parameters shared by the summary, report and overview endpoints.
///
/// Dates are `YYYY-MM-DD`. A timestamp is accepted and truncated to its
/// calendar date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeQuery {
    /// Inclusive start; omitted for an open start.
    #[serde(default)]
    pub start: Option<String>,
    /// Inclusive end; omitted for an open end.
    #[serde(default)]
    pub end: Option<String>,
    /// The date open ranges are resolved against. Defaults to today.
    #[serde(default)]
    pub as_of: Option<String>,
    /// Report kind, for the report endpoint.
    #[serde(default)]
    pub kind: Option<ReportKind>,
}

fn query_date(field: &str, raw: &Option<String>) -> LedgerResult<Option<NaiveDate>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_record_date(text)
            .map(Some)
            .ok_or_else(|| LedgerError::InvalidDate {
                record: "query".to_string(),
                field: field.to_string(),
                value: text.to_string(),
            }),
    }
}

impl RangeQuery {
    /// Parses the requested range.
    ///
    /// # Errors
    ///
    /// `InvalidDate` for an unparseable bound and `InvalidRange` when the
    /// start is after the end.
    pub fn range(&self) -> LedgerResult<DateRange> {
        DateRange::new(
            query_date("start", &self.start)?,
            query_date("end", &self.end)?,
        )
    }

    /// Parses `as_of`, falling back to `today`.
    pub fn as_of(&self, today: NaiveDate) -> LedgerResult<NaiveDate> {
        Ok(query_date("as_of", &self.as_of)?.unwrap_or(today))
    }
}

/// Body for the notify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyRequest {
    /// Message text.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_query_parses_bounds() {
        let query = RangeQuery {
            start: Some("2025-09-01".to_string()),
            end: Some("2025-09-30T23:59:59Z".to_string()),
            ..RangeQuery::default()
        };
        let range = query.range().unwrap();
        assert_eq!(range.start, Some(date(2025, 9, 1)));
        assert_eq!(range.end, Some(date(2025, 9, 30)));
    }

    #[test]
    fn test_blank_bounds_are_open() {
        let query = RangeQuery {
            start: Some("".to_string()),
            ..RangeQuery::default()
        };
        assert!(query.range().unwrap().is_unbounded());
        assert_eq!(query.as_of(date(2025, 10, 18)).unwrap(), date(2025, 10, 18));
    }

    #[test]
    fn test_bad_query_date_names_field() {
        let query = RangeQuery {
            end: Some("30/09/2025".to_string()),
            ..RangeQuery::default()
        };
        match query.range() {
            Err(LedgerError::InvalidDate { field, value, .. }) => {
                assert_eq!(field, "end");
                assert_eq!(value, "30/09/2025");
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_query_range() {
        let query = RangeQuery {
            start: Some("2025-09-30".to_string()),
            end: Some("2025-09-01".to_string()),
            ..RangeQuery::default()
        };
        assert!(matches!(
            query.range(),
            Err(LedgerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_report_kind() {
        let query: RangeQuery = serde_json::from_str(r#"{"kind": "payslip"}"#).unwrap();
        assert_eq!(query.kind, Some(ReportKind::Payslip));
    }
}
