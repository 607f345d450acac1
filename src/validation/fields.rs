//! Field-level parsing shared by every record validator.

use std::borrow::Cow;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::money::parse_record_date;

/// A raw form value: whatever the client typed, as text or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(serde_json::Number),
    /// A string, possibly blank.
    Text(String),
}

impl FieldValue {
    /// The value as trimmed text.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s.trim()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Returns the non-blank text of a field.
fn present(value: &Option<FieldValue>) -> Option<Cow<'_, str>> {
    value
        .as_ref()
        .map(FieldValue::as_text)
        .filter(|text| !text.is_empty())
}

fn missing(record: &str, field: &str) -> LedgerError {
    LedgerError::MissingField {
        record: record.to_string(),
        field: field.to_string(),
    }
}

fn invalid_number(record: &str, field: &str, message: impl Into<String>) -> LedgerError {
    LedgerError::InvalidNumber {
        record: record.to_string(),
        field: field.to_string(),
        message: message.into(),
    }
}

/// Parses a non-negative decimal from non-blank text.
///
/// Text that is not a number at all counts as missing; `NaN`, infinities and
/// negative values are invalid numbers.
fn parse_non_negative(record: &str, field: &str, text: &str) -> LedgerResult<Decimal> {
    let lowered = text.to_ascii_lowercase();
    let unsigned = lowered.trim_start_matches(['+', '-']);
    if matches!(unsigned, "nan" | "inf" | "infinity") {
        return Err(invalid_number(
            record,
            field,
            format!("'{}' is not a finite number", text),
        ));
    }

    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| missing(record, field))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid_number(
            record,
            field,
            format!("{} must not be negative", value),
        ));
    }
    Ok(value)
}

/// A required free-text field.
pub fn required_text(record: &str, field: &str, value: &Option<FieldValue>) -> LedgerResult<String> {
    present(value)
        .map(Cow::into_owned)
        .ok_or_else(|| missing(record, field))
}

/// An optional free-text field; blank becomes `None`.
pub fn optional_text(value: &Option<FieldValue>) -> Option<String> {
    present(value).map(Cow::into_owned)
}

/// A required non-negative amount.
pub fn required_amount(
    record: &str,
    field: &str,
    value: &Option<FieldValue>,
) -> LedgerResult<Decimal> {
    let text = present(value).ok_or_else(|| missing(record, field))?;
    parse_non_negative(record, field, &text)
}

/// An optional non-negative amount; blank becomes `None`.
pub fn optional_amount(
    record: &str,
    field: &str,
    value: &Option<FieldValue>,
) -> LedgerResult<Option<Decimal>> {
    present(value)
        .map(|text| parse_non_negative(record, field, &text))
        .transpose()
}

/// A required calendar date.
pub fn required_date(
    record: &str,
    field: &str,
    value: &Option<FieldValue>,
) -> LedgerResult<NaiveDate> {
    let text = present(value).ok_or_else(|| missing(record, field))?;
    parse_record_date(&text).ok_or_else(|| LedgerError::InvalidDate {
        record: record.to_string(),
        field: field.to_string(),
        value: text.into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn text(s: &str) -> Option<FieldValue> {
        Some(FieldValue::from(s))
    }

    #[test]
    fn test_field_value_deserializes_numbers_and_strings() {
        let number: FieldValue = serde_json::from_str("1500.5").unwrap();
        let string: FieldValue = serde_json::from_str("\" 1500.5 \"").unwrap();
        assert_eq!(number.as_text(), "1500.5");
        assert_eq!(string.as_text(), "1500.5");
    }

    #[test]
    fn test_required_amount_parses_text_and_numbers() {
        assert_eq!(
            required_amount("work_record", "price", &text("50")).unwrap(),
            dec("50")
        );
        assert_eq!(
            required_amount("work_record", "price", &Some(FieldValue::from(750))).unwrap(),
            dec("750")
        );
        assert_eq!(
            required_amount("work_record", "price", &text("1.5e2")).unwrap(),
            dec("150")
        );
    }

    #[test]
    fn test_blank_amount_is_missing_not_zero() {
        for value in [None, text(""), text("   ")] {
            match required_amount("work_record", "price", &value) {
                Err(LedgerError::MissingField { field, .. }) => assert_eq!(field, "price"),
                other => panic!("Expected MissingField, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unparseable_amount_is_missing() {
        match required_amount("salary_payment", "amount", &text("twelve")) {
            Err(LedgerError::MissingField { field, record }) => {
                assert_eq!(field, "amount");
                assert_eq!(record, "salary_payment");
            }
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_nan_and_infinity_are_invalid_numbers() {
        for raw in ["NaN", "inf", "-Infinity"] {
            match required_amount("work_record", "price", &text(raw)) {
                Err(LedgerError::InvalidNumber { message, .. }) => {
                    assert!(message.contains("finite"))
                }
                other => panic!("Expected InvalidNumber for {}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_negative_amount_is_invalid_number() {
        match required_amount("overtime_record", "rate", &text("-3")) {
            Err(LedgerError::InvalidNumber { field, message, .. }) => {
                assert_eq!(field, "rate");
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_and_negative_zero_are_accepted() {
        assert_eq!(
            required_amount("advance", "amount", &text("0")).unwrap(),
            Decimal::ZERO
        );
        assert!(required_amount("advance", "amount", &text("-0")).is_ok());
    }

    #[test]
    fn test_optional_amount() {
        assert_eq!(optional_amount("work_record", "quantity", &None).unwrap(), None);
        assert_eq!(
            optional_amount("work_record", "quantity", &text(" ")).unwrap(),
            None
        );
        assert_eq!(
            optional_amount("work_record", "quantity", &text("4")).unwrap(),
            Some(dec("4"))
        );
        assert!(optional_amount("work_record", "quantity", &text("-4")).is_err());
    }

    #[test]
    fn test_required_date() {
        assert_eq!(
            required_date("work_record", "date", &text("2025-09-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 15).unwrap()
        );
        match required_date("work_record", "date", &text("2025-02-30")) {
            Err(LedgerError::InvalidDate { value, .. }) => assert_eq!(value, "2025-02-30"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
        assert!(matches!(
            required_date("work_record", "date", &None),
            Err(LedgerError::MissingField { .. })
        ));
    }

    #[test]
    fn test_text_fields() {
        assert_eq!(
            required_text("work_record", "description", &text("  Framing ")).unwrap(),
            "Framing"
        );
        assert!(required_text("work_record", "description", &text("")).is_err());
        assert_eq!(optional_text(&text("")), None);
        assert_eq!(optional_text(&text("cash")), Some("cash".to_string()));
    }
}
