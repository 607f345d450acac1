//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the ledger can surface: configuration problems,
//! rejected input records, impossible date ranges and inconsistent data.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// Validation failures (`MissingField`, `InvalidNumber`, `InvalidDate`) are
/// raised where raw input is accepted and block the write. Computation
/// failures are surfaced to the caller rather than producing a zeroed report.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::LedgerError;
///
/// let error = LedgerError::MissingField {
///     record: "work_record".to_string(),
///     field: "price".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing or unparseable field 'price' on work_record");
/// assert!(error.is_validation_error());
/// ```
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required field was blank, absent or could not be read as a value.
    #[error("Missing or unparseable field '{field}' on {record}")]
    MissingField {
        /// The kind of record being validated (e.g. "work_record").
        record: String,
        /// The offending field.
        field: String,
    },

    /// A numeric field was not finite or was negative where it must not be.
    #[error("Invalid number for '{field}' on {record}: {message}")]
    InvalidNumber {
        /// The kind of record being validated.
        record: String,
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date field was not a valid calendar date.
    #[error("Invalid date for '{field}' on {record}: '{value}'")]
    InvalidDate {
        /// The kind of record being validated.
        record: String,
        /// The offending field.
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A date range had its start after its end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A computation referenced an employee the store does not know.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The missing employee id.
        employee_id: String,
    },

    /// Records or operations did not match the employee they were applied to.
    #[error("Data inconsistency for employee '{employee_id}': {message}")]
    EmployeeMismatch {
        /// The employee the operation was applied to.
        employee_id: String,
        /// A description of the mismatch.
        message: String,
    },

    /// A ledger record id was not found.
    #[error("Record not found: {record_id}")]
    RecordNotFound {
        /// The missing record id.
        record_id: String,
    },

    /// Stored data could not be decoded into a valid ledger record, or its
    /// totals do not fit in a `Decimal`.
    #[error("Stored data failed integrity check: {message}")]
    DataIntegrity {
        /// A description of the failure.
        message: String,
    },

    /// The notification gateway refused or failed to deliver a message.
    #[error("Notification to '{destination}' failed: {message}")]
    NotificationFailed {
        /// The destination the message was addressed to.
        destination: String,
        /// The gateway's error description.
        message: String,
    },
}

impl LedgerError {
    /// A `DataIntegrity` error for a money total that does not fit in a
    /// `Decimal`.
    pub fn overflow(what: &str) -> Self {
        LedgerError::DataIntegrity {
            message: format!("{} exceeds the representable amount", what),
        }
    }

    /// Returns true for errors raised while validating raw input records.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LedgerError::MissingField { .. }
                | LedgerError::InvalidNumber { .. }
                | LedgerError::InvalidDate { .. }
        )
    }

    /// Returns true when referenced data is missing or does not line up.
    pub fn is_data_inconsistency(&self) -> bool {
        matches!(
            self,
            LedgerError::EmployeeNotFound { .. } | LedgerError::EmployeeMismatch { .. }
        )
    }

    /// Returns the offending field name for validation errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            LedgerError::MissingField { field, .. }
            | LedgerError::InvalidNumber { field, .. }
            | LedgerError::InvalidDate { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// A type alias for Results that return LedgerError.
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = LedgerError::ConfigNotFound {
            path: "/missing/formatting.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/formatting.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = LedgerError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_number_displays_field_and_message() {
        let error = LedgerError::InvalidNumber {
            record: "salary_payment".to_string(),
            field: "amount".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid number for 'amount' on salary_payment: must not be negative"
        );
        assert_eq!(error.field(), Some("amount"));
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = LedgerError::InvalidDate {
            record: "work_record".to_string(),
            field: "date".to_string(),
            value: "2025-02-30".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date for 'date' on work_record: '2025-02-30'"
        );
    }

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = LedgerError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start 2025-09-30 is after end 2025-09-01"
        );
        assert!(!error.is_validation_error());
    }

    #[test]
    fn test_overflow_is_a_data_integrity_error() {
        match LedgerError::overflow("payment total") {
            LedgerError::DataIntegrity { message } => {
                assert_eq!(message, "payment total exceeds the representable amount");
            }
            other => panic!("Expected DataIntegrity, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_family() {
        let missing = LedgerError::MissingField {
            record: "work_record".to_string(),
            field: "description".to_string(),
        };
        let not_found = LedgerError::EmployeeNotFound {
            employee_id: "emp_404".to_string(),
        };
        assert!(missing.is_validation_error());
        assert!(!missing.is_data_inconsistency());
        assert!(!not_found.is_validation_error());
        assert!(not_found.is_data_inconsistency());
        assert_eq!(not_found.field(), None);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<LedgerError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> LedgerResult<()> {
            Err(LedgerError::EmployeeNotFound {
                employee_id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> LedgerResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
