//! Response types for the payroll ledger API.
//!
//! This module defines the JSON bodies returned by the handlers and the
//! mapping from [`LedgerError`] to HTTP error responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{EarningsBreakdown, SummaryResult};
use crate::error::LedgerError;
use crate::models::{AuditStep, BalanceStatus, DateRange, ReportSummary};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// The offending input field, for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<LedgerError> for ApiErrorResponse {
    fn from(error: LedgerError) -> Self {
        let message = error.to_string();
        let field = error.field().map(str::to_string);

        let (status, code) = match &error {
            LedgerError::ConfigNotFound { .. } | LedgerError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            LedgerError::MissingField { .. } => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            LedgerError::InvalidNumber { .. } => (StatusCode::BAD_REQUEST, "INVALID_NUMBER"),
            LedgerError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            LedgerError::InvalidRange { .. } => (StatusCode::BAD_REQUEST, "INVALID_RANGE"),
            LedgerError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            LedgerError::RecordNotFound { .. } => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            LedgerError::EmployeeMismatch { .. } => (StatusCode::CONFLICT, "DATA_INCONSISTENCY"),
            LedgerError::DataIntegrity { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DATA_INTEGRITY")
            }
            LedgerError::NotificationFailed { .. } => {
                (StatusCode::BAD_GATEWAY, "NOTIFICATION_FAILED")
            }
        };

        let details = if error.is_validation_error() {
            Some("The record was not saved".to_string())
        } else {
            None
        };

        ApiErrorResponse {
            status,
            error: ApiError {
                code: code.to_string(),
                message,
                field,
                details,
            },
        }
    }
}

/// Body returned by the summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The employee summarised.
    pub employee_id: String,
    /// The range requested.
    pub range: DateRange,
    /// The date open range ends resolved to.
    pub as_of: NaiveDate,
    /// Earned, paid and balance.
    pub summary: ReportSummary,
    /// Balance direction.
    pub status: BalanceStatus,
    /// What the earned figure is made of.
    pub breakdown: EarningsBreakdown,
    /// The computation's audit trail.
    pub audit_steps: Vec<AuditStep>,
}

impl SummaryResponse {
    /// Packs a computed summary for the wire.
    pub fn new(employee_id: &str, range: DateRange, as_of: NaiveDate, result: SummaryResult) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            range,
            as_of,
            status: result.summary.status(),
            summary: result.summary,
            breakdown: result.breakdown,
            audit_steps: result.audit_steps,
        }
    }
}
