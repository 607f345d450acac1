//! HTTP request handlers for the payroll ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SummaryResult, summarize_employee};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateRange, Employee, EmployeeLedger, LedgerRecord, ReportSummary};
use crate::report::{PayrollOverview, ReportRecords, ReportView, assemble_report};
use crate::store::Notification;
use crate::validation::{
    AdvanceInput, EmployeeInput, OvertimeRecordInput, SalaryPaymentInput, WorkRecordInput,
    validate_advance, validate_employee, validate_overtime_record, validate_salary_payment,
    validate_work_record,
};

use super::request::{NotifyRequest, RangeQuery};
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler).put(update_employee_handler),
        )
        .route(
            "/employees/:id/work-records",
            get(list_work_records_handler).post(create_work_record_handler),
        )
        .route(
            "/employees/:id/overtime-records",
            get(list_overtime_records_handler).post(create_overtime_record_handler),
        )
        .route(
            "/employees/:id/payments",
            get(list_payments_handler).post(create_payment_handler),
        )
        .route(
            "/employees/:id/advances",
            get(list_advances_handler).post(create_advance_handler),
        )
        .route("/employees/:id/summary", get(summary_handler))
        .route("/employees/:id/report", get(report_handler))
        .route("/employees/:id/notify", post(notify_handler))
        .route("/records/:record_id", delete(delete_record_handler))
        .route("/overview", get(overview_handler))
        .with_state(state)
}

/// Turns a ledger result into a JSON response, logging the outcome.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    operation: &'static str,
    status: StatusCode,
    result: LedgerResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            info!(correlation_id = %correlation_id, operation, "Request completed");
            (status, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                operation,
                error = %err,
                "Request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Unwraps a JSON body or builds the 400 response for it.
fn json_body<T>(correlation_id: Uuid, payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error).into_response())
}

/// Unwraps a query string or builds the 400 response for it.
fn range_query(
    correlation_id: Uuid,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<RangeQuery, Response> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Query rejected");
            Err(ApiErrorResponse::bad_request(ApiError::new(
                "INVALID_QUERY",
                rejection.body_text(),
            ))
            .into_response())
        }
    }
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "organization": state.config().organization().name,
    }))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        "list_employees",
        StatusCode::OK,
        state.store().list_employees(),
    )
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Creating employee");
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let id = format!("emp_{}", Uuid::new_v4().simple());
    let result = validate_employee(&id, &input).and_then(|e| state.store().insert_employee(e));
    respond(correlation_id, "create_employee", StatusCode::CREATED, result)
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        "get_employee",
        StatusCode::OK,
        state.store().get_employee(&employee_id),
    )
}

/// Handler for PUT /employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Updating employee");
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };

    let result = validate_employee(&employee_id, &input)
        .and_then(|e| state.store().update_employee(e));
    respond(correlation_id, "update_employee", StatusCode::OK, result)
}

/// Validates then stores a record, answering 201 with the stored record.
fn store_record(
    state: &AppState,
    correlation_id: Uuid,
    operation: &'static str,
    validated: LedgerResult<LedgerRecord>,
) -> Response {
    let result = validated.and_then(|record| state.store().insert_record(record));
    if let Ok(record) = &result {
        info!(
            correlation_id = %correlation_id,
            record_id = %record.id(),
            employee_id = %record.employee_id(),
            kind = record.kind().as_str(),
            "Record stored"
        );
    }
    respond(correlation_id, operation, StatusCode::CREATED, result)
}

/// Handler for GET /employees/:id/work-records.
async fn list_work_records_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(
        Uuid::new_v4(),
        "list_work_records",
        StatusCode::OK,
        state.store().list_work_records(&employee_id),
    )
}

/// Handler for POST /employees/:id/work-records.
async fn create_work_record_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<WorkRecordInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let validated = validate_work_record(&employee_id, &input).map(LedgerRecord::WorkRecord);
    store_record(&state, correlation_id, "create_work_record", validated)
}

/// Handler for GET /employees/:id/overtime-records.
async fn list_overtime_records_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(
        Uuid::new_v4(),
        "list_overtime_records",
        StatusCode::OK,
        state.store().list_overtime_records(&employee_id),
    )
}

/// Handler for POST /employees/:id/overtime-records.
async fn create_overtime_record_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<OvertimeRecordInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let validated =
        validate_overtime_record(&employee_id, &input).map(LedgerRecord::OvertimeRecord);
    store_record(&state, correlation_id, "create_overtime_record", validated)
}

/// Handler for GET /employees/:id/payments.
async fn list_payments_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(
        Uuid::new_v4(),
        "list_payments",
        StatusCode::OK,
        state.store().list_salary_payments(&employee_id),
    )
}

/// Handler for POST /employees/:id/payments.
async fn create_payment_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<SalaryPaymentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let validated =
        validate_salary_payment(&employee_id, &input).map(LedgerRecord::SalaryPayment);
    store_record(&state, correlation_id, "create_payment", validated)
}

/// Handler for GET /employees/:id/advances.
async fn list_advances_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    respond(
        Uuid::new_v4(),
        "list_advances",
        StatusCode::OK,
        state.store().list_advances(&employee_id),
    )
}

/// Handler for POST /employees/:id/advances.
async fn create_advance_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<AdvanceInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match json_body(correlation_id, payload) {
        Ok(input) => input,
        Err(response) => return response,
    };
    let validated = validate_advance(&employee_id, &input).map(LedgerRecord::Advance);
    store_record(&state, correlation_id, "create_advance", validated)
}

/// Handler for DELETE /records/:record_id.
async fn delete_record_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = Uuid::parse_str(&record_id)
        .map_err(|_| LedgerError::RecordNotFound {
            record_id: record_id.clone(),
        })
        .and_then(|id| state.store().delete_record(id));
    respond(correlation_id, "delete_record", StatusCode::OK, result)
}

/// Everything needed to render one employee's figures.
struct Computed {
    employee: Employee,
    ledger: EmployeeLedger,
    range: DateRange,
    as_of: NaiveDate,
    result: SummaryResult,
}

/// Loads an employee's ledger and runs the balance engine over it.
fn compute(state: &AppState, employee_id: &str, query: &RangeQuery) -> LedgerResult<Computed> {
    let range = query.range()?;
    let as_of = query.as_of(Utc::now().date_naive())?;
    let employee = state.store().get_employee(employee_id)?;
    let ledger = state.store().load_ledger(employee_id)?;
    let result = summarize_employee(
        &employee,
        &ledger,
        &range,
        as_of,
        state.config().period_strategy(),
    )?;

    Ok(Computed {
        employee,
        ledger,
        range,
        as_of,
        result,
    })
}

/// Handler for GET /employees/:id/summary.
async fn summary_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Computing summary");
    let query = match range_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let start_time = Instant::now();
    let result = compute(&state, &employee_id, &query).map(|computed| {
        SummaryResponse::new(
            &employee_id,
            computed.range,
            computed.as_of,
            computed.result,
        )
    });
    if let Ok(response) = &result {
        info!(
            correlation_id = %correlation_id,
            employee_id = %employee_id,
            earned = %response.summary.earned,
            paid = %response.summary.paid,
            balance = %response.summary.balance,
            duration_us = start_time.elapsed().as_micros(),
            "Summary computed"
        );
    }
    respond(correlation_id, "summary", StatusCode::OK, result)
}

/// Handler for GET /employees/:id/report.
async fn report_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Assembling report");
    let query = match range_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = compute(&state, &employee_id, &query).and_then(|computed| -> LedgerResult<ReportView> {
        let records = ReportRecords::filtered(&computed.ledger, &computed.range)?;
        assemble_report(
            query.kind.unwrap_or_default(),
            &computed.employee,
            &records,
            &computed.result,
            &computed.range,
            state.config().organization(),
            state.config().formatting(),
        )
    });
    respond(correlation_id, "report", StatusCode::OK, result)
}

/// Handler for GET /overview.
async fn overview_handler(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let query = match range_query(correlation_id, query) {
        Ok(query) => query,
        Err(response) => return response,
    };

    let result = build_overview(&state, &query);
    if let Ok(overview) = &result {
        info!(
            correlation_id = %correlation_id,
            employees = overview.rows.len(),
            outstanding = %overview.total_outstanding,
            overpaid = %overview.total_overpaid,
            "Overview computed"
        );
    }
    respond(correlation_id, "overview", StatusCode::OK, result)
}

fn build_overview(state: &AppState, query: &RangeQuery) -> LedgerResult<PayrollOverview> {
    let employees = state.store().list_employees()?;
    let summaries = employees
        .iter()
        .map(|employee| {
            compute(state, &employee.id, query).map(|computed| computed.result.summary)
        })
        .collect::<LedgerResult<Vec<ReportSummary>>>()?;

    PayrollOverview::from_summaries(employees.iter().zip(summaries))
}

/// Handler for POST /employees/:id/notify.
async fn notify_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match json_body(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state.store().get_employee(&employee_id).and_then(|employee| {
        let destination = employee
            .phone
            .filter(|phone| !phone.trim().is_empty())
            .ok_or_else(|| LedgerError::MissingField {
                record: "employee".to_string(),
                field: "phone".to_string(),
            })?;
        if request.body.trim().is_empty() {
            return Err(LedgerError::MissingField {
                record: "notification".to_string(),
                field: "body".to_string(),
            });
        }

        let notification = Notification {
            destination,
            body: request.body,
        };
        state
            .notifier()
            .send(&notification)
            .into_result(&notification.destination)
    });
    respond(correlation_id, "notify", StatusCode::OK, result)
}
