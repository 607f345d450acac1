//! HTTP API module for the payroll ledger.
//!
//! This module exposes the record store, balance engine and report
//! assembler over REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NotifyRequest, RangeQuery};
pub use response::{ApiError, ApiErrorResponse, SummaryResponse};
pub use state::AppState;
