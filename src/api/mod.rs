//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST endpoints for previewing a payroll
//! breakdown and for querying statutory remittance deadlines.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollPreviewRequest;
pub use response::{ApiError, ApiErrorResponse, DueDateResponse, PayrollPreviewResponse};
pub use state::AppState;
