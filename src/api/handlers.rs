//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payroll, explain_payroll};
use crate::compliance::{
    annual_due_date_on, annual_obligations, monthly_due_date_on, monthly_obligations,
};
use crate::models::{CompensationInput, RemittancePeriod};

use super::request::PayrollPreviewRequest;
use super::response::{ApiError, ApiErrorResponse, DueDateResponse, PayrollPreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/preview", post(preview_handler))
        .route("/compliance/monthly/:period", get(monthly_handler))
        .route("/compliance/annual/:tax_year", get(annual_handler))
        .with_state(state)
}

/// Handler for POST /payroll/preview.
///
/// Computes the breakdown for one employee against the server's rules
/// snapshot and returns it with its audit trace.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollPreviewRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let employee_id = request.employee_id.clone();
    let input: CompensationInput = request.into();
    let rules = state.rules();

    let start_time = Instant::now();
    match compute_payroll(&input, rules) {
        Ok(result) => {
            let audit_trace = explain_payroll(&input, rules, &result);
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = employee_id.as_ref().map(|id| id.as_str()).unwrap_or("-"),
                gross_pay = %result.gross_pay,
                net_pay = %result.net_pay,
                duration_us = duration.as_micros(),
                "Payroll preview completed"
            );
            if result.is_net_negative() {
                warn!(
                    correlation_id = %correlation_id,
                    net_pay = %result.net_pay,
                    "Deductions exceed gross pay"
                );
            }

            let response = PayrollPreviewResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee_id,
                rules_version: rules.version().to_string(),
                result,
                audit_trace,
            };
            json_ok(response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll preview failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /compliance/monthly/{period}.
async fn monthly_handler(State(state): State<AppState>, Path(period): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let period: RemittancePeriod = match period.parse() {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected remittance period");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let today = state.today();
    let due = monthly_due_date_on(period, today);
    info!(
        correlation_id = %correlation_id,
        period = %period,
        due_date = %due.due_date,
        days_remaining = due.days_remaining,
        "Monthly deadline resolved"
    );

    json_ok(DueDateResponse {
        period: period.to_string(),
        status: due.status_text(),
        due,
        obligations: monthly_obligations(period, today),
    })
}

/// Handler for GET /compliance/annual/{tax_year}.
async fn annual_handler(State(state): State<AppState>, Path(tax_year): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();

    let Ok(year) = tax_year.parse::<i32>() else {
        warn!(correlation_id = %correlation_id, tax_year = %tax_year, "Rejected tax year");
        return ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::with_details(
                "INVALID_TAX_YEAR",
                format!("Invalid tax year: {}", tax_year),
                "Tax years are whole calendar years such as 2024",
            ),
        }
        .into_response();
    };

    let today = state.today();
    let resolved = annual_due_date_on(year, today)
        .and_then(|due| annual_obligations(year, today).map(|obligations| (due, obligations)));

    match resolved {
        Ok((due, obligations)) => {
            info!(
                correlation_id = %correlation_id,
                tax_year = year,
                due_date = %due.due_date,
                days_remaining = due.days_remaining,
                "Annual deadline resolved"
            );
            json_ok(DueDateResponse {
                period: year.to_string(),
                status: due.status_text(),
                due,
                obligations,
            })
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Annual deadline failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps a body extraction failure onto a 400 with a stable error code.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Missing fields and wrongly typed values are the caller's data, not syntax
            let lowered = body_text.to_ascii_lowercase();
            if lowered.contains("missing field") || lowered.contains("invalid") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
