//! Response types for the Payroll Engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, ValidationError};
use crate::models::{AuditStep, DueDateInfo, EmployeeId, ObligationDue, PayrollResult};

/// Body returned by `/payroll/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollPreviewResponse {
    /// Unique id for this computation.
    pub calculation_id: Uuid,
    /// When the computation ran.
    pub timestamp: DateTime<Utc>,
    /// Crate version that produced the result.
    pub engine_version: String,
    /// The employee the preview was requested for, if given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    /// Label of the rules snapshot used.
    pub rules_version: String,
    /// The breakdown.
    pub result: PayrollResult,
    /// Step-by-step explanation of the breakdown.
    pub audit_trace: Vec<AuditStep>,
}

/// Body returned by the due-date endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DueDateResponse {
    /// The period or tax year asked about.
    pub period: String,
    /// Deadline and urgency.
    pub due: DueDateInfo,
    /// Human-readable status line.
    pub status: String,
    /// The individual obligations due on this deadline.
    pub obligations: Vec<ObligationDue>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
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
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::Validation(ValidationError::ConfigurationGap { previous, next, .. }) => {
                let brackets = if previous == next {
                    format!("bracket {}", previous)
                } else {
                    format!("brackets {} and {}", previous, next)
                };
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIGURATION_GAP",
                        message,
                        format!("Fix PAYE {} in the stored rules", brackets),
                    ),
                }
            }
            EngineError::Validation(_) => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    message,
                    "Remittance periods take the form YYYY-MM",
                ),
            },
            EngineError::InvalidTaxYear { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TAX_YEAR", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_negative_amount_maps_to_bad_request() {
        let engine_error: EngineError = ValidationError::NegativeAmount {
            field: "basic_salary".to_string(),
            value: Decimal::new(-1, 0),
        }
        .into();
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("basic_salary"));
    }

    #[test]
    fn test_configuration_gap_maps_to_server_error() {
        let engine_error: EngineError = ValidationError::ConfigurationGap {
            previous: 2,
            next: 3,
            message: "gap".to_string(),
        }
        .into();
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIGURATION_GAP");
        assert!(api_error.error.details.unwrap().contains("2 and 3"));
    }

    #[test]
    fn test_table_end_gap_names_single_bracket() {
        let engine_error: EngineError = ValidationError::ConfigurationGap {
            previous: 0,
            next: 0,
            message: "gap before bracket 0: table starts at 100 instead of 0".to_string(),
        }
        .into();
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(
            api_error.error.details.as_deref(),
            Some("Fix PAYE bracket 0 in the stored rules")
        );
    }

    #[test]
    fn test_oversized_amount_maps_to_bad_request() {
        let engine_error: EngineError = ValidationError::AmountOutOfRange {
            field: "bonuses".to_string(),
            max: crate::models::MAX_AMOUNT,
        }
        .into();
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_invalid_period_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidPeriod {
            period: "2025-13".to_string(),
            message: "month must be between 01 and 12".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PERIOD");
    }
}
