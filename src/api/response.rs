//! Response types for the payroll engine API.
//!
//! This module defines the working-days response body, the error response
//! structures and the mapping from engine errors to HTTP errors.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditWarning, Holiday, WorkingDaysSummary};

/// Response body for `GET /working-days/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingDaysResponse {
    /// The requested year.
    pub year: i32,
    /// Orthodox Easter Sunday for the year.
    pub easter: NaiveDate,
    /// Legal holidays, fixed first then movable.
    pub holidays: Vec<Holiday>,
    /// Holiday names keyed by zero-based month, in date order.
    pub holidays_by_month: BTreeMap<u32, Vec<String>>,
    /// Per-month working-day table with annual totals.
    pub summary: WorkingDaysSummary,
    /// Accuracy and coincidence warnings.
    pub warnings: Vec<AuditWarning>,
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

    /// Creates a fiscal year not found error response.
    pub fn fiscal_year_not_found(year: i32) -> Self {
        Self::with_details(
            "FISCAL_YEAR_NOT_FOUND",
            format!("No fiscal year configuration effective for {}", year),
            "The requested year precedes every configured fiscal year",
        )
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
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration",
                    format!("{}: {}", field, message),
                ),
            },
            EngineError::FiscalYearNotFound { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::fiscal_year_not_found(year),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input '{}': {}", field, message),
                    "The request contains an invalid value",
                ),
            },
            EngineError::DateOutOfRange { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "DATE_OUT_OF_RANGE",
                    format!("Year {} is outside the representable calendar range", year),
                    "Use a year the calendar can represent (about -262000 to 262000)",
                ),
            },
        }
    }
}
