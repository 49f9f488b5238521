//! Response types for the campus engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendanceStanding, AttendanceSummary, AuditTrace, LeaveStats, MonthlyAttendance,
};

/// Response body for the `/leave-stats` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveStatsResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The faculty member the statistics are for.
    pub faculty_id: String,
    /// The year the statistics cover.
    pub reference_year: i32,
    /// Number of approved leaves passed to the engine.
    pub approved_leaves: usize,
    /// The computed statistics.
    pub stats: LeaveStats,
    /// How the statistics were derived.
    pub audit_trace: AuditTrace,
}

/// One month of attendance with its standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAttendanceView {
    /// The month's totals.
    #[serde(flatten)]
    pub attendance: MonthlyAttendance,
    /// Classification of the month's percentage.
    pub standing: AttendanceStanding,
    /// Display label for the standing.
    pub standing_label: String,
}

/// Response body for the `/attendance/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The student the records belong to.
    pub student_id: String,
    /// Months with records, most recent first.
    pub months: Vec<MonthlyAttendanceView>,
    /// Totals across all records.
    pub summary: AttendanceSummary,
}

/// Response body for the `/attendance/absentees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenteeResponse {
    /// Students marked absent, sorted.
    pub absentees: Vec<String>,
    /// Number of students marked absent.
    pub absent_count: usize,
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
            EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid policy", message),
            },
            EngineError::InvalidLeave { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_LEAVE",
                    message,
                    "The leave data contains invalid information",
                ),
            },
            EngineError::InvalidAttendance { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ATTENDANCE",
                    message,
                    "The attendance data contains invalid information",
                ),
            },
            EngineError::InvalidTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_TRANSITION", message),
            },
        }
    }
}
