//! HTTP request handlers for the campus engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! handlers act as the engines' caller: they validate ownership and date
//! ranges, keep only approved leaves, and pick the reference year.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    attendance_standing, calculate_leave_report, compute_monthly_attendance,
    current_reference_year, detect_absentees, summarize_attendance,
};
use crate::error::EngineError;
use crate::models::{AttendanceRecord, LeaveApplication, approved_only};

use super::request::{AbsenteeRequest, AttendanceRequest, LeaveStatsRequest};
use super::response::{
    AbsenteeResponse, ApiError, ApiErrorResponse, AttendanceResponse, LeaveStatsResponse,
    MonthlyAttendanceView,
};
use super::state::AppState;

const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave-stats", post(leave_stats_handler))
        .route("/attendance/monthly", post(monthly_attendance_handler))
        .route("/attendance/absentees", post(absentees_handler))
        .with_state(state)
}

/// Handler for POST /leave-stats.
async fn leave_stats_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveStatsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave stats request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let reference_year = request.reference_year.unwrap_or_else(current_reference_year);
    let faculty_id = request.faculty_id;
    let submitted = request.leaves.len();
    let leaves: Vec<LeaveApplication> = request.leaves.into_iter().map(Into::into).collect();
    let approved = approved_only(&leaves);

    let policy = state.config().leave_policy();
    let report = calculate_leave_report(&approved, reference_year, policy);

    for warning in &report.audit_trace.warnings {
        warn!(
            correlation_id = %correlation_id,
            code = %warning.code,
            "{}", warning.message
        );
    }

    info!(
        correlation_id = %correlation_id,
        faculty_id = %faculty_id,
        reference_year,
        submitted,
        approved = approved.len(),
        total_leaves_used = report.stats.total_leaves_used,
        total_lop = report.stats.total_lop,
        duration_us = start_time.elapsed().as_micros(),
        "Leave stats calculated"
    );

    json_response(
        StatusCode::OK,
        LeaveStatsResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            faculty_id,
            reference_year: report.reference_year,
            approved_leaves: approved.len(),
            stats: report.stats,
            audit_trace: report.audit_trace,
        },
    )
}

/// Handler for POST /attendance/monthly.
async fn monthly_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly attendance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let student_id = request.student_id;
    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();
    let policy = state.config().attendance_policy();

    let months: Vec<MonthlyAttendanceView> = compute_monthly_attendance(&records)
        .into_iter()
        .map(|attendance| {
            let standing = attendance_standing(attendance.attendance_percentage, policy);
            MonthlyAttendanceView {
                attendance,
                standing,
                standing_label: standing.label().to_string(),
            }
        })
        .collect();
    let summary = summarize_attendance(&records, policy);

    info!(
        correlation_id = %correlation_id,
        student_id = %student_id,
        records = records.len(),
        months = months.len(),
        attendance_percentage = summary.attendance_percentage,
        duration_us = start_time.elapsed().as_micros(),
        "Monthly attendance calculated"
    );

    json_response(
        StatusCode::OK,
        AttendanceResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            student_id,
            months,
            summary,
        },
    )
}

/// Handler for POST /attendance/absentees.
async fn absentees_handler(payload: Result<Json<AbsenteeRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();
    let absentees = detect_absentees(&records);

    info!(
        correlation_id = %correlation_id,
        marked = records.len(),
        absent = absentees.len(),
        "Absentees detected"
    );

    json_response(
        StatusCode::OK,
        AbsenteeResponse {
            absent_count: absentees.len(),
            absentees,
        },
    )
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request rejected"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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
    json_response(StatusCode::BAD_REQUEST, error)
}
