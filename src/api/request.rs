//! Request types for the campus engine API.
//!
//! This module defines the JSON request structures for each endpoint and the
//! precondition checks the API applies before handing data to the engines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, LeaveApplication, LeaveStatus};

/// Longest leave, in inclusive days, a single application may span.
pub const MAX_LEAVE_DAYS: i64 = 366;

/// Request body for the `/leave-stats` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveStatsRequest {
    /// The faculty member the statistics are for.
    pub faculty_id: String,
    /// The year to report on; defaults to the current UTC year.
    #[serde(default)]
    pub reference_year: Option<i32>,
    /// The faculty member's leave applications, in any workflow status.
    pub leaves: Vec<LeaveApplicationRequest>,
}

/// Leave application information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplicationRequest {
    /// Unique identifier for the application.
    pub id: String,
    /// The faculty member who applied.
    pub faculty_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Current workflow stage.
    pub status: LeaveStatus,
    /// Free-text reason supplied by the applicant.
    #[serde(default)]
    pub reason: Option<String>,
}

/// Request body for the `/attendance/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    /// The student the records belong to.
    pub student_id: String,
    /// The student's attendance records.
    pub records: Vec<AttendanceRecordRequest>,
}

/// Request body for the `/attendance/absentees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbsenteeRequest {
    /// The marks taken in one session.
    pub records: Vec<AttendanceRecordRequest>,
}

/// Attendance record information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// The student the mark belongs to.
    pub student_id: String,
    /// The subject or session code.
    #[serde(default)]
    pub subject: String,
    /// The date of the session.
    pub date: NaiveDate,
    /// The mark.
    pub status: AttendanceStatus,
}

impl From<LeaveApplicationRequest> for LeaveApplication {
    fn from(req: LeaveApplicationRequest) -> Self {
        LeaveApplication {
            id: req.id,
            faculty_id: req.faculty_id,
            start_date: req.start_date,
            end_date: req.end_date,
            status: req.status,
            reason: req.reason,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            student_id: req.student_id,
            subject: req.subject,
            date: req.date,
            status: req.status,
        }
    }
}

impl LeaveStatsRequest {
    /// Checks that every leave belongs to the requested faculty member and
    /// has a non-reversed date range of at most [`MAX_LEAVE_DAYS`].
    pub fn validate(&self) -> EngineResult<()> {
        for leave in &self.leaves {
            if leave.faculty_id != self.faculty_id {
                return Err(EngineError::InvalidLeave {
                    leave_id: leave.id.clone(),
                    message: format!(
                        "belongs to faculty '{}', not '{}'",
                        leave.faculty_id, self.faculty_id
                    ),
                });
            }
            if leave.end_date < leave.start_date {
                return Err(EngineError::InvalidLeave {
                    leave_id: leave.id.clone(),
                    message: format!(
                        "end_date {} is before start_date {}",
                        leave.end_date, leave.start_date
                    ),
                });
            }
            let span_days = (leave.end_date - leave.start_date).num_days() + 1;
            if span_days > MAX_LEAVE_DAYS {
                return Err(EngineError::InvalidLeave {
                    leave_id: leave.id.clone(),
                    message: format!(
                        "spans {} days, more than the {} day limit",
                        span_days, MAX_LEAVE_DAYS
                    ),
                });
            }
        }
        Ok(())
    }
}

impl AttendanceRequest {
    /// Checks that every record belongs to the requested student.
    pub fn validate(&self) -> EngineResult<()> {
        match self
            .records
            .iter()
            .find(|record| record.student_id != self.student_id)
        {
            Some(record) => Err(EngineError::InvalidAttendance {
                student_id: record.student_id.clone(),
                date: record.date,
                message: format!("record does not belong to student '{}'", self.student_id),
            }),
            None => Ok(()),
        }
    }
}
