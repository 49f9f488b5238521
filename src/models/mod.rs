//! Core data models for the campus engine.
//!
//! This module contains the input records fetched from the document store
//! (leave applications, attendance records) and the derived aggregates the
//! engines return.

mod attendance_record;
mod attendance_report;
mod audit;
mod leave_application;
mod leave_stats;

pub use attendance_record::{AttendanceRecord, AttendanceStatus};
pub use attendance_report::{AttendanceStanding, AttendanceSummary, MonthlyAttendance};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use leave_application::{LeaveApplication, LeaveStatus, ReviewDecision, approved_only};
pub use leave_stats::{LeaveReport, LeaveStats, MonthlyLeaveUsage};
