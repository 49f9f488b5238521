//! Attendance aggregation engine.
//!
//! Groups one student's attendance records by calendar month and computes
//! per-month counts and an attendance percentage in which sports and
//! extra-curricular sessions count as attended.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::models::{AttendanceRecord, MonthlyAttendance};

use super::attendance_percentage::StatusTally;
use super::calendar::month_name;

/// Aggregates attendance records into one entry per `(year, month)`.
///
/// Only months with at least one record appear. Entries are ordered most
/// recent first. Every record is counted in exactly one entry and one status.
///
/// # Example
///
/// ```
/// use campus_engine::calculation::compute_monthly_attendance;
/// use campus_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = |month: u32, status: AttendanceStatus| AttendanceRecord {
///     student_id: "stu_001".to_string(),
///     subject: "CS101".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, month, 10).unwrap(),
///     status,
/// };
///
/// let months = compute_monthly_attendance(&[
///     record(3, AttendanceStatus::Present),
///     record(7, AttendanceStatus::Absent),
///     record(7, AttendanceStatus::Sports),
/// ]);
///
/// assert_eq!(months.len(), 2);
/// assert_eq!(months[0].month_name, "July");
/// assert_eq!(months[0].attendance_percentage, 50);
/// assert_eq!(months[1].month_name, "March");
/// ```
pub fn compute_monthly_attendance(records: &[AttendanceRecord]) -> Vec<MonthlyAttendance> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut buckets: BTreeMap<Reverse<(i32, u32)>, StatusTally> = BTreeMap::new();
    for record in records {
        buckets
            .entry(Reverse(record.year_month()))
            .or_default()
            .record(record.status);
    }

    buckets
        .into_iter()
        .map(|(Reverse((year, month)), tally)| MonthlyAttendance {
            year,
            month,
            month_name: month_name(month).to_string(),
            total_classes: tally.total(),
            present_count: tally.present,
            absent_count: tally.absent,
            sports_count: tally.sports,
            ec_count: tally.ec,
            attendance_percentage: tally.percentage(),
        })
        .collect()
}
