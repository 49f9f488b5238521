//! Whole-record attendance summary and absentee detection.

use std::collections::BTreeSet;

use crate::config::AttendancePolicy;
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

use super::attendance_percentage::StatusTally;
use super::attendance_standing::attendance_standing;

/// Summarizes all of a student's records into one overall percentage and standing.
///
/// Uses the same counting rule as the monthly breakdown: absent is the only
/// status that does not count as attended.
///
/// # Example
///
/// ```
/// use campus_engine::calculation::summarize_attendance;
/// use campus_engine::config::AttendancePolicy;
/// use campus_engine::models::{AttendanceRecord, AttendanceStanding, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let records = vec![
///     AttendanceRecord {
///         student_id: "stu_001".to_string(),
///         subject: "CS101".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///         status: AttendanceStatus::Present,
///     },
///     AttendanceRecord {
///         student_id: "stu_001".to_string(),
///         subject: "CS101".to_string(),
///         date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
///         status: AttendanceStatus::Absent,
///     },
/// ];
///
/// let summary = summarize_attendance(&records, &AttendancePolicy::default());
/// assert_eq!(summary.attendance_percentage, 50);
/// assert_eq!(summary.standing, AttendanceStanding::NeedsImprovement);
/// ```
pub fn summarize_attendance(
    records: &[AttendanceRecord],
    policy: &AttendancePolicy,
) -> AttendanceSummary {
    let tally: StatusTally = records.iter().map(|record| record.status).collect();
    let attendance_percentage = tally.percentage();

    AttendanceSummary {
        total_classes: tally.total(),
        attended_count: tally.attended(),
        absent_count: tally.absent,
        attendance_percentage,
        standing: attendance_standing(attendance_percentage, policy),
    }
}

/// Returns the students marked absent in one session, sorted and de-duplicated.
///
/// Sports and extra-curricular marks are excused and never reported.
pub fn detect_absentees(session_records: &[AttendanceRecord]) -> Vec<String> {
    session_records
        .iter()
        .filter(|record| record.status == AttendanceStatus::Absent)
        .map(|record| record.student_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
