//! Attendance record model.
//!
//! One record is created when faculty marks a student for a single class
//! session. Records are immutable once written.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The attendance mark for one student in one session.
///
/// `Sports` and `Ec` (extra-curricular) are excused absences: the student was
/// not in class but the session still counts toward their percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Attended the session.
    Present,
    /// Missed the session without an excuse.
    Absent,
    /// Away on sports duty.
    Sports,
    /// Away on an extra-curricular activity.
    Ec,
}

impl AttendanceStatus {
    /// Every status, in wire order.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Sports,
        AttendanceStatus::Ec,
    ];

    /// Returns true for statuses that count toward the attendance percentage.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_engine::models::AttendanceStatus;
    ///
    /// assert!(AttendanceStatus::Sports.counts_as_attended());
    /// assert!(!AttendanceStatus::Absent.counts_as_attended());
    /// ```
    pub fn counts_as_attended(self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// A single attendance mark.
///
/// # Example
///
/// ```
/// use campus_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
///
/// let record = AttendanceRecord {
///     student_id: "stu_001".to_string(),
///     subject: "CS101".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     status: AttendanceStatus::Present,
/// };
/// assert_eq!(record.year_month(), (2025, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The student the mark belongs to.
    pub student_id: String,
    /// The subject or session code the mark was taken in.
    #[serde(default)]
    pub subject: String,
    /// The date of the session.
    pub date: NaiveDate,
    /// The mark.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// The `(year, zero-based month)` bucket this record falls in.
    pub fn year_month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month0())
    }
}
