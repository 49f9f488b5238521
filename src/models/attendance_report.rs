//! Attendance aggregates produced by the aggregation engine.

use serde::{Deserialize, Serialize};

/// How a student's attendance percentage is classified.
///
/// # Example
///
/// ```
/// use campus_engine::models::AttendanceStanding;
///
/// assert_eq!(AttendanceStanding::NeedsImprovement.label(), "Needs Improvement");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStanding {
    /// At or above the excellent threshold.
    Excellent,
    /// At or above the good threshold.
    Good,
    /// Below the good threshold.
    NeedsImprovement,
}

impl AttendanceStanding {
    /// The human-readable label shown next to a percentage.
    pub fn label(self) -> &'static str {
        match self {
            AttendanceStanding::Excellent => "Excellent",
            AttendanceStanding::Good => "Good",
            AttendanceStanding::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Attendance totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendance {
    /// Calendar year.
    pub year: i32,
    /// Zero-based month index (January = 0).
    pub month: u32,
    /// Long English month name.
    pub month_name: String,
    /// Sessions marked in the month.
    pub total_classes: u32,
    /// Sessions marked present.
    pub present_count: u32,
    /// Sessions marked absent.
    pub absent_count: u32,
    /// Sessions excused for sports.
    pub sports_count: u32,
    /// Sessions excused for extra-curricular activities.
    pub ec_count: u32,
    /// Rounded percentage of attended sessions, excused included.
    pub attendance_percentage: u32,
}

/// Attendance totals across every record of a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// All sessions marked.
    pub total_classes: u32,
    /// Sessions that count toward the percentage.
    pub attended_count: u32,
    /// Sessions marked absent.
    pub absent_count: u32,
    /// Rounded overall percentage.
    pub attendance_percentage: u32,
    /// Classification of the overall percentage.
    pub standing: AttendanceStanding,
}
