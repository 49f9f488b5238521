//! Attendance counting and percentage rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AttendanceStatus;

/// Per-status counts for a set of attendance records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusTally {
    /// Sessions marked present.
    pub present: u32,
    /// Sessions marked absent.
    pub absent: u32,
    /// Sessions excused for sports.
    pub sports: u32,
    /// Sessions excused for extra-curricular activities.
    pub ec: u32,
}

impl StatusTally {
    /// Counts one more record with `status`.
    pub fn record(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Sports => self.sports += 1,
            AttendanceStatus::Ec => self.ec += 1,
        }
    }

    /// Sessions counted with `status`.
    pub fn count(&self, status: AttendanceStatus) -> u32 {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Sports => self.sports,
            AttendanceStatus::Ec => self.ec,
        }
    }

    /// All sessions counted.
    pub fn total(&self) -> u32 {
        AttendanceStatus::ALL
            .iter()
            .map(|status| self.count(*status))
            .sum()
    }

    /// Sessions that count toward the percentage: present plus excused.
    pub fn attended(&self) -> u32 {
        AttendanceStatus::ALL
            .iter()
            .filter(|status| status.counts_as_attended())
            .map(|status| self.count(*status))
            .sum()
    }

    /// The rounded attendance percentage for this tally.
    pub fn percentage(&self) -> u32 {
        attendance_percentage(self.attended(), self.total())
    }
}

impl FromIterator<AttendanceStatus> for StatusTally {
    fn from_iter<I: IntoIterator<Item = AttendanceStatus>>(iter: I) -> Self {
        let mut tally = StatusTally::default();
        for status in iter {
            tally.record(status);
        }
        tally
    }
}

/// Returns `attended / total * 100` rounded half-up to a whole percent.
///
/// Returns 0 when `total` is 0.
///
/// # Examples
///
/// ```
/// use campus_engine::calculation::attendance_percentage;
///
/// assert_eq!(attendance_percentage(9, 10), 90);
/// assert_eq!(attendance_percentage(1, 8), 13); // 12.5 rounds up
/// assert_eq!(attendance_percentage(2, 3), 67);
/// assert_eq!(attendance_percentage(0, 0), 0);
/// ```
pub fn attendance_percentage(attended: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }

    let ratio = Decimal::from(attended) * Decimal::ONE_HUNDRED / Decimal::from(total);
    ratio
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}
