//! Attendance standing classification.

use crate::config::AttendancePolicy;
use crate::models::AttendanceStanding;

/// Classifies a percentage against the policy thresholds.
///
/// Both thresholds are inclusive lower bounds.
///
/// # Example
///
/// ```
/// use campus_engine::calculation::attendance_standing;
/// use campus_engine::config::AttendancePolicy;
/// use campus_engine::models::AttendanceStanding;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(attendance_standing(85, &policy), AttendanceStanding::Excellent);
/// assert_eq!(attendance_standing(84, &policy), AttendanceStanding::Good);
/// assert_eq!(attendance_standing(74, &policy), AttendanceStanding::NeedsImprovement);
/// ```
pub fn attendance_standing(percentage: u32, policy: &AttendancePolicy) -> AttendanceStanding {
    if percentage >= policy.excellent_threshold {
        AttendanceStanding::Excellent
    } else if percentage >= policy.good_threshold {
        AttendanceStanding::Good
    } else {
        AttendanceStanding::NeedsImprovement
    }
}

/// The display label for a percentage: "Excellent", "Good" or "Needs Improvement".
pub fn attendance_status_label(percentage: u32, policy: &AttendancePolicy) -> &'static str {
    attendance_standing(percentage, policy).label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = AttendancePolicy::default();

        assert_eq!(attendance_status_label(100, &policy), "Excellent");
        assert_eq!(attendance_status_label(85, &policy), "Excellent");
        assert_eq!(attendance_status_label(84, &policy), "Good");
        assert_eq!(attendance_status_label(75, &policy), "Good");
        assert_eq!(attendance_status_label(74, &policy), "Needs Improvement");
        assert_eq!(attendance_status_label(0, &policy), "Needs Improvement");
    }

    #[test]
    fn test_custom_thresholds() {
        let policy = AttendancePolicy {
            excellent_threshold: 90,
            good_threshold: 60,
        };

        assert_eq!(attendance_standing(89, &policy), AttendanceStanding::Good);
        assert_eq!(attendance_standing(60, &policy), AttendanceStanding::Good);
        assert_eq!(
            attendance_standing(59, &policy),
            AttendanceStanding::NeedsImprovement
        );
    }
}
