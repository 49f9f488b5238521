//! Leave application model and its approval workflow.
//!
//! A leave application moves through a committee review and then a
//! principal review. Only applications that reach [`LeaveStatus::Approved`]
//! are fed to the leave accrual engine.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The workflow stage of a leave application.
///
/// # Example
///
/// ```
/// use campus_engine::models::{LeaveStatus, ReviewDecision};
///
/// let status = LeaveStatus::PendingCommittee
///     .apply(ReviewDecision::Approve)
///     .unwrap()
///     .apply(ReviewDecision::Approve)
///     .unwrap();
/// assert_eq!(status, LeaveStatus::Approved);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting the committee review.
    PendingCommittee,
    /// Approved by the committee and awaiting the principal.
    PendingPrincipal,
    /// Approved by the principal. Terminal.
    Approved,
    /// Rejected at the committee stage. Terminal.
    RejectedByCommittee,
    /// Rejected at the principal stage. Terminal.
    RejectedByPrincipal,
}

/// A reviewer's decision on a pending leave application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Forward the application to the next stage.
    Approve,
    /// Reject the application at the current stage.
    Reject,
}

impl LeaveStatus {
    /// The status every newly submitted application starts in.
    pub const INITIAL: LeaveStatus = LeaveStatus::PendingCommittee;

    /// Applies a review decision and returns the next status.
    ///
    /// Terminal statuses accept no further decisions and return
    /// [`EngineError::InvalidTransition`].
    pub fn apply(self, decision: ReviewDecision) -> EngineResult<LeaveStatus> {
        match (self, decision) {
            (LeaveStatus::PendingCommittee, ReviewDecision::Approve) => {
                Ok(LeaveStatus::PendingPrincipal)
            }
            (LeaveStatus::PendingCommittee, ReviewDecision::Reject) => {
                Ok(LeaveStatus::RejectedByCommittee)
            }
            (LeaveStatus::PendingPrincipal, ReviewDecision::Approve) => Ok(LeaveStatus::Approved),
            (LeaveStatus::PendingPrincipal, ReviewDecision::Reject) => {
                Ok(LeaveStatus::RejectedByPrincipal)
            }
            (status, decision) => Err(EngineError::InvalidTransition { status, decision }),
        }
    }

    /// Returns true while the application still awaits a review.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            LeaveStatus::PendingCommittee | LeaveStatus::PendingPrincipal
        )
    }

    /// Returns true once no further review is possible.
    pub fn is_terminal(self) -> bool {
        !self.is_pending()
    }

    /// Returns true for the approved terminal state.
    pub fn is_approved(self) -> bool {
        self == LeaveStatus::Approved
    }

    /// Returns true for either rejected terminal state.
    pub fn is_rejected(self) -> bool {
        matches!(
            self,
            LeaveStatus::RejectedByCommittee | LeaveStatus::RejectedByPrincipal
        )
    }

    /// The snake_case wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::PendingCommittee => "pending_committee",
            LeaveStatus::PendingPrincipal => "pending_principal",
            LeaveStatus::Approved => "approved",
            LeaveStatus::RejectedByCommittee => "rejected_by_committee",
            LeaveStatus::RejectedByPrincipal => "rejected_by_principal",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewDecision::Approve => f.write_str("approve"),
            ReviewDecision::Reject => f.write_str("reject"),
        }
    }
}

/// A leave application submitted by a faculty member.
///
/// The date range is inclusive on both ends.
///
/// # Example
///
/// ```
/// use campus_engine::models::{LeaveApplication, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveApplication {
///     id: "leave_001".to_string(),
///     faculty_id: "fac_007".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     status: LeaveStatus::Approved,
///     reason: None,
/// };
/// assert_eq!(leave.day_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
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

impl LeaveApplication {
    /// Number of leave days in the inclusive date range.
    ///
    /// A reversed range violates the caller's precondition and counts as zero days.
    pub fn day_count(&self) -> u32 {
        let span = (self.end_date - self.start_date).num_days();
        if span < 0 {
            0
        } else {
            u32::try_from(span + 1).unwrap_or(u32::MAX)
        }
    }

    /// Returns true when `end_date` is before `start_date`.
    pub fn is_reversed(&self) -> bool {
        self.end_date < self.start_date
    }

    /// The calendar year the leave starts in.
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }
}

/// Keeps only the approved applications, the set the accrual engine consumes.
pub fn approved_only(leaves: &[LeaveApplication]) -> Vec<LeaveApplication> {
    leaves
        .iter()
        .filter(|leave| leave.status.is_approved())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_leave(id: &str, start: &str, end: &str, status: LeaveStatus) -> LeaveApplication {
        LeaveApplication {
            id: id.to_string(),
            faculty_id: "fac_001".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status,
            reason: None,
        }
    }

    /// LA-001: single-day leave counts one day
    #[test]
    fn test_single_day_leave_counts_one_day() {
        let leave = make_leave("l1", "2025-01-10", "2025-01-10", LeaveStatus::Approved);
        assert_eq!(leave.day_count(), 1);
    }

    /// LA-002: inclusive range
    #[test]
    fn test_multi_day_leave_is_inclusive() {
        let leave = make_leave("l1", "2025-03-05", "2025-03-07", LeaveStatus::Approved);
        assert_eq!(leave.day_count(), 3);
    }

    /// LA-003: range across a month boundary
    #[test]
    fn test_leave_across_month_boundary() {
        let leave = make_leave("l1", "2025-01-30", "2025-02-02", LeaveStatus::Approved);
        assert_eq!(leave.day_count(), 4);
    }

    /// LA-004: reversed range never goes negative
    #[test]
    fn test_reversed_range_counts_zero() {
        let leave = make_leave("l1", "2025-01-10", "2025-01-08", LeaveStatus::Approved);
        assert!(leave.is_reversed());
        assert_eq!(leave.day_count(), 0);
    }

    #[test]
    fn test_calendar_wide_range_fits_day_count() {
        let leave = LeaveApplication {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
            ..make_leave("l1", "2025-01-01", "2025-01-01", LeaveStatus::Approved)
        };
        let expected = (NaiveDate::MAX - NaiveDate::MIN).num_days() + 1;
        assert_eq!(i64::from(leave.day_count()), expected);
    }

    #[test]
    fn test_leap_day_range() {
        let leave = make_leave("l1", "2024-02-28", "2024-03-01", LeaveStatus::Approved);
        assert_eq!(leave.day_count(), 3);
    }

    #[test]
    fn test_workflow_committee_then_principal_approval() {
        let status = LeaveStatus::INITIAL;
        assert!(status.is_pending());

        let status = status.apply(ReviewDecision::Approve).unwrap();
        assert_eq!(status, LeaveStatus::PendingPrincipal);

        let status = status.apply(ReviewDecision::Approve).unwrap();
        assert_eq!(status, LeaveStatus::Approved);
        assert!(status.is_terminal());
        assert!(status.is_approved());
    }

    #[test]
    fn test_workflow_committee_rejection() {
        let status = LeaveStatus::PendingCommittee
            .apply(ReviewDecision::Reject)
            .unwrap();
        assert_eq!(status, LeaveStatus::RejectedByCommittee);
        assert!(status.is_rejected());
    }

    #[test]
    fn test_workflow_principal_rejection() {
        let status = LeaveStatus::PendingPrincipal
            .apply(ReviewDecision::Reject)
            .unwrap();
        assert_eq!(status, LeaveStatus::RejectedByPrincipal);
        assert!(status.is_rejected());
        assert!(!status.is_approved());
    }

    #[test]
    fn test_terminal_states_reject_decisions() {
        for status in [
            LeaveStatus::Approved,
            LeaveStatus::RejectedByCommittee,
            LeaveStatus::RejectedByPrincipal,
        ] {
            for decision in [ReviewDecision::Approve, ReviewDecision::Reject] {
                match status.apply(decision) {
                    Err(EngineError::InvalidTransition {
                        status: s,
                        decision: d,
                    }) => {
                        assert_eq!(s, status);
                        assert_eq!(d, decision);
                    }
                    other => panic!("Expected InvalidTransition, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_approved_only_filters_other_statuses() {
        let leaves = vec![
            make_leave("l1", "2025-01-02", "2025-01-02", LeaveStatus::Approved),
            make_leave("l2", "2025-01-03", "2025-01-03", LeaveStatus::PendingCommittee),
            make_leave("l3", "2025-01-04", "2025-01-04", LeaveStatus::PendingPrincipal),
            make_leave("l4", "2025-01-05", "2025-01-05", LeaveStatus::RejectedByPrincipal),
            make_leave("l5", "2025-01-06", "2025-01-06", LeaveStatus::Approved),
        ];

        let approved = approved_only(&leaves);
        let ids: Vec<&str> = approved.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l5"]);
    }

    #[test]
    fn test_status_display_matches_serde_name() {
        for status in [
            LeaveStatus::PendingCommittee,
            LeaveStatus::PendingPrincipal,
            LeaveStatus::Approved,
            LeaveStatus::RejectedByCommittee,
            LeaveStatus::RejectedByPrincipal,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_leave_deserialization_without_reason() {
        let json = r#"{
            "id": "leave_001",
            "faculty_id": "fac_001",
            "start_date": "2025-01-02",
            "end_date": "2025-01-03",
            "status": "approved"
        }"#;

        let leave: LeaveApplication = serde_json::from_str(json).unwrap();
        assert_eq!(leave.status, LeaveStatus::Approved);
        assert_eq!(leave.reason, None);
        assert_eq!(leave.day_count(), 2);
    }
}
