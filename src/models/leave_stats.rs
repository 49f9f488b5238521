//! Leave statistics produced by the accrual engine.

use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// Leave usage for one calendar month.
///
/// # Example
///
/// ```
/// use campus_engine::models::MonthlyLeaveUsage;
///
/// let usage = MonthlyLeaveUsage {
///     month: 0,
///     month_name: "January".to_string(),
///     total_days: 3,
///     leaves_used: 2,
///     lop_days: 1,
/// };
/// assert_eq!(usage.leaves_used + usage.lop_days, usage.total_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeaveUsage {
    /// Zero-based month index (January = 0).
    pub month: u32,
    /// Long English month name.
    pub month_name: String,
    /// All leave days attributed to the month.
    pub total_days: u32,
    /// Days counted against the annual quota (at most the monthly cap).
    pub leaves_used: u32,
    /// Days beyond the monthly cap, taken as loss of pay.
    pub lop_days: u32,
}

/// Annual leave statistics for one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveStats {
    /// Days counted against the annual quota.
    pub total_leaves_used: u32,
    /// Quota still available, floored at zero.
    pub remaining_leaves: u32,
    /// Total loss-of-pay days.
    pub total_lop: u32,
    /// Months with at least one leave day, in calendar order.
    pub monthly_breakdown: Vec<MonthlyLeaveUsage>,
}

impl LeaveStats {
    /// Statistics for a faculty member with no leave in the year.
    pub fn empty(annual_quota: u32) -> Self {
        Self {
            total_leaves_used: 0,
            remaining_leaves: annual_quota,
            total_lop: 0,
            monthly_breakdown: Vec::new(),
        }
    }
}

/// Leave statistics together with the rule-by-rule audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReport {
    /// The year the statistics were computed for.
    pub reference_year: i32,
    /// The computed statistics.
    pub stats: LeaveStats,
    /// How the statistics were derived.
    pub audit_trace: AuditTrace,
}
