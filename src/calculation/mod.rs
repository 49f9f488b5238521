//! Calculation logic for the campus engine.
//!
//! This module contains the two engines and the rules they are built from:
//! leave day attribution to months, the monthly leave cap with its
//! loss-of-pay split, the annual leave quota, monthly attendance
//! aggregation, percentage rounding, attendance standing classification and
//! absentee detection.

mod annual_quota;
mod attendance_percentage;
mod attendance_standing;
mod attendance_summary;
mod calendar;
mod leave_attribution;
mod leave_stats;
mod monthly_attendance;
mod monthly_cap;

pub use annual_quota::{AnnualQuotaResult, apply_annual_quota};
pub use attendance_percentage::{StatusTally, attendance_percentage};
pub use attendance_standing::{attendance_standing, attendance_status_label};
pub use attendance_summary::{detect_absentees, summarize_attendance};
pub use calendar::{MONTHS_PER_YEAR, month_bounds, month_name};
pub use leave_attribution::{LeaveAttributionResult, attribute_leave_days};
pub use leave_stats::{calculate_leave_report, compute_leave_stats, current_reference_year};
pub use monthly_attendance::compute_monthly_attendance;
pub use monthly_cap::{MonthlyCapResult, apply_monthly_cap};
