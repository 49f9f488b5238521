//! Leave accrual engine.
//!
//! Turns one faculty member's approved leave applications into annual
//! statistics: ordinary days used, quota remaining and loss-of-pay days,
//! with a per-month breakdown.

use std::time::Instant;

use chrono::{Datelike, Utc};

use crate::config::LeavePolicy;
use crate::models::{AuditTrace, LeaveApplication, LeaveReport, LeaveStats};

use super::annual_quota::apply_annual_quota;
use super::leave_attribution::attribute_leave_days;
use super::monthly_cap::apply_monthly_cap;

/// The current calendar year in UTC, used when a caller supplies no reference year.
pub fn current_reference_year() -> i32 {
    Utc::now().year()
}

/// Computes leave statistics for `reference_year`.
///
/// `approved_leaves` must already be restricted to one faculty member's
/// approved applications. The result satisfies
/// `total_leaves_used + total_lop == ` the number of leave days attributed to
/// the year.
///
/// # Example
///
/// ```
/// use campus_engine::calculation::compute_leave_stats;
/// use campus_engine::config::LeavePolicy;
/// use campus_engine::models::{LeaveApplication, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = |id: &str, start: (u32, u32), end: (u32, u32)| LeaveApplication {
///     id: id.to_string(),
///     faculty_id: "fac_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, start.0, start.1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, end.0, end.1).unwrap(),
///     status: LeaveStatus::Approved,
///     reason: None,
/// };
///
/// let leaves = vec![
///     leave("a", (1, 2), (1, 3)),
///     leave("b", (1, 10), (1, 10)),
///     leave("c", (3, 5), (3, 7)),
/// ];
///
/// let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());
/// assert_eq!(stats.total_leaves_used, 4);
/// assert_eq!(stats.total_lop, 2);
/// assert_eq!(stats.remaining_leaves, 8);
/// ```
pub fn compute_leave_stats(
    approved_leaves: &[LeaveApplication],
    reference_year: i32,
    policy: &LeavePolicy,
) -> LeaveStats {
    calculate_leave_report(approved_leaves, reference_year, policy).stats
}

/// Computes leave statistics together with the audit trace of every rule applied.
///
/// Steps are recorded in order: one attribution step per leave, one cap step
/// per month with leave, then the annual quota step.
pub fn calculate_leave_report(
    approved_leaves: &[LeaveApplication],
    reference_year: i32,
    policy: &LeavePolicy,
) -> LeaveReport {
    let start_time = Instant::now();
    let mut step_number: u32 = 1;

    let attribution = attribute_leave_days(
        approved_leaves,
        reference_year,
        policy.month_attribution,
        step_number,
    );
    step_number += attribution.audit_steps.len() as u32;

    let mut audit_steps = attribution.audit_steps;
    let mut monthly_breakdown = Vec::new();
    let mut total_leaves_used: u32 = 0;
    let mut total_lop: u32 = 0;

    for (month0, &total_days) in attribution.monthly_days.iter().enumerate() {
        if total_days == 0 {
            continue;
        }

        let cap_result =
            apply_monthly_cap(month0 as u32, total_days, policy.monthly_cap, step_number);
        step_number += 1;

        total_leaves_used = total_leaves_used.saturating_add(cap_result.usage.leaves_used);
        total_lop = total_lop.saturating_add(cap_result.usage.lop_days);
        audit_steps.push(cap_result.audit_step);
        monthly_breakdown.push(cap_result.usage);
    }

    let quota_result = apply_annual_quota(total_leaves_used, policy.annual_quota, step_number);
    audit_steps.push(quota_result.audit_step);

    let stats = LeaveStats {
        total_leaves_used,
        remaining_leaves: quota_result.remaining_leaves,
        total_lop,
        monthly_breakdown,
    };

    LeaveReport {
        reference_year,
        stats,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings: attribution.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MonthAttribution;
    use crate::models::LeaveStatus;
    use chrono::NaiveDate;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_leave(id: &str, start: &str, end: &str) -> LeaveApplication {
        LeaveApplication {
            id: id.to_string(),
            faculty_id: "fac_001".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            status: LeaveStatus::Approved,
            reason: None,
        }
    }

    fn split_policy() -> LeavePolicy {
        LeavePolicy {
            month_attribution: MonthAttribution::SplitAcrossMonths,
            ..LeavePolicy::default()
        }
    }

    // ==========================================================================
    // LS-001: no leave at all
    // ==========================================================================
    #[test]
    fn test_ls_001_empty_input() {
        let stats = compute_leave_stats(&[], 2025, &LeavePolicy::default());
        assert_eq!(stats, LeaveStats::empty(12));
    }

    // ==========================================================================
    // LS-002: three leaves over two months
    // ==========================================================================
    #[test]
    fn test_ls_002_end_to_end_scenario() {
        let leaves = vec![
            make_leave("l1", "2025-01-02", "2025-01-03"),
            make_leave("l2", "2025-01-10", "2025-01-10"),
            make_leave("l3", "2025-03-05", "2025-03-07"),
        ];

        let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());

        assert_eq!(stats.monthly_breakdown.len(), 2);

        let january = &stats.monthly_breakdown[0];
        assert_eq!(january.month, 0);
        assert_eq!(january.month_name, "January");
        assert_eq!(january.total_days, 3);
        assert_eq!(january.leaves_used, 2);
        assert_eq!(january.lop_days, 1);

        let march = &stats.monthly_breakdown[1];
        assert_eq!(march.month, 2);
        assert_eq!(march.month_name, "March");
        assert_eq!(march.total_days, 3);
        assert_eq!(march.leaves_used, 2);
        assert_eq!(march.lop_days, 1);

        assert_eq!(stats.total_leaves_used, 4);
        assert_eq!(stats.total_lop, 2);
        assert_eq!(stats.remaining_leaves, 8);
    }

    // ==========================================================================
    // LS-003: five days in one month
    // ==========================================================================
    #[test]
    fn test_ls_003_cap_enforcement() {
        let leaves = vec![make_leave("l1", "2025-06-02", "2025-06-06")];
        let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());

        assert_eq!(stats.monthly_breakdown[0].leaves_used, 2);
        assert_eq!(stats.monthly_breakdown[0].lop_days, 3);
        assert_eq!(stats.total_leaves_used, 2);
        assert_eq!(stats.total_lop, 3);
        assert_eq!(stats.remaining_leaves, 10);
    }

    // ==========================================================================
    // LS-004: quota floor
    // ==========================================================================
    #[test]
    fn test_ls_004_remaining_never_negative() {
        let policy = LeavePolicy {
            annual_quota: 12,
            monthly_cap: 3,
            month_attribution: MonthAttribution::StartMonth,
        };
        let leaves: Vec<LeaveApplication> = (1..=6)
            .map(|month| {
                make_leave(
                    &format!("l{}", month),
                    &format!("2025-{:02}-01", month),
                    &format!("2025-{:02}-03", month),
                )
            })
            .collect();

        let stats = compute_leave_stats(&leaves, 2025, &policy);

        assert_eq!(stats.total_leaves_used, 18);
        assert_eq!(stats.remaining_leaves, 0);
        assert_eq!(stats.total_lop, 0);
    }

    #[test]
    fn test_leaves_outside_reference_year_are_ignored() {
        let leaves = vec![
            make_leave("old", "2024-05-01", "2024-05-03"),
            make_leave("new", "2025-05-01", "2025-05-01"),
        ];
        let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());

        assert_eq!(stats.total_leaves_used, 1);
        assert_eq!(stats.total_lop, 0);
        assert_eq!(stats.monthly_breakdown.len(), 1);
        assert_eq!(stats.monthly_breakdown[0].month_name, "May");
    }

    #[test]
    fn test_breakdown_is_in_calendar_order() {
        let leaves = vec![
            make_leave("l1", "2025-11-03", "2025-11-03"),
            make_leave("l2", "2025-02-03", "2025-02-03"),
            make_leave("l3", "2025-07-03", "2025-07-03"),
        ];
        let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());

        let months: Vec<u32> = stats.monthly_breakdown.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![1, 6, 10]);
    }

    #[test]
    fn test_month_crossing_leave_start_month_attribution() {
        let leaves = vec![make_leave("l1", "2025-01-30", "2025-02-02")];
        let stats = compute_leave_stats(&leaves, 2025, &LeavePolicy::default());

        assert_eq!(stats.monthly_breakdown.len(), 1);
        assert_eq!(stats.monthly_breakdown[0].month_name, "January");
        assert_eq!(stats.total_leaves_used, 2);
        assert_eq!(stats.total_lop, 2);
    }

    #[test]
    fn test_month_crossing_leave_split_attribution() {
        let leaves = vec![make_leave("l1", "2025-01-30", "2025-02-02")];
        let stats = compute_leave_stats(&leaves, 2025, &split_policy());

        assert_eq!(stats.monthly_breakdown.len(), 2);
        assert_eq!(stats.total_leaves_used, 4);
        assert_eq!(stats.total_lop, 0);
        assert_eq!(stats.remaining_leaves, 8);
    }

    #[test]
    fn test_report_audit_steps_in_order() {
        let leaves = vec![
            make_leave("l1", "2025-01-02", "2025-01-03"),
            make_leave("l2", "2025-03-05", "2025-03-07"),
        ];
        let report = calculate_leave_report(&leaves, 2025, &LeavePolicy::default());

        let rule_ids: Vec<&str> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "leave_attribution",
                "leave_attribution",
                "monthly_leave_cap",
                "monthly_leave_cap",
                "annual_leave_quota"
            ]
        );

        let step_numbers: Vec<u32> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.reference_year, 2025);
    }

    #[test]
    fn test_report_carries_reversed_range_warning() {
        let leaves = vec![make_leave("bad", "2025-02-10", "2025-02-01")];
        let report = calculate_leave_report(&leaves, 2025, &LeavePolicy::default());

        assert_eq!(report.stats, LeaveStats::empty(12));
        assert_eq!(report.audit_trace.warnings.len(), 1);
    }

    #[test]
    fn test_custom_quota_and_cap() {
        let policy = LeavePolicy {
            annual_quota: 20,
            monthly_cap: 4,
            month_attribution: MonthAttribution::StartMonth,
        };
        let leaves = vec![make_leave("l1", "2025-09-01", "2025-09-05")];
        let stats = compute_leave_stats(&leaves, 2025, &policy);

        assert_eq!(stats.total_leaves_used, 4);
        assert_eq!(stats.total_lop, 1);
        assert_eq!(stats.remaining_leaves, 16);
    }

    #[test]
    fn test_calendar_wide_leaves_do_not_overflow() {
        let leaves: Vec<LeaveApplication> = (0..40)
            .map(|i| LeaveApplication {
                id: format!("wide_{}", i),
                faculty_id: "fac_001".to_string(),
                start_date: NaiveDate::MIN,
                end_date: NaiveDate::MAX,
                status: LeaveStatus::Approved,
                reason: None,
            })
            .collect();

        let stats = compute_leave_stats(&leaves, NaiveDate::MIN.year(), &LeavePolicy::default());
        assert_eq!(stats.total_leaves_used, 2);
        assert_eq!(stats.total_lop, u32::MAX - 2);
        assert_eq!(stats.remaining_leaves, 10);

        let stats = compute_leave_stats(&leaves, 2025, &split_policy());
        assert_eq!(stats.monthly_breakdown.len(), 12);
        assert_eq!(stats.total_leaves_used, 24);
        assert_eq!(stats.total_leaves_used + stats.total_lop, 40 * 365);
        assert_eq!(stats.remaining_leaves, 0);
    }

    #[test]
    fn test_current_reference_year_is_plausible() {
        assert!(current_reference_year() >= 2025);
    }
}
