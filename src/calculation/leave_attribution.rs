//! Attribution of leave days to the months of a reference year.
//!
//! This is the first stage of the leave accrual engine: every approved leave
//! is turned into day counts in zero-based month buckets before the monthly
//! cap is applied.

use chrono::Datelike;

use crate::config::MonthAttribution;
use crate::models::{AuditStep, AuditWarning, LeaveApplication};

use super::calendar::{MONTHS_PER_YEAR, month_bounds, month_name};

/// Leave days per month for one reference year, with the audit record.
#[derive(Debug, Clone)]
pub struct LeaveAttributionResult {
    /// Leave days per zero-based month.
    pub monthly_days: [u32; MONTHS_PER_YEAR],
    /// Number of leaves that contributed at least one day.
    pub leaves_counted: usize,
    /// One audit step per leave examined.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings for leaves that violated the caller's preconditions.
    pub warnings: Vec<AuditWarning>,
}

impl LeaveAttributionResult {
    /// Sum of all attributed days, saturating at `u32::MAX`.
    pub fn total_days(&self) -> u32 {
        self.monthly_days
            .iter()
            .fold(0u32, |total, days| total.saturating_add(*days))
    }
}

/// Attributes each leave's days to the months of `reference_year`.
///
/// With [`MonthAttribution::StartMonth`] a leave is selected when its start
/// date falls in `reference_year`, and its whole inclusive day count lands in
/// the start month even when the range crosses into the next month or year.
///
/// With [`MonthAttribution::SplitAcrossMonths`] every individual leave day
/// lands in its own month, and days outside `reference_year` are ignored.
///
/// Reversed ranges contribute nothing and raise a warning.
///
/// # Arguments
///
/// * `leaves` - Approved leaves for one faculty member
/// * `reference_year` - The calendar year being reported on
/// * `attribution` - The bucketing rule
/// * `step_number` - The step number of the first audit step
///
/// # Example
///
/// ```
/// use campus_engine::calculation::attribute_leave_days;
/// use campus_engine::config::MonthAttribution;
/// use campus_engine::models::{LeaveApplication, LeaveStatus};
/// use chrono::NaiveDate;
///
/// let leave = LeaveApplication {
///     id: "leave_001".to_string(),
///     faculty_id: "fac_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
///     status: LeaveStatus::Approved,
///     reason: None,
/// };
///
/// let legacy = attribute_leave_days(&[leave.clone()], 2025, MonthAttribution::StartMonth, 1);
/// assert_eq!(legacy.monthly_days[0], 4);
/// assert_eq!(legacy.monthly_days[1], 0);
///
/// let split = attribute_leave_days(&[leave], 2025, MonthAttribution::SplitAcrossMonths, 1);
/// assert_eq!(split.monthly_days[0], 2);
/// assert_eq!(split.monthly_days[1], 2);
/// ```
pub fn attribute_leave_days(
    leaves: &[LeaveApplication],
    reference_year: i32,
    attribution: MonthAttribution,
    step_number: u32,
) -> LeaveAttributionResult {
    let mut monthly_days = [0u32; MONTHS_PER_YEAR];
    let mut leaves_counted = 0;
    let mut audit_steps = Vec::with_capacity(leaves.len());
    let mut warnings = Vec::new();

    for (offset, leave) in leaves.iter().enumerate() {
        if leave.is_reversed() {
            warnings.push(AuditWarning {
                code: "REVERSED_LEAVE_RANGE".to_string(),
                message: format!(
                    "Leave '{}' ends on {} before it starts on {}; counted as 0 days",
                    leave.id, leave.end_date, leave.start_date
                ),
                severity: "high".to_string(),
            });
        }

        let contribution = match attribution {
            MonthAttribution::StartMonth => {
                let mut contribution = [0u32; MONTHS_PER_YEAR];
                if leave.start_year() == reference_year {
                    contribution[leave.start_date.month0() as usize] = leave.day_count();
                }
                contribution
            }
            MonthAttribution::SplitAcrossMonths => split_by_month(leave, reference_year),
        };

        let counted_days = contribution
            .iter()
            .fold(0u32, |total, days| total.saturating_add(*days));
        if counted_days > 0 {
            leaves_counted += 1;
        }
        for (bucket, days) in monthly_days.iter_mut().zip(contribution.iter()) {
            *bucket = bucket.saturating_add(*days);
        }

        let months: Vec<serde_json::Value> = contribution
            .iter()
            .enumerate()
            .filter(|(_, days)| **days > 0)
            .map(|(month0, days)| {
                serde_json::json!({
                    "month": month_name(month0 as u32),
                    "days": days
                })
            })
            .collect();

        let reasoning = if counted_days == 0 && leave.day_count() > 0 {
            format!(
                "Leave '{}' has no days in {} and is not counted",
                leave.id, reference_year
            )
        } else if counted_days == 0 {
            format!("Leave '{}' has an empty date range", leave.id)
        } else if months.len() == 1 {
            format!(
                "{} day(s) of leave '{}' attributed to {}",
                counted_days,
                leave.id,
                months[0]["month"].as_str().unwrap_or_default()
            )
        } else {
            format!(
                "{} day(s) of leave '{}' split across {} months",
                counted_days,
                leave.id,
                months.len()
            )
        };

        audit_steps.push(AuditStep {
            step_number: step_number + offset as u32,
            rule_id: "leave_attribution".to_string(),
            rule_name: "Leave Day Attribution".to_string(),
            policy_ref: "leave_policy.month_attribution".to_string(),
            input: serde_json::json!({
                "leave_id": leave.id,
                "start_date": leave.start_date.to_string(),
                "end_date": leave.end_date.to_string(),
                "day_count": leave.day_count(),
                "reference_year": reference_year,
                "attribution": attribution
            }),
            output: serde_json::json!({
                "counted_days": counted_days,
                "months": months
            }),
            reasoning,
        });
    }

    LeaveAttributionResult {
        monthly_days,
        leaves_counted,
        audit_steps,
        warnings,
    }
}

/// Days of `leave` inside each month of `reference_year`.
///
/// Works on the overlap of the leave with each month's bounds, so the cost
/// does not depend on the length of the leave.
fn split_by_month(leave: &LeaveApplication, reference_year: i32) -> [u32; MONTHS_PER_YEAR] {
    let mut contribution = [0u32; MONTHS_PER_YEAR];
    for (month0, days) in contribution.iter_mut().enumerate() {
        let Some((first, last)) = month_bounds(reference_year, month0 as u32) else {
            continue;
        };
        let start = leave.start_date.max(first);
        let end = leave.end_date.min(last);
        if start <= end {
            // At most 31, one calendar month.
            *days = (end - start).num_days() as u32 + 1;
        }
    }
    contribution
}
