//! Monthly leave cap and loss-of-pay split.
//!
//! This module splits the leave days attributed to one month into ordinary
//! usage (up to the monthly cap) and loss-of-pay days (the excess).

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, MonthlyLeaveUsage};

use super::calendar::month_name;

/// The result of applying the monthly cap to one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCapResult {
    /// The month's usage split.
    pub usage: MonthlyLeaveUsage,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Splits a month's leave days into ordinary usage and loss of pay.
///
/// `leaves_used = min(total_days, monthly_cap)` and
/// `lop_days = total_days - leaves_used`, so every day lands in exactly one
/// of the two.
///
/// # Examples
///
/// ## Month under the cap
///
/// ```
/// use campus_engine::calculation::apply_monthly_cap;
///
/// let result = apply_monthly_cap(0, 1, 2, 1);
/// assert_eq!(result.usage.leaves_used, 1);
/// assert_eq!(result.usage.lop_days, 0);
/// ```
///
/// ## Month over the cap
///
/// ```
/// use campus_engine::calculation::apply_monthly_cap;
///
/// let result = apply_monthly_cap(2, 5, 2, 1);
/// assert_eq!(result.usage.month_name, "March");
/// assert_eq!(result.usage.leaves_used, 2);
/// assert_eq!(result.usage.lop_days, 3);
/// ```
pub fn apply_monthly_cap(
    month0: u32,
    total_days: u32,
    monthly_cap: u32,
    step_number: u32,
) -> MonthlyCapResult {
    let leaves_used = total_days.min(monthly_cap);
    let lop_days = total_days.saturating_sub(monthly_cap);
    let name = month_name(month0);

    let reasoning = if lop_days > 0 {
        format!(
            "{} leave days in {} exceed the {} day cap by {}; {} day(s) recorded as loss of pay",
            total_days, name, monthly_cap, lop_days, lop_days
        )
    } else if total_days == monthly_cap {
        format!(
            "{} leave days in {} equal the {} day cap, no loss of pay",
            total_days, name, monthly_cap
        )
    } else {
        format!(
            "{} leave days in {} are under the {} day cap, no loss of pay",
            total_days, name, monthly_cap
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_leave_cap".to_string(),
        rule_name: "Monthly Leave Cap".to_string(),
        policy_ref: "leave_policy.monthly_cap".to_string(),
        input: serde_json::json!({
            "month": name,
            "total_days": total_days,
            "monthly_cap": monthly_cap
        }),
        output: serde_json::json!({
            "leaves_used": leaves_used,
            "lop_days": lop_days
        }),
        reasoning,
    };

    MonthlyCapResult {
        usage: MonthlyLeaveUsage {
            month: month0,
            month_name: name.to_string(),
            total_days,
            leaves_used,
            lop_days,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // MC-001: exactly at the cap
    // ==========================================================================
    #[test]
    fn test_mc_001_exactly_at_cap() {
        let result = apply_monthly_cap(0, 2, 2, 1);

        assert_eq!(result.usage.leaves_used, 2);
        assert_eq!(result.usage.lop_days, 0);
        assert!(result.audit_step.reasoning.contains("equal"));
    }

    // ==========================================================================
    // MC-002: five days against a cap of two
    // ==========================================================================
    #[test]
    fn test_mc_002_five_days_three_lop() {
        let result = apply_monthly_cap(4, 5, 2, 1);

        assert_eq!(result.usage.month, 4);
        assert_eq!(result.usage.month_name, "May");
        assert_eq!(result.usage.total_days, 5);
        assert_eq!(result.usage.leaves_used, 2);
        assert_eq!(result.usage.lop_days, 3);
        assert_eq!(result.audit_step.output["leaves_used"], 2);
        assert_eq!(result.audit_step.output["lop_days"], 3);
        assert!(result.audit_step.reasoning.contains("loss of pay"));
    }

    // ==========================================================================
    // MC-003: under the cap
    // ==========================================================================
    #[test]
    fn test_mc_003_under_cap() {
        let result = apply_monthly_cap(6, 1, 2, 1);

        assert_eq!(result.usage.leaves_used, 1);
        assert_eq!(result.usage.lop_days, 0);
        assert!(result.audit_step.reasoning.contains("under"));
    }

    #[test]
    fn test_zero_cap_makes_everything_lop() {
        let result = apply_monthly_cap(0, 3, 0, 1);

        assert_eq!(result.usage.leaves_used, 0);
        assert_eq!(result.usage.lop_days, 3);
    }

    #[test]
    fn test_split_conserves_days() {
        for total in 0..10 {
            for cap in 0..5 {
                let result = apply_monthly_cap(0, total, cap, 1);
                assert_eq!(result.usage.leaves_used + result.usage.lop_days, total);
            }
        }
    }

    #[test]
    fn test_audit_step_metadata() {
        let result = apply_monthly_cap(11, 3, 2, 9);

        assert_eq!(result.audit_step.step_number, 9);
        assert_eq!(result.audit_step.rule_id, "monthly_leave_cap");
        assert_eq!(result.audit_step.policy_ref, "leave_policy.monthly_cap");
        assert_eq!(result.audit_step.input["month"], "December");
        assert_eq!(result.audit_step.input["monthly_cap"], 2);
    }
}
