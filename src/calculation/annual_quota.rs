//! Annual leave quota.

use crate::models::AuditStep;

/// The remaining quota after the year's ordinary usage, with its audit step.
#[derive(Debug, Clone)]
pub struct AnnualQuotaResult {
    /// Quota still available, never negative.
    pub remaining_leaves: u32,
    /// The audit step recording the deduction.
    pub audit_step: AuditStep,
}

/// Deducts the year's ordinary leave usage from the annual quota.
///
/// The remainder is floored at zero and never exceeds `annual_quota`.
///
/// # Example
///
/// ```
/// use campus_engine::calculation::apply_annual_quota;
///
/// assert_eq!(apply_annual_quota(4, 12, 1).remaining_leaves, 8);
/// assert_eq!(apply_annual_quota(14, 12, 1).remaining_leaves, 0);
/// ```
pub fn apply_annual_quota(
    total_leaves_used: u32,
    annual_quota: u32,
    step_number: u32,
) -> AnnualQuotaResult {
    let remaining_leaves = annual_quota.saturating_sub(total_leaves_used);

    let reasoning = if total_leaves_used > annual_quota {
        format!(
            "{} days used exceeds the {} day annual quota; remaining floored at 0",
            total_leaves_used, annual_quota
        )
    } else {
        format!(
            "{} - {} = {} day(s) remaining",
            annual_quota, total_leaves_used, remaining_leaves
        )
    };

    AnnualQuotaResult {
        remaining_leaves,
        audit_step: AuditStep {
            step_number,
            rule_id: "annual_leave_quota".to_string(),
            rule_name: "Annual Leave Quota".to_string(),
            policy_ref: "leave_policy.annual_quota".to_string(),
            input: serde_json::json!({
                "total_leaves_used": total_leaves_used,
                "annual_quota": annual_quota
            }),
            output: serde_json::json!({
                "remaining_leaves": remaining_leaves
            }),
            reasoning,
        },
    }
}
