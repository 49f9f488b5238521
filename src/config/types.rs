//! Configuration types for campus policy.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. Every policy has a `Default`
//! matching the standard institutional rules, so callers that do not load a
//! configuration directory still get the usual behavior.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default number of ordinary leave days per faculty member per year.
pub const DEFAULT_ANNUAL_QUOTA: u32 = 12;

/// Default number of leave days per month counted as ordinary usage.
pub const DEFAULT_MONTHLY_CAP: u32 = 2;

/// Default minimum percentage for an "Excellent" standing.
pub const DEFAULT_EXCELLENT_THRESHOLD: u32 = 85;

/// Default minimum percentage for a "Good" standing.
pub const DEFAULT_GOOD_THRESHOLD: u32 = 75;

/// Metadata about the institution the policy belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionMetadata {
    /// Short institution code.
    pub code: String,
    /// Human-readable institution name.
    pub name: String,
    /// The version or effective date of the policy set.
    pub version: String,
}

/// How a leave's days are attributed to calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthAttribution {
    /// The whole leave counts in the month (and year) it starts in.
    #[default]
    StartMonth,
    /// Each leave day counts in its own month; only days in the reference year count.
    SplitAcrossMonths,
}

/// Leave quota policy.
///
/// # Example
///
/// ```
/// use campus_engine::config::{LeavePolicy, MonthAttribution};
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.annual_quota, 12);
/// assert_eq!(policy.monthly_cap, 2);
/// assert_eq!(policy.month_attribution, MonthAttribution::StartMonth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Ordinary leave days allotted per year.
    pub annual_quota: u32,
    /// Leave days per month counted as ordinary usage; the rest is loss of pay.
    pub monthly_cap: u32,
    /// How leave days are bucketed into months.
    #[serde(default)]
    pub month_attribution: MonthAttribution,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            annual_quota: DEFAULT_ANNUAL_QUOTA,
            monthly_cap: DEFAULT_MONTHLY_CAP,
            month_attribution: MonthAttribution::StartMonth,
        }
    }
}

impl LeavePolicy {
    /// Checks the policy for values that cannot be applied consistently.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_cap > self.annual_quota {
            return Err(EngineError::InvalidPolicy {
                field: "monthly_cap".to_string(),
                message: format!("must not exceed annual_quota ({})", self.annual_quota),
            });
        }
        Ok(())
    }
}

/// Attendance standing thresholds.
///
/// # Example
///
/// ```
/// use campus_engine::config::AttendancePolicy;
///
/// let policy = AttendancePolicy::default();
/// assert_eq!(policy.excellent_threshold, 85);
/// assert_eq!(policy.good_threshold, 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendancePolicy {
    /// Minimum percentage for an "Excellent" standing.
    pub excellent_threshold: u32,
    /// Minimum percentage for a "Good" standing.
    pub good_threshold: u32,
}

impl Default for AttendancePolicy {
    fn default() -> Self {
        Self {
            excellent_threshold: DEFAULT_EXCELLENT_THRESHOLD,
            good_threshold: DEFAULT_GOOD_THRESHOLD,
        }
    }
}

impl AttendancePolicy {
    /// Checks that the thresholds are ordered and within 0..=100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.excellent_threshold > 100 {
            return Err(EngineError::InvalidPolicy {
                field: "excellent_threshold".to_string(),
                message: "must be at most 100".to_string(),
            });
        }
        if self.good_threshold > self.excellent_threshold {
            return Err(EngineError::InvalidPolicy {
                field: "good_threshold".to_string(),
                message: format!(
                    "must not exceed excellent_threshold ({})",
                    self.excellent_threshold
                ),
            });
        }
        Ok(())
    }
}

/// The complete policy configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    metadata: InstitutionMetadata,
    leave: LeavePolicy,
    attendance: AttendancePolicy,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts, validating both policies.
    pub fn new(
        metadata: InstitutionMetadata,
        leave: LeavePolicy,
        attendance: AttendancePolicy,
    ) -> EngineResult<Self> {
        leave.validate()?;
        attendance.validate()?;
        Ok(Self {
            metadata,
            leave,
            attendance,
        })
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        &self.metadata
    }

    /// Returns the leave policy.
    pub fn leave(&self) -> &LeavePolicy {
        &self.leave
    }

    /// Returns the attendance policy.
    pub fn attendance(&self) -> &AttendancePolicy {
        &self.attendance
    }
}
