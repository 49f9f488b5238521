//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading campus policy
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendancePolicy, InstitutionMetadata, LeavePolicy, PolicyConfig};

/// Loads and provides access to campus policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── institution.yaml       # Institution metadata
/// ├── leave_policy.yaml      # Annual quota, monthly cap, month attribution
/// └── attendance_policy.yaml # Standing thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use campus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy for: {}", loader.institution().name);
/// println!("Annual quota: {}", loader.leave_policy().annual_quota);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, contains invalid YAML, or
    /// holds a policy that fails validation.
    ///
    /// ```no_run
    /// use campus_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), campus_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<InstitutionMetadata>(&path.join("institution.yaml"))?;
        let leave = Self::load_yaml::<LeavePolicy>(&path.join("leave_policy.yaml"))?;
        let attendance =
            Self::load_yaml::<AttendancePolicy>(&path.join("attendance_policy.yaml"))?;

        let config = PolicyConfig::new(metadata, leave, attendance)?;
        Ok(Self { config })
    }

    /// Builds a loader from an already assembled configuration.
    pub fn from_config(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        self.config.institution()
    }

    /// Returns the leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        self.config.leave()
    }

    /// Returns the attendance policy.
    pub fn attendance_policy(&self) -> &AttendancePolicy {
        self.config.attendance()
    }
}
