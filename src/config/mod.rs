//! Configuration loading and management for the campus engine.
//!
//! This module provides the leave and attendance policy settings and loads
//! them from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use campus_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy for: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendancePolicy, DEFAULT_ANNUAL_QUOTA, DEFAULT_EXCELLENT_THRESHOLD, DEFAULT_GOOD_THRESHOLD,
    DEFAULT_MONTHLY_CAP, InstitutionMetadata, LeavePolicy, MonthAttribution, PolicyConfig,
};
