//! Application state for the campus engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded policy configuration. It is immutable after startup, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AttendancePolicy, InstitutionMetadata, LeavePolicy, PolicyConfig};

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let config = PolicyConfig::new(
            InstitutionMetadata {
                code: "TST".to_string(),
                name: "Test College".to_string(),
                version: "1".to_string(),
            },
            LeavePolicy::default(),
            AttendancePolicy::default(),
        )
        .unwrap();
        let state = AppState::new(ConfigLoader::from_config(config));
        let cloned = state.clone();

        assert!(std::ptr::eq(state.config(), cloned.config()));
    }
}
