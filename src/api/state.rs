//! Application state for the Estron engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineConfig};

/// Shared application state.
///
/// Holds the loaded engine configuration for all request handlers.
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

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.config.config()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_config() {
        let state = AppState::default();
        assert_eq!(state.config(), &EngineConfig::default());
    }
}
