//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Layout
///
/// ```text
/// statistics:
///   hours_per_workday: 8
///   minutes_per_hour: 60
///   display_decimal_places: 2
/// storage:
///   quotas_key: ESTRON_APP_QUOTAS_V1
///   production_entries_key: ESTRON_APP_PRODUCTION_ENTRIES_V1
///   supplementary_key: ESTRON_APP_SUPPLEMENTARY_DATA_V1
/// ```
///
/// # Example
///
/// ```no_run
/// use estron_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/estron.yaml").unwrap();
/// println!("Hours per workday: {}", loader.config().statistics.hours_per_workday);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown fields (`ConfigParseError`)
    /// - A conversion factor is not positive (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use estron_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/estron.yaml")?;
    /// # Ok::<(), estron_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded engine configuration");
        Ok(Self { config })
    }

    /// Wraps an already-built configuration after the same validation
    /// [`load`](Self::load) applies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if a conversion factor is not
    /// positive.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        config.statistics.validate()?;
        Ok(Self { config })
    }

    /// Parses and validates YAML content.
    fn parse(content: &str) -> Result<EngineConfig, String> {
        // An empty document deserializes as unit, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(EngineConfig::default());
        }

        let config: EngineConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        config.statistics.validate().map_err(|e| e.to_string())?;

        Ok(config)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
