//! Configuration types for the Estron engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file yields [`EngineConfig::default`].

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calendar::DISPLAY_DECIMAL_PLACES;
use crate::error::{EngineError, EngineResult};

/// Settings used when turning stored records into statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatisticsConfig {
    /// Hours in one standard workday; converts leave, overtime and meeting
    /// time into workdays.
    pub hours_per_workday: Decimal,
    /// Minutes per hour; converts meeting minutes into hours.
    pub minutes_per_hour: Decimal,
    /// Decimal places used when rounding figures for display.
    pub display_decimal_places: u32,
}

impl StatisticsConfig {
    /// Checks that both conversion factors are positive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] naming the first factor that is
    /// zero or negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("statistics.hours_per_workday", self.hours_per_workday),
            ("statistics.minutes_per_hour", self.minutes_per_hour),
        ] {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    field: field.to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            hours_per_workday: Decimal::new(8, 0),
            minutes_per_hour: Decimal::new(60, 0),
            display_decimal_places: DISPLAY_DECIMAL_PLACES,
        }
    }
}

/// Keys under which each record collection is stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageKeys {
    /// Key of the quota list.
    pub quotas_key: String,
    /// Key of the production entry list.
    pub production_entries_key: String,
    /// Key of the supplementary data list.
    pub supplementary_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            quotas_key: "ESTRON_APP_QUOTAS_V1".to_string(),
            production_entries_key: "ESTRON_APP_PRODUCTION_ENTRIES_V1".to_string(),
            supplementary_key: "ESTRON_APP_SUPPLEMENTARY_DATA_V1".to_string(),
        }
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Statistics settings.
    pub statistics: StatisticsConfig,
    /// Storage key settings.
    pub storage: StorageKeys,
}
