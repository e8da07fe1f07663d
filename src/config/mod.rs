//! Configuration loading and management for the Estron engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file: workday conversion factors for statistics and the keys used
//! by the storage layer.
//!
//! # Example
//!
//! ```no_run
//! use estron_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/estron.yaml").unwrap();
//! println!("Quotas stored under: {}", loader.config().storage.quotas_key);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, StatisticsConfig, StorageKeys};
