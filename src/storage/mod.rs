//! Persistence of quotas, production entries and supplementary data.
//!
//! Records are kept in a flat key-value store behind the [`KeyValueStore`]
//! trait; [`ProductionRepository`] provides the typed operations on top.

mod repository;
mod store;

pub use repository::ProductionRepository;
pub use store::{InMemoryStore, KeyValueStore};
