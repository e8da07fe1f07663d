//! Key-value store abstraction.
//!
//! The repository persists each record collection as one JSON document
//! under a logical key. Backends only need get/set/delete with
//! last-write-wins semantics.

use std::collections::HashMap;

use crate::error::EngineResult;

/// A flat string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String) -> EngineResult<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn delete(&mut self, key: &str) -> EngineResult<()>;
}

/// A process-local store backed by a `HashMap`.
///
/// # Example
///
/// ```
/// use estron_engine::storage::{InMemoryStore, KeyValueStore};
///
/// let mut store = InMemoryStore::new();
/// store.set("greeting", "xin chào".to_string()).unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("xin chào"));
/// store.delete("greeting").unwrap();
/// assert_eq!(store.get("greeting").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> EngineResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
