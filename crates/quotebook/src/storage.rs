//! Key-value persistence seam
//!
//! The favorites store writes through to a [`KeyValueStore`]. The app crate
//! provides a file-backed implementation; [`MemoryStore`] covers tests and
//! sessions that should leave nothing behind.

use std::collections::HashMap;

use crate::error::Result;

/// Durable string storage addressed by key
///
/// Writes must be complete when `set` returns, so that a `get` issued right
/// after observes the new value.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` (absent keys are not an error)
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store; contents vanish with the value
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
