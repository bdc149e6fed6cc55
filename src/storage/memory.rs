//! In-memory store for tests and `--ephemeral` sessions

use super::{StorageError, Store};
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
