//! In-memory storage backend.

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use crate::storage::models::StoredEntry;
use serde_json::Value;
use std::collections::HashMap;

/// Process-local storage. Contents are lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, StoredEntry>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).map(|entry| entry.value.clone()))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), StoredEntry::new(value));
        Ok(())
    }
}
