//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable key-value store backed by one
//! JSON file. Writes go to a temporary file that is then renamed over the target,
//! so a crash never leaves a half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the whole file is loaded into memory once
//! - **Write**: O(n) - the whole document is serialized on every change
//! - **Best for**: a handful of small values written on user actions

use crate::domain::error::{AdboardError, Result};
use crate::storage::backend::Storage;
use crate::storage::models::StoredEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values by key.
    #[serde(default)]
    entries: BTreeMap<String, StoredEntry>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// The entire dataset is kept in memory and persisted on every modification.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "filters": {
///       "value": { "name": "", "sale": "sell", "price": [], "tags": ["motor"] },
///       "updated_at": "2024-05-01T10:00:00Z"
///     }
///   }
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; the file
    /// is only created on the first write. Parent directories are created eagerly.
    /// A file that does not parse is logged and treated as empty, and the next
    /// write replaces it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => data,
                Err(AdboardError::Storage(reason)) => {
                    tracing::warn!(path = ?file_path, reason = %reason, "ignoring unreadable storage file");
                    StorageData::default()
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| AdboardError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using an atomic write.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write or the rename fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| AdboardError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let value = self.data.entries.get(key).map(|entry| entry.value.clone());
        tracing::debug!(key = %key, found = value.is_some(), "storage lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key).entered();

        self.data.entries.insert(key.to_string(), StoredEntry::new(value));
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_starts_empty_without_creating_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.get("filters").unwrap(), None);
        assert!(!path.exists());
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_set_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.set("filters", json!({ "name": "bike" })).unwrap();
        }

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("filters").unwrap(), Some(json!({ "name": "bike" })));
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("state.json")).unwrap();

        storage.set("filters", json!({ "name": "bike" })).unwrap();
        storage.set("filters", json!({ "tags": ["motor"] })).unwrap();

        assert_eq!(storage.get("filters").unwrap(), Some(json!({ "tags": ["motor"] })));
    }

    #[test]
    fn test_corrupt_file_starts_empty_and_is_replaced_on_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.get("filters").unwrap(), None);

        storage.set("filters", json!({ "name": "bike" })).unwrap();
        drop(storage);

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.get("filters").unwrap(), Some(json!({ "name": "bike" })));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();

        storage.set("filters", json!({})).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
