//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait, a small synchronous key-value store
//! for client-side state that should survive restarts (today only the last
//! submitted filter criteria). Reads and writes are treated as instantaneous;
//! nothing here is async.

use crate::domain::error::Result;
use serde_json::Value;

/// Abstraction over local key-value persistence.
///
/// Values are JSON documents so each caller owns its own schema.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes (default)
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map, used in tests
///
/// # Examples
///
/// ```no_run
/// use adboard::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonStorage::new(PathBuf::from("/tmp/adboard.json"))?;
/// storage.set("filters", serde_json::json!({ "name": "bike" }))?;
/// assert!(storage.get("filters")?.is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Returns the value stored under `key`, or `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}
