//! Storage record models for the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single stored value with its last write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEntry {
    /// The stored JSON document.
    pub value: Value,

    /// When the value was last written.
    pub updated_at: DateTime<Utc>,
}

impl StoredEntry {
    /// Wraps a value, stamping it with the current time.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            updated_at: Utc::now(),
        }
    }
}
