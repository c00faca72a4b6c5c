//! Filter criteria persistence.
//!
//! Criteria are read once at startup and written on every submission under the
//! [`FILTERS_KEY`] key.

use crate::domain::error::{AdboardError, Result};
use crate::domain::filters::FilterCriteria;
use crate::storage::backend::Storage;

/// Storage key holding the last submitted criteria.
pub const FILTERS_KEY: &str = "filters";

/// Restores the last submitted criteria, falling back to the default.
///
/// Missing, unreadable or invalid stored values all yield
/// [`FilterCriteria::default`]; the cause is logged.
pub fn load_filters(storage: &dyn Storage) -> FilterCriteria {
    let value = match storage.get(FILTERS_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => {
            tracing::debug!("no stored filters, using defaults");
            return FilterCriteria::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to read stored filters, using defaults");
            return FilterCriteria::default();
        }
    };

    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "stored filters are invalid, using defaults");
        FilterCriteria::default()
    })
}

/// Persists criteria under [`FILTERS_KEY`].
///
/// # Errors
///
/// Returns an error if the criteria cannot be serialized or the write fails.
pub fn save_filters(storage: &mut dyn Storage, criteria: &FilterCriteria) -> Result<()> {
    let value = serde_json::to_value(criteria)
        .map_err(|e| AdboardError::Storage(format!("failed to serialize filters: {e}")))?;
    storage.set(FILTERS_KEY, value)?;
    tracing::debug!(criteria = ?criteria, "filters persisted");
    Ok(())
}
