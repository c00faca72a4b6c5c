//! Storage layer for client-side persistent state.
//!
//! This module provides the local key-value store the client uses to remember
//! state between runs, and the glue that persists filter criteria in it.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation
//! - `memory`: in-memory implementation
//! - `filters`: filter criteria load/save under the `filters` key
//! - `models`: Storage record types

pub mod backend;
pub mod filters;
pub mod json;
pub mod memory;
pub mod models;

pub use backend::Storage;
pub use filters::{load_filters, save_filters, FILTERS_KEY};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use models::StoredEntry;
