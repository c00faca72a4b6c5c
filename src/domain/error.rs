//! Error types for the adboard client.
//!
//! This module defines the centralized error type [`AdboardError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Draft validation
//! failures have their own type, [`ValidationError`], because they never leave the
//! process: they block submission instead of becoming a request.

use thiserror::Error;

/// The main error type for adboard operations.
///
/// Remote failures (network or non-2xx) are folded into [`AdboardError::Request`]
/// so that controllers can turn them into state without inspecting the transport.
///
/// # Examples
///
/// ```
/// use adboard::AdboardError;
///
/// let err = AdboardError::Request { status: Some(404), message: "Not Found".into() };
/// assert_eq!(err.to_string(), "Request failed (404): Not Found");
/// ```
#[derive(Debug, Error)]
pub enum AdboardError {
    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the local key-value store fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A remote call failed.
    ///
    /// `status` is the HTTP status code when the server answered, `None` for
    /// connection-level failures and timeouts.
    #[error("{}", request_message(.status, .message))]
    Request {
        /// HTTP status code, if the server responded.
        status: Option<u16>,
        /// Human-readable failure description.
        message: String,
    },

    /// A response body could not be decoded into the expected envelope.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The draft advert is not valid and cannot be submitted.
    #[error("Invalid advert: {0}")]
    Validation(#[from] ValidationError),

    /// A filter value could not be parsed or breaks a criteria invariant.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn request_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Request failed ({code}): {message}"),
        None => format!("Request failed: {message}"),
    }
}

impl From<reqwest::Error> for AdboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Request {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Reasons a draft advert fails the local validity predicate.
///
/// Only the first failing field is reported; fields are checked in the order
/// name, price, tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The price is negative, NaN or infinite.
    #[error("price must be a finite, non-negative number")]
    InvalidPrice,

    /// No tag was selected.
    #[error("at least one tag is required")]
    NoTags,
}

/// A specialized `Result` type for adboard operations.
pub type Result<T> = std::result::Result<T, AdboardError>;
