//! Draft advert fields and the validity predicate.

use crate::domain::error::ValidationError;
use std::fmt;
use std::path::Path;

/// An opaque binary photo attached to a draft.
///
/// No type or size checks are applied; the bytes are forwarded as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Photo {
    /// File name reported to the server.
    pub file_name: String,

    /// MIME type, if known.
    pub mime: Option<String>,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl Photo {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    /// Reads a photo from disk, naming it after the file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }

    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }
}

// Photo bytes are noise in logs.
impl fmt::Debug for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Photo")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// An in-progress, not-yet-submitted advert.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftItem {
    pub name: String,
    pub price: f64,
    pub tags: Vec<String>,
    pub photo: Option<Photo>,
    pub sale: bool,
}

impl Default for DraftItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: 0.0,
            tags: Vec::new(),
            photo: None,
            sale: true,
        }
    }
}

impl DraftItem {
    /// Checks the draft, reporting the first failing field.
    ///
    /// - name: non-empty
    /// - price: finite and `>= 0` (NaN and infinities are rejected)
    /// - tags: at least one
    ///
    /// Photo and sale are unconstrained.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice);
        }
        if self.tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        Ok(())
    }
}
