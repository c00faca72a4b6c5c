//! Creation form state.
//!
//! The draft is only reachable through the field setters, and validity is
//! recomputed after every one of them, so [`CreateForm::is_valid`] is always
//! current without touching the network.

use crate::domain::{DraftItem, Photo, ValidationError};

/// Draft advert fields plus derived validity.
#[derive(Debug, Clone)]
pub struct CreateForm {
    draft: DraftItem,
    validity: Result<(), ValidationError>,
    tag_options: Vec<String>,
}

impl Default for CreateForm {
    fn default() -> Self {
        let draft = DraftItem::default();
        let validity = draft.validate();
        Self {
            draft,
            validity,
            tag_options: Vec::new(),
        }
    }
}

impl CreateForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn draft(&self) -> &DraftItem {
        &self.draft
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validity.is_ok()
    }

    /// First failing field, if any.
    #[must_use]
    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validity.err()
    }

    /// Tags offered for selection, as reported by the API.
    #[must_use]
    pub fn tag_options(&self) -> &[String] {
        &self.tag_options
    }

    pub fn set_tag_options(&mut self, tags: Vec<String>) {
        self.tag_options = tags;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.revalidate();
    }

    /// Accepts any `f64`, including transient NaN from a numeric input; the
    /// form simply becomes invalid until a usable price arrives.
    pub fn set_price(&mut self, price: f64) {
        self.draft.price = price;
        self.revalidate();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.draft.tags = tags;
        self.revalidate();
    }

    pub fn set_sale(&mut self, sale: bool) {
        self.draft.sale = sale;
        self.revalidate();
    }

    pub fn set_photo(&mut self, photo: Option<Photo>) {
        self.draft.photo = photo;
        self.revalidate();
    }

    /// Discards the draft, keeping the fetched tag options.
    pub fn reset(&mut self) {
        self.draft = DraftItem::default();
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validity = self.draft.validate();
        tracing::trace!(valid = self.validity.is_ok(), "draft revalidated");
    }
}
