//! Creation submission lifecycle.
//!
//! A failed submission is never dropped: its message lands in the error slot
//! ([`SubmitStatus::Failed`]), the form is enabled again with the draft intact,
//! and the slot stays until dismissed or the next submission starts.

use crate::app::form::CreateForm;
use crate::domain::{encode_payload, Advert, MultipartPayload, Route, ValidationError};

/// Where the creation request currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// No request in flight and no error to show.
    #[default]
    Idle,
    /// The create request is in flight; the form is disabled.
    Submitting,
    /// The last create request failed with this message.
    Failed(String),
}

/// Why a submission did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The draft fails validation; nothing is sent.
    Invalid(ValidationError),
    /// A submission is already in flight.
    InFlight,
}

/// Drives the create request and reacts to its outcome.
#[derive(Debug, Default)]
pub struct CreateSubmitController {
    status: SubmitStatus,
}

impl CreateSubmitController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Message in the error slot, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether the submit affordance is enabled for `form`.
    #[must_use]
    pub fn can_submit(&self, form: &CreateForm) -> bool {
        form.is_valid() && self.status != SubmitStatus::Submitting
    }

    /// Freezes the current draft into a payload and marks the submission in flight.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitRejection`] when the draft is invalid or a submission is
    /// already running; the status is unchanged in that case.
    pub fn begin(&mut self, form: &CreateForm) -> Result<MultipartPayload, SubmitRejection> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitRejection::InFlight);
        }
        form.draft().validate().map_err(SubmitRejection::Invalid)?;

        let payload = encode_payload(form.draft());
        self.status = SubmitStatus::Submitting;
        tracing::debug!(field_count = payload.fields().len(), "submission started");
        Ok(payload)
    }

    /// Handles a successful create: clears the status and returns the detail route.
    pub fn succeeded(&mut self, advert: &Advert) -> Route {
        self.status = SubmitStatus::Idle;
        tracing::debug!(advert_id = %advert.id, "submission succeeded");
        Route::Detail(advert.id.clone())
    }

    /// Stores a failure in the error slot and re-enables the form.
    pub fn failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(error = %message, "submission failed");
        self.status = SubmitStatus::Failed(message);
    }

    /// Clears the error slot. Returns `false` if there was nothing to dismiss.
    pub fn dismiss_error(&mut self) -> bool {
        if matches!(self.status, SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
            return true;
        }
        false
    }
}
