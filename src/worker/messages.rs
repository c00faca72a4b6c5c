//! Worker message types.
//!
//! This module defines the request and response protocol between the event
//! loop and the worker that talks to the adverts API. Requests are built from
//! the network [`Action`](crate::app::Action)s; responses come back into the
//! event handler wrapped in [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).

use crate::app::{Action, FetchRequest, FetchTicket};
use crate::domain::{Advert, MultipartPayload};

/// Requests handled by the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    /// List adverts for one fetch ticket.
    FetchAdverts(FetchRequest),

    /// Create an advert from a frozen draft.
    CreateAdvert(MultipartPayload),

    /// Load tag options.
    FetchTags,
}

impl WorkerMessage {
    /// Converts a network action into a worker request.
    ///
    /// Returns `None` for actions the event loop performs itself.
    #[must_use]
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::FetchAdverts(request) => Some(Self::FetchAdverts(request)),
            Action::CreateAdvert(payload) => Some(Self::CreateAdvert(payload)),
            Action::FetchTags => Some(Self::FetchTags),
            Action::PersistFilters(_) | Action::Navigate(_) => None,
        }
    }
}

/// Responses sent from the worker back to the event loop.
///
/// Each variant corresponds to the completion of one worker request, either
/// successfully with result data or with a human-readable error message.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// A listing request succeeded.
    AdvertsLoaded {
        /// Ticket of the fetch this answers.
        ticket: FetchTicket,
        adverts: Vec<Advert>,
    },

    /// A listing request failed.
    AdvertsFailed { ticket: FetchTicket, message: String },

    /// The advert was created.
    AdvertCreated { advert: Advert },

    /// The create request failed.
    AdvertCreateFailed { message: String },

    /// Tag options were loaded.
    TagsLoaded { tags: Vec<String> },

    /// Loading tag options failed.
    TagsFailed { message: String },
}
