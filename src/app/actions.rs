//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced by
//! the event handler. Actions are the boundary between pure state transitions and
//! effectful operations: network calls, local storage writes and navigation.
//!
//! # Example
//!
//! ```rust
//! use adboard::app::{Action, AppState, Event, handle_event};
//! use adboard::domain::FilterCriteria;
//!
//! let mut state = AppState::new(FilterCriteria::default());
//! let (_, actions) = handle_event(&mut state, &Event::ListMounted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchAdverts(_)]));
//! # Ok::<(), adboard::AdboardError>(())
//! ```

use crate::app::list::FetchRequest;
use crate::domain::{FilterCriteria, MultipartPayload, Route};

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Runs a listing request. Its completion must come back with the same ticket.
    FetchAdverts(FetchRequest),

    /// Writes criteria to local storage under the `filters` key.
    PersistFilters(FilterCriteria),

    /// Sends the frozen draft to the creation endpoint.
    CreateAdvert(MultipartPayload),

    /// Loads the tag options for the creation form.
    FetchTags,

    /// Moves to another route.
    Navigate(Route),
}
