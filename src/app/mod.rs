//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (the dispatcher in `worker` and the
//! binary in main.rs) and the domain/storage/remote layers. It never performs
//! I/O itself: every effect leaves as an [`Action`].
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! View input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            ↑                                   ↓
//!                            └──────── Worker Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Creation draft with derived validity
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`list`]: List request lifecycle with stale-result protection
//! - [`state`]: Central application state container and view model computation
//! - [`submit`]: Creation submission lifecycle and error slot
//!
//! # Example
//!
//! ```rust
//! use adboard::app::{AppState, Event, handle_event};
//! use adboard::domain::FilterCriteria;
//! use adboard::ui::ListView;
//!
//! let mut state = AppState::new(FilterCriteria::default());
//! handle_event(&mut state, &Event::ListMounted)?;
//! assert_eq!(state.compute_list_view(), ListView::Loading);
//! # Ok::<(), adboard::AdboardError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod list;
pub mod state;
pub mod submit;

pub use actions::Action;
pub use form::CreateForm;
pub use handler::{handle_event, Event};
pub use list::{FetchRequest, FetchTicket, ListFetchController, ListResult};
pub use state::AppState;
pub use submit::{CreateSubmitController, SubmitRejection, SubmitStatus};
