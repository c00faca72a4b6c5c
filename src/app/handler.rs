//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! network completions, translating them into state changes and action
//! sequences. It is the only place where [`AppState`] is mutated.
//!
//! # Architecture
//!
//! 1. Events arrive from the view layer or from the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via the controllers owned by `AppState`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **List view**: `ListMounted`, `FiltersSubmitted`, `RetryFetch`
//! - **Creation view**: `FormMounted`, field changes, `SubmitForm`, `DismissError`
//! - **Worker**: `WorkerResponse` with typed completion variants

use crate::app::submit::SubmitRejection;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{FilterCriteria, Photo};
use crate::worker::WorkerResponse;

/// Events triggered by user input or network completions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The list view was mounted; fetch with the current criteria.
    ListMounted,

    /// The user submitted new criteria. They replace the current ones wholesale.
    FiltersSubmitted(FilterCriteria),

    /// Reload after a failed fetch.
    RetryFetch,

    /// The creation view was mounted; load tag options.
    FormMounted,

    NameChanged(String),
    PriceChanged(f64),
    TagsChanged(Vec<String>),
    SaleChanged(bool),
    PhotoChanged(Option<Photo>),

    /// Submit the creation form.
    SubmitForm,

    /// Close the creation error banner.
    DismissError,

    /// Wraps a completion reported by the worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the caller whether the visible state changed and the
/// view should be re-rendered.
///
/// # Errors
///
/// Reserved for transitions that cannot be represented as state; every remote
/// failure is turned into state instead of an error.
///
/// # Example
///
/// ```rust
/// use adboard::app::{AppState, Event, handle_event};
/// use adboard::domain::FilterCriteria;
///
/// let mut state = AppState::new(FilterCriteria::default());
/// let (render, actions) = handle_event(&mut state, &Event::NameChanged("Bike".into()))?;
/// assert!(render);
/// assert!(actions.is_empty());
/// # Ok::<(), adboard::AdboardError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ListMounted => {
            state.mounted = true;
            let request = state.list.start(&state.filters);
            Ok((true, vec![Action::FetchAdverts(request)]))
        }
        Event::FiltersSubmitted(criteria) => {
            let changed = *criteria != state.filters;
            state.filters = criteria.clone();

            let mut actions = vec![Action::PersistFilters(criteria.clone())];

            if !changed {
                tracing::debug!("criteria unchanged, skipping fetch");
                return Ok((false, actions));
            }

            if state.mounted {
                actions.push(Action::FetchAdverts(state.list.start(&state.filters)));
            } else {
                tracing::debug!("list not mounted yet, deferring fetch");
            }
            Ok((true, actions))
        }
        Event::RetryFetch => Ok(state.list.retry().map_or_else(
            || (false, vec![]),
            |request| (true, vec![Action::FetchAdverts(request)]),
        )),
        Event::FormMounted => Ok((false, vec![Action::FetchTags])),
        Event::NameChanged(name) => {
            state.form.set_name(name.clone());
            Ok((true, vec![]))
        }
        Event::PriceChanged(price) => {
            state.form.set_price(*price);
            Ok((true, vec![]))
        }
        Event::TagsChanged(tags) => {
            state.form.set_tags(tags.clone());
            Ok((true, vec![]))
        }
        Event::SaleChanged(sale) => {
            state.form.set_sale(*sale);
            Ok((true, vec![]))
        }
        Event::PhotoChanged(photo) => {
            state.form.set_photo(photo.clone());
            Ok((true, vec![]))
        }
        Event::SubmitForm => match state.submit.begin(&state.form) {
            Ok(payload) => Ok((true, vec![Action::CreateAdvert(payload)])),
            Err(SubmitRejection::Invalid(reason)) => {
                tracing::debug!(reason = %reason, "submit disabled, draft is invalid");
                Ok((false, vec![]))
            }
            Err(SubmitRejection::InFlight) => {
                tracing::debug!("submit ignored, submission already in flight");
                Ok((false, vec![]))
            }
        },
        Event::DismissError => Ok((state.submit.dismiss_error(), vec![])),
        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::AdvertsLoaded { ticket, adverts } => {
            (state.list.complete(ticket, Ok(adverts.clone())), vec![])
        }
        WorkerResponse::AdvertsFailed { ticket, message } => {
            (state.list.complete(ticket, Err(message.clone())), vec![])
        }
        WorkerResponse::AdvertCreated { advert } => {
            let route = state.submit.succeeded(advert);
            state.form.reset();
            (true, vec![Action::Navigate(route)])
        }
        WorkerResponse::AdvertCreateFailed { message } => {
            state.submit.failed(message.clone());
            (true, vec![])
        }
        WorkerResponse::TagsLoaded { tags } => {
            tracing::debug!(count = tags.len(), "tag options loaded");
            state.form.set_tag_options(tags.clone());
            (true, vec![])
        }
        WorkerResponse::TagsFailed { message } => {
            tracing::warn!(error = %message, "failed to load tag options");
            (false, vec![])
        }
    }
}
