//! Event loop tying state, storage, navigation and the worker together.
//!
//! [`Dispatcher`] owns the [`AppState`] and runs every action the event handler
//! returns. Storage writes and navigation happen inline; API requests are
//! queued as futures and their responses fed back as events, in completion
//! order, whenever the caller polls [`Dispatcher::pump`].

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::error::Result;
use crate::remote::AdvertsApi;
use crate::storage::{load_filters, save_filters, Storage};
use crate::worker::{AdvertsWorker, Navigator, WorkerMessage, WorkerResponse};
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

/// Single-threaded event loop.
pub struct Dispatcher<A, S, N> {
    state: AppState,
    storage: S,
    navigator: N,
    worker: AdvertsWorker<A>,
    pending: FuturesUnordered<BoxFuture<'static, WorkerResponse>>,
}

impl<A, S, N> Dispatcher<A, S, N>
where
    A: AdvertsApi + 'static,
    S: Storage,
    N: Navigator,
{
    /// Creates a dispatcher with filter criteria restored from `storage`.
    pub fn new(api: Arc<A>, storage: S, navigator: N) -> Self {
        let filters = load_filters(&storage);
        tracing::debug!(filters = ?filters, "restored filter criteria");

        Self {
            state: AppState::new(filters),
            storage,
            navigator,
            worker: AdvertsWorker::new(api),
            pending: FuturesUnordered::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Number of API requests still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Handles one event and runs the resulting actions.
    ///
    /// Returns whether the view should be re-rendered.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        let (render, actions) = handle_event(&mut self.state, &event)?;
        for action in actions {
            self.execute(action);
        }
        Ok(render)
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::PersistFilters(criteria) => {
                if let Err(e) = save_filters(&mut self.storage, &criteria) {
                    tracing::warn!(error = %e, "failed to persist filter criteria");
                }
            }
            Action::Navigate(route) => self.navigator.navigate(&route),
            action => {
                if let Some(message) = WorkerMessage::from_action(action) {
                    self.pending.push(self.worker.handle_message(message));
                }
            }
        }
    }

    /// Waits for the next API response and dispatches it.
    ///
    /// Returns `None` when nothing is in flight, otherwise the render flag of the
    /// dispatched response.
    ///
    /// # Errors
    ///
    /// Propagates errors from the event handler.
    pub async fn pump(&mut self) -> Option<Result<bool>> {
        let response = self.pending.next().await?;
        Some(self.dispatch(Event::WorkerResponse(response)))
    }

    /// Dispatches responses until no request is in flight, including requests
    /// started while settling.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the event handler.
    pub async fn settle(&mut self) -> Result<()> {
        while let Some(outcome) = self.pump().await {
            outcome?;
        }
        Ok(())
    }

    /// Consumes the dispatcher, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
