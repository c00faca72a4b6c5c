//! Advert list request lifecycle.
//!
//! [`ListFetchController`] owns the list result and is the only thing allowed to
//! move it between states:
//!
//! ```text
//! Idle ──start──▶ Loading ──complete(ok)──▶ Success
//!                    ▲    └─complete(err)─▶ Failure
//!                    └──────start / retry──────┘
//! ```
//!
//! Every `start` hands out a [`FetchTicket`]. Completions are applied only when
//! they carry the ticket of the most recent start; anything older is dropped, so
//! overlapping fetches can resolve in any order without showing stale rows.

use crate::domain::{encode_query, Advert, FilterCriteria};

/// Outcome of the latest list fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListResult {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A fetch is in flight; previous rows and errors are cleared.
    Loading,
    /// The latest fetch succeeded.
    Success(Vec<Advert>),
    /// The latest fetch failed with this message.
    Failure(String),
}

/// Identifies one started fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    /// Monotonic start counter.
    pub generation: u64,
    /// Criteria the fetch was started with.
    pub criteria: FilterCriteria,
}

/// Everything the transport needs to run one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    /// Encoded query string for the listing endpoint.
    pub query: String,
}

/// Request lifecycle for the advert list.
#[derive(Debug, Default)]
pub struct ListFetchController {
    result: ListResult,
    generation: u64,
    in_flight: Option<FetchTicket>,
    last_criteria: Option<FilterCriteria>,
}

impl ListFetchController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn result(&self) -> &ListResult {
        &self.result
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a fetch for `criteria`, superseding any fetch still in flight.
    ///
    /// The state becomes [`ListResult::Loading`]; the returned request carries the
    /// ticket that [`complete`](Self::complete) must be called with.
    pub fn start(&mut self, criteria: &FilterCriteria) -> FetchRequest {
        self.generation += 1;

        if let Some(previous) = &self.in_flight {
            tracing::debug!(
                superseded = previous.generation,
                generation = self.generation,
                "superseding in-flight fetch"
            );
        }

        let ticket = FetchTicket {
            generation: self.generation,
            criteria: criteria.clone(),
        };
        let query = encode_query(criteria);

        tracing::debug!(generation = self.generation, query = %query, "starting list fetch");

        self.result = ListResult::Loading;
        self.in_flight = Some(ticket.clone());
        self.last_criteria = Some(criteria.clone());

        FetchRequest { ticket, query }
    }

    /// Re-runs the last fetch. Only available in [`ListResult::Failure`].
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if !matches!(self.result, ListResult::Failure(_)) {
            tracing::debug!("retry ignored, list is not in failure state");
            return None;
        }
        let criteria = self.last_criteria.clone()?;
        Some(self.start(&criteria))
    }

    /// Applies a fetch outcome if `ticket` belongs to the current fetch.
    ///
    /// Returns `true` when the state changed. Late completions of superseded
    /// fetches return `false` and leave the state untouched.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: std::result::Result<Vec<Advert>, String>,
    ) -> bool {
        if self.in_flight.as_ref() != Some(ticket) {
            tracing::debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping stale list result"
            );
            return false;
        }

        self.in_flight = None;
        self.result = match outcome {
            Ok(adverts) => {
                tracing::debug!(count = adverts.len(), "list fetch succeeded");
                ListResult::Success(adverts)
            }
            Err(message) => {
                tracing::debug!(error = %message, "list fetch failed");
                ListResult::Failure(message)
            }
        };
        true
    }
}
