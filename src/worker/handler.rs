//! Worker implementation for remote API requests.
//!
//! [`AdvertsWorker`] turns each [`WorkerMessage`] into a `'static` future that
//! resolves to exactly one [`WorkerResponse`]. Failures never escape as errors:
//! they are rendered to messages and returned as failure variants.

use crate::domain::error::Result;
use crate::remote::AdvertsApi;
use crate::worker::{WorkerMessage, WorkerResponse};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::sync::Arc;
use tracing::Instrument;

/// Runs API requests on behalf of the event loop.
pub struct AdvertsWorker<A> {
    api: Arc<A>,
}

impl<A> Clone for AdvertsWorker<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: AdvertsApi + 'static> AdvertsWorker<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Helper for handling API results with consistent logging.
    fn handle_api_result<T, S, F>(
        operation: &str,
        result: Result<T>,
        on_success: S,
        on_failure: F,
    ) -> WorkerResponse
    where
        S: FnOnce(T) -> WorkerResponse,
        F: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "api request successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "api request failed");
                on_failure(e.to_string())
            }
        }
    }

    /// Starts the request for `message`.
    ///
    /// The returned future owns everything it needs and can be polled from any
    /// executor.
    pub fn handle_message(&self, message: WorkerMessage) -> BoxFuture<'static, WorkerResponse> {
        let api = Arc::clone(&self.api);
        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);

        async move {
            match message {
                WorkerMessage::FetchAdverts(request) => {
                    let result = api.list_adverts(&request.query).await;
                    let ticket = request.ticket;
                    let failed_ticket = ticket.clone();
                    Self::handle_api_result(
                        "list adverts",
                        result,
                        |adverts| WorkerResponse::AdvertsLoaded { ticket, adverts },
                        |message| WorkerResponse::AdvertsFailed {
                            ticket: failed_ticket,
                            message,
                        },
                    )
                }
                WorkerMessage::CreateAdvert(payload) => Self::handle_api_result(
                    "create advert",
                    api.create_advert(payload).await,
                    |advert| WorkerResponse::AdvertCreated { advert },
                    |message| WorkerResponse::AdvertCreateFailed { message },
                ),
                WorkerMessage::FetchTags => Self::handle_api_result(
                    "list tags",
                    api.list_tags().await,
                    |tags| WorkerResponse::TagsLoaded { tags },
                    |message| WorkerResponse::TagsFailed { message },
                ),
            }
        }
        .instrument(span)
        .boxed()
    }
}
