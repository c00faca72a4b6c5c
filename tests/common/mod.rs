//! Shared fakes for integration tests.

#![allow(dead_code)]

use adboard::domain::{Advert, MultipartPayload};
use adboard::remote::AdvertsApi;
use adboard::storage::MemoryStorage;
use adboard::worker::{Dispatcher, HistoryNavigator};
use adboard::{AdboardError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub type TestDispatcher<S = MemoryStorage> = Dispatcher<FakeApi, S, HistoryNavigator>;

/// In-memory adverts API whose listing responses can be held back.
///
/// A query with a registered gate waits until the test sends its outcome;
/// queries without a gate answer immediately with the configured adverts.
#[derive(Default)]
pub struct FakeApi {
    adverts: Mutex<Vec<Advert>>,
    gates: Mutex<HashMap<String, VecDeque<oneshot::Receiver<Result<Vec<Advert>>>>>>,
    queries: Mutex<Vec<String>>,
    create_outcomes: Mutex<VecDeque<Result<Advert>>>,
    created: Mutex<Vec<MultipartPayload>>,
    tags: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_adverts(adverts: Vec<Advert>) -> Arc<Self> {
        let api = Self::default();
        *api.adverts.lock().unwrap() = adverts;
        Arc::new(api)
    }

    /// Holds back the next listing request for `query` until the sender fires.
    pub fn gate(&self, query: &str) -> oneshot::Sender<Result<Vec<Advert>>> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .entry(query.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    /// Queues the outcome of the next create request.
    pub fn push_create(&self, outcome: Result<Advert>) {
        self.create_outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn set_tags(&self, tags: &[&str]) {
        *self.tags.lock().unwrap() = tags.iter().map(|t| t.to_string()).collect();
    }

    /// Queries received by the listing endpoint, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    /// Payloads received by the create endpoint, in call order.
    pub fn created(&self) -> Vec<MultipartPayload> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdvertsApi for FakeApi {
    async fn list_adverts(&self, query: &str) -> Result<Vec<Advert>> {
        self.queries.lock().unwrap().push(query.to_string());

        let gate = self
            .gates
            .lock()
            .unwrap()
            .get_mut(query)
            .and_then(VecDeque::pop_front);

        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| {
                Err(AdboardError::Request {
                    status: None,
                    message: "gate dropped".to_string(),
                })
            }),
            None => Ok(self.adverts.lock().unwrap().clone()),
        }
    }

    async fn create_advert(&self, payload: MultipartPayload) -> Result<Advert> {
        self.created.lock().unwrap().push(payload);
        self.create_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(advert("created")))
    }

    async fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.lock().unwrap().clone())
    }
}

pub fn advert(id: &str) -> Advert {
    Advert {
        id: id.to_string(),
        name: format!("advert {id}"),
        price: 100.0,
        sale: true,
        tags: vec!["motor".to_string()],
        photo: None,
        created_at: None,
    }
}

pub fn server_error(message: &str) -> AdboardError {
    AdboardError::Request {
        status: Some(500),
        message: message.to_string(),
    }
}

pub fn dispatcher(api: &Arc<FakeApi>) -> TestDispatcher {
    Dispatcher::new(Arc::clone(api), MemoryStorage::new(), HistoryNavigator::new())
}
