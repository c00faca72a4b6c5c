//! Runtime for side effects produced by the event handler.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol between the event loop and the worker
//! - `handler`: Worker turning requests into API calls
//! - `dispatch`: Event loop owning state, storage and the in-flight requests
//! - `navigator`: Route change sink

pub mod dispatch;
pub mod handler;
pub mod messages;
pub mod navigator;

pub use dispatch::Dispatcher;
pub use handler::AdvertsWorker;
pub use messages::{WorkerMessage, WorkerResponse};
pub use navigator::{HistoryNavigator, Navigator};
