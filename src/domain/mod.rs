//! Core domain types and pure functions.
//!
//! Nothing in this module performs I/O. It holds the value types the controllers
//! pass around (criteria, adverts, drafts, payloads, routes) and the two pure
//! encoders: [`encode_query`] for the listing endpoint and [`encode_payload`] for
//! the creation endpoint.

pub mod advert;
pub mod draft;
pub mod error;
pub mod filters;
pub mod payload;
pub mod query;
pub mod route;

pub use advert::Advert;
pub use draft::{DraftItem, Photo};
pub use error::{AdboardError, Result, ValidationError};
pub use filters::{FilterCriteria, PriceRange, SaleFilter};
pub use payload::{encode_payload, Field, FieldValue, MultipartPayload};
pub use query::{encode_query, split_query};
pub use route::Route;
