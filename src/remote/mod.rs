//! Remote adverts API.
//!
//! The listing and creation endpoints live on a remote service; this module
//! defines the seam the controllers call through ([`AdvertsApi`]) and its HTTP
//! implementation ([`HttpAdvertsApi`]).
//!
//! | Operation        | Request                            | Response                   |
//! |------------------|------------------------------------|----------------------------|
//! | list adverts     | `GET /adverts?<query>`             | `{ result: { rows: [...] } }` |
//! | create advert    | `POST /adverts` (multipart)        | `{ result: advert }`       |
//! | list tag options | `GET /adverts/tags`                | `{ result: [tag] }`        |

pub mod envelope;
pub mod http;

pub use envelope::{Envelope, ErrorBody, Rows};
pub use http::HttpAdvertsApi;

use crate::domain::{Advert, MultipartPayload, Result};
use async_trait::async_trait;

/// The remote adverts store.
///
/// Implementations must report every failure (network or non-2xx) as an
/// `Err`; callers turn those into state.
#[async_trait]
pub trait AdvertsApi: Send + Sync {
    /// Lists adverts matching an encoded query string (see
    /// [`encode_query`](crate::domain::encode_query)). An empty query lists everything.
    async fn list_adverts(&self, query: &str) -> Result<Vec<Advert>>;

    /// Creates an advert from a multipart payload and returns the stored advert.
    async fn create_advert(&self, payload: MultipartPayload) -> Result<Advert>;

    /// Lists the tag options offered when creating an advert.
    async fn list_tags(&self) -> Result<Vec<String>>;
}
