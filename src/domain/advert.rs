//! Advert read model.
//!
//! Adverts are owned by the remote store; the client only holds read-only copies
//! decoded from API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single classified listing as returned by the remote store.
///
/// The backend names the identifier `_id`; `id` is accepted as well, and when
/// both are present `_id` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AdvertRecord")]
pub struct Advert {
    /// Remote identifier, used to build the detail route.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Asking (or offered) price.
    pub price: f64,

    /// `true` when the item is for sale, `false` when the author wants to buy.
    pub sale: bool,

    /// Tags attached to the advert.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Photo URL, when one was uploaded.
    #[serde(default, alias = "photoUrl", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    /// Creation timestamp, when the backend reports it.
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wire shape of an advert, carrying either identifier spelling.
#[derive(Deserialize)]
struct AdvertRecord {
    #[serde(rename = "_id")]
    object_id: Option<String>,
    id: Option<String>,
    name: String,
    price: f64,
    sale: bool,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, alias = "photoUrl")]
    photo: Option<String>,
    #[serde(default, rename = "createdAt")]
    created_at: Option<DateTime<Utc>>,
}

impl TryFrom<AdvertRecord> for Advert {
    type Error = String;

    fn try_from(record: AdvertRecord) -> Result<Self, Self::Error> {
        let id = record
            .object_id
            .or(record.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;

        Ok(Self {
            id,
            name: record.name,
            price: record.price,
            sale: record.sale,
            tags: record.tags,
            photo: record.photo,
            created_at: record.created_at,
        })
    }
}
