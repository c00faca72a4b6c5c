//! Filter criteria applied to the advert listing.
//!
//! [`FilterCriteria`] is a plain value: it is replaced wholesale on every user
//! submission and compared structurally (derived `PartialEq`) to decide whether
//! a new fetch is needed. Two criteria read from storage at different times are
//! distinct values but compare equal when their fields match.
//!
//! The serde shape matches what is persisted under the `filters` key:
//!
//! ```json
//! { "name": "", "sale": "", "price": [], "tags": [] }
//! ```

use crate::domain::error::{AdboardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transaction type filter.
///
/// Serialized as `"sell"`, `"buy"` or `""`. Any other stored string reads back
/// as [`SaleFilter::Any`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SaleFilter {
    /// No restriction on transaction type.
    #[default]
    Any,
    /// Only adverts offering an item for sale.
    Sell,
    /// Only adverts looking to buy an item.
    Buy,
}

impl SaleFilter {
    /// Wire spelling used in persisted criteria.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Sell => "sell",
            Self::Buy => "buy",
        }
    }
}

impl From<String> for SaleFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sell" => Self::Sell,
            "buy" => Self::Buy,
            _ => Self::Any,
        }
    }
}

impl From<SaleFilter> for String {
    fn from(value: SaleFilter) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SaleFilter {
    type Err = AdboardError;

    /// Strict parse for user input: unlike deserialization, unknown values are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" | "any" => Ok(Self::Any),
            "sell" => Ok(Self::Sell),
            "buy" => Ok(Self::Buy),
            other => Err(AdboardError::InvalidFilter(format!(
                "unknown sale filter '{other}', expected 'sell' or 'buy'"
            ))),
        }
    }
}

/// Inclusive price bounds, always finite and ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    low: f64,
    high: f64,
}

impl PriceRange {
    /// Builds a range, rejecting negative or non-finite bounds and `low > high`.
    ///
    /// # Errors
    ///
    /// Returns [`AdboardError::InvalidFilter`] if the bounds break the invariant.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(AdboardError::InvalidFilter(format!(
                "price bounds must be finite, got {low}-{high}"
            )));
        }
        if low < 0.0 {
            return Err(AdboardError::InvalidFilter(format!(
                "price bounds must not be negative, got {low}-{high}"
            )));
        }
        if low > high {
            return Err(AdboardError::InvalidFilter(format!(
                "price bounds must be ascending, got {low}-{high}"
            )));
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub const fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub const fn high(&self) -> f64 {
        self.high
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl FromStr for PriceRange {
    type Err = AdboardError;

    /// Parses `LOW-HIGH`, e.g. `10-250`.
    fn from_str(s: &str) -> Result<Self> {
        let (low, high) = s.trim().split_once('-').ok_or_else(|| {
            AdboardError::InvalidFilter(format!("expected LOW-HIGH price range, got '{s}'"))
        })?;
        let parse = |bound: &str| {
            bound.trim().parse::<f64>().map_err(|_| {
                AdboardError::InvalidFilter(format!("invalid price bound '{bound}'"))
            })
        };
        Self::new(parse(low)?, parse(high)?)
    }
}

/// The user-chosen filter set applied to the listing query.
///
/// `tags` is expected to be free of duplicates; that is the caller's job and is
/// not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Name fragment to search for. Empty means no name filter.
    pub name: String,

    /// Transaction type filter.
    pub sale: SaleFilter,

    /// Price bounds, persisted as `[]` or `[low, high]`.
    #[serde(with = "price_bounds")]
    pub price: Option<PriceRange>,

    /// Tags every listed advert must carry.
    pub tags: Vec<String>,
}

impl FilterCriteria {
    /// Whether these criteria are structurally equal to the built-in default.
    ///
    /// This is a value comparison, not a flag: criteria that were edited and then
    /// cleared again count as default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

mod price_bounds {
    use super::PriceRange;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(price: &Option<PriceRange>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bounds: Vec<f64> = price.map_or_else(Vec::new, |range| vec![range.low, range.high]);
        serializer.collect_seq(bounds)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PriceRange>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bounds = Option::<Vec<f64>>::deserialize(deserializer)?.unwrap_or_default();
        match bounds.as_slice() {
            [] => Ok(None),
            [low, high] => PriceRange::new(*low, *high).map(Some).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "price must have 0 or 2 bounds, got {}",
                other.len()
            ))),
        }
    }
}
