//! Query string encoding for the listing endpoint.
//!
//! Clauses are emitted in a fixed order (name, sale, price, tags), each only
//! when its source value is set, and joined with `&`. Values are written raw;
//! percent-escaping happens in the transport when the query is attached to a URL.

use crate::domain::filters::{FilterCriteria, SaleFilter};

/// Encodes criteria into the canonical listing query string.
///
/// Default criteria encode to the empty string.
///
/// # Examples
///
/// ```
/// use adboard::domain::{encode_query, FilterCriteria, PriceRange, SaleFilter};
///
/// let criteria = FilterCriteria {
///     name: "a".into(),
///     sale: SaleFilter::Sell,
///     price: Some(PriceRange::new(10.0, 20.0)?),
///     tags: vec!["x".into(), "y".into()],
/// };
/// assert_eq!(encode_query(&criteria), "name=a&sale=true&price=10-20&tags=x,y");
/// # Ok::<(), adboard::AdboardError>(())
/// ```
#[must_use]
pub fn encode_query(criteria: &FilterCriteria) -> String {
    let mut clauses: Vec<String> = Vec::with_capacity(4);

    if !criteria.name.is_empty() {
        clauses.push(format!("name={}", criteria.name));
    }

    match criteria.sale {
        SaleFilter::Sell => clauses.push("sale=true".to_string()),
        SaleFilter::Buy => clauses.push("sale=false".to_string()),
        SaleFilter::Any => {}
    }

    if let Some(range) = criteria.price {
        clauses.push(format!("price={range}"));
    }

    if !criteria.tags.is_empty() {
        clauses.push(format!("tags={}", criteria.tags.join(",")));
    }

    clauses.join("&")
}

/// Clause keys in emission order.
const CLAUSE_KEYS: [&str; 4] = ["name", "sale", "price", "tags"];

/// Splits an encoded query back into `(key, value)` pairs.
///
/// Values are raw, so a `&` only ends a clause when it is followed by a key
/// that comes later in the emission order. A name such as `R&D desk` stays
/// one value.
///
/// # Examples
///
/// ```
/// use adboard::domain::split_query;
///
/// assert_eq!(
///     split_query("name=R&D desk&sale=true"),
///     vec![("name", "R&D desk"), ("sale", "true")]
/// );
/// ```
#[must_use]
pub fn split_query(query: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut rest = query;
    let mut next_key = 0;

    while !rest.is_empty() {
        let Some((key, tail)) = rest.split_once('=') else {
            pairs.push((rest, ""));
            break;
        };

        if let Some(index) = CLAUSE_KEYS.iter().position(|k| *k == key) {
            next_key = index + 1;
        }

        let end = clause_end(tail, &CLAUSE_KEYS[next_key.min(CLAUSE_KEYS.len())..]);
        pairs.push((key, &tail[..end]));
        rest = tail.get(end + 1..).unwrap_or("");
    }

    pairs
}

fn clause_end(tail: &str, later_keys: &[&str]) -> usize {
    tail.match_indices('&')
        .map(|(i, _)| i)
        .find(|&i| {
            later_keys
                .iter()
                .any(|k| tail[i + 1..].strip_prefix(k).is_some_and(|r| r.starts_with('=')))
        })
        .unwrap_or(tail.len())
}
