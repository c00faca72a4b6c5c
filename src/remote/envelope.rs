//! Response envelopes of the adverts API.
//!
//! Every successful response wraps its payload as `{ "result": ... }`; failed
//! responses usually carry `{ "error": "..." }`.

use serde::Deserialize;

/// `{ result: T }` wrapper around every successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub result: T,
}

/// Listing payload: `{ rows: [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Rows<T> {
    pub rows: Vec<T>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Advert;

    #[test]
    fn test_decode_listing_envelope() {
        let body = r#"{
            "success": true,
            "result": { "rows": [ { "_id": "1", "name": "Bike", "price": 10, "sale": true, "tags": ["motor"] } ] }
        }"#;
        let envelope: Envelope<Rows<Advert>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.result.rows.len(), 1);
        assert_eq!(envelope.result.rows[0].id, "1");
    }

    #[test]
    fn test_decode_error_body() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"success":false,"error":"Not found"}"#).unwrap();
        assert_eq!(body.error, "Not found");
    }
}
