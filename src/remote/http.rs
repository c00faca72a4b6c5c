//! reqwest-based implementation of [`AdvertsApi`].

use crate::domain::error::{AdboardError, Result};
use crate::domain::{split_query, Advert, FieldValue, MultipartPayload};
use crate::remote::envelope::{Envelope, ErrorBody, Rows};
use crate::remote::AdvertsApi;
use crate::Config;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client for the adverts API.
///
/// Configures the underlying client with the configured total timeout and a
/// connect timeout capped at the same value.
#[derive(Debug, Clone)]
pub struct HttpAdvertsApi {
    client: Client,
    base: Url,
}

impl HttpAdvertsApi {
    /// Creates a client rooted at `api_url` (e.g. `http://localhost:3001/apiv1`).
    ///
    /// # Errors
    ///
    /// Returns [`AdboardError::Config`] if the URL is invalid, or a request error
    /// if the HTTP client cannot be built.
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let mut base = Url::parse(api_url)
            .map_err(|e| AdboardError::Config(format!("invalid api_url '{api_url}': {e}")))?;

        // Without a trailing slash `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(30)))
            .build()?;

        Ok(Self { client, base })
    }

    /// Creates a client from the `api_url` and `request_timeout_secs` settings.
    ///
    /// # Errors
    ///
    /// See [`HttpAdvertsApi::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| AdboardError::Config(format!("invalid endpoint '{path}': {e}")))
    }

    /// Turns non-2xx responses into [`AdboardError::Request`], preferring the
    /// server's `{ error }` message over the status text.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });

        tracing::debug!(status = status.as_u16(), message = %message, "request rejected");
        Err(AdboardError::Request {
            status: Some(status.as_u16()),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| AdboardError::Decode(format!("unexpected response body: {e}")))?;
        Ok(envelope.result)
    }
}

/// Builds the multipart form, keeping field order.
fn into_form(payload: MultipartPayload) -> Result<Form> {
    let mut form = Form::new();
    for field in payload.into_fields() {
        form = match field.value {
            FieldValue::Text(value) => form.text(field.name, value),
            FieldValue::Binary(photo) => {
                let mut part = Part::bytes(photo.bytes).file_name(photo.file_name);
                if let Some(mime) = photo.mime {
                    part = part.mime_str(&mime)?;
                }
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl AdvertsApi for HttpAdvertsApi {
    async fn list_adverts(&self, query: &str) -> Result<Vec<Advert>> {
        let mut url = self.endpoint("adverts")?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(split_query(query));
        }

        tracing::debug!(url = %url, "fetching adverts");
        let response = self.client.get(url).send().await?;
        let rows: Rows<Advert> = Self::decode(Self::check_status(response).await?).await?;

        tracing::debug!(count = rows.rows.len(), "adverts fetched");
        Ok(rows.rows)
    }

    async fn create_advert(&self, payload: MultipartPayload) -> Result<Advert> {
        let url = self.endpoint("adverts")?;
        let form = into_form(payload)?;

        tracing::debug!(url = %url, "creating advert");
        let response = self.client.post(url).multipart(form).send().await?;
        let advert: Advert = Self::decode(Self::check_status(response).await?).await?;

        tracing::debug!(advert_id = %advert.id, "advert created");
        Ok(advert)
    }

    async fn list_tags(&self) -> Result<Vec<String>> {
        let url = self.endpoint("adverts/tags")?;
        let response = self.client.get(url).send().await?;
        Self::decode(Self::check_status(response).await?).await
    }
}
