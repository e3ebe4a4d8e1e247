//! HTTP client for the address-search service.
//!
//! Wraps `reqwest` with the service's request factory and typed response
//! deserialization. A fetch either yields the full [`FeatureCollection`] or
//! a single opaque [`AdresseError`]; there is no retry.

use std::time::Duration;

use adresse_core::{AppConfig, SearchInput};
use reqwest::Client;

use crate::error::AdresseError;
use crate::mapper::map_results;
use crate::query::{build_query, RequestDescriptor, SearchEndpoint};
use crate::types::{DisplayRecord, FeatureCollection};

/// Client for the address-search REST API.
///
/// Use [`AdresseClient::from_config`] for production or
/// [`AdresseClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct AdresseClient {
    client: Client,
    endpoint: SearchEndpoint,
}

impl AdresseClient {
    /// Creates a client from the loaded application config.
    ///
    /// # Errors
    ///
    /// See [`AdresseClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AdresseError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AdresseError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdresseError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AdresseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: SearchEndpoint::new(base_url)?,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &SearchEndpoint {
        &self.endpoint
    }

    /// Maps `input` to the request this client would issue for it.
    #[must_use]
    pub fn build_query(&self, input: &SearchInput) -> RequestDescriptor {
        build_query(&self.endpoint, input)
    }

    /// Performs the call described by `descriptor`.
    ///
    /// Returns `Ok(None)` without touching the network for the idle
    /// descriptor.
    ///
    /// # Errors
    ///
    /// - [`AdresseError::Http`] on network failure or non-2xx HTTP status.
    /// - [`AdresseError::Deserialize`] if the body is not a feature collection.
    pub async fn fetch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<Option<FeatureCollection>, AdresseError> {
        if descriptor.is_idle() {
            return Ok(None);
        }

        let mut request = self.client.get(&descriptor.url);
        for (name, value) in &descriptor.options.headers {
            request = request.header(name, value);
        }

        tracing::debug!(url = %descriptor.url, "sending search request");
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        let collection = serde_json::from_str::<FeatureCollection>(&body).map_err(|e| {
            AdresseError::Deserialize {
                context: descriptor.url.clone(),
                source: e,
            }
        })?;
        tracing::debug!(
            url = %descriptor.url,
            features = collection.features.len(),
            "search request completed"
        );
        Ok(Some(collection))
    }

    /// Builds, fetches and maps in one go.
    ///
    /// An idle input yields an empty list without a request.
    ///
    /// # Errors
    ///
    /// Same as [`AdresseClient::fetch`].
    pub async fn search(&self, input: &SearchInput) -> Result<Vec<DisplayRecord>, AdresseError> {
        let descriptor = self.build_query(input);
        let response = self.fetch(&descriptor).await?;
        Ok(response.as_ref().map(map_results).unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
