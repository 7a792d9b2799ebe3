//! Outbound HTTP client for the geocoding provider.

use reqwest::Client;

use super::enrich::GeocodeResponse;
use super::GeocodeError;
use crate::config::Settings;

/// Client for the Mapbox places endpoint.
///
/// Holds the configured access token so handlers never touch the
/// credential directly.
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    access_token: String,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new client from validated settings.
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            access_token: settings.access_token.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward a place query upstream and parse the response.
    ///
    /// `params` are the inbound request's query-string pairs in wire
    /// order; they are merged after the access token, so a client may
    /// override any outbound parameter, the token included.
    pub async fn forward(
        &self,
        query: &str,
        params: &[(String, String)],
    ) -> Result<GeocodeResponse, GeocodeError> {
        let url = format!(
            "{}/geocoding/v5/mapbox.places/{}.json",
            self.base_url,
            urlencoding::encode(query)
        );
        let merged = merge_query_params(&self.access_token, params);

        tracing::info!(query, "forwarding geocode request upstream");
        let response = self
            .client
            .get(&url)
            .query(&merged)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Status { status, body });
        }

        let body = response.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|err| GeocodeError::Shape(err.to_string()))
    }
}

/// Wrap a transport failure with its URL stripped. The URL's query
/// string carries the access token, which must never reach logs or
/// response bodies.
fn transport(err: reqwest::Error) -> GeocodeError {
    GeocodeError::Transport(err.without_url())
}

/// Assemble outbound query parameters: access token first, then every
/// inbound pair in order. Duplicate keys keep their first position and
/// take the last value, so an inbound `access_token` overrides the
/// configured one.
pub fn merge_query_params(
    access_token: &str,
    params: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> =
        vec![("access_token".to_string(), access_token.to_string())];

    for (key, value) in params {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }

    merged
}
