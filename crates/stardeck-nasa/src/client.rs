//! HTTP client for the NASA Image and Video Library search API and the
//! Astronomy Picture of the Day API.
//!
//! Non-2xx responses surface as [`NasaError::UnexpectedStatus`] and bodies
//! that are not the expected JSON as [`NasaError::Deserialize`]. There is no
//! automatic retry; callers decide how a failed request degrades.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::NasaError;
use crate::types::{Apod, SearchItem, SearchResponse};

const DEFAULT_IMAGES_BASE_URL: &str = "https://images-api.nasa.gov";
const DEFAULT_APOD_BASE_URL: &str = "https://api.nasa.gov/planetary/apod";

/// The only media kind the explorer displays.
const IMAGE_MEDIA_TYPE: &str = "image";

/// Client for the NASA public APIs.
///
/// Use [`NasaClient::new`] for production or [`NasaClient::with_base_urls`]
/// to point at a mock server in tests.
pub struct NasaClient {
    client: Client,
    api_key: String,
    images_base_url: Url,
    apod_base_url: Url,
}

impl NasaClient {
    /// Creates a client pointed at the production NASA endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`NasaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NasaError> {
        Self::with_base_urls(
            api_key,
            timeout_secs,
            user_agent,
            DEFAULT_IMAGES_BASE_URL,
            DEFAULT_APOD_BASE_URL,
        )
    }

    /// Creates a client with custom endpoints (configuration overrides or
    /// wiremock in tests).
    ///
    /// `images_base_url` is the API root (`/search` is appended);
    /// `apod_base_url` is the full APOD endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NasaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NasaError::InvalidBaseUrl`] if either
    /// URL does not parse.
    pub fn with_base_urls(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        images_base_url: &str,
        apod_base_url: &str,
    ) -> Result<Self, NasaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join("search")` appends a
        // segment rather than replacing the last one.
        let images_normalised = format!("{}/", images_base_url.trim_end_matches('/'));
        let images_base_url = parse_base_url(&images_normalised)?;
        let apod_base_url = parse_base_url(apod_base_url.trim_end_matches('/'))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            images_base_url,
            apod_base_url,
        })
    }

    /// Searches the image library for `query`, restricted to still images,
    /// and keeps the first `limit` records the API returned.
    ///
    /// The limit applies to the raw records. A record inside the window that
    /// does not decode into [`SearchItem`] is dropped, and nothing beyond the
    /// window takes its place.
    ///
    /// # Errors
    ///
    /// - [`NasaError::Http`] on network failure or timeout.
    /// - [`NasaError::UnexpectedStatus`] on any non-2xx status.
    /// - [`NasaError::Deserialize`] if the body is not the expected envelope.
    pub async fn search_images(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchItem>, NasaError> {
        let url = self.search_url(query)?;
        let body = self.request_json(&url).await?;

        let envelope: SearchResponse =
            serde_json::from_value(body).map_err(|e| NasaError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let mut raw_items = envelope
            .collection
            .and_then(|c| c.items)
            .unwrap_or_default();
        raw_items.truncate(limit);

        let total = raw_items.len();
        let items: Vec<SearchItem> = raw_items
            .into_iter()
            .filter_map(|v| serde_json::from_value::<SearchItem>(v).ok())
            .collect();

        if items.len() < total {
            tracing::debug!(
                query,
                skipped = total - items.len(),
                "skipped malformed search items"
            );
        }

        Ok(items)
    }

    /// Fetches today's Astronomy Picture of the Day.
    ///
    /// # Errors
    ///
    /// - [`NasaError::Http`] on network failure or timeout.
    /// - [`NasaError::UnexpectedStatus`] on any non-2xx status.
    /// - [`NasaError::Deserialize`] if the body is not an APOD record.
    pub async fn fetch_apod(&self) -> Result<Apod, NasaError> {
        let url = self.apod_url();
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| NasaError::Deserialize {
            context: "apod".to_owned(),
            source: e,
        })
    }

    /// Builds `{images_base}/search?q=<query>&media_type=image`.
    fn search_url(&self, query: &str) -> Result<Url, NasaError> {
        let mut url = self
            .images_base_url
            .join("search")
            .map_err(|e| NasaError::InvalidBaseUrl {
                url: self.images_base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("media_type", IMAGE_MEDIA_TYPE);
        Ok(url)
    }

    fn apod_url(&self) -> Url {
        let mut url = self.apod_base_url.clone();
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        url
    }

    /// Sends a GET request, checks for a 2xx status, and parses the body as
    /// JSON.
    ///
    /// The URL is logged without its query string so the API key never lands
    /// in logs or error messages.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, NasaError> {
        let display_url = redacted(url);
        tracing::debug!(url = %display_url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NasaError::UnexpectedStatus {
                status: status.as_u16(),
                url: display_url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NasaError::Deserialize {
            context: display_url,
            source: e,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, NasaError> {
    Url::parse(raw).map_err(|e| NasaError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
