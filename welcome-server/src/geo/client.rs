//! HTTP client for the IP geolocation service.

use std::time::Duration;

use tracing::debug;

use super::error::FetchError;
use super::types::{GeoRecord, parse_response};

/// Default lookup endpoint. Takes no parameters; locates the caller.
const DEFAULT_URL: &str = "https://api.qjqq.cn/api/Local";

/// Configuration for the geolocation client.
#[derive(Debug, Clone)]
pub struct GeoClientConfig {
    /// Full URL of the lookup endpoint
    pub url: String,
    /// Request timeout in seconds. `None` leaves the request unbounded.
    pub timeout_secs: Option<u64>,
}

impl GeoClientConfig {
    /// Create a config pointing at the default endpoint with no timeout.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint URL (for testing or self-hosted mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Bound each request to `secs` seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for GeoClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the geolocation service.
///
/// Each [`fetch`](Self::fetch) is exactly one GET; there is no retry.
#[derive(Debug, Clone)]
pub struct GeoClient {
    http: reqwest::Client,
    url: String,
}

impl GeoClient {
    /// Create a new geolocation client.
    pub fn new(config: GeoClientConfig) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            url: config.url,
        })
    }

    /// The endpoint this client queries.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Look up the caller's location.
    pub async fn fetch(&self) -> Result<GeoRecord, FetchError> {
        debug!(url = %self.url, "requesting geolocation");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}
