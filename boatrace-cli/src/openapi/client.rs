//! Boatrace Open API HTTP client.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::domain::{Endpoint, RaceDate, Year};

use super::error::OpenApiError;

/// Default base URL for the Boatrace Open API.
const DEFAULT_BASE_URL: &str = "https://boatraceopenapi.github.io";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the Open API client.
#[derive(Debug, Clone)]
pub struct OpenApiConfig {
    /// Base URL for the API (defaults to the public GitHub Pages host)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenApiConfig {
    /// Create a config with production defaults.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Boatrace Open API.
///
/// The API is a static file tree, so every request is a plain GET with no
/// authentication. One attempt per call, no retries: a failure is terminal
/// and classified into [`OpenApiError`].
#[derive(Debug, Clone)]
pub struct OpenApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenApiClient {
    /// Create a new client from the given configuration.
    pub fn new(config: OpenApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// URL of the document for one endpoint and date.
    pub fn day_url(&self, endpoint: Endpoint, year: &Year, date: &RaceDate) -> String {
        format!(
            "{}/{}/v2/{}/{}.json",
            self.base_url,
            endpoint.as_str(),
            year.as_str(),
            date.as_str()
        )
    }

    /// Fetch the race document for one endpoint and date.
    ///
    /// Performs a single GET and parses the body as JSON. The document is
    /// returned as raw [`Value`]: race records are opaque beyond the two
    /// fields the filter inspects, and a typed DTO would drop the rest.
    pub async fn fetch_day(
        &self,
        endpoint: Endpoint,
        year: &Year,
        date: &RaceDate,
    ) -> Result<Value, OpenApiError> {
        let url = self.day_url(endpoint, year, date);
        debug!(%url, "fetching race document");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() || e.is_connect() => {
                return Err(OpenApiError::Network { url, source: e });
            }
            Err(e) => {
                return Err(OpenApiError::Unexpected {
                    url,
                    message: e.to_string(),
                });
            }
        };

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(OpenApiError::NotFound {
                url,
                date: date.as_str().to_string(),
            });
        }

        if !status.is_success() {
            return Err(OpenApiError::Api {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                return Err(OpenApiError::Network { url, source: e });
            }
            Err(e) => {
                return Err(OpenApiError::Unexpected {
                    url,
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_str(&body).map_err(|e| OpenApiError::Json {
            url,
            message: e.to_string(),
        })
    }
}
