//! Open API client error types.

use crate::report::{ErrorKind, ErrorReport};

/// Errors from the Boatrace Open API client.
///
/// Every variant carries the request URL so the error documents can
/// reference it.
#[derive(Debug, thiserror::Error)]
pub enum OpenApiError {
    /// Connection failure or timeout
    #[error("failed to connect to the API: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream has no document for the requested date
    #[error("data not found for date {date}")]
    NotFound { url: String, date: String },

    /// Upstream returned a non-success status other than 404
    #[error("API returned HTTP {status}")]
    Api { url: String, status: u16 },

    /// Success status, but the body is not valid JSON
    #[error("invalid JSON response from API: {message}")]
    Json { url: String, message: String },

    /// Anything else that went wrong while talking to the API
    #[error("unexpected error: {message}")]
    Unexpected { url: String, message: String },
}

impl OpenApiError {
    /// Convert into the structured error document body.
    ///
    /// The mapping is total, so no client failure can escape the fetch
    /// boundary as a Rust error.
    pub fn report(&self) -> ErrorReport {
        match self {
            OpenApiError::Network { url, source } => {
                ErrorReport::new(ErrorKind::NetworkError, "Failed to connect to the API")
                    .with_detail("url", url.as_str())
                    .with_detail("status", source.to_string())
            }
            OpenApiError::NotFound { url, date } => ErrorReport::new(
                ErrorKind::NotFound,
                format!("Data not found for date {date}"),
            )
            .with_detail("url", url.as_str())
            .with_detail("status", 404),
            OpenApiError::Api { url, status } => {
                ErrorReport::new(ErrorKind::ApiError, format!("API returned HTTP {status}"))
                    .with_detail("url", url.as_str())
                    .with_detail("status", i64::from(*status))
            }
            OpenApiError::Json { url, message } => {
                ErrorReport::new(ErrorKind::ApiError, "Invalid JSON response from API")
                    .with_detail("url", url.as_str())
                    .with_detail("status", message.as_str())
            }
            OpenApiError::Unexpected { url, message } => {
                ErrorReport::new(ErrorKind::ApiError, format!("Unexpected error: {message}"))
                    .with_detail("url", url.as_str())
                    .with_detail("status", message.as_str())
            }
        }
    }
}
