//! Structured error documents.
//!
//! Every failure the tool can produce is surfaced to the caller as data:
//! a document with a single `error` key wrapping a type / message /
//! details triple. The types form a closed set, so callers can match on
//! them without parsing message text.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// The closed set of error document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A request parameter failed validation before any network call
    InvalidParameters,
    /// Upstream returned 404 (no data published for that date)
    NotFound,
    /// Upstream returned another error status, an invalid body, or an
    /// unclassified failure occurred
    ApiError,
    /// The connection could not be established or the request timed out
    NetworkError,
}

/// The body of an error document.
///
/// Fields are declared in serialization order: `type`, `message`,
/// `details`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    pub details: Map<String, Value>,
}

impl ErrorReport {
    /// Create a report with an empty details map.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorReport {
            kind,
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Attach a details entry.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    /// Wrap the report as the single-key `{"error": {...}}` document.
    pub fn into_document(self) -> Value {
        json!({ "error": self })
    }
}
