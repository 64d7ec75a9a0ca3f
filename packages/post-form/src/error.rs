//! Typed errors for the post form.
//!
//! Uses `thiserror` so callers can match on what went wrong. The controller
//! never shows these to the user directly; it maps them onto fixed messages
//! and forwards the detail to the observer.

use thiserror::Error;

use crate::types::CategoryId;

/// Errors from talking to the Category Directory or Post Storage services.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connection refused, DNS, TLS, aborted fetch)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Any non-2xx response. The body is kept for diagnostics only.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Endpoint could not be built from the configured base URL
    #[error("invalid endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Input problems caught before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("content is required")]
    MissingContent,

    /// Selection does not match any loaded category
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryId),

    /// Input name is not one of the form's fields
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
