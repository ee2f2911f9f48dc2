//! Error taxonomy for every network operation.
//!
//! A call either yields a fully decoded value or exactly one [`HttpError`]:
//!
//! - [`ResponseError`]: a 4xx/5xx response, or GraphQL errors in a 200 body
//! - [`RateLimitError`]: a 429 response or a throttled GraphQL query
//! - [`ResponseDecodingError`]: an error body or `Link` header that could not be decoded
//! - [`PaginationError`]: any failure while parsing the `Link` header
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::clients::HttpError;
//!
//! match client.rest().get::<serde_json::Value, _>("shop", &()).await {
//!     Ok(shop) => println!("{shop}"),
//!     Err(HttpError::RateLimit(e)) => println!("retry in {}s", e.retry_after),
//!     Err(HttpError::Response(e)) => println!("{} {}", e.status, e),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use std::num::ParseIntError;
use thiserror::Error;

/// Message used when a failed response carries no readable error.
pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// A non-successful response from the API.
///
/// Individual messages are kept in the order the API returned them. The
/// `Display` output is `message` when set, otherwise the messages sorted
/// alphabetically and joined with `", "`, otherwise `"Unknown Error"`.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::ResponseError;
///
/// let error = ResponseError {
///     status: 422,
///     message: None,
///     errors: vec!["oops".to_string(), "I did it again".to_string()],
/// };
/// assert_eq!(error.to_string(), "I did it again, oops");
/// assert_eq!(error.errors[0], "oops");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseError {
    /// HTTP status code (200 for GraphQL errors).
    pub status: u16,
    /// Single message, when the body carried one.
    pub message: Option<String>,
    /// Individual messages in response order.
    pub errors: Vec<String>,
}

impl ResponseError {
    /// Creates an error with no messages.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self {
            status,
            message: None,
            errors: Vec::new(),
        }
    }

    /// Returns the aggregated, user facing message.
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        if self.errors.is_empty() {
            return UNKNOWN_ERROR.to_string();
        }
        let mut sorted: Vec<&str> = self.errors.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.join(", ")
    }
}

impl std::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ResponseError {}

/// A request rejected because the rate-limit bucket was exhausted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{response}")]
pub struct RateLimitError {
    /// The underlying response error.
    pub response: ResponseError,
    /// Suggested wait before retrying, in whole seconds.
    pub retry_after: u64,
}

/// A response body or header whose structure could not be decoded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseDecodingError {
    /// Status of the response, when one was received.
    pub status: Option<u16>,
    /// What could not be decoded.
    pub message: String,
    /// The raw body, when decoding a body failed.
    pub body: Option<String>,
}

impl ResponseDecodingError {
    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            body: None,
        }
    }
}

/// Failure while parsing a `Link` pagination header.
///
/// Malformed structure is reported as [`ResponseDecodingError`]; escape and
/// integer failures from the URL's query string pass through unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// The header structure was not understood.
    #[error(transparent)]
    Decoding(#[from] ResponseDecodingError),

    /// The query string contained an invalid percent escape.
    #[error("invalid URL escape \"{0}\"")]
    InvalidEscape(String),

    /// The `limit` parameter was not an integer.
    #[error(transparent)]
    InvalidLimit(#[from] ParseIntError),
}

/// A request that failed validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The resource path was empty after normalization.
    #[error("Invalid path '{path}': path cannot be empty.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// An update was requested for a resource that has no ID.
    #[error("Cannot update {resource} without an id.")]
    MissingResourceId {
        /// The singular resource name.
        resource: &'static str,
    },
}

/// Unified error returned by every network operation.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A 4xx/5xx response, or GraphQL errors.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Rate limited; retries were exhausted or disabled.
    #[error(transparent)]
    RateLimit(#[from] RateLimitError),

    /// An error body could not be decoded.
    #[error(transparent)]
    ResponseDecoding(#[from] ResponseDecodingError),

    /// The `Link` header could not be parsed.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful body did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The client's cancellation token fired.
    #[error("Request cancelled")]
    Cancelled,
}

impl HttpError {
    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::RateLimit(e) => Some(e.response.status),
            Self::ResponseDecoding(e) => e.status,
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Pagination(_) | Self::Decode(_) | Self::InvalidRequest(_) | Self::Cancelled => {
                None
            }
        }
    }

    /// Returns the retry-after hint in seconds for rate-limit errors.
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimit(e) => Some(e.retry_after),
            _ => None,
        }
    }

    /// Returns `true` for errors the retry loop acts on: rate limits and 5xx.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit(_) => true,
            Self::Response(e) => e.status >= 500,
            _ => false,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<PaginationError>();
};
