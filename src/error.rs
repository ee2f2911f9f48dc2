//! Configuration error types for the Shopify client.
//!
//! Network and API failures are reported through
//! [`HttpError`](crate::clients::HttpError); this module only covers the
//! errors raised while building a [`ClientConfig`](crate::ClientConfig).
//!
//! # Example
//!
//! ```rust
//! use shopify_client::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Shopify access token.")]
    EmptyAccessToken,

    /// A private app credential (API key or password) was empty.
    #[error("Private app credentials require a non-empty {field}.")]
    EmptyPrivateAppCredential {
        /// The name of the empty credential.
        field: &'static str,
    },

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Neither an access token nor private app credentials were configured.
    #[error("No credentials configured. Set an access token or private app credentials.")]
    MissingCredentials,

    /// The retry count must allow at least one attempt.
    #[error("Invalid retry count {retries}. At least one attempt is required.")]
    InvalidRetries {
        /// The rejected retry count.
        retries: u32,
    },

    /// The base URL override could not be parsed.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL (e.g., 'https://proxy.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
