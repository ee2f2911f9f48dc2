//! Configuration types for the Shopify client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: everything a client needs to talk to one shop
//! - [`ClientConfigBuilder`]: fluent builder validating on [`build`](ClientConfigBuilder::build)
//! - [`AccessToken`] / [`PrivateAppCredentials`]: the two supported credentials
//! - [`ShopDomain`]: a normalized `*.myshopify.com` domain
//! - [`ApiVersion`]: the Admin API version embedded in every path
//!
//! # Example
//!
//! ```rust
//! use shopify_client::{AccessToken, ApiVersion, ClientConfig, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.retries(), 3);
//! assert_eq!(config.base_url(), "https://my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, PrivateAppCredentials, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// The credential attached to every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Sent as the `X-Shopify-Access-Token` header.
    AccessToken(AccessToken),
    /// Sent as HTTP basic auth.
    PrivateApp(PrivateAppCredentials),
}

/// Configuration for a Shopify client bound to a single shop.
///
/// `ClientConfig` is cheap to clone and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    shop: ShopDomain,
    credentials: Credentials,
    api_version: ApiVersion,
    retries: u32,
    user_agent_prefix: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    cancellation_token: CancellationToken,
}

impl ClientConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the maximum number of attempts per call.
    ///
    /// A value of `1` means a call is never retried.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// This is the override if one was configured, otherwise the shop's
    /// `https://` URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.shop.base_url())
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the token that aborts pending retries when cancelled.
    #[must_use]
    pub const fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for [`ClientConfig`].
///
/// `shop` and one credential are required.
///
/// # Defaults
///
/// - `api_version`: latest stable version
/// - `retries`: `1` (no retry)
/// - `user_agent_prefix`, `base_url`, `request_timeout`: `None`
/// - `cancellation_token`: a fresh token that is never cancelled
///
/// When both an access token and private app credentials are set, the
/// access token wins.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    private_app: Option<PrivateAppCredentials>,
    api_version: Option<ApiVersion>,
    retries: Option<u32>,
    user_agent_prefix: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    cancellation_token: Option<CancellationToken>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Authenticates with an Admin API access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Authenticates with a private app's API key and password.
    #[must_use]
    pub fn private_app(mut self, credentials: PrivateAppCredentials) -> Self {
        self.private_app = Some(credentials);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the maximum number of attempts per call.
    #[must_use]
    pub const fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Sets the user agent prefix.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sends requests to `url` instead of the shop's own domain.
    ///
    /// Useful for proxies and mock servers.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets a timeout applied to each individual request.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the token used to abort retry waits.
    #[must_use]
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingRequiredField`] if `shop` is not set
    /// - [`ConfigError::MissingCredentials`] if no credential is set
    /// - [`ConfigError::InvalidRetries`] if `retries` is zero
    /// - [`ConfigError::InvalidBaseUrl`] if the override is not an absolute URL
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;

        let credentials = match (self.access_token, self.private_app) {
            (Some(token), _) => Credentials::AccessToken(token),
            (None, Some(private_app)) => Credentials::PrivateApp(private_app),
            (None, None) => return Err(ConfigError::MissingCredentials),
        };

        let retries = self.retries.unwrap_or(1);
        if retries == 0 {
            return Err(ConfigError::InvalidRetries { retries });
        }

        let base_url = match self.base_url {
            Some(url) => {
                let parsed = url::Url::parse(&url)
                    .map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;
                if parsed.cannot_be_a_base() {
                    return Err(ConfigError::InvalidBaseUrl { url });
                }
                tracing::debug!(base_url = %url, "using base URL override");
                Some(url.trim_end_matches('/').to_string())
            }
            None => None,
        };

        Ok(ClientConfig {
            shop,
            credentials,
            api_version: self.api_version.unwrap_or_default(),
            retries,
            user_agent_prefix: self.user_agent_prefix,
            base_url,
            request_timeout: self.request_timeout,
            cancellation_token: self.cancellation_token.unwrap_or_default(),
        })
    }
}
