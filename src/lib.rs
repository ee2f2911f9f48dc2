//! # Shopify Client
//!
//! A rate-limit aware Rust client for the Shopify Admin REST and GraphQL APIs.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for credentials and shop domains
//! - An async HTTP executor with bounded retries for 429 and 5xx responses
//! - Rate-limit telemetry from REST call-limit headers and GraphQL query cost
//! - GraphQL queries that wait out `THROTTLED` errors based on the reported cost
//! - `Link` header pagination for REST list endpoints
//! - Typed REST resources (gift cards, payouts, inventory levels, ...)
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_client::{AccessToken, ApiVersion, ClientConfig, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_xxx").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().full_name(), "my-store.myshopify.com");
//! ```
//!
//! ## Private Apps
//!
//! Private apps authenticate with HTTP basic auth instead of a token:
//!
//! ```rust
//! use shopify_client::{ClientConfig, Credentials, PrivateAppCredentials, ShopDomain};
//!
//! let config = ClientConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .private_app(PrivateAppCredentials::new("api-key", "password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(matches!(config.credentials(), Credentials::PrivateApp(_)));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_client::clients::{ListOptions, ShopifyClient};
//!
//! let client = ShopifyClient::new(&config)?;
//!
//! // REST resources
//! let page = client.gift_cards().list_with_pagination(&ListOptions::default()).await?;
//! if let Some(next) = page.next_page_options() {
//!     let more = client.gift_cards().list_with_pagination(next).await?;
//! }
//!
//! // Raw REST
//! let shop: serde_json::Value = client.rest().get("shop", &()).await?;
//!
//! // GraphQL
//! let data: serde_json::Value = client
//!     .graphql()
//!     .query("{ shop { name } }", None)
//!     .await?;
//!
//! println!("{:?}", client.rate_limits().snapshot());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime; waits are cancellable

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export configuration types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, ClientConfig, ClientConfigBuilder, Credentials,
    PrivateAppCredentials, ShopDomain,
};
pub use error::ConfigError;

// Re-export the client entry points
pub use clients::{
    GraphqlClient, HttpClient, HttpError, RateLimitTracker, RestClient, ShopifyClient,
};
