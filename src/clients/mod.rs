//! Transport layer for the Shopify Admin API.
//!
//! # Overview
//!
//! - [`HttpClient`]: executes requests with default headers and credentials,
//!   records rate-limit telemetry and retries 429 and 5xx responses
//! - [`HttpRequest`] / [`HttpResponse`]: request descriptor and raw response
//! - [`classify_response`]: maps failed responses to typed errors
//! - [`RateLimitTracker`]: latest REST call limit, GraphQL cost and
//!   retry-after hint
//! - [`parse_link_header`]: extracts next/previous page cursors
//! - [`RestClient`]: typed get/post/put/delete, count and paginated list
//! - [`GraphqlClient`]: queries with cost-based throttling retries
//! - [`ShopifyClient`]: owns one transport and hands out resource services
//!
//! # Retry Behavior
//!
//! The configured `retries` is the maximum number of attempts per call, so
//! the default of 1 never retries.
//!
//! - **429**: waits for the `Retry-After` hint, 0 seconds when absent
//! - **5xx**: waits [`RETRY_WAIT_TIME`] seconds
//! - **GraphQL `THROTTLED`**: waits until enough cost points are restored
//! - **Other errors**: returned immediately
//!
//! Waits go through the [`Sleeper`] and abort with [`HttpError::Cancelled`]
//! when the client's cancellation token fires.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
//! let response = client.request(request).await?;
//!
//! if let Some(limit) = client.rate_limits().rest() {
//!     println!("{}/{}", limit.request_count, limit.bucket_size);
//! }
//! ```

mod classify;
mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;
mod pagination;
mod rate_limit;
pub mod rest;
mod shopify_client;
mod sleeper;

pub use classify::classify_response;
pub use errors::{
    HttpError, InvalidHttpRequestError, PaginationError, RateLimitError, ResponseDecodingError,
    ResponseError, UNKNOWN_ERROR,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{to_query_params, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use pagination::{parse_link_header, ListOptions, Pagination};
pub use rate_limit::{ApiCallLimit, GraphqlCost, GraphqlThrottleStatus, RateLimitTracker, RateLimits};
pub use sleeper::{Sleeper, TokioSleeper};

pub use graphql::GraphqlClient;
pub use rest::RestClient;
pub use shopify_client::ShopifyClient;
