//! Rate-limit telemetry shared by every call made through one client.
//!
//! Shopify reports REST usage in the `X-Shopify-Shop-Api-Call-Limit` header
//! and GraphQL usage in the `extensions.cost` object of the response body.
//! [`RateLimitTracker`] keeps the most recent value of each; it holds no
//! history and concurrent writers simply overwrite each other.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// REST bucket usage parsed from `X-Shopify-Shop-Api-Call-Limit`.
///
/// The header format is `"X/Y"` where X is the current request count and Y
/// is the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("2/40").unwrap();
/// assert_eq!(limit.request_count, 2);
/// assert_eq!(limit.bucket_size, 40);
/// assert!(ApiCallLimit::parse("2-40").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCallLimit {
    /// Requests currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses a header value, returning `None` if it is not `"X/Y"`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.trim().parse().ok()?,
            bucket_size: size.trim().parse().ok()?,
        })
    }
}

/// Throttle status of the GraphQL cost bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlThrottleStatus {
    /// Bucket capacity.
    pub maximum_available: f64,
    /// Points currently available.
    pub currently_available: f64,
    /// Points restored per second.
    pub restore_rate: f64,
}

/// Cost report from the `extensions.cost` object of a GraphQL response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlCost {
    /// Cost estimated before execution.
    pub requested_query_cost: f64,
    /// Cost actually charged; absent when the query did not execute.
    #[serde(default)]
    pub actual_query_cost: Option<f64>,
    /// Bucket state after this query.
    pub throttle_status: GraphqlThrottleStatus,
}

impl GraphqlCost {
    /// Seconds until the bucket holds enough points to run this query again.
    ///
    /// Uses the actual cost when known, otherwise the requested cost. Returns
    /// `0.0` when the bucket already has enough points.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_client::clients::{GraphqlCost, GraphqlThrottleStatus};
    ///
    /// let cost = GraphqlCost {
    ///     requested_query_cost: 300.0,
    ///     actual_query_cost: None,
    ///     throttle_status: GraphqlThrottleStatus {
    ///         maximum_available: 1000.0,
    ///         currently_available: 200.0,
    ///         restore_rate: 50.0,
    ///     },
    /// };
    /// assert_eq!(cost.retry_after_seconds(), 2.0);
    /// ```
    #[must_use]
    pub fn retry_after_seconds(&self) -> f64 {
        let cost = self.actual_query_cost.unwrap_or(self.requested_query_cost);
        let deficit = self.throttle_status.currently_available - cost;
        if deficit >= 0.0 || self.throttle_status.restore_rate <= 0.0 {
            return 0.0;
        }
        -deficit / self.throttle_status.restore_rate
    }
}

/// Snapshot of the most recently observed telemetry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RateLimits {
    /// Last REST bucket usage.
    pub rest: Option<ApiCallLimit>,
    /// Last GraphQL cost report.
    pub graphql_cost: Option<GraphqlCost>,
    /// Last computed or advertised wait, in seconds.
    pub retry_after_seconds: f64,
}

/// Shared, last-writer-wins holder for [`RateLimits`].
///
/// Cloning the tracker shares the underlying state.
#[derive(Clone, Debug, Default)]
pub struct RateLimitTracker {
    inner: Arc<Mutex<RateLimits>>,
}

impl RateLimitTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current telemetry.
    #[must_use]
    pub fn snapshot(&self) -> RateLimits {
        *self.inner.lock()
    }

    /// Returns the last REST bucket usage.
    #[must_use]
    pub fn rest(&self) -> Option<ApiCallLimit> {
        self.inner.lock().rest
    }

    /// Returns the last GraphQL cost report.
    #[must_use]
    pub fn graphql_cost(&self) -> Option<GraphqlCost> {
        self.inner.lock().graphql_cost
    }

    /// Returns the last retry-after value in seconds.
    #[must_use]
    pub fn retry_after_seconds(&self) -> f64 {
        self.inner.lock().retry_after_seconds
    }

    pub(crate) fn record_rest(&self, limit: ApiCallLimit) {
        self.inner.lock().rest = Some(limit);
    }

    pub(crate) fn record_retry_after(&self, seconds: f64) {
        self.inner.lock().retry_after_seconds = seconds;
    }

    /// Stores `cost` and returns the wait it implies.
    pub(crate) fn record_graphql_cost(&self, cost: GraphqlCost) -> f64 {
        let seconds = cost.retry_after_seconds();
        let mut limits = self.inner.lock();
        limits.graphql_cost = Some(cost);
        limits.retry_after_seconds = seconds;
        seconds
    }
}

// Verify RateLimitTracker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimitTracker>();
};
