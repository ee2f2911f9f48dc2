//! GraphQL client for the Shopify Admin API.
//!
//! [`GraphqlClient::query`] posts `{"query": ..., "variables": ...}` to
//! `admin/api/{version}/graphql.json`, records the reported query cost and
//! retries throttled queries using the cost-based wait:
//!
//! ```text
//! cost    = actualQueryCost ?? requestedQueryCost
//! deficit = currentlyAvailable - cost
//! wait    = deficit >= 0 ? 0 : -deficit / restoreRate
//! ```

mod client;

pub use client::{
    GraphqlClient, GraphqlErrorEntry, GraphqlErrorExtensions, GraphqlErrorLocation, THROTTLED,
};
