//! GraphQL query engine for the Shopify Admin API.
//!
//! GraphQL responses always carry status 200; throttling is reported as an
//! error with `extensions.code == "THROTTLED"` and the bucket state arrives
//! in `extensions.cost`. [`GraphqlClient::query`] retries throttled queries,
//! waiting for the bucket to refill, up to the client-wide attempt count.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::errors::{HttpError, RateLimitError, ResponseError};
use crate::clients::rate_limit::GraphqlCost;
use crate::clients::{HttpClient, HttpMethod, HttpRequest};

/// Error code Shopify uses for throttled queries.
pub const THROTTLED: &str = "THROTTLED";

/// Path of the GraphQL endpoint under `admin/api/{version}/`.
const GRAPHQL_PATH: &str = "graphql.json";

/// Position of a GraphQL error in the query text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

/// Machine readable details of a GraphQL error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorExtensions {
    /// Error code, e.g. `THROTTLED`.
    #[serde(default)]
    pub code: Option<String>,
}

/// One entry of the `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human readable message.
    pub message: String,
    /// Error details.
    #[serde(default)]
    pub extensions: Option<GraphqlErrorExtensions>,
    /// Where in the query the error occurred.
    #[serde(default)]
    pub locations: Vec<GraphqlErrorLocation>,
}

impl GraphqlErrorEntry {
    /// Returns the error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }

    /// Returns `true` if this error reports throttling.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.code() == Some(THROTTLED)
    }
}

#[derive(Deserialize)]
struct ResponseExtensions {
    #[serde(default)]
    cost: Option<GraphqlCost>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
    #[serde(default)]
    extensions: Option<ResponseExtensions>,
}

/// GraphQL client for the Shopify Admin API.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::{json, Value};
///
/// let data: Value = client
///     .graphql()
///     .query(
///         "query($id: ID!) { product(id: $id) { title } }",
///         Some(json!({"id": "gid://shopify/Product/1"})),
///     )
///     .await?;
/// println!("{}", data["product"]["title"]);
/// ```
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a GraphQL client over an existing transport.
    #[must_use]
    pub const fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Executes a query and decodes its `data` into `T`.
    ///
    /// `data` is only decoded once the response is free of errors, so a
    /// partial result next to an `errors` array surfaces those errors.
    ///
    /// Every response carrying `extensions.cost` updates the rate-limit
    /// tracker. A throttled query is retried after
    /// `ceil(GraphqlCost::retry_after_seconds())` seconds until the
    /// client's attempt count is reached.
    ///
    /// # Errors
    ///
    /// - [`HttpError::RateLimit`] (status 200) when still throttled on the last attempt
    /// - [`HttpError::Response`] (status 200) listing every message for other GraphQL errors
    /// - any error of the underlying [`HttpClient::request`], which itself
    ///   retries 5xx responses
    pub async fn query<T>(&self, query: &str, variables: Option<Value>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });
        let request = HttpRequest::builder(HttpMethod::Post, GRAPHQL_PATH)
            .body(body)
            .build()?;

        let max_attempts = self.http_client.retries();
        let mut attempt: u32 = 1;
        loop {
            let response = self.http_client.request(request.clone()).await?;
            let envelope: GraphqlResponse = response.json()?;

            let retry_after_seconds = envelope
                .extensions
                .and_then(|extensions| extensions.cost)
                .map_or(0.0, |cost| self.http_client.rate_limits().record_graphql_cost(cost));

            if envelope.errors.is_empty() {
                return Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?);
            }

            let throttled_message = envelope
                .errors
                .iter()
                .find(|e| e.is_throttled())
                .map(|e| e.message.clone());

            let Some(throttled_message) = throttled_message else {
                return Err(ResponseError {
                    status: 200,
                    message: None,
                    errors: envelope.errors.into_iter().map(|e| e.message).collect(),
                }
                .into());
            };

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let wait_seconds = retry_after_seconds.ceil().max(0.0) as u64;

            if attempt >= max_attempts {
                return Err(RateLimitError {
                    response: ResponseError {
                        status: 200,
                        message: Some(throttled_message),
                        errors: Vec::new(),
                    },
                    retry_after: wait_seconds,
                }
                .into());
            }

            tracing::debug!(
                attempt,
                wait_seconds,
                retry_after_seconds,
                "GraphQL query throttled, waiting for the cost bucket to refill"
            );
            self.http_client
                .wait(Duration::from_secs(wait_seconds))
                .await?;
            attempt += 1;
        }
    }
}
