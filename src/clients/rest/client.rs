//! Typed REST entry points.
//!
//! [`RestClient`] turns a relative path, an optional body and optional
//! query options into a decoded value, going through the shared
//! [`HttpClient`] retry loop.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::pagination::{parse_link_header, Pagination};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// REST client for the Shopify Admin API.
///
/// Cloning is cheap and shares the transport and rate-limit tracker.
///
/// Query options are any [`Serialize`] value that serializes to a map,
/// usually a [`ListOptions`](crate::clients::ListOptions) or a resource
/// specific options struct. Pass `&()` when there is nothing to send.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::clients::ListOptions;
/// use serde_json::{json, Value};
///
/// let rest = client.rest();
///
/// let shop: Value = rest.get("shop", &()).await?;
/// let count = rest.count("gift_cards/count", &()).await?;
///
/// let (page, pagination): (Value, _) = rest
///     .list_with_pagination("shopify_payments/payouts", &ListOptions::default())
///     .await?;
/// if let Some(next) = pagination.next_page_options {
///     let (next_page, _): (Value, _) =
///         rest.list_with_pagination("shopify_payments/payouts", &next).await?;
/// }
///
/// let created: Value = rest
///     .post("gift_cards", &json!({"gift_card": {"initial_value": "25.00"}}))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

#[derive(Deserialize)]
struct CountBody {
    count: u64,
}

impl RestClient {
    /// Creates a REST client over an existing transport.
    #[must_use]
    pub const fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, failed responses and bodies
    /// that do not decode into `T`.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Get, path, None, query).await?;
        Ok(response.json()?)
    }

    /// Sends a POST request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, failed responses and bodies
    /// that do not decode into `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(HttpMethod::Post, path, Some(body), &()).await?;
        Ok(response.json()?)
    }

    /// Sends a PUT request with a JSON body and decodes the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, failed responses and bodies
    /// that do not decode into `T`.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let response = self.send(HttpMethod::Put, path, Some(body), &()).await?;
        Ok(response.json()?)
    }

    /// Sends a DELETE request, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths and failed responses.
    pub async fn delete<Q>(&self, path: &str, query: &Q) -> Result<(), HttpError>
    where
        Q: Serialize + ?Sized,
    {
        self.send(HttpMethod::Delete, path, None, query).await?;
        Ok(())
    }

    /// Sends a GET request to a counting endpoint and returns `count`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is not `{"count": N}`.
    pub async fn count<Q>(&self, path: &str, query: &Q) -> Result<u64, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let body: CountBody = self.get(path, query).await?;
        Ok(body.count)
    }

    /// Sends a GET request and returns the decoded body with the cursors
    /// from the `Link` header.
    ///
    /// The body is decoded before the header is parsed; either failure fails
    /// the whole call, so no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Pagination`] if the `Link` header is malformed,
    /// otherwise as [`get`](Self::get).
    pub async fn list_with_pagination<T, Q>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(T, Pagination), HttpError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.send(HttpMethod::Get, path, None, query).await?;
        let data = response.json()?;
        let pagination = parse_link_header(response.link())?;
        Ok((data, pagination))
    }

    async fn send<Q>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: &Q,
    ) -> Result<HttpResponse, HttpError>
    where
        Q: Serialize + ?Sized,
    {
        let mut builder = HttpRequest::builder(method, normalize_path(path)?).query(query)?;
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.http_client.request(builder.build()?).await
    }
}

/// Normalizes a REST path to the `resource/123.json` form.
///
/// Leading slashes and a trailing `.json` are stripped, then `.json` is
/// appended.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidPath`] if nothing remains.
pub fn normalize_path(path: &str) -> Result<String, InvalidHttpRequestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(InvalidHttpRequestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{trimmed}.json"))
}
