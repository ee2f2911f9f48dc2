//! Request descriptors.
//!
//! An [`HttpRequest`] is built fresh for every call and never mutated once
//! handed to the [`HttpClient`](crate::clients::HttpClient).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Admin API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A single API call: method, path, optional JSON body and query.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "gift_cards.json")
///     .body(json!({"gift_card": {"initial_value": "10.00"}}))
///     .build()
///     .unwrap();
/// assert_eq!(request.path, "gift_cards.json");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path relative to `admin/api/{version}/`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
    /// Query parameters, sorted by key.
    pub query: BTreeMap<String, String>,
    /// Headers added on top of the client defaults.
    pub extra_headers: HashMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBody`] for a POST or PUT
    /// without a body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: BTreeMap<String, String>,
    extra_headers: HashMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: BTreeMap::new(),
            extra_headers: HashMap::new(),
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Adds every set field of `options` as a query parameter.
    ///
    /// See [`to_query_params`] for how values are rendered.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if `options` cannot be converted to JSON.
    pub fn query<T: Serialize + ?Sized>(mut self, options: &T) -> Result<Self, serde_json::Error> {
        self.query.extend(to_query_params(options)?);
        Ok(self)
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Builds and validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}

/// Flattens a serializable options struct into query parameters.
///
/// `null` fields are skipped, arrays become comma-separated lists and nested
/// objects are sent as JSON strings.
///
/// # Errors
///
/// Returns the serialization error if `options` cannot be converted to JSON.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::to_query_params;
/// use serde_json::json;
///
/// let params = to_query_params(&json!({"ids": [1, 2], "limit": 50, "fields": null})).unwrap();
/// assert_eq!(params.get("ids").map(String::as_str), Some("1,2"));
/// assert_eq!(params.get("limit").map(String::as_str), Some("50"));
/// assert!(!params.contains_key("fields"));
/// ```
pub fn to_query_params<T: Serialize + ?Sized>(
    options: &T,
) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let mut query = BTreeMap::new();

    if let Value::Object(map) = serde_json::to_value(options)? {
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    query.insert(key, value.to_string());
                }
            }
        }
    }

    Ok(query)
}
