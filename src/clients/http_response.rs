//! Raw API responses.
//!
//! [`HttpResponse`] keeps the status, lowercased headers and the raw body
//! text so that the error classifier can inspect bodies that are not JSON.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::rate_limit::ApiCallLimit;

/// An HTTP response from the Shopify API.
///
/// `X-Shopify-Shop-Api-Call-Limit` and `Retry-After` are parsed on
/// construction.
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-shopify-shop-api-call-limit".to_string(), vec!["2/40".to_string()]);
///
/// let response = HttpResponse::new(200, headers, r#"{"count": 3}"#);
/// assert!(response.is_ok());
/// assert_eq!(response.api_call_limit.unwrap().bucket_size, 40);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Parsed `X-Shopify-Shop-Api-Call-Limit` header.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Parsed `Retry-After` header, in seconds.
    pub retry_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a response, parsing the rate-limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let api_call_limit = first_header(&headers, "x-shopify-shop-api-call-limit")
            .and_then(ApiCallLimit::parse);

        let retry_after = first_header(&headers, "retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok());

        Self {
            code,
            headers,
            body: body.into(),
            api_call_limit,
            retry_after,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_ascii_lowercase())
    }

    /// Returns the `Link` header, if present.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.header("link")
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body decodes as `null`, so `()` and `Option<T>` targets
    /// accept responses without content.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self.body.trim().is_empty() {
            return serde_json::from_str("null");
        }
        serde_json::from_str(&self.body)
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_only_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
        for code in [199, 300, 404, 429, 503] {
            assert!(!HttpResponse::new(code, HashMap::new(), "").is_ok());
        }
    }

    #[test]
    fn test_rate_limit_headers_are_parsed() {
        let response = HttpResponse::new(
            429,
            headers(&[
                ("x-shopify-shop-api-call-limit", "40/40"),
                ("retry-after", "2.0"),
            ]),
            "",
        );
        assert_eq!(
            response.api_call_limit,
            Some(ApiCallLimit {
                request_count: 40,
                bucket_size: 40
            })
        );
        assert!((response.retry_after.unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparsable_retry_after_is_ignored() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "soon")]), "");
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("x-request-id", "abc-123"),
                ("x-shopify-api-deprecated-reason", "Use GraphQL"),
                ("link", "<http://x?page_info=a>; rel=\"next\""),
            ]),
            "{}",
        );
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.deprecation_reason(), Some("Use GraphQL"));
        assert!(response.link().is_some());
    }

    #[test]
    fn test_json_decodes_body() {
        let response = HttpResponse::new(200, HashMap::new(), r#"{"count": 7}"#);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["count"], 7);
    }

    #[test]
    fn test_json_treats_empty_body_as_null() {
        let response = HttpResponse::new(200, HashMap::new(), "  ");
        assert!(response.json::<()>().is_ok());
        let option: Option<serde_json::Value> = response.json().unwrap();
        assert!(option.is_none());
    }
}
