//! Maps failed responses onto the [`HttpError`] taxonomy.
//!
//! Error bodies come in a few shapes:
//!
//! ```text
//! {"error": "Not Found"}
//! {"errors": "[API] Invalid API key or access token"}
//! {"errors": ["first", "second"]}
//! {"errors": {"title": ["can't be blank"], "price": "is invalid"}}
//! ```
//!
//! All of them are flattened into a [`ResponseError`].

use serde_json::Value;

use crate::clients::errors::{HttpError, RateLimitError, ResponseDecodingError, ResponseError};
use crate::clients::http_response::HttpResponse;

/// Returns the error a response represents, or `None` for 2xx responses.
///
/// - an empty body yields no messages
/// - a 5xx or 429 body that is not a JSON object yields no messages, so the
///   error reads `"Unknown Error"`
/// - any other 4xx body that is not a JSON object yields a
///   [`ResponseDecodingError`]
/// - 429 yields a [`RateLimitError`] whose hint is the whole seconds of
///   `Retry-After`, or 0 without the header
/// - map-shaped `errors` are flattened in the order the response lists them
/// - 406 always reads `"Not Acceptable"`
///
/// # Example
///
/// ```rust
/// use shopify_client::clients::{classify_response, HttpError, HttpResponse};
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(500, HashMap::new(), "");
/// let error = classify_response(&response).unwrap();
/// assert_eq!(error.to_string(), "Unknown Error");
///
/// let ok = HttpResponse::new(200, HashMap::new(), r#"{"errors": "ignored"}"#);
/// assert!(classify_response(&ok).is_none());
/// ```
#[must_use]
pub fn classify_response(response: &HttpResponse) -> Option<HttpError> {
    if response.is_ok() {
        return None;
    }

    let status = response.code;
    let mut error = match decode_error_body(status, &response.body) {
        Ok(error) => error,
        Err(decoding) => return Some(decoding.into()),
    };

    if status == 406 {
        error.message = Some("Not Acceptable".to_string());
    }

    if status == 429 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let retry_after = response.retry_after.map_or(0, |seconds| seconds.max(0.0) as u64);
        return Some(
            RateLimitError {
                response: error,
                retry_after,
            }
            .into(),
        );
    }

    Some(error.into())
}

fn decode_error_body(status: u16, body: &str) -> Result<ResponseError, ResponseDecodingError> {
    let mut error = ResponseError::new(status);
    if body.trim().is_empty() {
        return Ok(error);
    }

    let object = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => object,
        _ if status >= 500 || status == 429 => return Ok(error),
        Ok(other) => {
            return Err(ResponseDecodingError {
                status: Some(status),
                message: format!("expected a JSON object in error response, got {other}"),
                body: Some(body.to_string()),
            })
        }
        Err(e) => {
            return Err(ResponseDecodingError {
                status: Some(status),
                message: e.to_string(),
                body: Some(body.to_string()),
            })
        }
    };

    if let Some(Value::String(message)) = object.get("error") {
        error.message = Some(message.clone());
    }

    match object.get("errors") {
        Some(Value::String(message)) => error.message = Some(message.clone()),
        Some(Value::Array(items)) => error.errors = items.iter().map(display_value).collect(),
        Some(Value::Object(fields)) => {
            for (field, value) in fields {
                match value {
                    Value::Array(items) => error
                        .errors
                        .extend(items.iter().map(|m| format!("{field}: {}", display_value(m)))),
                    other => error.errors.push(format!("{field}: {}", display_value(other))),
                }
            }
        }
        _ => {}
    }

    Ok(error)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    fn response_error(code: u16, body: &str) -> ResponseError {
        match classify_response(&response(code, body)) {
            Some(HttpError::Response(e)) => e,
            other => panic!("expected response error, got {other:?}"),
        }
    }

    #[test]
    fn test_success_is_never_an_error() {
        assert!(classify_response(&response(200, r#"{"errors": "boom"}"#)).is_none());
        assert!(classify_response(&response(201, "not json")).is_none());
    }

    #[test]
    fn test_server_error_with_empty_or_html_body_is_unknown() {
        for body in ["", "<html></html>"] {
            let error = response_error(500, body);
            assert_eq!(error.status, 500);
            assert_eq!(error.to_string(), "Unknown Error");
        }
        assert_eq!(response_error(503, "").to_string(), "Unknown Error");
    }

    #[test]
    fn test_client_error_with_undecodable_body() {
        match classify_response(&response(400, "<html></html>")) {
            Some(HttpError::ResponseDecoding(e)) => {
                assert_eq!(e.status, Some(400));
                assert_eq!(e.body.as_deref(), Some("<html></html>"));
            }
            other => panic!("expected decoding error, got {other:?}"),
        }
    }

    #[test]
    fn test_errors_string() {
        let error = response_error(401, r#"{"errors": "[API] Invalid API key"}"#);
        assert_eq!(error.to_string(), "[API] Invalid API key");
        assert!(error.errors.is_empty());
    }

    #[test]
    fn test_error_key() {
        let error = response_error(404, r#"{"error": "Not Found"}"#);
        assert_eq!(error.message.as_deref(), Some("Not Found"));
    }

    #[test]
    fn test_errors_array_keeps_order_and_sorts_display() {
        let error = response_error(422, r#"{"errors": ["oops", "I did it again"]}"#);
        assert_eq!(error.errors, vec!["oops", "I did it again"]);
        assert_eq!(error.to_string(), "I did it again, oops");
    }

    #[test]
    fn test_errors_map_is_flattened() {
        let error = response_error(
            422,
            r#"{"errors": {"title": ["can't be blank", "is too short"], "price": "is invalid"}}"#,
        );
        assert_eq!(
            error.errors,
            vec!["title: can't be blank", "title: is too short", "price: is invalid"]
        );
        assert_eq!(
            error.to_string(),
            "price: is invalid, title: can't be blank, title: is too short"
        );
    }

    #[test]
    fn test_not_acceptable_message() {
        let error = response_error(406, "");
        assert_eq!(error.to_string(), "Not Acceptable");
    }

    #[test]
    fn test_rate_limit_uses_retry_after_header() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2.9".to_string()]);
        let response = HttpResponse::new(429, headers, r#"{"errors": "Exceeded 2 calls per second"}"#);

        match classify_response(&response) {
            Some(HttpError::RateLimit(e)) => {
                assert_eq!(e.retry_after, 2);
                assert_eq!(e.response.status, 429);
                assert_eq!(e.to_string(), "Exceeded 2 calls per second");
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_with_plain_text_body() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["3".to_string()]);
        let response = HttpResponse::new(429, headers, "Too Many Requests");

        match classify_response(&response) {
            Some(HttpError::RateLimit(e)) => {
                assert_eq!(e.retry_after, 3);
                assert_eq!(e.to_string(), "Unknown Error");
            }
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_without_header_defaults_to_zero() {
        match classify_response(&response(429, "")) {
            Some(HttpError::RateLimit(e)) => assert_eq!(e.retry_after, 0),
            other => panic!("expected rate limit error, got {other:?}"),
        }
    }
}
