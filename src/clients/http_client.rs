//! Request executor and REST retry loop.
//!
//! [`HttpClient::execute`] performs exactly one round trip: it attaches the
//! default headers and credentials, records rate-limit telemetry from the
//! response headers and classifies failed responses. [`HttpClient::request`]
//! wraps it in a bounded retry loop.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clients::classify::classify_response;
use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::rate_limit::RateLimitTracker;
use crate::clients::sleeper::{Sleeper, TokioSleeper};
use crate::config::{ClientConfig, Credentials};

/// Fixed wait, in seconds, before retrying a 5xx response.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Shopify Admin API.
///
/// The client handles:
/// - URL construction under `admin/api/{version}/`
/// - default headers, access token or basic auth credentials
/// - rate-limit telemetry from every response
/// - retrying 429 and 5xx responses up to the configured attempt count
///
/// Clones share the connection pool, the rate-limit tracker and the
/// cancellation token.
///
/// # Retry Behavior
///
/// - **429**: waits for the `Retry-After` hint (0 when absent)
/// - **5xx**: waits [`RETRY_WAIT_TIME`] seconds
/// - **Other errors and transport failures**: returned immediately
///
/// # Example
///
/// ```rust,ignore
/// use shopify_client::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config)?;
/// let request = HttpRequest::builder(HttpMethod::Get, "shop.json").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
    basic_auth: Option<(String, String)>,
    retries: u32,
    rate_limits: RateLimitTracker,
    sleeper: Arc<dyn Sleeper>,
    cancellation_token: CancellationToken,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("base_path", &self.base_path)
            .field("retries", &self.retries)
            .field("rate_limits", &self.rate_limits)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client for the shop described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client
    /// cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}shopify-client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let basic_auth = match config.credentials() {
            Credentials::AccessToken(token) => {
                default_headers.insert(
                    "X-Shopify-Access-Token".to_string(),
                    token.as_ref().to_string(),
                );
                None
            }
            Credentials::PrivateApp(creds) => {
                Some((creds.api_key().to_string(), creds.password().to_string()))
            }
        };

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri: config.base_url(),
            base_path: format!("admin/api/{}", config.api_version()),
            default_headers,
            basic_auth,
            retries: config.retries(),
            rate_limits: RateLimitTracker::new(),
            sleeper: Arc::new(TokioSleeper),
            cancellation_token: config.cancellation_token().clone(),
        })
    }

    /// Replaces the delay used between attempts.
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Returns a clone that aborts on `token` instead of the configured one.
    ///
    /// The clone still shares the rate-limit tracker.
    #[must_use]
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        let mut client = self.clone();
        client.cancellation_token = token;
        client
    }

    /// Returns the base URI, e.g. `https://my-store.myshopify.com`.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the versioned base path, e.g. `admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the maximum number of attempts per call.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the shared rate-limit tracker.
    #[must_use]
    pub const fn rate_limits(&self) -> &RateLimitTracker {
        &self.rate_limits
    }

    /// Sends `request`, retrying rate-limited and 5xx responses.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] on transport failure, without retrying
    /// - [`HttpError::RateLimit`] or [`HttpError::Response`] once attempts are exhausted
    /// - [`HttpError::ResponseDecoding`] for undecodable 4xx bodies
    /// - [`HttpError::Cancelled`] if the cancellation token fires
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut attempt: u32 = 1;
        loop {
            match self.execute(&request).await {
                Err(error) if error.is_retryable() && attempt < self.retries => {
                    let delay = match &error {
                        HttpError::RateLimit(e) => Duration::from_secs(e.retry_after),
                        _ => Duration::from_secs(RETRY_WAIT_TIME),
                    };
                    tracing::debug!(
                        path = %request.path,
                        attempt,
                        status = ?error.status(),
                        delay_secs = delay.as_secs_f64(),
                        "retrying request"
                    );
                    self.wait(delay).await?;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    /// Performs a single round trip without retrying.
    ///
    /// Rate-limit headers are recorded whether or not the call succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on transport failure, the classified
    /// error for non-2xx responses and [`HttpError::Cancelled`] if the
    /// cancellation token fires first.
    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        if self.cancellation_token.is_cancelled() {
            return Err(HttpError::Cancelled);
        }

        tokio::select! {
            biased;
            () = self.cancellation_token.cancelled() => Err(HttpError::Cancelled),
            result = self.round_trip(request) => result,
        }
    }

    async fn round_trip(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}/{}/{}", self.base_uri, self.base_path, request.path);

        let mut builder = self.client.request(request.http_method.into(), &url);
        for (key, value) in self.default_headers.iter().chain(&request.extra_headers) {
            builder = builder.header(key, value);
        }
        if let Some((user, password)) = &self.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let res = builder.send().await?;
        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        let response = HttpResponse::new(code, headers, body);

        if let Some(limit) = response.api_call_limit {
            self.rate_limits.record_rest(limit);
        }
        if let Some(seconds) = response.retry_after {
            self.rate_limits.record_retry_after(seconds);
        }

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        match classify_response(&response) {
            Some(error) => Err(error),
            None => Ok(response),
        }
    }

    /// Waits `delay`, or fails with [`HttpError::Cancelled`] if the token fires first.
    pub(crate) async fn wait(&self, delay: Duration) -> Result<(), HttpError> {
        tokio::select! {
            biased;
            () = self.cancellation_token.cancelled() => Err(HttpError::Cancelled),
            () = self.sleeper.sleep(delay) => Ok(()),
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
