//! HTTP request builder (translates the `HttpRequestBuilder` of the C++
//! catalogue).
//!
//! Requests are data only — nothing here performs network I/O. `build()`
//! requires a URL.

use dp_core::{ensure, errors::Result};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// A fully described HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Headers in insertion order. Duplicate names are allowed.
    pub headers: Vec<(String, String)>,
    /// Request body, if any.
    pub body: Option<String>,
    /// Timeout in milliseconds.
    pub timeout_ms: u32,
    /// Retry count on failure.
    pub retries: u32,
}

impl HttpRequest {
    /// The first header with the given name, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Fluent builder for [`HttpRequest`].
///
/// ```
/// use dp_builder::HttpRequestBuilder;
///
/// let request = HttpRequestBuilder::post("https://api.example.com/items")
///     .json(r#"{"name":"widget"}"#)
///     .timeout_ms(5_000)
///     .build()
///     .unwrap();
/// assert_eq!(request.method, "POST");
/// assert_eq!(request.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: String,
    url: Option<String>,
    headers: Vec<(String, String)>,
    body: Option<String>,
    timeout_ms: u32,
    retries: u32,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRequestBuilder {
    /// Start a `GET` request with no URL.
    pub fn new() -> Self {
        HttpRequestBuilder {
            method: "GET".to_string(),
            url: None,
            headers: Vec::new(),
            body: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: 0,
        }
    }

    /// Start a `GET` request for `url`.
    pub fn get(url: &str) -> Self {
        Self::new().url(url)
    }

    /// Start a `POST` request for `url`.
    pub fn post(url: &str) -> Self {
        Self::new().method("POST").url(url)
    }

    /// Start a `PUT` request for `url`.
    pub fn put(url: &str) -> Self {
        Self::new().method("PUT").url(url)
    }

    /// Start a `DELETE` request for `url`.
    pub fn delete(url: &str) -> Self {
        Self::new().method("DELETE").url(url)
    }

    /// Set the request method.
    pub fn method(mut self, method: &str) -> Self {
        self.method = method.to_string();
        self
    }

    /// Set the target URL.
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Append a header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Set the request body.
    pub fn body(mut self, body: &str) -> Self {
        self.body = Some(body.to_string());
        self
    }

    /// Set a JSON body and the matching `Content-Type` header.
    pub fn json(self, data: &str) -> Self {
        self.body(data).header("Content-Type", "application/json")
    }

    /// Set the timeout.
    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the retry count.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Finish. Fails with a precondition error if no URL was given.
    pub fn build(self) -> Result<HttpRequest> {
        ensure!(self.url.is_some(), "request has no URL");
        Ok(HttpRequest {
            method: self.method,
            url: self.url.unwrap_or_default(),
            headers: self.headers,
            body: self.body,
            timeout_ms: self.timeout_ms,
            retries: self.retries,
        })
    }
}
