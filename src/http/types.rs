//! HTTP request/response types and client trait.

use std::borrow::Cow;
use std::time::Duration;

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. The IP services only ever need a bare
/// request: no headers, no body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// Maximum time to wait for the whole exchange. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL and no timeout.
    #[must_use]
    pub const fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            timeout: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub const fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered into memory; IP services answer with a few bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Trait for making HTTP requests.
///
/// This is the network capability handed to the checker. Tests inject a
/// scripted client; production uses [`super::ReqwestClient`].
///
/// # Example
///
/// ```ignore
/// use check_static_ip::http::{HttpClient, HttpRequest, HttpResponse, HttpError};
///
/// struct MockClient {
///     response: HttpResponse,
/// }
///
/// impl HttpClient for MockClient {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is invalid ([`HttpError::InvalidUrl`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
