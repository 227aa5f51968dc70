//! Production HTTP client implementation using reqwest.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// No client-wide timeout is configured; each [`HttpRequest`] carries its own.
///
/// # Example
///
/// ```no_run
/// use check_static_ip::http::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.ipify.org")?;
/// let response = client.request(HttpRequest::get(url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        if let Some(timeout) = req.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(classify)?;

        let status = response.status();
        // The timeout also covers reading the body
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
