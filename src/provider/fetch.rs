//! Querying a provider over HTTP.

use std::time::Duration;

use url::Url;

use crate::http::{HttpClient, HttpError, HttpRequest};

use super::{ProviderError, ProviderKind};

/// Performs a GET against the provider's endpoint and returns the raw body.
///
/// `timeout` bounds the whole request; `None` waits as long as the
/// transport allows. Every failure comes back as a [`ProviderError`] value.
///
/// # Errors
///
/// - [`ProviderError::Transport`] when the request could not be completed
/// - [`ProviderError::Status`] when the service answered with a non-2xx status
pub async fn fetch_raw<C: HttpClient>(
    client: &C,
    provider: ProviderKind,
    timeout: Option<Duration>,
) -> Result<String, ProviderError> {
    let endpoint = provider.endpoint();
    tracing::debug!("Fetching from {endpoint}");

    let url = Url::parse(endpoint).map_err(|e| ProviderError::Transport {
        url: endpoint,
        source: HttpError::InvalidUrl(e.to_string()),
    })?;

    let mut request = HttpRequest::get(url);
    if let Some(timeout) = timeout {
        request = request.with_timeout(timeout);
    }

    let response = client
        .request(request)
        .await
        .map_err(|source| ProviderError::Transport {
            url: endpoint,
            source,
        })?;

    if !response.is_success() {
        return Err(ProviderError::Status {
            url: endpoint,
            status: response.status.as_u16(),
        });
    }

    Ok(response.body_text().into_owned())
}
