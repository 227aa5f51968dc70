//! Tests for querying providers.

use std::time::Duration;

use crate::http::HttpError;
use crate::test_fixtures::{MockHttpClient, ok, status};

use super::{ProviderError, ProviderKind, fetch_raw};

#[tokio::test]
async fn returns_body_on_success() {
    let client = MockHttpClient::returning_bodies(&["US,1.2.3.4"]);

    let raw = fetch_raw(&client, ProviderKind::Ip4Only, None).await.unwrap();

    assert_eq!(raw, "US,1.2.3.4");
}

#[tokio::test]
async fn sends_get_to_provider_endpoint() {
    let client = MockHttpClient::returning_bodies(&["1.2.3.4"]);

    fetch_raw(&client, ProviderKind::Ipify, None).await.unwrap();

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(requests[0].url.as_str(), "https://api.ipify.org/");
}

#[tokio::test]
async fn passes_timeout_through() {
    let client = MockHttpClient::returning_bodies(&["1.2.3.4"]);

    fetch_raw(&client, ProviderKind::WhatIsMyIp, Some(Duration::from_secs(7)))
        .await
        .unwrap();

    assert_eq!(client.requests()[0].timeout, Some(Duration::from_secs(7)));
}

#[tokio::test]
async fn no_timeout_when_unset() {
    let client = MockHttpClient::returning_bodies(&["1.2.3.4"]);

    fetch_raw(&client, ProviderKind::WhatIsMyIp, None).await.unwrap();

    assert!(client.requests()[0].timeout.is_none());
}

#[tokio::test]
async fn transport_failure_names_endpoint() {
    let client = MockHttpClient::new(vec![Err(HttpError::Timeout)]);

    let err = fetch_raw(&client, ProviderKind::Ipify, Some(Duration::from_secs(1)))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Transport {
            source: HttpError::Timeout,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Error retrieving https://api.ipify.org");
}

#[tokio::test]
async fn non_success_status_reports_code() {
    let client = MockHttpClient::new(vec![Ok(status(503))]);

    let err = fetch_raw(&client, ProviderKind::WhatIsMyIp, None)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error retrieving http://ipv4bot.whatismyipaddress.com, status code: 503"
    );
}

#[tokio::test]
async fn non_success_body_is_ignored() {
    let mut resp = ok("1.2.3.4");
    resp.status = http::StatusCode::NOT_FOUND;
    let client = MockHttpClient::new(vec![Ok(resp)]);

    let result = fetch_raw(&client, ProviderKind::Ipify, None).await;

    assert!(matches!(
        result,
        Err(ProviderError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn unparsable_body_still_fetches() {
    // Parsing is a separate step; fetching only cares about transport and status.
    let client = MockHttpClient::returning_bodies(&["nocommahere"]);

    let raw = fetch_raw(&client, ProviderKind::Ip4Only, None).await.unwrap();

    assert_eq!(raw, "nocommahere");
    assert!(ProviderKind::Ip4Only.parse(&raw).is_err());
}
