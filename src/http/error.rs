//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. A non-2xx status is
/// not an error here; it arrives as a normal [`super::HttpResponse`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
