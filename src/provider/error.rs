//! Error types for provider queries.

use thiserror::Error;

use crate::http::HttpError;

/// Why a provider did not yield a candidate address.
///
/// The `Display` output is the exact line reported to the operator, so it
/// names the endpoint but not the underlying transport cause. The cause is
/// kept as `source` for debug logging.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connection failure, DNS failure or timeout.
    #[error("Error retrieving {url}")]
    Transport {
        /// Endpoint that was queried
        url: &'static str,
        /// Underlying transport error
        #[source]
        source: HttpError,
    },

    /// The service answered with a non-2xx status.
    #[error("Error retrieving {url}, status code: {status}")]
    Status {
        /// Endpoint that was queried
        url: &'static str,
        /// Numeric HTTP status
        status: u16,
    },

    /// The body did not have the shape this service is known to return.
    #[error("Got unparsable response {body} from {url}")]
    Unparsable {
        /// Endpoint that was queried
        url: &'static str,
        /// Raw body as received
        body: String,
    },
}
