//! Per-provider results and the outcome of a whole check run.

use std::fmt;
use std::time::Duration;

use crate::provider::{ProviderError, ProviderKind};

use super::listing::QuotedList;

/// What one provider reported during a run.
///
/// Created once per provider and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    /// Provider that was queried
    pub provider: ProviderKind,
    /// Body as received, if the request succeeded
    pub raw_response: Option<String>,
    /// Candidate address, if the body could be parsed
    pub parsed_ip: Option<String>,
    /// Whether `parsed_ip` equals the expected address
    pub matched: bool,
    /// What to report when not matched: the mismatching address itself or
    /// the retrieval/parse error line. `None` when matched.
    pub error_message: Option<String>,
}

impl ProviderResult {
    /// Compares a fetch result against the expected address.
    ///
    /// Retrieval failures, parse failures and mismatches all produce a
    /// non-matching result with a message for the failure list.
    #[must_use]
    pub fn evaluate(
        provider: ProviderKind,
        expected_ip: &str,
        fetched: Result<String, ProviderError>,
    ) -> Self {
        let raw = match fetched {
            Ok(raw) => raw,
            Err(e) => return Self::failed(provider, None, &e),
        };

        match provider.parse(&raw) {
            Ok(ip) => {
                let matched = ip == expected_ip;
                Self {
                    provider,
                    raw_response: Some(raw),
                    error_message: (!matched).then(|| ip.clone()),
                    parsed_ip: Some(ip),
                    matched,
                }
            }
            Err(e) => Self::failed(provider, Some(raw), &e),
        }
    }

    fn failed(provider: ProviderKind, raw_response: Option<String>, error: &ProviderError) -> Self {
        Self {
            provider,
            raw_response,
            parsed_ip: None,
            matched: false,
            error_message: Some(error.to_string()),
        }
    }

    /// True when the provider produced no candidate address at all.
    #[must_use]
    pub const fn is_retrieval_failure(&self) -> bool {
        self.parsed_ip.is_none()
    }
}

/// Result of one check run across all queried providers.
///
/// Counts and the overall verdict are derived from `results`, so they can
/// never disagree with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Address the operator expects to see
    pub expected_ip: String,
    /// One entry per queried provider, in query order
    pub results: Vec<ProviderResult>,
    /// Time spent on the whole sequence of queries
    pub elapsed: Duration,
}

impl CheckOutcome {
    /// Number of providers that reported the expected address.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.matched).count()
    }

    /// Number of providers queried.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    /// Aggregate success: at least one provider matched.
    #[must_use]
    pub fn at_least_one_match(&self) -> bool {
        self.results.iter().any(|r| r.matched)
    }

    /// Elapsed time in fractional seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Mismatching addresses and error lines, in query order.
    #[must_use]
    pub fn failure_messages(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|r| r.error_message.as_deref())
            .collect()
    }
}

/// The one-line summary printed for the monitoring system.
impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_least_one_match() {
            write!(
                f,
                "OK - External IP address appears to be {} as expected, {}/{} IP address \
                 services succeeded. Elapsed time: {:.2} seconds.",
                self.expected_ip,
                self.success_count(),
                self.total_count(),
                self.elapsed_seconds(),
            )
        } else {
            write!(
                f,
                "CRITICAL - Expected {}, but none matched. Got following mismatching addresses \
                 or errors from IP Address services: {}. Elapsed time: {:.2} seconds.",
                self.expected_ip,
                QuotedList(&self.failure_messages()),
                self.elapsed_seconds(),
            )
        }
    }
}
