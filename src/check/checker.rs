//! Sequential aggregation of provider answers.

use std::time::Duration;

use crate::http::HttpClient;
use crate::provider::fetch_raw;
use crate::time::Clock;

use super::listing::{FlagList, QuotedList};
use super::{CheckOutcome, CheckProfile, FailureMode, ProviderResult};

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;

/// Runs the IP check against the providers of a [`CheckProfile`].
///
/// Network and clock are injected, so a run can be driven entirely by
/// scripted responses in tests.
///
/// # Type Parameters
///
/// - `C`: HTTP client used to reach the providers
/// - `K`: Clock used to measure elapsed time
#[derive(Debug)]
pub struct Checker<C, K> {
    client: C,
    clock: K,
    profile: CheckProfile,
    timeout: Option<Duration>,
}

impl<C, K> Checker<C, K>
where
    C: HttpClient,
    K: Clock,
{
    /// Creates a checker with no per-request timeout.
    pub fn new(client: C, clock: K, profile: CheckProfile) -> Self {
        Self {
            client,
            clock,
            profile,
            timeout: None,
        }
    }

    /// Sets the per-provider request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the profile this checker runs.
    #[must_use]
    pub const fn profile(&self) -> &CheckProfile {
        &self.profile
    }

    /// Queries the configured providers one after another and compares each
    /// answer with `expected_ip`.
    ///
    /// In [`FailureMode::Aggregate`] every provider is attempted. In
    /// [`FailureMode::FailFast`] the run stops after the first provider that
    /// could not be queried or parsed.
    pub async fn run(&self, expected_ip: &str) -> CheckOutcome {
        let start = self.clock.now();
        let mut results = Vec::with_capacity(self.profile.providers.len());

        for &provider in &self.profile.providers {
            let fetched = fetch_raw(&self.client, provider, self.timeout).await;
            if let Err(ref e) = fetched {
                tracing::debug!(provider = provider.name(), "Provider failed: {e:?}");
            }

            let result = ProviderResult::evaluate(provider, expected_ip, fetched);
            let stop = self.profile.mode == FailureMode::FailFast && result.is_retrieval_failure();
            results.push(result);

            if stop {
                tracing::debug!(
                    provider = provider.name(),
                    "Stopping after first provider failure"
                );
                break;
            }
        }

        let elapsed = self.clock.now().saturating_duration_since(start);
        let outcome = CheckOutcome {
            expected_ip: expected_ip.to_owned(),
            results,
            elapsed,
        };

        let flags: Vec<bool> = outcome.results.iter().map(|r| r.matched).collect();
        tracing::debug!("AllResults: {}", FlagList(&flags));
        let messages = outcome.failure_messages();
        tracing::debug!("ErrorMessages: {}", QuotedList(&messages));

        outcome
    }
}
