//! Application execution logic.
//!
//! Wires the production HTTP client and clock into a [`Checker`] and runs
//! it once on a single-threaded runtime.

use thiserror::Error;

use check_static_ip::check::{CheckOutcome, Checker};
use check_static_ip::config::ValidatedConfig;
use check_static_ip::http::ReqwestClient;
use check_static_ip::time::SystemClock;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the async runtime.
    #[error("Failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Builds the checker for the given configuration.
fn create_checker(config: &ValidatedConfig) -> Checker<ReqwestClient, SystemClock> {
    Checker::new(ReqwestClient::new(), SystemClock, config.profile.clone())
        .with_timeout(config.timeout)
}

/// Runs one check.
///
/// Providers are queried one after another on the current thread.
///
/// # Errors
///
/// Returns [`RunError::Runtime`] if the runtime cannot be created. Provider
/// failures are part of the returned outcome, not errors.
///
/// # Coverage Note
///
/// Excluded from coverage because it reaches the real IP services.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<CheckOutcome, RunError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    let checker = create_checker(config);
    tracing::debug!(
        providers = checker.profile().providers.len(),
        "Starting check"
    );

    Ok(runtime.block_on(checker.run(&config.expected_ip)))
}
