//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use std::process::ExitCode;

use check_static_ip::config::{ConfigError, field};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;

/// Application exit codes, following the monitoring plugin convention.
pub mod exit_code {
    use std::process::ExitCode;

    use check_static_ip::check::CheckOutcome;

    /// At least one provider confirmed the expected address (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Invalid invocation (exit code 1) - no arguments, missing or malformed options.
    pub const USAGE_ERROR: ExitCode = ExitCode::FAILURE;

    /// No provider confirmed the address (exit code 2).
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn check_failed() -> ExitCode {
        ExitCode::from(2)
    }

    /// Maps a finished run to its exit code.
    pub fn for_outcome(outcome: &CheckOutcome) -> ExitCode {
        if outcome.at_least_one_match() {
            SUCCESS
        } else {
            check_failed()
        }
    }
}

/// Exit code for a clap parse result that ended the program.
///
/// `--help` and `--version` are reported by clap as errors but are not failures.
pub fn parse_error_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        exit_code::USAGE_ERROR
    } else {
        exit_code::SUCCESS
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::EXPECTED_IP => {
            eprintln!("\nRun 'check-static-ip --help' for usage.");
        }
        ConfigError::InvalidDuration { field: f, .. } if *f == field::TIMEOUT => {
            eprintln!("\nOmit --timeout to wait indefinitely for each service.");
        }
        _ => {}
    }
}

/// Directive enabling this crate's events at `level` and everyone else's at WARN.
fn filter_directive(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Builds the log subscriber writing plain text to `writer`.
///
/// Monitoring systems read standard output as plain text, so colour codes
/// are never emitted.
fn build_subscriber<W>(
    debug: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(filter_directive(debug));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Sets up the tracing subscriber for logging.
///
/// Diagnostics go to standard output alongside the summary line.
pub fn setup_tracing(debug: bool) {
    build_subscriber(debug, std::io::stdout).init();
}
