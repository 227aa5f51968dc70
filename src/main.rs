//! check-static-ip: external IPv4 address check
//!
//! Entry point for the check-static-ip monitoring plugin.

use check_static_ip::config::{Cli, ValidatedConfig};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, parse_error_exit_code, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // No arguments at all: show help and stop before any network activity
    if Cli::is_bare_invocation(std::env::args_os()) {
        eprint!("{}", Cli::help_text());
        return exit_code::USAGE_ERROR;
    }

    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return parse_error_exit_code(&e);
        }
    };

    let config = match ValidatedConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::USAGE_ERROR;
        }
    };

    setup_tracing(config.debug);
    tracing::debug!("{config}");

    run_check(config)
}

/// Runs the check and prints the one-line summary.
///
/// Excluded from coverage - requires network access.
#[cfg(not(tarpaulin_include))]
fn run_check(config: ValidatedConfig) -> ExitCode {
    match run::execute(&config) {
        Ok(outcome) => {
            println!("{outcome}");
            exit_code::for_outcome(&outcome)
        }
        Err(e) => {
            tracing::error!("Check could not run: {e}");
            println!("CRITICAL - {e}");
            exit_code::check_failed()
        }
    }
}
