//! CLI argument parsing using clap.
//!
//! Defines the three options of the check. The historical single-dash
//! spelling `-eip` is accepted and rewritten before clap sees it.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};

/// Legacy single-dash long form of `--expectedip`.
const LEGACY_EXPECTED_IP: &str = "-eip";
const EXPECTED_IP: &str = "--expectedip";

/// Checks to make sure that external IP V4 address is still an expected IP address
#[derive(Debug, Parser)]
#[command(name = "check-static-ip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Expected IPV4 address (also accepted as -eip)
    #[arg(long = "expectedip", value_name = "IP")]
    pub expected_ip: String,

    /// Timeout in seconds. This is the maximum amount of time to wait for any
    /// particular IP address service. The default is an indefinite timeout.
    #[arg(long, short = 't', value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Display debugging information; run this way and record the result when asking for help
    #[arg(long, short = 'd')]
    pub debug: bool,
}

impl Cli {
    /// Parses CLI arguments from the process command line.
    ///
    /// # Errors
    ///
    /// Returns the clap error for missing or malformed arguments, and for
    /// `--help`/`--version` (which clap models as errors).
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse_from_iter(std::env::args_os())
    }

    /// Parses CLI arguments from an iterator, rewriting legacy flags first.
    ///
    /// # Errors
    ///
    /// See [`Cli::parse_args`].
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(normalize_legacy_flags(iter))
    }

    /// Returns true if the command line holds nothing but the program name.
    pub fn is_bare_invocation<I: IntoIterator>(args: I) -> bool {
        args.into_iter().nth(1).is_none()
    }

    /// Rendered `--help` output.
    #[must_use]
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}

/// Rewrites `-eip <ip>` and `-eip=<ip>` to their `--expectedip` equivalents.
///
/// Only whole tokens are rewritten; everything else passes through untouched.
pub fn normalize_legacy_flags<I, T>(iter: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    iter.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if arg == LEGACY_EXPECTED_IP {
                return OsString::from(EXPECTED_IP);
            }
            let rewritten = arg
                .to_str()
                .and_then(|s| s.strip_prefix(LEGACY_EXPECTED_IP))
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| OsString::from(format!("{EXPECTED_IP}={value}")));
            rewritten.unwrap_or(arg)
        })
        .collect()
}
