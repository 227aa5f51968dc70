//! Validated configuration built from the command line.

use std::fmt;
use std::time::Duration;

use crate::check::CheckProfile;

use super::cli::Cli;
use super::error::{ConfigError, field};

/// Fully validated configuration ready for use by the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Address every provider is compared against
    pub expected_ip: String,

    /// Per-provider request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// Debug logging enabled
    pub debug: bool,

    /// Providers to query and failure mode
    pub profile: CheckProfile,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timeout = self
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{}s", t.as_secs()));
        let providers: Vec<_> = self.profile.providers.iter().map(|p| p.name()).collect();

        write!(
            f,
            "Config {{ expected_ip: {}, timeout: {}, providers: [{}], mode: {:?} }}",
            self.expected_ip,
            timeout,
            providers.join(", "),
            self.profile.mode,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    ///
    /// The expected IP is only checked for being non-empty; it is compared
    /// as a plain string and never parsed as an address.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The expected IP is empty or blank
    /// - The timeout is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let expected_ip = Self::resolve_expected_ip(cli)?;
        let timeout = Self::resolve_timeout(cli)?;

        Ok(Self {
            expected_ip,
            timeout,
            debug: cli.debug,
            profile: CheckProfile::best_of_three(),
        })
    }

    fn resolve_expected_ip(cli: &Cli) -> Result<String, ConfigError> {
        if cli.expected_ip.trim().is_empty() {
            return Err(ConfigError::missing(
                field::EXPECTED_IP,
                "Pass the address with --expectedip",
            ));
        }
        Ok(cli.expected_ip.clone())
    }

    fn resolve_timeout(cli: &Cli) -> Result<Option<Duration>, ConfigError> {
        match cli.timeout {
            Some(0) => Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be at least 1 second; omit it to wait indefinitely".to_string(),
            }),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
            None => Ok(None),
        }
    }
}
