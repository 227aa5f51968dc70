//! Error types for configuration validation.

use thiserror::Error;

/// Error type for configuration validation.
///
/// Parsing errors are reported by clap itself; these cover values that
/// parse fine but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required value.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `ConfigError` variants.
pub mod field {
    /// The expected IP field.
    pub const EXPECTED_IP: &str = "expectedip";
    /// The timeout field.
    pub const TIMEOUT: &str = "timeout";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
