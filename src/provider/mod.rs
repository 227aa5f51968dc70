//! External "what is my IP" services.
//!
//! This module provides:
//! - The known services and their response shapes ([`ProviderKind`])
//! - Querying a service for its raw answer ([`fetch_raw`])
//! - The per-provider failure taxonomy ([`ProviderError`])

mod error;
mod fetch;
mod kind;

#[cfg(test)]
mod fetch_tests;
#[cfg(test)]
mod kind_tests;

pub use error::ProviderError;
pub use fetch::fetch_raw;
pub use kind::ProviderKind;
