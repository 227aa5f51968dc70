//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//!
//! The command line is the only source of configuration: no config file
//! and no environment variables are read.

mod cli;
mod error;
mod validated;


pub use cli::{Cli, normalize_legacy_flags};
pub use error::{ConfigError, field};
pub use validated::ValidatedConfig;
