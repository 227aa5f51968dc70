//! The IP verification check.
//!
//! This module provides:
//! - Which providers to ask and how to react to failures ([`CheckProfile`], [`FailureMode`])
//! - Per-provider and whole-run results ([`ProviderResult`], [`CheckOutcome`])
//! - The sequential aggregator ([`Checker`])

mod checker;
mod listing;
mod outcome;
mod profile;


pub use checker::Checker;
pub use outcome::{CheckOutcome, ProviderResult};
pub use profile::{CheckProfile, FailureMode};
