//! check-static-ip: external IPv4 address check
//!
//! A library for asking public "what is my IP" services for the caller's
//! address and comparing their answers with an expected value.

pub mod check;
pub mod config;
pub mod http;
pub mod provider;
pub mod time;

#[cfg(test)]
pub(crate) mod test_fixtures;
