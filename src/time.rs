//! Time abstraction for testability.
//!
//! This module provides a [`Clock`] trait that allows injecting mock clocks
//! in tests while using the real monotonic clock in production.

use std::time::Instant;

/// Abstraction over a monotonic clock.
///
/// The checker only measures elapsed time across a run, so implementations
/// return [`Instant`] rather than wall-clock time.
///
/// # Example
///
/// ```
/// use check_static_ip::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// let start = clock.now();
/// assert!(clock.now() >= start);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Production clock delegating to [`Instant::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
