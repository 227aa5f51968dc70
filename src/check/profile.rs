//! Check profiles.

use crate::provider::ProviderKind;

/// How the checker reacts when a provider cannot be queried or parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Query every provider and decide at the end.
    Aggregate,
    /// Stop at the first provider that fails to produce an address.
    /// A plain mismatch does not stop the run.
    FailFast,
}

/// The providers to query, in order, and the failure mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckProfile {
    /// Providers queried sequentially in this order
    pub providers: Vec<ProviderKind>,
    /// Reaction to retrieval and parse failures
    pub mode: FailureMode,
}

impl CheckProfile {
    /// All known providers; success if any one of them matches.
    #[must_use]
    pub fn best_of_three() -> Self {
        Self {
            providers: ProviderKind::ALL.to_vec(),
            mode: FailureMode::Aggregate,
        }
    }

    /// One provider, failing on the first retrieval or parse error.
    #[must_use]
    pub fn single(provider: ProviderKind) -> Self {
        Self {
            providers: vec![provider],
            mode: FailureMode::FailFast,
        }
    }
}

impl Default for CheckProfile {
    fn default() -> Self {
        Self::best_of_three()
    }
}
