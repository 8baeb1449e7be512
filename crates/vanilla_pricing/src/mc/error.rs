//! Error types for the Monte Carlo pricing kernel.

use thiserror::Error;

use super::config::MAX_PATHS;

/// Monte Carlo pricing errors.
///
/// Parameter errors are raised before any sampling begins; there is no
/// partial computation to recover. `NonFiniteEstimate` is the fail-fast
/// replacement for silently propagating NaN or infinity out of the
/// accumulator under extreme parameter combinations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Invalid market or simulation parameter with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the rejected value.
        value: String,
    },

    /// Path count outside [1, MAX_PATHS].
    #[error("invalid path count {0}: must be in range [1, {MAX_PATHS}]")]
    InvalidPathCount(usize),

    /// Chunk size must be at least 1.
    #[error("invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(usize),

    /// The simulation accumulator overflowed to a non-finite value.
    #[error("simulation produced a non-finite estimate: {detail}")]
    NonFiniteEstimate {
        /// What overflowed (sum, mean, ...).
        detail: String,
    },
}

impl PricingError {
    /// Convenience constructor for parameter validation failures.
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            name,
            value: format!("rejected value {}", value),
        }
    }
}
