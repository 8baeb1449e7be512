//! CLI error type.

use thiserror::Error;
use vanilla_models::ModelError;
use vanilla_pricing::PricingError;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Monte Carlo configuration or market parameter error.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Closed-form model error.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
