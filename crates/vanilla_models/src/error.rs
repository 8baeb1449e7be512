//! Error types for closed-form pricing operations.

use thiserror::Error;

/// Closed-form pricing errors.
///
/// # Examples
/// ```
/// use vanilla_models::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (non-positive).
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price value.
        spot: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value.
        volatility: f64,
    },

    /// Invalid finite-difference bump size (non-positive or non-finite).
    #[error("invalid bump size: h = {bump}")]
    InvalidBump {
        /// The rejected bump size.
        bump: f64,
    },
}
