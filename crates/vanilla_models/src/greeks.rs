//! Finite-difference Greeks for the closed-form pricer.
//!
//! Delta uses a forward difference, Gamma a central second difference:
//!
//! ```text
//! Delta ~ (C(S + h) - C(S)) / h
//! Gamma ~ (C(S + h) - 2*C(S) + C(S - h)) / h^2
//! ```
//!
//! Both reprice the model at bumped spots rather than differentiating, so
//! they exercise exactly the path a bump-and-revalue risk run would take.

use super::black_scholes::BlackScholes;
use super::error::ModelError;

/// Validates a finite-difference bump size.
fn check_bump(bump: f64) -> Result<(), ModelError> {
    if !(bump > 0.0) || !bump.is_finite() {
        return Err(ModelError::InvalidBump { bump });
    }
    Ok(())
}

/// Computes the call Delta via forward differencing.
///
/// # Arguments
/// * `model` - Base Black-Scholes model
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `bump` - Spot increment h (must be positive and finite)
///
/// # Errors
/// `ModelError::InvalidBump` for a non-positive or non-finite bump.
///
/// # Examples
/// ```
/// use vanilla_models::{delta_forward, BlackScholes};
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let delta = delta_forward(&bs, 100.0, 1.0, 0.001).unwrap();
/// assert!(delta > 0.0 && delta < 1.0);
/// ```
pub fn delta_forward(
    model: &BlackScholes,
    strike: f64,
    expiry: f64,
    bump: f64,
) -> Result<f64, ModelError> {
    check_bump(bump)?;

    let up = model.with_spot_offset(bump)?;
    let base_price = model.price_call(strike, expiry);
    let up_price = up.price_call(strike, expiry);

    Ok((up_price - base_price) / bump)
}

/// Computes the call Gamma via central second differencing.
///
/// # Arguments
/// * `model` - Base Black-Scholes model
/// * `strike` - Strike price
/// * `expiry` - Time to expiry in years
/// * `bump` - Spot increment h (must be positive, finite, and less than spot
///   so the down-bumped model remains valid)
///
/// # Errors
/// - `ModelError::InvalidBump` for a non-positive or non-finite bump
/// - `ModelError::InvalidSpot` if `spot - bump <= 0`
pub fn gamma_central(
    model: &BlackScholes,
    strike: f64,
    expiry: f64,
    bump: f64,
) -> Result<f64, ModelError> {
    check_bump(bump)?;

    let up = model.with_spot_offset(bump)?;
    let down = model.with_spot_offset(-bump)?;

    let up_price = up.price_call(strike, expiry);
    let base_price = model.price_call(strike, expiry);
    let down_price = down.price_call(strike, expiry);

    Ok((up_price - 2.0 * base_price + down_price) / (bump * bump))
}
