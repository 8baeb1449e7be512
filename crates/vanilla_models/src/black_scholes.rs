//! Black-Scholes pricing model for European vanilla options.
//!
//! ## Formulas
//!
//! **Call**: C = S·N(d1) - K·e^(-rT)·N(d2)
//! **Put**:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
//!
//! where:
//! - d1 = (ln(S/K) + (r + sigma^2/2)·T) / (sigma·sqrt(T))
//! - d2 = d1 - sigma·sqrt(T)

use super::distributions::{norm_cdf, norm_pdf};
use super::error::ModelError;

/// Expiries below this threshold collapse to intrinsic value.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// supplied per pricing call so the same model instance can be bumped and
/// re-used by the finite-difference Greeks calculator.
///
/// # Examples
/// ```
/// use vanilla_models::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (sigma)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `ModelError::InvalidSpot` if `spot <= 0`
    /// - `ModelError::InvalidVolatility` if `volatility <= 0`
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, ModelError> {
        if !(spot > 0.0) {
            return Err(ModelError::InvalidSpot { spot });
        }
        if !(volatility > 0.0) {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a copy of the model with the spot shifted by `offset`.
    ///
    /// Used by the finite-difference Greeks calculator to reprice at
    /// S + h and S - h.
    ///
    /// # Errors
    /// `ModelError::InvalidSpot` if the shifted spot is non-positive.
    pub fn with_spot_offset(&self, offset: f64) -> Result<Self, ModelError> {
        Self::new(self.spot + offset, self.rate, self.volatility)
    }

    /// Computes the d1 term.
    ///
    /// Near-zero expiries return a large signed value so the CDF saturates
    /// towards the intrinsic-value limit.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if self.spot > strike {
                100.0
            } else if self.spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term: d2 = d1 - sigma·sqrt(T).
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price.
    ///
    /// C = S·N(d1) - K·e^(-rT)·N(d2)
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (self.spot - strike).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put price.
    ///
    /// P = K·e^(-rT)·N(-d2) - S·N(-d1)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return (strike - self.spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Computes the analytical Delta.
    ///
    /// Call Delta = N(d1), Put Delta = N(d1) - 1. Serves as the reference
    /// for the finite-difference approximation in [`crate::greeks`].
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return if is_call {
                if self.spot > strike {
                    1.0
                } else {
                    0.0
                }
            } else if self.spot < strike {
                -1.0
            } else {
                0.0
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));
        if is_call {
            n_d1
        } else {
            n_d1 - 1.0
        }
    }

    /// Computes the analytical Gamma: phi(d1) / (S·sigma·sqrt(T)).
    ///
    /// Gamma is identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.spot * self.volatility * expiry.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_model() -> BlackScholes {
        BlackScholes::new(100.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_spot() {
        assert!(matches!(
            BlackScholes::new(-100.0, 0.05, 0.2),
            Err(ModelError::InvalidSpot { .. })
        ));
        assert!(BlackScholes::new(0.0, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_volatility() {
        assert!(matches!(
            BlackScholes::new(100.0, 0.05, -0.1),
            Err(ModelError::InvalidVolatility { .. })
        ));
        assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    }

    #[test]
    fn test_atm_call_reference_value() {
        // S=K=100, r=0.05, sigma=0.2, T=1: C = 10.450583572185565
        let bs = atm_model();
        assert_relative_eq!(bs.price_call(100.0, 1.0), 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_atm_put_reference_value() {
        // Same parameters: P = 5.573526022256971
        let bs = atm_model();
        assert_relative_eq!(bs.price_put(100.0, 1.0), 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity() {
        let bs = atm_model();
        for (strike, expiry) in [(80.0, 0.5), (100.0, 1.0), (120.0, 2.0)] {
            let call = bs.price_call(strike, expiry);
            let put = bs.price_put(strike, expiry);
            let forward = bs.spot() - strike * (-bs.rate() * expiry).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zero_expiry_returns_intrinsic() {
        let bs = BlackScholes::new(110.0, 0.05, 0.2).unwrap();
        assert_relative_eq!(bs.price_call(100.0, 0.0), 10.0);
        assert_relative_eq!(bs.price_put(100.0, 0.0), 0.0);
        assert_relative_eq!(bs.price_put(120.0, 0.0), 10.0);
    }

    #[test]
    fn test_call_delta_in_unit_interval() {
        let bs = atm_model();
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let delta = bs.delta(strike, 1.0, true);
            assert!((0.0..=1.0).contains(&delta), "delta {} out of [0,1]", delta);
        }
    }

    #[test]
    fn test_put_delta_in_negative_unit_interval() {
        let bs = atm_model();
        for strike in [50.0, 100.0, 200.0] {
            let delta = bs.delta(strike, 1.0, false);
            assert!((-1.0..=0.0).contains(&delta));
        }
    }

    #[test]
    fn test_gamma_positive_and_symmetric_in_kind() {
        let bs = atm_model();
        let gamma = bs.gamma(100.0, 1.0);
        assert!(gamma > 0.0);
        // phi(d1) / (S*sigma*sqrt(T)) with d1 = 0.35
        assert_relative_eq!(gamma, norm_pdf(bs.d1(100.0, 1.0)) / 20.0, epsilon = 1e-15);
    }

    #[test]
    fn test_with_spot_offset() {
        let bs = atm_model();
        let bumped = bs.with_spot_offset(0.5).unwrap();
        assert_relative_eq!(bumped.spot(), 100.5);
        assert!(bs.with_spot_offset(-100.0).is_err());
    }

    #[test]
    fn test_call_price_monotone_in_spot() {
        let lo = BlackScholes::new(90.0, 0.05, 0.2).unwrap();
        let hi = BlackScholes::new(110.0, 0.05, 0.2).unwrap();
        assert!(hi.price_call(100.0, 1.0) > lo.price_call(100.0, 1.0));
    }

    #[test]
    fn test_call_price_monotone_in_volatility() {
        let lo = BlackScholes::new(100.0, 0.05, 0.1).unwrap();
        let hi = BlackScholes::new(100.0, 0.05, 0.3).unwrap();
        assert!(hi.price_call(100.0, 1.0) > lo.price_call(100.0, 1.0));
    }
}
