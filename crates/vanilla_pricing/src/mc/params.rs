//! Market parameters and payoff kinds for European vanilla options.

use super::error::PricingError;

/// Payoff kind for a European vanilla option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Right to buy: payoff max(S_T - K, 0).
    Call,
    /// Right to sell: payoff max(K - S_T, 0).
    Put,
}

impl OptionType {
    /// Evaluates the payoff at a terminal price.
    ///
    /// # Examples
    /// ```
    /// use vanilla_pricing::mc::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (terminal - strike).max(0.0),
            Self::Put => (strike - terminal).max(0.0),
        }
    }
}

/// Market parameters for one pricing run.
///
/// Immutable for the duration of a simulation. Fields are public for
/// ergonomic struct-update syntax in bump-and-revalue code; the engine
/// re-validates before sampling, so a hand-built invalid instance fails
/// fast rather than producing NaN.
///
/// # Examples
/// ```
/// use vanilla_pricing::mc::MarketParams;
///
/// let market = MarketParams::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!(MarketParams::new(-1.0, 100.0, 0.05, 0.2, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketParams {
    /// Spot price of the underlying (S > 0).
    pub spot: f64,
    /// Strike price (K > 0).
    pub strike: f64,
    /// Risk-free rate, annualised; may be negative.
    pub rate: f64,
    /// Volatility, annualised (sigma >= 0).
    pub volatility: f64,
    /// Time to maturity in years (T > 0).
    pub maturity: f64,
}

impl MarketParams {
    /// Creates validated market parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the offending field when
    /// S <= 0, K <= 0, sigma < 0, T <= 0, or any value is non-finite.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates the parameter set.
    ///
    /// Called by the engine before any sampling begins (fail fast, no
    /// partial computation).
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot > 0.0) || !self.spot.is_finite() {
            return Err(PricingError::invalid("spot", self.spot));
        }
        if !(self.strike > 0.0) || !self.strike.is_finite() {
            return Err(PricingError::invalid("strike", self.strike));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid("rate", self.rate));
        }
        if !(self.volatility >= 0.0) || !self.volatility.is_finite() {
            return Err(PricingError::invalid("volatility", self.volatility));
        }
        if !(self.maturity > 0.0) || !self.maturity.is_finite() {
            return Err(PricingError::invalid("maturity", self.maturity));
        }
        Ok(())
    }

    /// Discount factor exp(-rT) for these parameters.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}
