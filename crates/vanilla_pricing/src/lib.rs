//! Monte Carlo pricing kernel for European vanilla options.
//!
//! Estimates the discounted expected payoff of European calls and puts under
//! risk-neutral geometric Brownian motion. The sampling error of the
//! estimate shrinks as O(1/sqrt(N)) in the path count N, and every run is
//! reproducible from a 64-bit seed.
//!
//! # Modules
//!
//! - [`rng`]: seeded uniform source and the polar Box-Muller normal sampler
//! - [`mc`]: configuration, market parameters, and the pricing engine
//!
//! # Quick start
//!
//! ```rust
//! use vanilla_pricing::mc::{MarketParams, MonteCarloEngine, OptionType, SimulationConfig};
//!
//! let config = SimulationConfig::builder()
//!     .n_paths(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config).unwrap();
//!
//! let market = MarketParams::default();
//! let estimate = engine.price(&market, OptionType::Call).unwrap();
//! println!("Call: {:.4} +/- {:.4}", estimate.price, estimate.confidence_95());
//! ```

pub mod mc;
pub mod rng;

pub use mc::{
    MarketParams, MonteCarloEngine, OptionType, PriceEstimate, PricingError, SimulationConfig,
};
pub use rng::{PolarNormal, SimulationRng};
