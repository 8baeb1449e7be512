//! Monte Carlo pricing kernel for European vanilla options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── SimulationConfig  (path count, seed, chunk size)
//! ├── MarketParams      (spot, strike, rate, volatility, maturity)
//! ├── SimulationRng     (seeded uniform source + polar Box-Muller)
//! └── Orchestration
//!     ├── simulate_chunk()   (terminal prices + payoff accumulation)
//!     └── finalise()         (discounted mean + standard error)
//! ```
//!
//! # Examples
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
//! let call = engine.price(&market, OptionType::Call).unwrap();
//! let put = engine.price(&market, OptionType::Put).unwrap();
//!
//! // Put-call parity holds within sampling error.
//! let parity_gap = (call.price - put.price) - (market.spot - market.strike * market.discount_factor());
//! assert!(parity_gap.abs() < 4.0 * (call.std_error + put.std_error));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod params;

// Re-exports for convenient access
pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_PATHS};
pub use engine::{MonteCarloEngine, PriceEstimate};
pub use error::PricingError;
pub use params::{MarketParams, OptionType};
