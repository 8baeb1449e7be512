//! Random number generation for the Monte Carlo kernel.
//!
//! Two pieces:
//!
//! - [`PolarNormal`]: the polar Box-Muller (Marsaglia) transform, producing
//!   standard normal variates from any uniform source implementing
//!   [`rand::Rng`]. This is the variate generator the pricing loop consumes.
//! - [`SimulationRng`]: a seeded wrapper around [`rand::rngs::StdRng`] that
//!   owns the uniform source and exposes single and batch normal draws.
//!
//! # Reproducibility
//!
//! All generators are seeded; the same seed always produces a bit-identical
//! draw sequence. For parallel runs, [`SimulationRng::for_stream`] derives
//! decorrelated per-chunk seeds from a base seed so each worker owns an
//! independent source with no shared state.

mod polar;
mod sim;

pub use polar::PolarNormal;
pub use sim::SimulationRng;
