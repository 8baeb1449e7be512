//! Closed-form pricing models for European vanilla options.
//!
//! This crate provides the analytical collaborators for the Monte Carlo
//! pricing kernel:
//!
//! - [`black_scholes::BlackScholes`]: closed-form call/put pricing under
//!   lognormal dynamics, with analytical Delta and Gamma.
//! - [`greeks`]: finite-difference sensitivities (forward-difference Delta,
//!   central-difference Gamma) built on the closed-form pricer.
//! - [`distributions`]: standard normal CDF/PDF used by the formulas.
//!
//! The Monte Carlo kernel (`vanilla_pricing`) does not depend on this crate
//! at runtime; it uses the closed form only as a convergence oracle in tests.

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

pub use black_scholes::BlackScholes;
pub use error::ModelError;
pub use greeks::{delta_forward, gamma_central};
