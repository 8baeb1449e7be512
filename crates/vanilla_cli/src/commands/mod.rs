//! Command implementations.

pub mod greeks;
pub mod price;
