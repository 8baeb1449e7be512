//! Greeks command implementation.
//!
//! Computes Delta (forward difference) and Gamma (central difference) by
//! bumping the closed-form Black-Scholes price.

use tracing::info;

use vanilla_models::{delta_forward, gamma_central, BlackScholes};

use crate::Result;

pub fn run(spot: f64, strike: f64, rate: f64, vol: f64, maturity: f64, bump: f64) -> Result<()> {
    let model = BlackScholes::new(spot, rate, vol)?;

    info!(bump, "computing finite-difference Greeks");

    let delta = delta_forward(&model, strike, maturity, bump)?;
    let gamma = gamma_central(&model, strike, maturity, bump)?;

    println!("Underlying:        {}", spot);
    println!("Delta underlying:  {}", bump);
    println!("Strike:            {}", strike);
    println!("Risk-Free Rate:    {}", rate);
    println!("Volatility:        {}", vol);
    println!("Maturity:          {}", maturity);
    println!();
    println!("Call Delta:        {:.6}", delta);
    println!("Call Gamma:        {:.6}", gamma);

    Ok(())
}
