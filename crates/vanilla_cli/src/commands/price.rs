//! Price command implementation.
//!
//! Prices a European call and put with the Monte Carlo engine and prints
//! the inputs and results, one labeled line per value.

use tracing::info;

use vanilla_pricing::mc::{MarketParams, MonteCarloEngine, OptionType, SimulationConfig};

use crate::Result;

#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    maturity: f64,
    paths: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<()> {
    let market = MarketParams::new(spot, strike, rate, vol, maturity)?;

    let mut builder = SimulationConfig::builder().n_paths(paths);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let engine = MonteCarloEngine::new(builder.build()?)?;

    info!(paths, parallel, "starting Monte Carlo pricing run");

    let (call, put) = if parallel {
        (
            engine.price_parallel(&market, OptionType::Call)?,
            engine.price_parallel(&market, OptionType::Put)?,
        )
    } else {
        (
            engine.price(&market, OptionType::Call)?,
            engine.price(&market, OptionType::Put)?,
        )
    };

    info!(call = call.price, put = put.price, "pricing complete");

    println!("Number of Paths: {}", paths);
    println!("Underlying:      {}", spot);
    println!("Strike:          {}", strike);
    println!("Risk-Free Rate:  {}", rate);
    println!("Volatility:      {}", vol);
    println!("Maturity:        {}", maturity);
    println!("Call Price:      {:.6} (+/- {:.6})", call.price, call.confidence_95());
    println!("Put Price:       {:.6} (+/- {:.6})", put.price, put.confidence_95());

    Ok(())
}
