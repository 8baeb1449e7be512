//! vanillamc - European vanilla option pricing from the command line.
//!
//! # Commands
//!
//! - `vanillamc price` - Monte Carlo call/put prices under GBM
//! - `vanillamc greeks` - finite-difference Delta/Gamma from the closed form
//!
//! Invalid parameters surface a clear message on stderr and a nonzero exit
//! code before any simulation starts.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// European vanilla option pricer (Monte Carlo + closed-form Greeks)
#[derive(Parser)]
#[command(name = "vanillamc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European call and put via Monte Carlo simulation
    Price {
        /// Spot price of the underlying
        #[arg(short = 'S', long, default_value_t = 100.0)]
        spot: f64,

        /// Strike price
        #[arg(short = 'K', long, default_value_t = 100.0)]
        strike: f64,

        /// Risk-free rate (annualised)
        #[arg(short, long, default_value_t = 0.05)]
        rate: f64,

        /// Volatility (annualised)
        #[arg(short, long, default_value_t = 0.2)]
        vol: f64,

        /// Time to maturity in years
        #[arg(short, long, default_value_t = 1.0)]
        maturity: f64,

        /// Number of simulated paths
        #[arg(short = 'n', long, default_value_t = 10_000_000)]
        paths: usize,

        /// Seed for the random source (runs are reproducible per seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Use the chunked parallel reduction
        #[arg(long)]
        parallel: bool,
    },

    /// Compute Delta and Gamma via finite differences of the closed form
    Greeks {
        /// Spot price of the underlying
        #[arg(short = 'S', long, default_value_t = 100.0)]
        spot: f64,

        /// Strike price
        #[arg(short = 'K', long, default_value_t = 100.0)]
        strike: f64,

        /// Risk-free rate (annualised)
        #[arg(short, long, default_value_t = 0.05)]
        rate: f64,

        /// Volatility (annualised)
        #[arg(short, long, default_value_t = 0.2)]
        vol: f64,

        /// Time to maturity in years
        #[arg(short, long, default_value_t = 1.0)]
        maturity: f64,

        /// Spot bump size h for the finite differences
        #[arg(short, long, default_value_t = 0.001)]
        bump: f64,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Price {
            spot,
            strike,
            rate,
            vol,
            maturity,
            paths,
            seed,
            parallel,
        } => commands::price::run(spot, strike, rate, vol, maturity, paths, seed, parallel),
        Commands::Greeks {
            spot,
            strike,
            rate,
            vol,
            maturity,
            bump,
        } => commands::greeks::run(spot, strike, rate, vol, maturity, bump),
    }
}

fn main() {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
