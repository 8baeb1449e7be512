//! Monte Carlo pricing engine for European vanilla options.
//!
//! One normal draw per path maps directly to a terminal price under
//! risk-neutral GBM, so no intermediate time stepping is needed:
//!
//! ```text
//! S_T = S * exp(T*(r - sigma^2/2)) * exp(sigma*sqrt(T)*z),  z ~ N(0,1)
//! price = exp(-rT) * mean(payoff(S_T))
//! ```
//!
//! # Parallel determinism
//!
//! [`MonteCarloEngine::price_parallel`] partitions the paths into fixed-size
//! chunks. Each chunk owns an independently derived generator and a private
//! accumulator; partial sums are collected in chunk order and reduced
//! sequentially. Because the reduction order depends on the chunk count and
//! never on the thread count, a given (seed, n_paths, chunk_size) triple is
//! bit-identical on any machine.

use rayon::prelude::*;

use super::config::SimulationConfig;
use super::error::PricingError;
use super::params::{MarketParams, OptionType};
use crate::rng::SimulationRng;

/// Monte Carlo price estimate.
///
/// The estimate carries its own sampling error: the true price lies within
/// `price +/- confidence_95()` with 95% probability (asymptotically).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Discounted sample-mean payoff.
    pub price: f64,
    /// Standard error of the estimate (discounted).
    pub std_error: f64,
    /// Number of paths that produced the estimate.
    pub n_paths: usize,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Stateless between calls: every `price` invocation is a fresh estimation
/// run seeded from the configuration, so repeated calls with the same
/// inputs return identical results.
///
/// # Examples
///
/// ```rust
/// use vanilla_pricing::mc::{MarketParams, MonteCarloEngine, OptionType, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::new(config).unwrap();
///
/// let market = MarketParams::default();
/// let call = engine.price(&market, OptionType::Call).unwrap();
/// println!("Call: {:.4} +/- {:.4}", call.price, call.confidence_95());
/// ```
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates an engine with the given configuration.
    ///
    /// # Errors
    /// Returns `PricingError` if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, PricingError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices a European vanilla option sequentially.
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` before any sampling if the market
    ///   parameters are out of range
    /// - `PricingError::NonFiniteEstimate` if extreme parameters overflow
    ///   the payoff accumulator
    pub fn price(
        &self,
        market: &MarketParams,
        option: OptionType,
    ) -> Result<PriceEstimate, PricingError> {
        market.validate()?;

        let n_paths = self.config.n_paths();
        let mut rng = SimulationRng::from_seed(self.base_seed());
        let sums = simulate_chunk(&mut rng, market, option, n_paths);

        finalise(market, n_paths, sums)
    }

    /// Prices a European vanilla option with a chunked parallel reduction.
    ///
    /// Statistically equivalent to [`price`](Self::price) but draws from
    /// per-chunk streams, so the two methods agree only within sampling
    /// error, not bit-for-bit. Repeated parallel runs with the same
    /// configuration are bit-identical regardless of thread count.
    ///
    /// # Errors
    /// Same taxonomy as [`price`](Self::price).
    pub fn price_parallel(
        &self,
        market: &MarketParams,
        option: OptionType,
    ) -> Result<PriceEstimate, PricingError> {
        market.validate()?;

        let n_paths = self.config.n_paths();
        let chunk_size = self.config.chunk_size();
        let n_chunks = n_paths.div_ceil(chunk_size);
        let base_seed = self.base_seed();

        // collect() preserves chunk order; the sequential fold below pins
        // the floating-point reduction order independent of thread count.
        let partials: Vec<ChunkSums> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                let offset = chunk * chunk_size;
                let len = chunk_size.min(n_paths - offset);
                let mut rng = SimulationRng::for_stream(base_seed, chunk as u64);
                simulate_chunk(&mut rng, market, option, len)
            })
            .collect();

        let total = partials.into_iter().fold(ChunkSums::default(), ChunkSums::merge);

        finalise(market, n_paths, total)
    }

    #[inline]
    fn base_seed(&self) -> u64 {
        self.config.seed().unwrap_or(0)
    }
}

/// Partial payoff sums for one chunk of paths.
#[derive(Clone, Copy, Debug, Default)]
struct ChunkSums {
    sum: f64,
    sum_sq: f64,
    saw_non_finite: bool,
}

impl ChunkSums {
    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            saw_non_finite: self.saw_non_finite || other.saw_non_finite,
        }
    }
}

/// Simulates `n_paths` terminal prices and accumulates payoff sums.
///
/// The only state shared across iterations is the accumulator and the
/// generator's sequence position.
fn simulate_chunk(
    rng: &mut SimulationRng,
    market: &MarketParams,
    option: OptionType,
    n_paths: usize,
) -> ChunkSums {
    // Drift-adjusted spot: S * exp(T*(r - sigma^2/2)), hoisted out of the loop.
    let drift_spot = market.spot
        * (market.maturity * (market.rate - 0.5 * market.volatility * market.volatility)).exp();
    let vol_sqrt_t = market.volatility * market.maturity.sqrt();

    let mut sums = ChunkSums::default();
    for _ in 0..n_paths {
        let z = rng.next_normal();
        let terminal = drift_spot * (vol_sqrt_t * z).exp();
        // max(_, 0.0) absorbs NaN, so an overflowed terminal (0 * inf) would
        // otherwise vanish into a zero payoff; flag it here instead.
        if !terminal.is_finite() {
            sums.saw_non_finite = true;
        }
        let payoff = option.payoff(terminal, market.strike);
        sums.sum += payoff;
        sums.sum_sq += payoff * payoff;
    }
    sums
}

/// Turns accumulated payoff sums into a discounted estimate.
fn finalise(
    market: &MarketParams,
    n_paths: usize,
    sums: ChunkSums,
) -> Result<PriceEstimate, PricingError> {
    if sums.saw_non_finite || !sums.sum.is_finite() || !sums.sum_sq.is_finite() {
        return Err(PricingError::NonFiniteEstimate {
            detail: format!("payoff sum {} over {} paths", sums.sum, n_paths),
        });
    }

    let n = n_paths as f64;
    let mean = sums.sum / n;
    let discount = market.discount_factor();

    // Unbiased sample variance; a single path carries no spread information.
    let variance = if n_paths > 1 {
        ((sums.sum_sq / n - mean * mean) * n / (n - 1.0)).max(0.0)
    } else {
        0.0
    };
    let std_error = (variance / n).sqrt();

    Ok(PriceEstimate {
        price: discount * mean,
        std_error: discount * std_error,
        n_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn engine(n_paths: usize, seed: u64) -> MonteCarloEngine {
        let config = SimulationConfig::builder()
            .n_paths(n_paths)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloEngine::new(config).unwrap()
    }

    #[test]
    fn test_price_is_non_negative() {
        let engine = engine(10_000, 42);
        let market = MarketParams::default();

        let call = engine.price(&market, OptionType::Call).unwrap();
        let put = engine.price(&market, OptionType::Put).unwrap();
        assert!(call.price >= 0.0);
        assert!(put.price >= 0.0);
        assert!(call.std_error > 0.0);
    }

    #[test]
    fn test_invalid_market_rejected_before_sampling() {
        let engine = engine(10_000, 42);
        let market = MarketParams {
            spot: -100.0,
            ..MarketParams::default()
        };

        let result = engine.price(&market, OptionType::Call);
        assert!(matches!(
            result,
            Err(PricingError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_zero_volatility_is_deterministic_discounted_payoff() {
        // With sigma = 0 every path gives S*exp(rT), so the call price is
        // exactly exp(-rT) * max(S*exp(rT) - K, 0) with zero variance.
        let engine = engine(1_000, 7);
        let market = MarketParams {
            volatility: 0.0,
            ..MarketParams::default()
        };

        let result = engine.price(&market, OptionType::Call).unwrap();
        let forward = 100.0 * (0.05_f64).exp();
        let expected = (-0.05_f64).exp() * (forward - 100.0).max(0.0);

        // Identical payoffs still accumulate rounding, so the spread is
        // near zero rather than bit-exact zero.
        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert!(result.std_error < 1e-9);
    }

    #[test]
    fn test_same_seed_bit_identical() {
        let engine = engine(50_000, 42);
        let market = MarketParams::default();

        let a = engine.price(&market, OptionType::Call).unwrap();
        let b = engine.price(&market, OptionType::Call).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
    }

    #[test]
    fn test_parallel_bit_identical_across_runs() {
        let engine = engine(50_000, 42);
        let market = MarketParams::default();

        let a = engine.price_parallel(&market, OptionType::Call).unwrap();
        let b = engine.price_parallel(&market, OptionType::Call).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
    }

    #[test]
    fn test_parallel_chunk_count_changes_stream_not_statistics() {
        // Different chunk sizes draw different streams; estimates must still
        // agree within combined sampling error.
        let market = MarketParams::default();

        let coarse = MonteCarloEngine::new(
            SimulationConfig::builder()
                .n_paths(200_000)
                .seed(42)
                .chunk_size(100_000)
                .build()
                .unwrap(),
        )
        .unwrap();
        let fine = MonteCarloEngine::new(
            SimulationConfig::builder()
                .n_paths(200_000)
                .seed(42)
                .chunk_size(1_000)
                .build()
                .unwrap(),
        )
        .unwrap();

        let a = coarse.price_parallel(&market, OptionType::Call).unwrap();
        let b = fine.price_parallel(&market, OptionType::Call).unwrap();
        let tolerance = 4.0 * (a.std_error + b.std_error);
        assert!((a.price - b.price).abs() < tolerance);
    }

    #[test]
    fn test_extreme_volatility_surfaces_non_finite_error() {
        // vol*sqrt(T) around 1e6 drives exp() into 0 * inf = NaN terminals.
        let engine = engine(100, 1);
        let market = MarketParams {
            volatility: 1e6,
            ..MarketParams::default()
        };

        let result = engine.price(&market, OptionType::Call);
        assert!(matches!(result, Err(PricingError::NonFiniteEstimate { .. })));
    }

    #[test]
    fn test_single_path_has_zero_std_error() {
        let engine = engine(1, 3);
        let result = engine.price(&MarketParams::default(), OptionType::Call).unwrap();
        assert_eq!(result.n_paths, 1);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_confidence_interval_scaling() {
        let estimate = PriceEstimate {
            price: 10.0,
            std_error: 0.05,
            n_paths: 1000,
        };
        assert_relative_eq!(estimate.confidence_95(), 0.098, epsilon = 1e-12);
        assert_relative_eq!(estimate.confidence_99(), 0.1288, epsilon = 1e-12);
    }
}
