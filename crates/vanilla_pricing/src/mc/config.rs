//! Monte Carlo simulation configuration.

use super::error::PricingError;

/// Maximum number of simulation paths allowed.
///
/// Bounds worst-case run time; the estimator error shrinks as O(1/sqrt(N)),
/// so path counts beyond this add cost without meaningful accuracy.
pub const MAX_PATHS: usize = 100_000_000;

/// Default chunk size for the parallel partition.
pub const DEFAULT_CHUNK_SIZE: usize = 65_536;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfig::builder`] to construct
/// instances; the builder validates at build time.
///
/// # Examples
///
/// ```rust
/// use vanilla_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 1_000_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Paths per chunk in the parallel partition.
    chunk_size: usize,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the chunk size used by the parallel partition.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`]
    /// - `PricingError::InvalidChunkSize` if `chunk_size` is 0
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::InvalidPathCount(self.n_paths));
        }
        if self.chunk_size == 0 {
            return Err(PricingError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    chunk_size: usize,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_paths: None,
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths (required, in [1, MAX_PATHS]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// Unseeded configurations default to seed 0 at run time; pricing is
    /// always deterministic.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the chunk size for the parallel partition.
    ///
    /// The chunk count, not the thread count, fixes the reduction order, so
    /// a given chunk size yields bit-identical results on any machine.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if `n_paths` is missing or any value is out
    /// of range.
    pub fn build(self) -> Result<SimulationConfig, PricingError> {
        let n_paths = self.n_paths.ok_or(PricingError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_paths,
            seed: self.seed,
            chunk_size: self.chunk_size,
        };

        config.validate()?;
        Ok(config)
    }
}
