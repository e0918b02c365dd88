//! ACO configuration and algorithm constants.

use crate::error::Error;

/// Influence of the pheromone trail on city selection.
pub const ALPHA: f64 = 1.0;

/// Influence of proximity (inverse distance) on city selection.
pub const BETA: f64 = 2.0;

/// Pheromone deposition constant; each ant deposits `Q / tour_length` on
/// every edge it traversed.
pub const Q: f64 = 100.0;

/// Configuration for one colony run.
///
/// # Examples
///
/// ```
/// use aco_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_num_iterations(200)
///     .with_rho(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants per generation. Bounds: `[1, 100]`.
    pub num_ants: usize,

    /// Number of generations. Bounds: `[1, 1000]`.
    pub num_iterations: usize,

    /// Evaporation rate, the fraction of trail lost per generation.
    /// Bounds: `[0.1, 1.0]`.
    pub rho: f64,

    /// Fixed starting city for every ant, as a 0-based index into the
    /// coordinate list. `None` lets each ant start at a uniformly random
    /// city.
    pub start_city: Option<usize>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Whether to construct tours in parallel using rayon. Requires the
    /// `parallel` cargo feature; ignored otherwise. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 50,
            num_iterations: 100,
            rho: 0.3,
            start_city: None,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = Some(city);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the parameter bounds.
    ///
    /// `start_city` is checked against the instance size by the runner,
    /// which knows the city count.
    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=100).contains(&self.num_ants) {
            return Err(Error::InvalidParameter(format!(
                "num_ants must be in [1, 100], got {}",
                self.num_ants
            )));
        }
        if !(1..=1000).contains(&self.num_iterations) {
            return Err(Error::InvalidParameter(format!(
                "num_iterations must be in [1, 1000], got {}",
                self.num_iterations
            )));
        }
        if !(0.1..=1.0).contains(&self.rho) {
            return Err(Error::InvalidParameter(format!(
                "rho must be in [0.1, 1.0], got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
