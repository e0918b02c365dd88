//! Ant Colony Optimization engine for the Traveling Salesman Problem.
//!
//! Produces approximate tours over planar or geographic coordinates. A
//! colony of ants builds candidate tours by weighted roulette selection;
//! a shared pheromone field, evaporated and reinforced every generation,
//! concentrates the search on short edges. The engine is a best-effort
//! heuristic that runs for a fixed number of generations.
//!
//! # Architecture
//!
//! The crate is a pure algorithms library: data in, data out. Presentation
//! layers (GUI, web, plotting) and TSP-file parsing live upstream and talk
//! to the engine through [`optimize`] or [`aco::AcoRunner`].
//!
//! - [`distance`]: distance metrics and the symmetric cost matrix.
//! - [`aco`]: pheromone field, tour construction, and the colony loop.

pub mod aco;
pub mod distance;
mod error;

pub use error::Error;

use aco::{AcoConfig, AcoResult, AcoRunner};
use distance::{DistanceMatrix, DistanceMetric};

/// Runs the full pipeline: builds the distance matrix, then runs the colony.
///
/// `config.start_city`, when set, is a 0-based index into `coords`.
///
/// # Examples
///
/// ```
/// use aco_tsp::aco::AcoConfig;
/// use aco_tsp::distance::DistanceMetric;
///
/// let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let config = AcoConfig::default()
///     .with_num_ants(5)
///     .with_num_iterations(10)
///     .with_rho(0.5)
///     .with_seed(42);
///
/// let result = aco_tsp::optimize(&coords, DistanceMetric::PlanarEuclidean, &config).unwrap();
/// assert!(result.best_length <= 4.000001);
/// ```
///
/// # Errors
///
/// [`Error::DegenerateInstance`] for fewer than two cities, and
/// [`Error::InvalidParameter`] for out-of-bounds parameters or start city.
pub fn optimize(
    coords: &[(f64, f64)],
    metric: DistanceMetric,
    config: &AcoConfig,
) -> Result<AcoResult, Error> {
    let matrix = DistanceMatrix::build(coords, metric)?;
    AcoRunner::run(&matrix, config)
}
