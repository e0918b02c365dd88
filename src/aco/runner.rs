//! Colony iteration loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::DistanceMatrix;
use crate::error::Error;

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::Ant;

/// Result of a colony run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found, a permutation of `0..n`.
    pub best_tour: Vec<usize>,

    /// Length of the best tour, closing edge included.
    pub best_length: f64,

    /// Best-so-far length at the end of each generation.
    pub trace: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the colony loop.
///
/// # Usage
///
/// ```
/// use aco_tsp::aco::{AcoConfig, AcoRunner};
/// use aco_tsp::distance::{DistanceMatrix, DistanceMetric};
///
/// let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let matrix = DistanceMatrix::build(&coords, DistanceMetric::PlanarEuclidean).unwrap();
/// let config = AcoConfig::default()
///     .with_num_ants(5)
///     .with_num_iterations(10)
///     .with_seed(42);
/// let result = AcoRunner::run(&matrix, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony for the configured number of generations.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when a parameter is outside its bounds
    /// or `start_city` is not a valid city index. Validation happens
    /// before any optimization work.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult, Error> {
        Self::run_with_cancel(distances, config, None)
    }

    /// Runs the colony with an optional cancellation token.
    ///
    /// The flag is checked between generations; once set, the run stops
    /// before the next generation's constructions and returns the best
    /// solution found so far.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, Error> {
        config.validate()?;
        let n = distances.num_cities();
        if let Some(start) = config.start_city {
            if start >= n {
                return Err(Error::InvalidParameter(format!(
                    "start_city must be in [0, {n}), got {start}"
                )));
            }
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut pheromones = PheromoneField::new(n);
        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut trace = Vec::with_capacity(config.num_iterations);
        let mut generations = 0usize;
        let mut cancelled = false;

        for _ in 0..config.num_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Per-ant streams derived from the master RNG keep the
            // sequential and parallel paths bit-identical. All ants in a
            // generation observe the same pheromone snapshot.
            let seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();
            let ants = construct_generation(distances, &pheromones, config, &seeds);

            // Strict less-than: ties keep the earliest tour found.
            for ant in &ants {
                if ant.length < best_length {
                    best_length = ant.length;
                    best_tour = ant.tour.clone();
                }
            }
            trace.push(best_length);

            // Serialized barrier: the update runs only after every ant in
            // the generation has finished constructing.
            pheromones.update(&ants, config.rho);
            generations += 1;
        }

        Ok(AcoResult {
            best_tour,
            best_length,
            trace,
            generations,
            cancelled,
        })
    }
}

#[cfg(feature = "parallel")]
fn construct_generation(
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<Ant> {
    if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                Ant::construct(distances, pheromones, config.start_city, &mut rng)
            })
            .collect()
    } else {
        construct_sequential(distances, pheromones, config, seeds)
    }
}

#[cfg(not(feature = "parallel"))]
fn construct_generation(
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<Ant> {
    construct_sequential(distances, pheromones, config, seeds)
}

fn construct_sequential(
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<Ant> {
    seeds
        .iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            Ant::construct(distances, pheromones, config.start_city, &mut rng)
        })
        .collect()
}
