//! Probabilistic tour construction.

use rand::Rng;

use crate::distance::DistanceMatrix;

use super::config::{ALPHA, BETA};
use super::pheromone::PheromoneField;
use super::types::Ant;

impl Ant {
    /// Builds one complete tour by weighted roulette selection.
    ///
    /// Starts at `start` if given, else at a uniformly random city. The
    /// reported length includes the closing edge back to the start.
    pub(crate) fn construct<R: Rng>(
        distances: &DistanceMatrix,
        pheromones: &PheromoneField,
        start: Option<usize>,
        rng: &mut R,
    ) -> Ant {
        let n = distances.num_cities();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut weights = vec![0.0; n];

        let first = start.unwrap_or_else(|| rng.random_range(0..n));
        tour.push(first);
        visited[first] = true;

        let mut current = first;
        let mut length = 0.0;

        for _ in 1..n {
            let next = choose_next(current, &visited, &mut weights, distances, pheromones, rng);
            length += distances.get(current, next);
            tour.push(next);
            visited[next] = true;
            current = next;
        }

        length += distances.get(current, first);
        Ant { tour, length }
    }
}

/// Roulette selection over the unvisited cities.
///
/// Desirability of city `i` is `pheromone^ALPHA * (1/distance)^BETA`.
/// Cities at distance zero from the current one are excluded (they would
/// divide by zero) and stay reachable only through the uniform fallback.
fn choose_next<R: Rng>(
    current: usize,
    visited: &[bool],
    weights: &mut [f64],
    distances: &DistanceMatrix,
    pheromones: &PheromoneField,
    rng: &mut R,
) -> usize {
    let n = visited.len();
    let mut total = 0.0;

    for i in 0..n {
        weights[i] = 0.0;
        if visited[i] {
            continue;
        }
        let d = distances.get(current, i);
        if d > 0.0 {
            let w = pheromones.get(current, i).powf(ALPHA) * (1.0 / d).powf(BETA);
            if w.is_finite() {
                weights[i] = w;
                total += w;
            }
        }
    }

    if total <= 0.0 || !total.is_finite() {
        // Every desirability underflowed, or every candidate is coincident
        // with the current city: pick uniformly so construction never
        // stalls with unvisited cities remaining.
        let remaining = visited.iter().filter(|&&v| !v).count();
        let mut pick = rng.random_range(0..remaining);
        for (i, &v) in visited.iter().enumerate() {
            if !v {
                if pick == 0 {
                    return i;
                }
                pick -= 1;
            }
        }
        unreachable!("an unvisited city must remain");
    }

    let draw = rng.random_range(0.0..1.0);
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &w) in weights.iter().enumerate() {
        if w > 0.0 {
            cumulative += w / total;
            last = Some(i);
            if draw <= cumulative {
                return i;
            }
        }
    }
    // Rounding can leave the cumulative mass a hair under 1.0; the final
    // weighted candidate absorbs the remainder.
    last.expect("at least one weighted candidate")
}
