//! Pheromone trail matrix and the per-generation update rule.

use super::config::Q;
use super::types::Ant;

/// Symmetric matrix of trail intensities, one cell per city pair.
///
/// Initialized uniformly to 1.0 and rewritten once per generation:
/// evaporation first, then deposition from every complete tour. Cells stay
/// finite and non-negative for the whole run.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    cells: Vec<f64>,
}

impl PheromoneField {
    /// Creates a uniform field over `n` cities.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![1.0; n * n],
        }
    }

    /// Trail intensity between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }

    /// Applies one generation's update: every trail evaporates by
    /// `(1 - rho)`, then each ant deposits `Q / length` on every edge it
    /// traversed, in both directions.
    ///
    /// Deposition covers the explicitly walked consecutive pairs only; the
    /// implicit closing edge back to the start receives nothing. Ants with
    /// a zero-length or incomplete tour are skipped.
    pub fn update(&mut self, ants: &[Ant], rho: f64) {
        for cell in &mut self.cells {
            *cell *= 1.0 - rho;
        }

        for ant in ants {
            if ant.length <= 0.0 || ant.tour.len() < self.n {
                continue;
            }
            let deposit = Q / ant.length;
            for pair in ant.tour.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                self.cells[a * self.n + b] += deposit;
                self.cells[b * self.n + a] += deposit;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_uniform() {
        let field = PheromoneField::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(field.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_update_evaporates_all_cells() {
        let mut field = PheromoneField::new(3);
        field.update(&[], 0.3);
        for i in 0..3 {
            for j in 0..3 {
                assert!((field.get(i, j) - 0.7).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_update_deposits_symmetrically() {
        let mut field = PheromoneField::new(3);
        let ant = Ant {
            tour: vec![0, 1, 2],
            length: 50.0,
        };
        field.update(&[ant], 0.5);

        // Evaporated base is 0.5; walked edges gain Q / 50 = 2.0.
        assert!((field.get(0, 1) - 2.5).abs() < 1e-12);
        assert!((field.get(1, 0) - 2.5).abs() < 1e-12);
        assert!((field.get(1, 2) - 2.5).abs() < 1e-12);
        assert!((field.get(2, 1) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_update_skips_closing_edge() {
        let mut field = PheromoneField::new(3);
        let ant = Ant {
            tour: vec![0, 1, 2],
            length: 50.0,
        };
        field.update(&[ant], 0.5);

        // The edge from the last city back to the start only evaporates.
        assert!((field.get(2, 0) - 0.5).abs() < 1e-12);
        assert!((field.get(0, 2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_update_skips_zero_length_ant() {
        let mut field = PheromoneField::new(3);
        let ant = Ant {
            tour: vec![0, 1, 2],
            length: 0.0,
        };
        field.update(&[ant], 0.5);
        for i in 0..3 {
            for j in 0..3 {
                assert!((field.get(i, j) - 0.5).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_update_skips_incomplete_tour() {
        let mut field = PheromoneField::new(3);
        let ant = Ant {
            tour: vec![0, 1],
            length: 10.0,
        };
        field.update(&[ant], 0.5);
        assert!((field.get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_update_accumulates_across_ants() {
        let mut field = PheromoneField::new(3);
        let ants = vec![
            Ant {
                tour: vec![0, 1, 2],
                length: 100.0,
            },
            Ant {
                tour: vec![2, 1, 0],
                length: 100.0,
            },
        ];
        field.update(&ants, 1.0);

        // Full evaporation, then both ants deposit 1.0 on each direction
        // of the edges they share.
        assert!((field.get(0, 1) - 2.0).abs() < 1e-12);
        assert!((field.get(1, 2) - 2.0).abs() < 1e-12);
        assert!((field.get(0, 2) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_cells_stay_positive_under_partial_evaporation() {
        let mut field = PheromoneField::new(4);
        let ant = Ant {
            tour: vec![0, 1, 2, 3],
            length: 10.0,
        };
        for _ in 0..200 {
            field.update(&[ant.clone()], 0.9);
        }
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert!(field.get(i, j) >= 0.0);
                    assert!(field.get(i, j).is_finite());
                }
            }
        }
        // Walked edges keep strictly positive trail while rho < 1.
        assert!(field.get(0, 1) > 0.0);
        assert!(field.get(2, 3) > 0.0);
    }
}
