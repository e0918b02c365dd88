//! Symmetric pairwise distance matrix.

use crate::error::Error;

use super::metric::DistanceMetric;

/// Immutable `n × n` symmetric travel-cost matrix with a zero diagonal.
///
/// Built once per run from the coordinate list; flat row-major storage.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix in one pass over unordered city pairs.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateInstance`] when fewer than two coordinates are
    /// supplied.
    pub fn build(coords: &[(f64, f64)], metric: DistanceMetric) -> Result<Self, Error> {
        let n = coords.len();
        if n < 2 {
            return Err(Error::DegenerateInstance(n));
        }

        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(coords[i], coords[j]);
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }
        Ok(Self { n, cells })
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.n
    }

    /// Travel cost between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.n + j]
    }
}
