//! Distance model: metrics and the pairwise cost matrix.
//!
//! Turns an immutable coordinate list into the symmetric travel-cost matrix
//! the colony optimizes over. Three metrics are supported, matching the
//! TSPLIB `EDGE_WEIGHT_TYPE` tags produced by upstream input adapters:
//! planar Euclidean (`EUC_2D`), great-circle over degree coordinates
//! (`GEO`), and the rounded pseudo-Euclidean variant (`ATT`).

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{DistanceMetric, EARTH_RADIUS_KM};
