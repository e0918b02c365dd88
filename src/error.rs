//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced before any optimization work begins.
///
/// Inputs are validated up front, so a run either fails fast or completes;
/// the colony loop itself has no transient failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A parameter is outside its documented bounds.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An unrecognized distance metric tag.
    #[error("unrecognized distance metric tag: {0:?}")]
    InvalidMetric(String),

    /// Fewer than two cities were supplied; a tour is undefined.
    #[error("degenerate instance: need at least 2 cities, got {0}")]
    DegenerateInstance(usize),
}
