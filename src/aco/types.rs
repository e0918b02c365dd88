//! Per-generation ant state.

/// One ant's completed tour and its accumulated length.
///
/// Ants are ephemeral: each generation constructs one per ant slot,
/// compares them against the best-so-far, feeds them to the pheromone
/// update, and drops them.
#[derive(Debug, Clone)]
pub struct Ant {
    /// Visiting order, a permutation of `0..n`. Implicitly closed: the
    /// last city connects back to the first.
    pub tour: Vec<usize>,

    /// Total tour length, closing edge included.
    pub length: f64,
}
