//! Local-path index: common neighbors plus a damped count of length-3 paths.

use super::edge::cross_counts;
use crate::graph::{AdjacencyIndex, NodeId};

/// Weight of the second-order path term.
pub const LOCAL_PATH_EPSILON: f64 = 0.001;

/// `1 + cn + ε·paths`.
#[inline]
pub fn local_path_score(cn: f64, paths: u64) -> f64 {
    1.0 + cn + LOCAL_PATH_EPSILON * paths as f64
}

/// Number of pairs `(x, y) ∈ N(u) × N(v)` with `x ≠ y` and `y ∈ N(x)`.
pub fn path_count(adjacency: &AdjacencyIndex, u: NodeId, v: NodeId) -> u64 {
    cross_counts(adjacency, adjacency.neighbors(u), adjacency.neighbors(v)).paths
}
