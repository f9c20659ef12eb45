//! All-pairs common-neighbor histogram.
//!
//! The pass is partitioned over the first node `i` of each pair `(i, j)`,
//! `i < j`; every range tallies `|N(i) ∩ N(j)|` for its rows into a
//! [`LocalHistogram`] and publishes it once. Rows with small `i` hold more
//! pairs, so the ranges are uneven in cost but not in correctness.

use crate::concurrency::{AtomicHistogram, CnHistogram, Executor, LocalHistogram, Progress};
use crate::graph::intersect::count_common;
use crate::graph::{AdjacencyIndex, NodeId};

/// Counts, for every unordered pair of distinct nodes, its common neighbors,
/// and returns how many pairs share each count.
///
/// The histogram total is always `n(n-1)/2`. `progress` is ticked once per
/// row `i`.
pub fn pair_histogram(
    adjacency: &AdjacencyIndex,
    exec: &Executor,
    progress: &Progress,
) -> CnHistogram {
    let n = adjacency.node_count();
    let max_key = adjacency.max_degree();
    let shared = AtomicHistogram::new(max_key);

    // the last row has no partner
    exec.for_each_range(n.saturating_sub(1), |rows| {
        let mut local = LocalHistogram::with_max_key(max_key);
        for i in rows {
            tally_row(adjacency, i, &mut local);
            progress.tick();
        }
        shared.merge(&local);
    });

    shared.snapshot()
}

/// Tallies the pairs `(i, j)` for every `j > i`.
fn tally_row(adjacency: &AdjacencyIndex, i: usize, local: &mut LocalHistogram) {
    let n = adjacency.node_count();
    let row = adjacency.neighbors(i as NodeId);
    if row.is_empty() {
        local.add(0, (n - 1 - i) as u64);
        return;
    }
    for j in i + 1..n {
        local.increment(count_common(row, adjacency.neighbors(j as NodeId)));
    }
}
