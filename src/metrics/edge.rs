//! Per-edge evaluator: the twelve scores of one `(u, v)` row from a single
//! intersection.

use super::EdgeScores;
use crate::graph::intersect::{count_common, for_each_common};
use crate::graph::{AdjacencyIndex, NodeId};

/// Scores the pair `(u, v)`.
///
/// Cost is \(O(du + dv)\) for the intersection plus the cross term of
/// [`cross_counts`], which dominates on high-degree pairs.
///
/// # Panics
///
/// Panics if `u` or `v` is not a node of `adjacency`.
pub fn score_edge(adjacency: &AdjacencyIndex, u: NodeId, v: NodeId) -> EdgeScores {
    let nu = adjacency.neighbors(u);
    let nv = adjacency.neighbors(v);
    let du = nu.len() as f64;
    let dv = nv.len() as f64;

    let mut common = 0usize;
    let mut aa = 0.0;
    let mut ra = 0.0;
    for_each_common(nu, nv, |x| {
        common += 1;
        let dx = adjacency.degree(x) as f64;
        aa += 1.0 / dx.ln();
        ra += 1.0 / dx;
    });
    let cn = common as f64;

    let cross = cross_counts(adjacency, nu, nv);

    EdgeScores {
        cn,
        sa: cn / (du * dv).sqrt(),
        jc: cn / (du + dv - cn),
        hp: cn / du.min(dv),
        hd: cn / du.max(dv),
        si: cn / (du + dv),
        li: cn / (du * dv),
        aa,
        ra,
        pa: du * dv,
        fm: cross.friends as f64,
        dl: du + dv - 2.0,
    }
}

/// Pair counts over the cross product `N(u) × N(v)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossCounts {
    /// `#{(x, y) : x = y ∨ y ∈ N(x)}` (Friends-Measure).
    pub friends: u64,
    /// `#{(x, y) : x ≠ y ∧ y ∈ N(x)}` (local-path second-order term).
    pub paths: u64,
}

/// Counts the cross-product pairs of `nu × nv` that are linked.
///
/// Instead of probing `y ∈ N(x)` for each of the `du·dv` pairs, each `x ∈ nu`
/// contributes `|nv ∩ N(x)|`, corrected for the `x = y` pair: it is added for
/// `friends` when `x ∈ nv` but `x ∉ N(x)`, and removed for `paths` when
/// `x ∈ nv` and `x ∈ N(x)` (a self-loop on `x`).
pub fn cross_counts(adjacency: &AdjacencyIndex, nu: &[NodeId], nv: &[NodeId]) -> CrossCounts {
    let mut counts = CrossCounts::default();
    for &x in nu {
        let linked = count_common(nv, adjacency.neighbors(x)) as u64;
        let x_in_nv = nv.binary_search(&x).is_ok();
        let self_loop = x_in_nv && adjacency.contains(x, x);
        counts.friends += linked + u64::from(x_in_nv && !self_loop);
        counts.paths += linked - u64::from(self_loop);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct pair enumeration, as the formulas are written.
    fn brute_cross(adjacency: &AdjacencyIndex, u: NodeId, v: NodeId) -> CrossCounts {
        let mut counts = CrossCounts::default();
        for &x in adjacency.neighbors(u) {
            for &y in adjacency.neighbors(v) {
                let linked = adjacency.contains(x, y);
                if x == y || linked {
                    counts.friends += 1;
                }
                if x != y && linked {
                    counts.paths += 1;
                }
            }
        }
        counts
    }

    fn triangle_with_tail() -> AdjacencyIndex {
        AdjacencyIndex::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn triangle_edge_scores() {
        let adj = triangle_with_tail();
        let s = score_edge(&adj, 0, 1);

        assert_eq!(s.cn, 1.0);
        assert_eq!(s.jc, 1.0 / 3.0);
        assert_eq!(s.pa, 4.0);
        assert_eq!(s.sa, 0.5);
        assert_eq!(s.hp, 0.5);
        assert_eq!(s.hd, 0.5);
        assert_eq!(s.si, 0.25);
        assert_eq!(s.li, 0.25);
        assert_eq!(s.dl, 2.0);
        // common neighbor 2 has degree 3
        assert_eq!(s.aa, 1.0 / 3f64.ln());
        assert_eq!(s.ra, 1.0 / 3.0);
        // N(0) = {1, 2}, N(1) = {0, 2}: (1,0) linked, (1,2) linked, (2,0) linked, (2,2) equal
        assert_eq!(s.fm, 4.0);
    }

    #[test]
    fn tail_edge_scores() {
        let adj = triangle_with_tail();
        let s = score_edge(&adj, 2, 3);

        assert_eq!(s.cn, 0.0);
        assert_eq!(s.jc, 0.0);
        assert_eq!(s.pa, 3.0);
        assert_eq!(s.aa, 0.0);
        assert_eq!(s.ra, 0.0);
        assert_eq!(s.dl, 2.0);
    }

    #[test]
    fn isolated_endpoint_yields_nan() {
        let adj = AdjacencyIndex::from_edges(3, [(0, 1)]);
        let s = score_edge(&adj, 0, 2);

        assert_eq!(s.cn, 0.0);
        assert!(s.sa.is_nan());
        assert_eq!(s.jc, 0.0);
        assert!(s.hp.is_nan());
        assert_eq!(s.hd, 0.0);
        assert!(s.li.is_nan());
        assert_eq!(s.pa, 0.0);
        assert_eq!(s.dl, -1.0);

        let both = score_edge(&adj, 2, 2);
        assert!(both.jc.is_nan());
        assert!(both.si.is_nan());
    }

    #[test]
    fn degree_one_common_neighbor_is_infinite_adamic_adar() {
        // self-loop row (0, 0); node 1 only touches 0
        let adj = AdjacencyIndex::from_edges(2, [(0, 1), (0, 0)]);
        let s = score_edge(&adj, 0, 0);

        assert_eq!(s.cn, 2.0);
        assert_eq!(s.aa, f64::INFINITY);
        assert_eq!(s.ra, 1.0 + 0.5);
    }

    #[test]
    fn cross_counts_match_pair_enumeration() {
        let adj = AdjacencyIndex::from_edges(
            7,
            [
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 2),
                (1, 4),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 5),
                (5, 1),
                (6, 0),
                (6, 6),
            ],
        );
        for u in 0..7 {
            for v in 0..7 {
                assert_eq!(
                    cross_counts(&adj, adj.neighbors(u), adj.neighbors(v)),
                    brute_cross(&adj, u, v),
                    "pair ({u}, {v})"
                );
            }
        }
    }
}
