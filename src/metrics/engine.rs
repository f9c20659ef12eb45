//! Pass orchestration over a loaded graph.

use tracing::info;

use super::edge::score_edge;
use super::local_path::{local_path_score, path_count};
use super::{pairwise, EdgeScores, Metric};
use crate::concurrency::{CnHistogram, Executor, Progress};
use crate::error::MetricsError;
use crate::graph::intersect::count_common;
use crate::graph::{AdjacencyIndex, Graph};

/// Runs metric passes with one [`Executor`].
///
/// Every pass allocates its output up front, fills it through the executor and
/// returns it whole; nothing is shared between passes except the read-only
/// graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEngine {
    executor: Executor,
    quiet: bool,
}

impl MetricsEngine {
    /// Creates an engine that reports progress through `tracing`.
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            quiet: false,
        }
    }

    /// Disables progress events (pass results are unaffected).
    #[must_use]
    pub fn quiet(self) -> Self {
        Self { quiet: true, ..self }
    }

    /// The executor used for every pass.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    fn progress(&self, label: &'static str, total: usize) -> Progress {
        if self.quiet {
            Progress::silent(label, total as u64)
        } else {
            Progress::new(label, total as u64)
        }
    }

    /// All twelve per-edge scores, one record per edge in input order.
    pub fn edge_scores(&self, graph: &Graph) -> Vec<EdgeScores> {
        let adjacency = graph.adjacency();
        let edges = graph.edges();
        let progress = self.progress("edge-scores", edges.len());
        info!(edges = edges.len(), workers = self.executor.workers(), "per-edge pass");

        let mut scores = vec![EdgeScores::default(); edges.len()];
        self.executor.fill(&mut scores, |i, slot| {
            let (u, v) = edges.get(i);
            *slot = score_edge(adjacency, u, v);
            progress.tick();
        });

        progress.finish();
        scores
    }

    /// Common-neighbor counts only, one per edge in input order.
    pub fn common_neighbors(&self, graph: &Graph) -> Vec<f64> {
        let adjacency = graph.adjacency();
        let edges = graph.edges();
        let progress = self.progress("common-neighbors", edges.len());
        info!(edges = edges.len(), workers = self.executor.workers(), "common-neighbor pass");

        let mut cn = vec![0.0; edges.len()];
        self.executor.fill(&mut cn, |i, slot| {
            let (u, v) = edges.get(i);
            *slot = count_common(adjacency.neighbors(u), adjacency.neighbors(v)) as f64;
            progress.tick();
        });

        progress.finish();
        cn
    }

    /// Local-path index per edge, reusing a common-neighbor column.
    ///
    /// # Errors
    ///
    /// [`MetricsError::ColumnLength`] if `cn` does not hold one value per edge.
    pub fn local_path(&self, graph: &Graph, cn: &[f64]) -> Result<Vec<f64>, MetricsError> {
        let adjacency = graph.adjacency();
        let edges = graph.edges();
        if cn.len() != edges.len() {
            return Err(MetricsError::ColumnLength {
                metric: Metric::CommonNeighbors.suffix(),
                expected: edges.len(),
                actual: cn.len(),
            });
        }

        let progress = self.progress("local-path", edges.len());
        info!(edges = edges.len(), workers = self.executor.workers(), "local-path pass");

        let mut lp = vec![0.0; edges.len()];
        self.executor.fill(&mut lp, |i, slot| {
            let (u, v) = edges.get(i);
            *slot = local_path_score(cn[i], path_count(adjacency, u, v));
            progress.tick();
        });

        progress.finish();
        Ok(lp)
    }

    /// Histogram of common-neighbor counts over every unordered node pair.
    pub fn pair_histogram(&self, adjacency: &AdjacencyIndex) -> CnHistogram {
        let n = adjacency.node_count();
        let progress = self.progress("cn-pairs", n.saturating_sub(1));
        info!(nodes = n, workers = self.executor.workers(), "pairwise pass");

        let histogram = pairwise::pair_histogram(adjacency, &self.executor, &progress);

        progress.finish();
        histogram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::ExecutionMode;

    fn engine() -> MetricsEngine {
        MetricsEngine::new(Executor::new(3, ExecutionMode::Threads)).quiet()
    }

    fn triangle_with_tail() -> Graph {
        Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 0), (2, 3)])
    }

    #[test]
    fn edge_scores_follow_input_order() {
        let graph = triangle_with_tail();
        let scores = engine().edge_scores(&graph);

        assert_eq!(scores.len(), 4);
        let cn: Vec<f64> = scores.iter().map(|s| s.cn).collect();
        assert_eq!(cn, vec![1.0, 1.0, 1.0, 0.0]);
        let pa: Vec<f64> = scores.iter().map(|s| s.pa).collect();
        assert_eq!(pa, vec![4.0, 6.0, 6.0, 3.0]);
    }

    #[test]
    fn common_neighbors_matches_edge_scores() {
        let graph = triangle_with_tail();
        let engine = engine();
        let full: Vec<f64> = engine.edge_scores(&graph).iter().map(|s| s.cn).collect();
        assert_eq!(engine.common_neighbors(&graph), full);
    }

    #[test]
    fn local_path_reuses_cn() {
        let graph = triangle_with_tail();
        let engine = engine();
        let cn = engine.common_neighbors(&graph);
        let lp = engine.local_path(&graph, &cn).unwrap();

        assert_eq!(lp.len(), 4);
        // edge (0, 1): cn = 1, three paths
        assert!((lp[0] - 2.003).abs() < 1e-12);
        // edge (2, 3): cn = 0, three paths
        assert!((lp[3] - 1.003).abs() < 1e-12);
    }

    #[test]
    fn local_path_rejects_misaligned_cn() {
        let graph = triangle_with_tail();
        let err = engine().local_path(&graph, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::ColumnLength { expected: 4, actual: 1, .. }
        ));
    }

    #[test]
    fn empty_edge_list() {
        let graph = Graph::from_pairs(1, &[]);
        let engine = engine();
        assert!(engine.edge_scores(&graph).is_empty());
        assert!(engine.local_path(&graph, &[]).unwrap().is_empty());
        assert!(engine.pair_histogram(graph.adjacency()).is_empty());
    }
}
