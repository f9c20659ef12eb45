//! # `proximity` - Neighborhood Similarity Metrics for Large Static Graphs
//!
//! Computes set-intersection link-prediction scores (Common Neighbors, Jaccard,
//! Adamic-Adar, Local Path, ...) for every edge of a graph, and the
//! distribution of common-neighbor counts over every unordered node pair.
//!
//! ## Architecture
//!
//! 1. **Graph** ([`graph`]): a CSR [`AdjacencyIndex`] with sorted,
//!    duplicate-free rows, plus the [`EdgeList`] in input order. Built once,
//!    read-only afterwards.
//! 2. **Concurrency** ([`concurrency`]): an [`Executor`] cuts `[0, N)` into a
//!    fixed number of contiguous ranges plus a remainder and runs them on
//!    scoped threads (or sequentially, with identical results).
//! 3. **Metrics** ([`metrics`]): per-edge evaluators sharing one intersection
//!    per edge, the local-path pass, and the pairwise histogram, driven by a
//!    [`MetricsEngine`].
//! 4. **Output** ([`output`]) and **configuration** ([`config`]): text
//!    serialization and the dataset registry used by the `proximity` binary.
//!
//! ### Result ownership
//!
//! Per-edge results are written into a pre-sized `Vec` split into disjoint
//! `&mut` chunks, one per range: a slot is owned by exactly one worker, so no
//! lock is involved and output order equals input order. The pairwise
//! histogram is aggregated per worker and published with one atomic add per
//! bucket.
//!
//! ## Example
//!
//! ```rust
//! use proximity::{ExecutionMode, Executor, Graph, MetricsEngine};
//!
//! let graph = Graph::from_pairs(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
//! let engine = MetricsEngine::new(Executor::new(2, ExecutionMode::Threads)).quiet();
//!
//! let scores = engine.edge_scores(&graph);
//! assert_eq!(scores[0].cn, 1.0);
//! assert_eq!(scores[0].jc, 1.0 / 3.0);
//! assert_eq!(scores[3].pa, 3.0);
//!
//! let pairs = engine.pair_histogram(graph.adjacency());
//! assert_eq!(pairs.total(), 6);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod concurrency;
pub mod config;
pub mod error;
pub mod graph;
pub mod metrics;
pub mod output;

pub use concurrency::{CnHistogram, ExecutionMode, Executor, Progress};
pub use config::{DatasetRegistry, DatasetSpec, PathLayout};
pub use error::{ConfigError, Error, LoadError, MetricsError, Result};
pub use graph::{load_graph, read_graph, AdjacencyIndex, EdgeList, Graph, Header, NodeId};
pub use metrics::{EdgeScores, Metric, MetricsEngine};
pub use output::OutputLayout;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A score record is twelve plain f64 fields; m of them are allocated per pass.
    assert!(mem::size_of::<EdgeScores>() == 12 * mem::size_of::<f64>());

    // Node ids are what the CSR targets array stores.
    assert!(mem::size_of::<NodeId>() == 4);

    // The executor is passed by value into every engine.
    assert!(mem::size_of::<Executor>() <= 2 * mem::size_of::<usize>());
};
