//! Static graph model: the adjacency index, the ordered edge list, and the
//! sorted-set kernels every metric is built on.
//!
//! - `adjacency`: CSR neighborhood index with sorted, duplicate-free rows
//! - `edges`: endpoint pairs in input order (the join key for output rows)
//! - `intersect`: merge / galloping intersection of sorted neighbor slices
//! - `loader`: plain-text edge-list reader

pub mod adjacency;
pub mod edges;
pub mod intersect;
pub mod loader;

pub use adjacency::AdjacencyIndex;
pub use edges::EdgeList;
pub use loader::{load_graph, read_graph, Header};

/// Dense node identifier in `[0, n)`.
///
/// `u32` covers every graph the tool targets (a few million nodes) and halves
/// the adjacency footprint compared to `usize`.
pub type NodeId = u32;

/// An immutable graph: neighborhood index plus the edge rows to score.
///
/// Both parts are built once by the loader and only read afterwards, which is
/// what lets every metric pass share them across threads without locking.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: AdjacencyIndex,
    edges: EdgeList,
}

impl Graph {
    /// Builds the adjacency index for `nodes` nodes from `edges`.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is `>= nodes`.
    pub fn new(nodes: usize, edges: EdgeList) -> Self {
        let adjacency = AdjacencyIndex::from_edges(nodes, edges.iter());
        Self { adjacency, edges }
    }

    /// Convenience constructor from `(u, v)` pairs.
    pub fn from_pairs(nodes: usize, pairs: &[(NodeId, NodeId)]) -> Self {
        Self::new(nodes, pairs.iter().copied().collect())
    }

    /// The neighborhood index.
    #[inline]
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// The edge rows in input order.
    #[inline]
    pub fn edges(&self) -> &EdgeList {
        &self.edges
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// Number of edge rows (duplicates included).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
