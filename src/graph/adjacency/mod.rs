//! A compact CSR (compressed sparse row) neighborhood index.
//!
//! Every row is sorted ascending and free of duplicates, so a row behaves as an
//! ordered set: intersections are sorted-set merges and membership is a binary
//! search.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `NodeId` neighbors for each row

use super::NodeId;

/// An undirected neighborhood index.
///
/// Built once from an edge list; immutable afterwards, so shared references can
/// be read from any number of threads.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_edges` | \(O(n + m \log d)\) | counting sort, then per-row sort + dedup |
/// | `neighbors` | \(O(1)\) | borrowed sorted slice |
/// | `degree` | \(O(1)\) | row length |
/// | `contains` | \(O(\log d)\) | binary search in the row |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyIndex {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl AdjacencyIndex {
    /// Builds the index from undirected edges.
    ///
    /// Each pair `(u, v)` inserts `v` into `N(u)` and `u` into `N(v)`. Repeated
    /// pairs collapse; a self-loop `(u, u)` puts `u` into `N(u)` once.
    ///
    /// # Panics
    ///
    /// Panics if any endpoint is `>= nodes`.
    pub fn from_edges<I>(nodes: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
        I::IntoIter: Clone,
    {
        let edges = edges.into_iter();

        let mut offsets = vec![0usize; nodes + 1];
        for (u, v) in edges.clone() {
            let (u, v) = (u as usize, v as usize);
            assert!(u < nodes && v < nodes, "edge ({u}, {v}) is out of bounds for n={nodes}");
            offsets[u + 1] += 1;
            if u != v {
                offsets[v + 1] += 1;
            }
        }
        for i in 1..=nodes {
            offsets[i] += offsets[i - 1];
        }

        let mut cursor = offsets[..nodes].to_vec();
        let mut targets: Vec<NodeId> = vec![0; offsets[nodes]];
        for (u, v) in edges {
            let slot = &mut cursor[u as usize];
            targets[*slot] = v;
            *slot += 1;
            if u != v {
                let slot = &mut cursor[v as usize];
                targets[*slot] = u;
                *slot += 1;
            }
        }
        drop(cursor);

        // Sort each row and compact duplicates towards the front. The write
        // head never passes the read head, so this is done in place.
        let mut write = 0usize;
        for node in 0..nodes {
            let (start, end) = (offsets[node], offsets[node + 1]);
            targets[start..end].sort_unstable();
            offsets[node] = write;
            let mut last = None;
            for read in start..end {
                let t = targets[read];
                if last != Some(t) {
                    targets[write] = t;
                    write += 1;
                    last = Some(t);
                }
            }
        }
        offsets[nodes] = write;
        targets.truncate(write);
        targets.shrink_to_fit();

        Self { offsets, targets }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of stored neighbor entries (each undirected edge counts twice,
    /// a self-loop once).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.targets.len()
    }

    /// The sorted neighbor set `N(node)`.
    ///
    /// # Panics
    ///
    /// Panics if `node >= node_count()`.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let node = node as usize;
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    /// `|N(node)|`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let node = node as usize;
        self.offsets[node + 1] - self.offsets[node]
    }

    /// Largest degree in the graph (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.offsets.windows(2).map(|w| w[1] - w[0]).max().unwrap_or(0)
    }

    /// `true` if `to ∈ N(from)`.
    #[inline]
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.neighbors(from).binary_search(&to).is_ok()
    }

    /// Checks the undirected invariant: `v ∈ N(u)` implies `u ∈ N(v)`.
    ///
    /// \(O(m \log d)\); intended for tests and debug assertions.
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count()).all(|u| {
            let u = u as NodeId;
            self.neighbors(u).iter().all(|&v| self.contains(v, u))
        })
    }
}
