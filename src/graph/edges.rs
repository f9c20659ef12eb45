//! Edge endpoints in input order.

use super::NodeId;

/// Two aligned endpoint columns; position `i` is the row of edge `i`.
///
/// Rows are neither deduplicated nor canonicalized: `(u, v)` and `(v, u)`
/// listed separately are two rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    sources: Vec<NodeId>,
    targets: Vec<NodeId>,
}

impl EdgeList {
    /// Creates an empty list with room for `capacity` rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sources: Vec::with_capacity(capacity),
            targets: Vec::with_capacity(capacity),
        }
    }

    /// Appends a row.
    #[inline]
    pub fn push(&mut self, u: NodeId, v: NodeId) {
        self.sources.push(u);
        self.targets.push(v);
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// `true` if there are no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Endpoints of row `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    #[inline]
    pub fn get(&self, position: usize) -> (NodeId, NodeId) {
        (self.sources[position], self.targets[position])
    }

    /// Iterates rows in input order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, NodeId)> + Clone + '_ {
        self.sources.iter().copied().zip(self.targets.iter().copied())
    }
}

impl FromIterator<(NodeId, NodeId)> for EdgeList {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        for (u, v) in iter {
            list.push(u, v);
        }
        list
    }
}
