//! Node identifier implementation for directed graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for vertex slots
//! within a [`DirectedGraph`](crate::DirectedGraph) or row indices within a
//! [`SlimDirectedGraphView`](crate::SlimDirectedGraphView).

use std::fmt;

/// A strongly-typed identifier for a vertex slot within a directed graph.
///
/// `NodeId` wraps a `usize` slot index. Slots are handed out sequentially from 0 when
/// vertices are first added; removing a vertex vacates its slot but never renumbers the
/// remaining vertices, so a `NodeId` stays valid for as long as its vertex is in the graph
/// and the graph is not [compacted](crate::DirectedGraph::compact).
///
/// # Usage
///
/// Node IDs are returned by [`DirectedGraph::add_vertex`](crate::DirectedGraph::add_vertex)
/// and [`DirectedGraph::node_id`](crate::DirectedGraph::node_id). They are the currency of
/// the generic algorithms in [`algorithms`](crate::graph::algorithms), which are written
/// against the [`Successors`](crate::graph::Successors) and
/// [`Predecessors`](crate::graph::Predecessors) traits rather than vertex identities.
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a: NodeId = graph.add_vertex("A");
/// let b: NodeId = graph.add_vertex("B");
///
/// assert_ne!(a, b);
/// assert_eq!(graph.add_vertex("A"), a); // idempotent
/// assert_eq!(graph.vertex(b), Some(&"B"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    ///
    /// Primarily intended for tests and for graph implementations outside this crate;
    /// a hand-made id may not correspond to a live vertex.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index, usable for indexing dense per-node tables sized by
    /// [`GraphBase::node_bound`](crate::graph::GraphBase::node_bound).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Compact form, also used as the node name in DOT output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrip_index() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);
        let raw: usize = node.into();
        assert_eq!(NodeId::from(raw), node);
    }

    #[test]
    fn test_node_id_ordering_follows_slots() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_hash_dedup() {
        let set: HashSet<NodeId> = [1, 2, 1].into_iter().map(NodeId::new).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        assert_eq!(format!("{:?}", NodeId::new(7)), "NodeId(7)");
        assert_eq!(format!("{}", NodeId::new(7)), "n7");
    }
}
