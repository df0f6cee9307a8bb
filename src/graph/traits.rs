//! Trait definitions for graph abstractions.
//!
//! The generic algorithms in [`algorithms`](crate::graph::algorithms) never touch a concrete
//! graph type. They are written against the small capability traits below, so the same
//! traversal code runs over a mutable [`DirectedGraph`](crate::DirectedGraph), a frozen
//! [`SlimDirectedGraphView`](crate::SlimDirectedGraphView), or any caller-defined adjacency
//! structure.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count, slot bound and node iteration
//! - [`Successors`] - Forward adjacency (children, "with the flow")
//! - [`Predecessors`] - Backward adjacency (parents, "against the flow")
//! - [`EdgeWeights`] - Weighted adjacency for shortest/longest path computation
//! - [`Direction`] - Selects forward or backward adjacency at runtime
//!
//! # Design Principles
//!
//! ## Iterator-Based Traversal
//!
//! Adjacency queries return iterators rather than collections, so simple traversals never
//! allocate per visited node.
//!
//! ## Sparse Slots
//!
//! Node slots may be vacated by vertex removal. [`GraphBase::node_bound`] therefore reports
//! the size dense per-node tables must have, which can exceed [`GraphBase::node_count`].

use strum::{Display, EnumIter};

use crate::graph::NodeId;

/// Which adjacency a traversal follows.
///
/// Edges point from parent to child (for an ontology: from the more general term to the
/// more specific one). `Forward` walks towards descendants, `Backward` towards ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    /// Follow outgoing edges, visiting children and descendants.
    #[strum(serialize = "forward")]
    Forward,
    /// Follow incoming edges, visiting parents and ancestors.
    #[strum(serialize = "backward")]
    Backward,
}

impl Direction {
    /// Maps the `against_flow` flag used by the path algorithms onto a direction.
    #[must_use]
    pub const fn from_against_flow(against_flow: bool) -> Self {
        if against_flow {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// Base trait providing core graph properties.
///
/// # Required Methods
///
/// - [`node_count`](GraphBase::node_count) - Number of live nodes
/// - [`node_bound`](GraphBase::node_bound) - Upper bound (exclusive) of node indices
/// - [`node_ids`](GraphBase::node_ids) - Iterator over the live node ids
pub trait GraphBase {
    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns one past the largest node index the graph has ever handed out.
    ///
    /// Every live [`NodeId`] satisfies `id.index() < node_bound()`. Algorithms size their
    /// dense per-node tables with this value. For graphs without vacated slots it equals
    /// [`node_count`](GraphBase::node_count).
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node identifiers, in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` refers to a live node.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// For a directed edge `(u, v)`, node `v` is a successor of `u`.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// The order is the insertion order of the node's outgoing edges. The graphs in this
    /// crate yield nothing for a vacant or out-of-range `node`.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
///
/// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// The order is the insertion order of the node's incoming edges. The graphs in this
    /// crate yield nothing for a vacant or out-of-range `node`.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Direction-selected adjacency for graphs with both edge directions.
///
/// Blanket-implemented for every `Successors + Predecessors` graph.
pub trait Neighbours: Successors + Predecessors {
    /// Returns the successors (`Forward`) or predecessors (`Backward`) of `node`.
    fn neighbours(&self, node: NodeId, direction: Direction) -> impl Iterator<Item = NodeId> {
        match direction {
            Direction::Forward => Either::Left(self.successors(node)),
            Direction::Backward => Either::Right(self.predecessors(node)),
        }
    }
}

impl<G: Successors + Predecessors> Neighbours for G {}

/// Trait for graphs whose edges carry integer weights.
///
/// Used by [`dijkstra`](crate::graph::algorithms::dijkstra) and
/// [`bellman_ford`](crate::graph::algorithms::bellman_ford).
pub trait EdgeWeights: Successors + Predecessors {
    /// Returns `(successor, weight)` for every outgoing edge of `node`.
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)>;

    /// Returns `(predecessor, weight)` for every incoming edge of `node`.
    fn weighted_predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)>;

    /// Returns weighted neighbours in the given direction.
    fn weighted_neighbours(
        &self,
        node: NodeId,
        direction: Direction,
    ) -> impl Iterator<Item = (NodeId, i64)> {
        match direction {
            Direction::Forward => Either::Left(self.weighted_successors(node)),
            Direction::Backward => Either::Right(self.weighted_predecessors(node)),
        }
    }
}

/// Two-way iterator sum used to return either adjacency from one method.
pub(crate) enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<T, L, R> Iterator for Either<L, R>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Either::Left(it) => it.next(),
            Either::Right(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Either::Left(it) => it.size_hint(),
            Either::Right(it) => it.size_hint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    // A minimal edge-list graph for trait testing
    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, i64)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_bound(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }

        fn contains_node(&self, node: NodeId) -> bool {
            node.index() < self.node_count
        }
    }

    impl Successors for TestGraph {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.weighted_successors(node).map(|(n, _)| n)
        }
    }

    impl Predecessors for TestGraph {
        fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.weighted_predecessors(node).map(|(n, _)| n)
        }
    }

    impl EdgeWeights for TestGraph {
        fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)> {
            self.edges
                .iter()
                .filter(move |(src, _, _)| *src == node)
                .map(|&(_, dst, w)| (dst, w))
        }

        fn weighted_predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)> {
            self.edges
                .iter()
                .filter(move |(_, dst, _)| *dst == node)
                .map(|&(src, _, w)| (src, w))
        }
    }

    fn fixture() -> TestGraph {
        TestGraph {
            node_count: 3,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 4),
                (NodeId::new(0), NodeId::new(2), 7),
                (NodeId::new(1), NodeId::new(2), 1),
            ],
        }
    }

    #[test]
    fn test_neighbours_by_direction() {
        let graph = fixture();
        let fwd: Vec<_> = graph.neighbours(NodeId::new(0), Direction::Forward).collect();
        assert_eq!(fwd, vec![NodeId::new(1), NodeId::new(2)]);

        let bwd: Vec<_> = graph.neighbours(NodeId::new(2), Direction::Backward).collect();
        assert_eq!(bwd, vec![NodeId::new(0), NodeId::new(1)]);
    }

    #[test]
    fn test_weighted_neighbours() {
        let graph = fixture();
        let fwd: Vec<_> = graph
            .weighted_neighbours(NodeId::new(1), Direction::Forward)
            .collect();
        assert_eq!(fwd, vec![(NodeId::new(2), 1)]);

        let bwd: Vec<_> = graph
            .weighted_neighbours(NodeId::new(2), Direction::Backward)
            .collect();
        assert_eq!(bwd, vec![(NodeId::new(0), 7), (NodeId::new(1), 1)]);
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::from_against_flow(true), Direction::Backward);
        assert_eq!(Direction::from_against_flow(false), Direction::Forward);
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::iter().count(), 2);
    }
}
