//! Graph traversal algorithms.
//!
//! This module provides breadth-first and depth-first traversal in either edge direction.
//! These are the building blocks for reachability queries, ancestor/descendant closures
//! and the induced-subgraph operations.
//!
//! # Algorithms
//!
//! - [`bfs`] / [`bfs_by`] - Multi-source breadth-first search
//! - [`dfs`] / [`dfs_by`] - Iterative depth-first search (pre-order)
//! - [`bfs_visit`] / [`bfs_visit_by`] / [`dfs_visit`] - Visitor-driven traversal with early
//!   termination
//! - [`exists_path`] - Directed reachability test
//! - [`reachable`] - All vertices reachable from a start, start included
//!
//! # Neighbour Functions
//!
//! The `_by` variants take the adjacency as a closure instead of a graph. This is how the
//! subgraph operations traverse a graph while pretending an edge is absent, and how the
//! slim view reuses the same iterators over its index tables.
//!
//! # Iteration vs Collection
//!
//! The iterators are lazy, so a traversal that stops early never touches the rest of the
//! graph. Visited state is a [`BitSet`] sized by [`GraphBase::node_bound`]; neighbour ids at
//! or beyond that bound are ignored.

use std::collections::VecDeque;

use crate::{
    graph::{Direction, GraphBase, Neighbours, NodeId},
    utils::BitSet,
};

/// Breadth-first search iterator driven by a neighbour function.
///
/// Yields every vertex reachable from the start set exactly once, start vertices first
/// (in the order given, duplicates dropped), then by increasing distance. Within one
/// distance level vertices appear in the order their discovering edge was listed.
pub struct BfsIterator<F> {
    neighbours: F,
    queue: VecDeque<NodeId>,
    visited: BitSet,
}

impl<F, I> Iterator for BfsIterator<F>
where
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;

        for next in (self.neighbours)(node) {
            if next.index() < self.visited.capacity() && self.visited.insert(next.index()) {
                self.queue.push_back(next);
            }
        }

        Some(node)
    }
}

/// Returns a breadth-first iterator over an adjacency given as a closure.
///
/// # Arguments
///
/// * `bound` - Exclusive upper bound of node indices (sizes the visited set)
/// * `starts` - Start vertices; indices at or above `bound` are dropped
/// * `neighbours` - Returns the vertices adjacent to a given vertex
pub fn bfs_by<S, F, I>(bound: usize, starts: S, neighbours: F) -> BfsIterator<F>
where
    S: IntoIterator<Item = NodeId>,
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    let mut visited = BitSet::new(bound);
    let mut queue = VecDeque::new();
    for start in starts {
        if start.index() < bound && visited.insert(start.index()) {
            queue.push_back(start);
        }
    }

    BfsIterator {
        neighbours,
        queue,
        visited,
    }
}

/// Returns a breadth-first iterator from a set of start nodes.
///
/// Start nodes that are not live in `graph` are ignored.
///
/// # Complexity
///
/// - Time: O(V + E) for a full traversal
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms, DirectedGraph, Direction, Edge};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(Edge::new("A", "B"))?;
/// graph.add_edge(Edge::new("B", "C"))?;
///
/// let order: Vec<_> = algorithms::bfs(&graph, [c], Direction::Backward).collect();
/// assert_eq!(order, vec![c, b, a]);
/// # Ok::<(), ontograph::Error>(())
/// ```
pub fn bfs<'g, G, S>(
    graph: &'g G,
    starts: S,
    direction: Direction,
) -> impl Iterator<Item = NodeId> + 'g
where
    G: Neighbours,
    S: IntoIterator<Item = NodeId>,
{
    let starts: Vec<NodeId> = starts
        .into_iter()
        .filter(|&s| graph.contains_node(s))
        .collect();
    bfs_by(graph.node_bound(), starts, move |node| {
        graph.neighbours(node, direction)
    })
}

/// Runs a breadth-first search, calling `visitor` for each discovered vertex.
///
/// Returning `false` from the visitor stops the traversal immediately; no further
/// vertices are reported.
pub fn bfs_visit<G, S, F>(graph: &G, starts: S, direction: Direction, mut visitor: F)
where
    G: Neighbours,
    S: IntoIterator<Item = NodeId>,
    F: FnMut(NodeId) -> bool,
{
    for node in bfs(graph, starts, direction) {
        if !visitor(node) {
            break;
        }
    }
}

/// Runs a breadth-first search over a closure adjacency, calling `visitor` for each
/// discovered vertex until it returns `false`.
pub fn bfs_visit_by<S, F, I, Vis>(bound: usize, starts: S, neighbours: F, mut visitor: Vis)
where
    S: IntoIterator<Item = NodeId>,
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
    Vis: FnMut(NodeId) -> bool,
{
    for node in bfs_by(bound, starts, neighbours) {
        if !visitor(node) {
            break;
        }
    }
}

/// Depth-first search iterator driven by a neighbour function.
///
/// Visits in pre-order: a vertex is yielded before any vertex first discovered through
/// it, and neighbours are explored in the order the neighbour function lists them.
pub struct DfsIterator<F> {
    neighbours: F,
    stack: Vec<NodeId>,
    visited: BitSet,
}

impl<F, I> Iterator for DfsIterator<F>
where
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            if !self.visited.insert(node.index()) {
                continue;
            }

            // Reverse so the first neighbour is popped first
            let pending: Vec<NodeId> = (self.neighbours)(node)
                .into_iter()
                .filter(|n| n.index() < self.visited.capacity() && !self.visited.contains(n.index()))
                .collect();
            self.stack.extend(pending.into_iter().rev());

            return Some(node);
        }
    }
}

/// Returns a depth-first iterator over an adjacency given as a closure.
///
/// An out-of-range `start` yields nothing.
pub fn dfs_by<F, I>(bound: usize, start: NodeId, neighbours: F) -> DfsIterator<F>
where
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    let stack = if start.index() < bound {
        vec![start]
    } else {
        Vec::new()
    };

    DfsIterator {
        neighbours,
        stack,
        visited: BitSet::new(bound),
    }
}

/// Returns a depth-first iterator starting from the given node.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) in the worst case, since a vertex may sit on the stack once per
///   discovering edge
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms, DirectedGraph, Direction, Edge};
///
/// let mut graph: DirectedGraph<char> = DirectedGraph::new();
/// let a = graph.add_vertex('A');
/// let b = graph.add_vertex('B');
/// let c = graph.add_vertex('C');
/// let d = graph.add_vertex('D');
/// graph.add_edge(Edge::new('A', 'B'))?;
/// graph.add_edge(Edge::new('A', 'C'))?;
/// graph.add_edge(Edge::new('B', 'D'))?;
///
/// let order: Vec<_> = algorithms::dfs(&graph, a, Direction::Forward).collect();
/// assert_eq!(order, vec![a, b, d, c]);
/// # Ok::<(), ontograph::Error>(())
/// ```
pub fn dfs<G: Neighbours>(
    graph: &G,
    start: NodeId,
    direction: Direction,
) -> impl Iterator<Item = NodeId> + '_ {
    let bound = if graph.contains_node(start) {
        graph.node_bound()
    } else {
        0
    };
    dfs_by(bound, start, move |node| graph.neighbours(node, direction))
}

/// Runs a depth-first search, calling `visitor` for each reachable vertex.
///
/// Returning `false` from the visitor stops the traversal.
pub fn dfs_visit<G, F>(graph: &G, start: NodeId, direction: Direction, mut visitor: F)
where
    G: Neighbours,
    F: FnMut(NodeId) -> bool,
{
    for node in dfs(graph, start, direction) {
        if !visitor(node) {
            break;
        }
    }
}

/// Returns `true` if `dest` is reachable from `source` along edge direction.
///
/// A vertex always reaches itself. Stops as soon as `dest` is discovered.
#[must_use]
pub fn exists_path<G: Neighbours>(graph: &G, source: NodeId, dest: NodeId) -> bool {
    if !graph.contains_node(source) || !graph.contains_node(dest) {
        return false;
    }
    bfs(graph, [source], Direction::Forward).any(|node| node == dest)
}

/// Returns `start` followed by every vertex reachable from it, in BFS order.
///
/// With [`Direction::Backward`] this is the ancestor closure, with
/// [`Direction::Forward`] the descendant closure. A dead `start` yields an empty vector.
#[must_use]
pub fn reachable<G: Neighbours>(graph: &G, start: NodeId, direction: Direction) -> Vec<NodeId> {
    bfs(graph, [start], direction).collect()
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::traversal::{
            bfs, bfs_by, bfs_visit, bfs_visit_by, dfs, dfs_by, dfs_visit, exists_path,
            reachable,
        },
        DirectedGraph, Direction, Edge, NodeId,
    };

    fn build(n: usize, edges: &[(usize, usize)]) -> (DirectedGraph<usize>, Vec<NodeId>) {
        let mut graph = DirectedGraph::new();
        let ids = (0..n).map(|i| graph.add_vertex(i)).collect();
        for &(s, d) in edges {
            graph.add_edge(Edge::new(s, d)).unwrap();
        }
        (graph, ids)
    }

    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn diamond() -> (DirectedGraph<usize>, Vec<NodeId>) {
        build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)])
    }

    #[test]
    fn test_bfs_forward_levels() {
        let (graph, n) = diamond();
        let order: Vec<_> = bfs(&graph, [n[0]], Direction::Forward).collect();
        assert_eq!(order, vec![n[0], n[1], n[2], n[3]]);
    }

    #[test]
    fn test_bfs_backward() {
        let (graph, n) = diamond();
        let order: Vec<_> = bfs(&graph, [n[3]], Direction::Backward).collect();
        assert_eq!(order, vec![n[3], n[1], n[2], n[0]]);
    }

    #[test]
    fn test_bfs_multi_source_dedups_starts() {
        let (graph, n) = build(4, &[(0, 2), (1, 3)]);
        let order: Vec<_> = bfs(&graph, [n[1], n[0], n[1]], Direction::Forward).collect();
        assert_eq!(order, vec![n[1], n[0], n[3], n[2]]);
    }

    #[test]
    fn test_bfs_ignores_dead_starts() {
        let (mut graph, n) = diamond();
        graph.remove_vertex(&1);
        let order: Vec<_> = bfs(&graph, [n[1], NodeId::new(42)], Direction::Forward).collect();
        assert!(order.is_empty());
    }

    #[test]
    fn test_bfs_visit_early_stop() {
        let (graph, n) = diamond();
        let mut seen = Vec::new();
        bfs_visit(&graph, [n[0]], Direction::Forward, |node| {
            seen.push(node);
            node != n[1]
        });
        assert_eq!(seen, vec![n[0], n[1]]);
    }

    #[test]
    fn test_bfs_handles_cycles() {
        let (graph, n) = build(3, &[(0, 1), (1, 2), (2, 0)]);
        let order: Vec<_> = bfs(&graph, [n[1]], Direction::Forward).collect();
        assert_eq!(order, vec![n[1], n[2], n[0]]);
    }

    #[test]
    fn test_bfs_by_closure_adjacency() {
        // i -> 2i, i -> 2i + 1 within bound 8
        let order: Vec<_> = bfs_by(8, [NodeId::new(1)], |node| {
            let i = node.index();
            [NodeId::new(2 * i), NodeId::new(2 * i + 1)]
        })
        .collect();
        let raw: Vec<usize> = order.into_iter().map(NodeId::index).collect();
        assert_eq!(raw, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_bfs_visit_by_stops() {
        let mut seen = Vec::new();
        bfs_visit_by(
            5,
            [NodeId::new(0)],
            |node| (node.index() + 1 < 5).then(|| NodeId::new(node.index() + 1)),
            |node| {
                seen.push(node.index());
                node.index() < 2
            },
        );
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_dfs_preorder() {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3, 3 -> 4
        let (graph, n) = build(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let order: Vec<_> = dfs(&graph, n[0], Direction::Forward).collect();
        assert_eq!(order, vec![n[0], n[1], n[3], n[4], n[2]]);
    }

    #[test]
    fn test_dfs_backward_and_invalid_start() {
        let (graph, n) = diamond();
        let order: Vec<_> = dfs(&graph, n[3], Direction::Backward).collect();
        assert_eq!(order, vec![n[3], n[1], n[0], n[2]]);

        assert_eq!(dfs(&graph, NodeId::new(99), Direction::Forward).count(), 0);
        assert_eq!(dfs_by(2, NodeId::new(5), |_| Vec::new()).count(), 0);
    }

    #[test]
    fn test_dfs_visit_early_stop() {
        let (graph, n) = diamond();
        let mut count = 0;
        dfs_visit(&graph, n[0], Direction::Forward, |_| {
            count += 1;
            count < 3
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn test_exists_path() {
        let (graph, n) = build(4, &[(0, 1), (1, 2)]);
        assert!(exists_path(&graph, n[0], n[2]));
        assert!(exists_path(&graph, n[3], n[3]));
        assert!(!exists_path(&graph, n[2], n[0]));
        assert!(!exists_path(&graph, n[0], n[3]));
        assert!(!exists_path(&graph, n[0], NodeId::new(10)));
    }

    #[test]
    fn test_reachable_closures() {
        let (graph, n) = diamond();
        assert_eq!(reachable(&graph, n[1], Direction::Forward), vec![n[1], n[3]]);
        assert_eq!(reachable(&graph, n[1], Direction::Backward), vec![n[1], n[0]]);
        assert!(reachable(&graph, NodeId::new(7), Direction::Forward).is_empty());
    }
}
