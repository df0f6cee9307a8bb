//! Topological ordering (Kahn's algorithm).
//!
//! A topological ordering lists every vertex before all of its children. For an ontology
//! this means every term comes after all of its more general terms.
//!
//! The ordering is also the engine's cycle test: on a cyclic graph Kahn's algorithm
//! stalls, and the returned order comes up short.

use std::collections::VecDeque;

use crate::graph::{GraphBase, NodeId, Predecessors, Successors};

/// Computes a topological ordering of all live nodes.
///
/// Uses Kahn's algorithm: every node with in-degree zero is queued in node order; each
/// dequeued node is emitted and the in-degree of its children decremented, queuing any
/// child that reaches zero.
///
/// # Returns
///
/// The ordered nodes. If the graph contains a cycle the result is shorter than
/// [`GraphBase::node_count`]: nodes on a cycle, and nodes only reachable through one, are
/// never emitted. Comparing the length against the node count is the designated cycle
/// test.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the in-degree table and queue
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms::topological_order, DirectedGraph, Edge};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// let a = graph.add_vertex("A");
/// let b = graph.add_vertex("B");
/// let c = graph.add_vertex("C");
/// graph.add_edge(Edge::new("B", "C"))?;
/// graph.add_edge(Edge::new("A", "B"))?;
///
/// assert_eq!(topological_order(&graph), vec![a, b, c]);
///
/// graph.add_edge(Edge::new("C", "A"))?;
/// assert!(topological_order(&graph).len() < 3);
/// # Ok::<(), ontograph::Error>(())
/// ```
pub fn topological_order<G>(graph: &G) -> Vec<NodeId>
where
    G: GraphBase + Successors + Predecessors,
{
    let mut in_degree = vec![0usize; graph.node_bound()];
    let mut queue = VecDeque::new();

    for node in graph.node_ids() {
        in_degree[node.index()] = graph.predecessors(node).count();
        if in_degree[node.index()] == 0 {
            queue.push_back(node);
        }
    }

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(node) = queue.pop_front() {
        order.push(node);

        for child in graph.successors(node) {
            let Some(degree) = in_degree.get_mut(child.index()) else {
                continue;
            };
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(child);
            }
        }
    }

    order
}

/// Computes a topological ordering, or `None` if the graph contains a cycle.
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms::topological_sort, DirectedGraph, Edge};
///
/// let mut graph: DirectedGraph<u8> = DirectedGraph::new();
/// graph.add_vertex(1);
/// graph.add_vertex(2);
/// graph.add_edge(Edge::new(1, 2))?;
/// assert!(topological_sort(&graph).is_some());
///
/// graph.add_edge(Edge::new(2, 1))?;
/// assert!(topological_sort(&graph).is_none());
/// # Ok::<(), ontograph::Error>(())
/// ```
#[must_use]
pub fn topological_sort<G>(graph: &G) -> Option<Vec<NodeId>>
where
    G: GraphBase + Successors + Predecessors,
{
    let order = topological_order(graph);
    if order.len() == graph.node_count() {
        Some(order)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::topological::{topological_order, topological_sort},
        DirectedGraph, Edge, NodeId,
    };

    fn build(n: usize, edges: &[(usize, usize)]) -> DirectedGraph<usize> {
        let mut graph = DirectedGraph::new();
        for i in 0..n {
            graph.add_vertex(i);
        }
        for &(s, d) in edges {
            graph.add_edge(Edge::new(s, d)).unwrap();
        }
        graph
    }

    fn raw(order: Vec<NodeId>) -> Vec<usize> {
        order.into_iter().map(NodeId::index).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = build(0, &[]);
        assert!(topological_order(&graph).is_empty());
        assert_eq!(topological_sort(&graph), Some(Vec::new()));
    }

    #[test]
    fn test_diamond() {
        let graph = build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(raw(topological_order(&graph)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_seeds_in_node_order() {
        // 2 -> 0, 3 -> 1; roots 2 and 3 first
        let graph = build(4, &[(2, 0), (3, 1)]);
        assert_eq!(raw(topological_order(&graph)), vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_every_edge_respected() {
        let edges = [(5, 2), (5, 0), (4, 0), (4, 1), (2, 3), (3, 1)];
        let graph = build(6, &edges);
        let order = raw(topological_sort(&graph).unwrap());
        let position = |v: usize| order.iter().position(|&x| x == v).unwrap();
        for (s, d) in edges {
            assert!(position(s) < position(d), "{s} must precede {d}");
        }
    }

    #[test]
    fn test_cycle_excludes_downstream() {
        // 0 -> 1 -> 2 -> 1, 2 -> 3
        let graph = build(4, &[(0, 1), (1, 2), (2, 1), (2, 3)]);
        assert_eq!(raw(topological_order(&graph)), vec![0]);
        assert!(topological_sort(&graph).is_none());
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let graph = build(2, &[(0, 0), (0, 1)]);
        assert!(topological_order(&graph).is_empty());
    }

    #[test]
    fn test_removed_slots_are_skipped() {
        let mut graph = build(3, &[(0, 1), (1, 2)]);
        graph.remove_vertex(&1);
        assert_eq!(raw(topological_order(&graph)), vec![0, 2]);
        assert!(topological_sort(&graph).is_some());
    }
}
