//! Weighted single-source path algorithms.
//!
//! - [`dijkstra`] - Shortest paths for non-negative weights, reported in distance order
//! - [`bellman_ford`] - Relaxation over scaled weights; handles negative weights
//! - [`shortest_path_bf`] / [`longest_path`] - Bellman-Ford with multiplier `1` / `-1`
//!
//! All of them report through a visitor `FnMut(node, path, distance) -> bool`. The path
//! runs from the source to `node`, both inclusive; the source itself is reported with the
//! one-element path `[source]` and distance `0`. Returning `false` stops the run.
//!
//! Distances use saturating `i64` arithmetic.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{Direction, EdgeWeights, GraphBase, NodeId},
    utils::BitSet,
};

/// Dijkstra single-source shortest paths.
///
/// Vertices are reported once each in non-decreasing distance order. Among equal
/// distances, vertices are reported in the order their final distance was first queued.
/// Only vertices reachable from `source` in `direction` are reported.
///
/// Negative weights are not rejected, but the results are then undefined; use
/// [`bellman_ford`] instead.
///
/// # Arguments
///
/// * `graph` - The weighted graph
/// * `source` - The start vertex; a dead id reports nothing
/// * `direction` - [`Direction::Backward`] searches against the edge direction
/// * `visitor` - Called as `visitor(node, path, distance)`
///
/// # Complexity
///
/// - Time: O((V + E) log V) plus the path rewrites, which only touch the part of each
///   reported path that differs from the previous one
/// - Space: O(V + E) for the heap
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::algorithms::dijkstra, DirectedGraph, Direction, Edge};
///
/// let mut graph: DirectedGraph<char> = DirectedGraph::new();
/// let a = graph.add_vertex('A');
/// let b = graph.add_vertex('B');
/// let c = graph.add_vertex('C');
/// graph.add_edge(Edge::weighted('A', 'B', 2))?;
/// graph.add_edge(Edge::weighted('B', 'C', 2))?;
/// graph.add_edge(Edge::weighted('A', 'C', 7))?;
///
/// let mut found = Vec::new();
/// dijkstra(&graph, a, Direction::Forward, |node, path, dist| {
///     found.push((node, path.len(), dist));
///     true
/// });
/// assert_eq!(found, vec![(a, 1, 0), (b, 2, 2), (c, 3, 4)]);
/// # Ok::<(), ontograph::Error>(())
/// ```
pub fn dijkstra<G, F>(graph: &G, source: NodeId, direction: Direction, mut visitor: F)
where
    G: EdgeWeights,
    F: FnMut(NodeId, &[NodeId], i64) -> bool,
{
    if !graph.contains_node(source) {
        return;
    }

    let bound = graph.node_bound();
    let mut distance: Vec<Option<i64>> = vec![None; bound];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; bound];
    let mut settled = BitSet::new(bound);
    let mut depth = vec![0usize; bound];
    let mut path: Vec<NodeId> = Vec::new();
    let mut heap = BinaryHeap::new();
    let mut sequence = 0u64;

    distance[source.index()] = Some(0);
    heap.push(Reverse((0i64, sequence, source)));

    while let Some(Reverse((dist, _, node))) = heap.pop() {
        // stale entry for an already-settled node
        if !settled.insert(node.index()) {
            continue;
        }

        extend_path(&mut path, &depth, &predecessor, node);
        depth[node.index()] = path.len();
        if !visitor(node, &path, dist) {
            return;
        }

        for (next, weight) in graph.weighted_neighbours(node, direction) {
            if next.index() >= bound || settled.contains(next.index()) {
                continue;
            }
            let candidate = dist.saturating_add(weight);
            if distance[next.index()].map_or(true, |current| candidate < current) {
                distance[next.index()] = Some(candidate);
                predecessor[next.index()] = Some(node);
                sequence += 1;
                heap.push(Reverse((candidate, sequence, next)));
            }
        }
    }
}

/// Bellman-Ford single-source paths over weights scaled by `weight_multiplier`.
///
/// Every edge weight is multiplied by `weight_multiplier` before relaxation. Up to
/// |V| relaxation rounds run over the forward edges, stopping early once a round changes
/// nothing. Afterwards every vertex with a finite distance is reported in node order,
/// with distance `relaxed * weight_multiplier`. For multipliers of `1` and `-1` that is
/// the distance on the original scale.
///
/// A negative cycle reachable from `source` is not reported as an error. The relaxation
/// still stops after |V| rounds, and predecessor chains that no longer lead back to
/// `source` are truncated with a warning.
///
/// # Complexity
///
/// - Time: O(V × E)
/// - Space: O(V)
pub fn bellman_ford<G, F>(graph: &G, source: NodeId, weight_multiplier: i64, mut visitor: F)
where
    G: EdgeWeights,
    F: FnMut(NodeId, &[NodeId], i64) -> bool,
{
    if !graph.contains_node(source) {
        return;
    }

    let bound = graph.node_bound();
    let mut distance: Vec<Option<i64>> = vec![None; bound];
    let mut predecessor: Vec<Option<NodeId>> = vec![None; bound];
    distance[source.index()] = Some(0);

    let rounds = graph.node_count();
    let mut converged = false;
    for round in 0..rounds {
        let mut changed = false;
        for node in graph.node_ids() {
            let Some(dist) = distance[node.index()] else {
                continue;
            };
            for (next, weight) in graph.weighted_successors(node) {
                if next.index() >= bound {
                    continue;
                }
                let candidate = dist.saturating_add(weight.saturating_mul(weight_multiplier));
                if distance[next.index()].map_or(true, |current| candidate < current) {
                    distance[next.index()] = Some(candidate);
                    predecessor[next.index()] = Some(node);
                    changed = true;
                }
            }
        }
        if !changed {
            log::trace!("bellman-ford converged after {} rounds", round + 1);
            converged = true;
            break;
        }
    }
    if !converged && rounds > 0 {
        log::warn!(
            "bellman-ford from {source} still relaxing after {rounds} rounds; reachable negative cycle"
        );
    }

    for node in graph.node_ids() {
        let Some(dist) = distance[node.index()] else {
            continue;
        };
        let (path, complete) = trace_path(&predecessor, source, node);
        if !complete {
            log::warn!("path to {node} does not lead back to {source}; reporting truncated path");
        }
        if !visitor(node, &path, dist.saturating_mul(weight_multiplier)) {
            return;
        }
    }
}

/// Bellman-Ford shortest paths (multiplier `1`).
pub fn shortest_path_bf<G, F>(graph: &G, source: NodeId, visitor: F)
where
    G: EdgeWeights,
    F: FnMut(NodeId, &[NodeId], i64) -> bool,
{
    bellman_ford(graph, source, 1, visitor);
}

/// Longest paths via Bellman-Ford over negated weights (multiplier `-1`).
///
/// Correct only on graphs without a cycle reachable from `source`. On such a cycle the
/// negated weights form a negative cycle and the reported distances are meaningless; no
/// error is raised.
pub fn longest_path<G, F>(graph: &G, source: NodeId, visitor: F)
where
    G: EdgeWeights,
    F: FnMut(NodeId, &[NodeId], i64) -> bool,
{
    bellman_ford(graph, source, -1, visitor);
}

/// Turns `path` from the previously reported path into the path to `node`.
///
/// Walks predecessor links up from `node` until it meets a settled vertex that sits on
/// `path` at its recorded depth; everything above that vertex is shared and kept. Every
/// vertex on the walk must already be settled, which Dijkstra guarantees.
fn extend_path(
    path: &mut Vec<NodeId>,
    depth: &[usize],
    predecessor: &[Option<NodeId>],
    node: NodeId,
) {
    let mut tail = vec![node];
    let mut current = node;

    loop {
        match predecessor.get(current.index()).copied().flatten() {
            Some(prev) => {
                let d = depth.get(prev.index()).copied().unwrap_or(0);
                if d > 0 && path.get(d - 1) == Some(&prev) {
                    path.truncate(d);
                    break;
                }
                tail.push(prev);
                current = prev;
            }
            // reached the source
            None => {
                path.clear();
                break;
            }
        }
    }

    path.extend(tail.into_iter().rev());
}

/// Walks predecessor links from `node` back to `source` and returns the path in
/// source-to-node order, with `true` if the walk reached `source`.
///
/// The walk is cut off after `predecessor.len()` steps, which only happens when the links
/// form a cycle.
fn trace_path(predecessor: &[Option<NodeId>], source: NodeId, node: NodeId) -> (Vec<NodeId>, bool) {
    let mut path = vec![node];
    let mut current = node;
    let mut complete = true;

    while current != source {
        if path.len() > predecessor.len() {
            complete = false;
            break;
        }
        match predecessor.get(current.index()).copied().flatten() {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => {
                complete = false;
                break;
            }
        }
    }

    path.reverse();
    (path, complete)
}

#[cfg(test)]
mod tests {
    use crate::graph::{
        algorithms::paths::{bellman_ford, dijkstra, longest_path, shortest_path_bf, trace_path},
        DirectedGraph, Direction, Edge, NodeId,
    };

    type Report = Vec<(usize, Vec<usize>, i64)>;

    fn build(n: usize, edges: &[(usize, usize, i64)]) -> DirectedGraph<usize> {
        let mut graph = DirectedGraph::new();
        for i in 0..n {
            graph.add_vertex(i);
        }
        for &(s, d, w) in edges {
            graph.add_edge(Edge::weighted(s, d, w)).unwrap();
        }
        graph
    }

    fn record(report: &mut Report) -> impl FnMut(NodeId, &[NodeId], i64) -> bool + '_ {
        move |node, path, dist| {
            report.push((node.index(), path.iter().map(|p| p.index()).collect(), dist));
            true
        }
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        let graph = build(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(0), Direction::Forward, record(&mut report));
        assert_eq!(
            report,
            vec![(0, vec![0], 0), (1, vec![0, 1], 1), (2, vec![0, 1, 2], 3)]
        );
    }

    #[test]
    fn test_dijkstra_ties_follow_queue_order() {
        // 0 -> 2 and 0 -> 1 both cost 1; 2 was queued first
        let graph = build(3, &[(0, 2, 1), (0, 1, 1)]);
        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(0), Direction::Forward, record(&mut report));
        let order: Vec<usize> = report.iter().map(|r| r.0).collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_dijkstra_against_flow() {
        let graph = build(3, &[(0, 1, 4), (1, 2, 1)]);
        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(2), Direction::Backward, record(&mut report));
        assert_eq!(
            report,
            vec![(2, vec![2], 0), (1, vec![2, 1], 1), (0, vec![2, 1, 0], 5)]
        );
    }

    #[test]
    fn test_dijkstra_early_stop_and_unreachable() {
        let graph = build(4, &[(0, 1, 1), (1, 2, 1)]);
        let mut seen = Vec::new();
        dijkstra(&graph, NodeId::new(0), Direction::Forward, |node, _, _| {
            seen.push(node.index());
            seen.len() < 2
        });
        assert_eq!(seen, vec![0, 1]);

        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(0), Direction::Forward, record(&mut report));
        assert!(report.iter().all(|r| r.0 != 3));

        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(9), Direction::Forward, record(&mut report));
        assert!(report.is_empty());
    }

    #[test]
    fn test_dijkstra_paths_on_long_chain() {
        let n = 2_000;
        let edges: Vec<_> = (1..n).map(|i| (i - 1, i, 1)).collect();
        let graph = build(n, &edges);

        let mut checked = 0;
        dijkstra(&graph, NodeId::new(0), Direction::Forward, |node, path, dist| {
            assert_eq!(path.len(), node.index() + 1);
            assert_eq!(path.first(), Some(&NodeId::new(0)));
            assert_eq!(path.last(), Some(&node));
            assert_eq!(dist, node.index() as i64);
            checked += 1;
            true
        });
        assert_eq!(checked, n);
    }

    #[test]
    fn test_dijkstra_paths_across_interleaved_branches() {
        // two branches settle alternately: 0 -> 1 -> 3 -> 5 and 0 -> 2 -> 4 -> 6
        let graph = build(
            7,
            &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 4, 1), (3, 5, 1), (4, 6, 1)],
        );
        let mut report = Report::new();
        dijkstra(&graph, NodeId::new(0), Direction::Forward, record(&mut report));
        assert_eq!(
            report,
            vec![
                (0, vec![0], 0),
                (1, vec![0, 1], 1),
                (2, vec![0, 2], 1),
                (3, vec![0, 1, 3], 2),
                (4, vec![0, 2, 4], 2),
                (5, vec![0, 1, 3, 5], 3),
                (6, vec![0, 2, 4, 6], 3),
            ]
        );
    }

    #[test]
    fn test_bellman_ford_negative_weights() {
        let graph = build(4, &[(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 1)]);
        let mut report = Report::new();
        shortest_path_bf(&graph, NodeId::new(0), record(&mut report));
        assert_eq!(
            report,
            vec![
                (0, vec![0], 0),
                (1, vec![0, 2, 1], 2),
                (2, vec![0, 2], 5),
                (3, vec![0, 2, 1, 3], 3),
            ]
        );
    }

    #[test]
    fn test_longest_path_on_dag() {
        let graph = build(4, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (2, 3, 1)]);
        let mut report = Report::new();
        longest_path(&graph, NodeId::new(0), record(&mut report));
        assert_eq!(report[2], (2, vec![0, 1, 2], 2));
        assert_eq!(report[3], (3, vec![0, 1, 2, 3], 3));
    }

    #[test]
    fn test_bellman_ford_multiplier_and_early_stop() {
        let graph = build(3, &[(0, 1, 3), (1, 2, 3)]);
        let mut report = Report::new();
        bellman_ford(&graph, NodeId::new(0), 1, record(&mut report));
        assert_eq!(report.last().map(|r| r.2), Some(6));

        let mut count = 0;
        bellman_ford(&graph, NodeId::new(0), 1, |_, _, _| {
            count += 1;
            false
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_bellman_ford_negative_cycle_terminates() {
        // 1 <-> 2 forms a negative cycle once negated
        let graph = build(3, &[(0, 1, 1), (1, 2, 1), (2, 1, 1)]);
        let mut report = Report::new();
        longest_path(&graph, NodeId::new(0), record(&mut report));
        assert_eq!(report.len(), 3);
        assert_eq!(report[0], (0, vec![0], 0));
    }

    #[test]
    fn test_trace_path_cut_off() {
        // 1 and 2 point at each other, never reaching 0
        let pred = vec![None, Some(NodeId::new(2)), Some(NodeId::new(1))];
        let (path, complete) = trace_path(&pred, NodeId::new(0), NodeId::new(1));
        assert!(!complete);
        assert!(path.len() <= pred.len() + 1);

        let pred = vec![None, Some(NodeId::new(0))];
        let (path, complete) = trace_path(&pred, NodeId::new(0), NodeId::new(1));
        assert!(complete);
        assert_eq!(path, vec![NodeId::new(0), NodeId::new(1)]);
    }
}
