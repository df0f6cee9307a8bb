//! Property tests over randomly generated graphs.
//!
//! Graphs are built from `n` integer vertices and a deduplicated edge list, so the
//! one-edge-per-ordered-pair assumption always holds. DAG strategies only generate edges
//! from lower to higher vertex numbers.

use std::collections::{BTreeSet, HashSet};

use ontograph::prelude::*;
use proptest::prelude::*;

fn build(n: u32, edges: &BTreeSet<(u32, u32)>) -> DirectedGraph<u32> {
    let mut graph = DirectedGraph::with_capacity(n as usize, edges.len());
    for v in 0..n {
        graph.add_vertex(v);
    }
    for &(s, d) in edges {
        graph.add_edge(Edge::new(s, d)).unwrap();
    }
    graph
}

/// Any directed graph, self-loops included.
fn arb_graph() -> impl Strategy<Value = (u32, BTreeSet<(u32, u32)>)> {
    (1u32..16).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::btree_set((0..n, 0..n), 0..(n as usize * 3)),
        )
    })
}

/// A directed acyclic graph whose edges all point from lower to higher numbers.
fn arb_dag() -> impl Strategy<Value = (u32, BTreeSet<(u32, u32)>)> {
    arb_graph().prop_map(|(n, edges)| {
        let edges = edges
            .into_iter()
            .filter(|(s, d)| s != d)
            .map(|(s, d)| (s.min(d), s.max(d)))
            .collect();
        (n, edges)
    })
}

fn forward_set(graph: &DirectedGraph<u32>, start: u32) -> HashSet<u32> {
    let mut seen = HashSet::new();
    graph.bfs([&start], Direction::Forward, |v| {
        seen.insert(*v);
        true
    });
    seen
}

proptest! {
    #[test]
    fn prop_degrees_match_edge_list((n, edges) in arb_graph()) {
        let graph = build(n, &edges);

        for v in 0..n {
            let incoming = edges.iter().filter(|(_, d)| *d == v).count();
            let outgoing = edges.iter().filter(|(s, _)| *s == v).count();
            prop_assert_eq!(graph.in_degree(&v), Some(incoming));
            prop_assert_eq!(graph.out_degree(&v), Some(outgoing));
        }
    }

    #[test]
    fn prop_topological_order_on_dag((n, edges) in arb_dag()) {
        let graph = build(n, &edges);
        let order = graph.topological_order();

        prop_assert_eq!(order.len(), n as usize);
        let mut position = vec![0usize; n as usize];
        for (i, v) in order.iter().enumerate() {
            position[**v as usize] = i;
        }
        for (s, d) in &edges {
            prop_assert!(position[*s as usize] < position[*d as usize]);
        }
    }

    #[test]
    fn prop_cycle_shortens_topological_order(
        (n, edges) in arb_dag(),
        k in 2u32..6,
    ) {
        // append a fresh cycle of length k
        let mut graph = build(n, &edges);
        for i in 0..k {
            graph.add_vertex(n + i);
        }
        for i in 0..k {
            graph.add_edge(Edge::new(n + i, n + (i + 1) % k)).unwrap();
        }

        let order = graph.topological_order();
        prop_assert!(order.len() <= graph.vertex_count() - k as usize);
        prop_assert!(graph.try_topological_order().is_err());
    }

    #[test]
    fn prop_bfs_is_deterministic((n, edges) in arb_graph(), start in 0u32..16) {
        let graph = build(n, &edges);
        let start = start % n;

        let run = || {
            let mut order = Vec::new();
            graph.bfs([&start], Direction::Forward, |v| {
                order.push(*v);
                true
            });
            order
        };

        let first = run();
        prop_assert_eq!(&first, &run());
        let unique: HashSet<_> = first.iter().collect();
        prop_assert_eq!(unique.len(), first.len());
    }

    #[test]
    fn prop_exists_path_matches_bfs((n, edges) in arb_graph()) {
        let graph = build(n, &edges);

        for a in 0..n {
            let reachable = forward_set(&graph, a);
            for b in 0..n {
                prop_assert_eq!(graph.exists_path(&a, &b), reachable.contains(&b));
            }
        }
    }

    #[test]
    fn prop_slim_view_is_reflexive_and_agrees((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let view = SlimDirectedGraphView::from_graph(&graph);

        for v in 0..n {
            prop_assert!(view.is_ancestor(&v, &v));
            prop_assert!(view.is_descendant(&v, &v));

            let reachable = forward_set(&graph, v);
            for w in 0..n {
                prop_assert_eq!(view.is_ancestor(&v, &w), reachable.contains(&w));
            }
        }
    }

    #[test]
    fn prop_path_maintaining_is_fixed_point(
        (n, edges) in arb_dag(),
        keep in prop::collection::btree_set(0u32..16, 1..10),
    ) {
        let graph = build(n, &edges);
        let keep: Vec<u32> = keep.into_iter().filter(|v| *v < n).collect();

        let reduced = graph.path_maintaining_sub_graph(&keep);

        // reachability among kept vertices survives the reduction
        for &a in &keep {
            let full = forward_set(&graph, a);
            for &b in &keep {
                prop_assert_eq!(reduced.exists_path(&a, &b), full.contains(&b));
            }
        }

        // every remaining edge is necessary
        let remaining: Vec<(u32, u32)> =
            reduced.edges().map(|e| (*e.source(), *e.dest())).collect();
        for (s, d) in remaining {
            let mut without = reduced.copy_graph();
            without.remove_edge(&s, &d);
            prop_assert!(!without.exists_path(&s, &d), "edge {} -> {} is redundant", s, d);
        }

        // and reducing again changes nothing
        let again = reduced.path_maintaining_sub_graph(&keep);
        prop_assert_eq!(again.edge_count(), reduced.edge_count());
    }

    #[test]
    fn prop_remove_vertex_keeps_counts_consistent((n, edges) in arb_graph(), victim in 0u32..16) {
        let mut graph = build(n, &edges);
        let victim = victim % n;
        let incident = edges.iter().filter(|(s, d)| *s == victim || *d == victim).count();

        prop_assert!(graph.remove_vertex(&victim));
        prop_assert_eq!(graph.vertex_count(), n as usize - 1);
        prop_assert_eq!(graph.edge_count(), edges.len() - incident);
        prop_assert_eq!(graph.edges().count(), graph.edge_count());
    }
}
