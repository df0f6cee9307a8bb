//! Graph algorithms for ontology hierarchies.
//!
//! Every algorithm here is written against the capability traits in
//! [capability traits](crate::graph::GraphBase) and works on [`NodeId`](crate::NodeId)s, so it runs
//! unchanged over a [`DirectedGraph`](crate::DirectedGraph), a
//! [`SlimDirectedGraphView`](crate::SlimDirectedGraphView) or a caller's own adjacency.
//! [`DirectedGraph`](crate::DirectedGraph) wraps the common ones in methods keyed by
//! vertex identity.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] / [`bfs_by`] / [`bfs_visit`] / [`bfs_visit_by`] - Multi-source breadth-first search
//! - [`dfs`] / [`dfs_by`] / [`dfs_visit`] - Depth-first search (pre-order)
//! - [`dfs_shortcut_links`] - Next-branch links for flattened hierarchy iteration
//! - [`exists_path`] - Directed reachability
//! - [`reachable`] - Ancestor or descendant closure of a vertex
//!
//! ## Topological Ordering
//!
//! - [`topological_order`] - Kahn's algorithm; a short result signals a cycle
//! - [`topological_sort`] - Same, returning `None` on a cycle
//!
//! ## Weighted Paths
//!
//! - [`dijkstra`] - Shortest paths for non-negative weights
//! - [`bellman_ford`] - Relaxation with a weight multiplier
//! - [`shortest_path_bf`] / [`longest_path`] - Bellman-Ford with multiplier `1` / `-1`
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, closures |
//! | Topological Order | O(V + E) | Ordering terms, cycle detection |
//! | Dijkstra | O((V + E) log V) | Shortest paths, non-negative weights |
//! | Bellman-Ford | O(V × E) | Negative weights, longest paths on DAGs |
//!
//! # Examples
//!
//! ```rust
//! use ontograph::{graph::algorithms, DirectedGraph, Direction, Edge};
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! let root = graph.add_vertex("root");
//! let leaf = graph.add_vertex("leaf");
//! graph.add_edge(Edge::new("root", "leaf"))?;
//!
//! assert!(algorithms::exists_path(&graph, root, leaf));
//! assert_eq!(algorithms::reachable(&graph, leaf, Direction::Backward), vec![leaf, root]);
//! assert_eq!(algorithms::topological_order(&graph), vec![root, leaf]);
//! # Ok::<(), ontograph::Error>(())
//! ```

mod paths;
mod shortcut;
mod topological;
mod traversal;

pub use paths::{bellman_ford, dijkstra, longest_path, shortest_path_bf};
pub use shortcut::dfs_shortcut_links;
pub use topological::{topological_order, topological_sort};
pub use traversal::{
    bfs, bfs_by, bfs_visit, bfs_visit_by, dfs, dfs_by, dfs_visit, exists_path, reachable,
    BfsIterator, DfsIterator,
};
