//! Induced subgraphs, transitive closures and redundancy-free reductions.
//!
//! All operations take the vertex subset as an iterator of identities and build a new,
//! independent [`DirectedGraph`]. Identities that are not members of the source graph are
//! ignored. Result graphs list their vertices in the source graph's order, whatever order
//! the subset was given in.

use std::{fmt::Debug, hash::Hash};

use crate::{
    graph::{
        algorithms::bfs_by, edge::DEFAULT_WEIGHT, DirectedGraph, GraphBase, NodeId, Predecessors,
    },
    utils::BitSet,
};

/// A vertex subset resolved against a source graph.
struct Selection {
    /// Source slot index -> slot in the graph being built
    mapping: Vec<Option<NodeId>>,
}

impl Selection {
    fn target(&self, source: NodeId) -> Option<NodeId> {
        self.mapping.get(source.index()).copied().flatten()
    }
}

impl<V, E> DirectedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
{
    /// Returns the subgraph induced by a vertex subset.
    ///
    /// The result holds exactly the subset's vertices and every edge whose endpoints are
    /// both in the subset, with weights and payloads cloned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::{DirectedGraph, Edge};
    ///
    /// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    /// for v in ["A", "B", "C"] {
    ///     graph.add_vertex(v);
    /// }
    /// graph.add_edge(Edge::new("A", "B"))?;
    /// graph.add_edge(Edge::new("B", "C"))?;
    ///
    /// let sub = graph.sub_graph([&"A", &"B"]);
    /// assert_eq!(sub.vertex_count(), 2);
    /// assert!(sub.has_edge(&"A", &"B"));
    /// assert_eq!(sub.edge_count(), 1);
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    #[must_use]
    pub fn sub_graph<'v, I>(&self, vertices: I) -> DirectedGraph<V, E>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
        E: Clone,
    {
        let (mut sub, selection) = self.select(vertices);

        for edge in self.edges() {
            if let (Some(s), Some(d)) = (
                selection.target(edge.source_id()),
                selection.target(edge.dest_id()),
            ) {
                sub.link(s, d, edge.weight(), edge.data().clone());
            }
        }
        sub
    }

    /// Returns a structural copy of the whole graph.
    ///
    /// Unlike [`Clone`], which keeps vacated slots so `NodeId`s carry over, the copy is
    /// compacted: vertices are renumbered densely in their current order.
    #[must_use]
    pub fn copy_graph(&self) -> DirectedGraph<V, E>
    where
        E: Clone,
    {
        self.sub_graph(self.vertices())
    }

    /// Returns the transitive closure of the graph restricted to a vertex subset.
    ///
    /// For every subset vertex `v`, the full graph is searched backwards from `v`; each
    /// ancestor `u` that is also in the subset gets an edge `u -> v` with the default
    /// weight and payload. Reachability through vertices outside the subset counts, so
    /// `A -> x -> B` with `x` excluded still yields `A -> B`.
    #[must_use]
    pub fn transitive_closure_of_sub_graph<'v, I>(&self, vertices: I) -> DirectedGraph<V, E>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
        E: Default,
    {
        let (mut closure, selection) = self.select(vertices);

        for v in self.node_ids() {
            let Some(target) = selection.target(v) else {
                continue;
            };
            let ancestors = bfs_by(self.node_bound(), [v], |n| self.predecessors(n)).skip(1);
            for u in ancestors {
                if let Some(source) = selection.target(u) {
                    closure.link(source, target, DEFAULT_WEIGHT, E::default());
                }
            }
        }

        log::debug!(
            "transitive closure over {} vertices has {} edges",
            closure.vertex_count(),
            closure.edge_count()
        );
        closure
    }

    /// Returns a reduced closure over a vertex subset without redundant edges.
    ///
    /// Starts from [`transitive_closure_of_sub_graph`](Self::transitive_closure_of_sub_graph)
    /// and repeatedly drops every edge `p -> v` whose removal leaves the ancestor set of
    /// `v` unchanged, until a full pass drops nothing. Reachability between subset vertices
    /// is preserved, and no remaining edge can be dropped without losing some of it. The
    /// returned graph carries no vacated edge entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::{DirectedGraph, Edge};
    ///
    /// let mut graph: DirectedGraph<char> = DirectedGraph::new();
    /// for v in ['A', 'B', 'C'] {
    ///     graph.add_vertex(v);
    /// }
    /// graph.add_edge(Edge::new('A', 'B'))?;
    /// graph.add_edge(Edge::new('B', 'C'))?;
    /// graph.add_edge(Edge::new('A', 'C'))?;
    ///
    /// let reduced = graph.path_maintaining_sub_graph(graph.vertices());
    /// assert!(reduced.has_edge(&'A', &'B'));
    /// assert!(reduced.has_edge(&'B', &'C'));
    /// assert!(!reduced.has_edge(&'A', &'C'));
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    #[must_use]
    pub fn path_maintaining_sub_graph<'v, I>(&self, vertices: I) -> DirectedGraph<V, E>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
        E: Default,
    {
        let mut graph = self.transitive_closure_of_sub_graph(vertices);
        let mut passes = 0usize;
        let mut total = 0usize;

        loop {
            passes += 1;
            let mut removed = 0usize;

            let nodes: Vec<NodeId> = graph.node_ids().collect();
            for v in nodes {
                // only edges that leave the ancestor set unchanged are dropped, so `with` holds
                let with = ancestor_count(&graph, v, None);
                let parents: Vec<NodeId> = graph.predecessors(v).collect();
                for p in parents {
                    if ancestor_count(&graph, v, Some(p)) != with {
                        continue;
                    }
                    if let Some(edge) = graph.find_edge(p, v) {
                        graph.unlink(edge);
                        removed += 1;
                        log::trace!("dropped redundant edge {p} -> {v}");
                    }
                }
            }

            total += removed;
            if removed == 0 {
                break;
            }
        }

        log::debug!("path-maintaining reduction removed {total} edges in {passes} passes");
        graph.compact();
        graph
    }

    /// Resolves a vertex subset and seeds a new graph with its vertices in source order.
    fn select<'v, I, E2>(&self, vertices: I) -> (DirectedGraph<V, E2>, Selection)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        let mut members = BitSet::new(self.node_bound());
        for v in vertices {
            if let Some(id) = self.node_id(v) {
                members.insert(id.index());
            }
        }

        let mut graph = DirectedGraph::with_capacity(members.count(), 0);
        let mut mapping = vec![None; self.node_bound()];
        for (id, vertex) in self.nodes() {
            if members.contains(id.index()) {
                mapping[id.index()] = Some(graph.add_vertex(vertex.clone()));
            }
        }

        (graph, Selection { mapping })
    }
}

/// Size of the ancestor closure of `v`, optionally ignoring the edge `skip -> v`.
fn ancestor_count<V, E>(graph: &DirectedGraph<V, E>, v: NodeId, skip: Option<NodeId>) -> usize {
    bfs_by(graph.node_bound(), [v], |n| {
        graph
            .predecessors(n)
            .filter(move |&p| !(n == v && Some(p) == skip))
    })
    .count()
}
