//! Frozen, index-based snapshot of a directed graph.
//!
//! [`SlimDirectedGraphView`] precomputes, for every vertex, its direct parents and
//! children plus its complete ancestor and descendant sets, each as a sorted index list.
//! Ancestry tests are then a binary search instead of a graph walk, which pays off when the
//! same hierarchy is queried many times (for example when propagating annotations up an
//! ontology).
//!
//! # Snapshot Semantics
//!
//! A view is built once and never changes. It does not observe later mutation of the
//! graph it was built from: after the source graph changes, the view silently answers for
//! the old graph. Rebuild it after every mutation that matters.
//!
//! # Parallel Construction
//!
//! With the `parallel` Cargo feature the per-vertex closures are computed with rayon. The
//! resulting view is identical to the serial build.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use crate::graph::{algorithms::bfs_by, DirectedGraph, GraphBase, NodeId, Predecessors, Successors};

/// An immutable, array-backed view of a directed graph's ancestry.
///
/// Vertices are numbered `0..vertex_count()` in the source graph's vertex order. Every
/// index-based query accepts any `usize`; out-of-range indices behave like a vertex with
/// no relatives. Every identity-based query treats an unknown identity the same way.
///
/// Ancestor and descendant sets include the vertex itself.
///
/// # Thread Safety
///
/// The view is never mutated after construction, so it is [`Send`] and [`Sync`] whenever
/// `W` is and can be shared freely between readers.
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, Edge, SlimDirectedGraphView};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// for v in ["root", "mid", "leaf"] {
///     graph.add_vertex(v);
/// }
/// graph.add_edge(Edge::new("root", "mid"))?;
/// graph.add_edge(Edge::new("mid", "leaf"))?;
///
/// let view = SlimDirectedGraphView::from_graph(&graph);
/// assert!(view.is_ancestor(&"root", &"leaf"));
/// assert!(view.is_ancestor(&"leaf", &"leaf"));
/// assert!(!view.is_ancestor(&"leaf", &"root"));
/// assert_eq!(view.ancestors(&"leaf").count(), 3);
/// # Ok::<(), ontograph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SlimDirectedGraphView<W> {
    vertices: Vec<W>,
    index: HashMap<W, usize>,
    parents: Vec<Vec<usize>>,
    children: Vec<Vec<usize>>,
    ancestors: Vec<Vec<usize>>,
    descendants: Vec<Vec<usize>>,
}

impl<W> SlimDirectedGraphView<W>
where
    W: Hash + Eq + Clone,
{
    /// Builds a view over a graph, keeping its vertex identities.
    #[must_use]
    pub fn from_graph<E>(graph: &DirectedGraph<W, E>) -> Self
    where
        W: Debug,
    {
        Self::from_graph_mapped(graph, W::clone)
    }

    /// Builds a view over a graph, projecting every vertex identity through `map`.
    ///
    /// This is how a view keyed by compact ids is built from a graph keyed by richer
    /// values (for example term → term id). `map` is expected to be injective; if two
    /// vertices map to the same identity, identity lookups resolve to the first of them.
    ///
    /// # Arguments
    ///
    /// * `graph` - The source graph
    /// * `map` - Projection from source identities to view identities
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::{DirectedGraph, Edge, SlimDirectedGraphView};
    ///
    /// let mut graph: DirectedGraph<String> = DirectedGraph::new();
    /// graph.add_vertex("GO:0008150".to_string());
    /// graph.add_vertex("GO:0008219".to_string());
    /// graph.add_edge(Edge::new("GO:0008150".to_string(), "GO:0008219".to_string()))?;
    ///
    /// let view = SlimDirectedGraphView::from_graph_mapped(&graph, |term| {
    ///     term.trim_start_matches("GO:").parse::<u32>().unwrap_or_default()
    /// });
    /// assert!(view.is_ancestor(&8150, &8219));
    /// assert_eq!(view.vertex_index(&8219), Some(1));
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    #[must_use]
    pub fn from_graph_mapped<V, E, F>(graph: &DirectedGraph<V, E>, mut map: F) -> Self
    where
        V: Hash + Eq + Clone + Debug,
        F: FnMut(&V) -> W,
    {
        let mut slot_to_index: Vec<Option<usize>> = vec![None; graph.node_bound()];
        let mut slots = Vec::with_capacity(graph.vertex_count());
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        let mut index = HashMap::with_capacity(graph.vertex_count());

        for (slot, vertex) in graph.nodes() {
            let i = vertices.len();
            slot_to_index[slot.index()] = Some(i);
            slots.push(slot);

            let mapped = map(vertex);
            if index.contains_key(&mapped) {
                log::warn!("vertex {vertex:?} maps onto an identity already in the view");
            } else {
                index.insert(mapped.clone(), i);
            }
            vertices.push(mapped);
        }

        let parents: Vec<Vec<usize>> = slots
            .iter()
            .map(|&slot| project(&slot_to_index, graph.predecessors(slot)))
            .collect();
        let children: Vec<Vec<usize>> = slots
            .iter()
            .map(|&slot| project(&slot_to_index, graph.successors(slot)))
            .collect();

        let ancestors = closure_table(&parents);
        let descendants = closure_table(&children);

        log::debug!(
            "built slim view: {} vertices, {} ancestor links, {} descendant links",
            vertices.len(),
            ancestors.iter().map(Vec::len).sum::<usize>(),
            descendants.iter().map(Vec::len).sum::<usize>()
        );

        SlimDirectedGraphView {
            vertices,
            index,
            parents,
            children,
            ancestors,
            descendants,
        }
    }

    /// Returns the index of a vertex identity.
    #[must_use]
    pub fn vertex_index(&self, vertex: &W) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Returns the identity at an index.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&W> {
        self.vertices.get(index)
    }

    /// Returns the number of vertices in the view.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns all identities, ordered by index.
    #[must_use]
    pub fn vertices(&self) -> &[W] {
        &self.vertices
    }

    /// Returns `true` if `ancestor` is an ancestor of `descendant` (or the same vertex).
    ///
    /// O(log n) binary search in the precomputed ancestor list.
    #[must_use]
    pub fn is_ancestor_index(&self, ancestor: usize, descendant: usize) -> bool {
        contains_sorted(&self.ancestors, descendant, ancestor)
    }

    /// Returns `true` if `descendant` is a descendant of `ancestor` (or the same vertex).
    #[must_use]
    pub fn is_descendant_index(&self, descendant: usize, ancestor: usize) -> bool {
        contains_sorted(&self.descendants, ancestor, descendant)
    }

    /// Sorted indices of the direct parents of `index`.
    #[must_use]
    pub fn parent_indices(&self, index: usize) -> &[usize] {
        row(&self.parents, index)
    }

    /// Sorted indices of the direct children of `index`.
    #[must_use]
    pub fn child_indices(&self, index: usize) -> &[usize] {
        row(&self.children, index)
    }

    /// Sorted indices of all ancestors of `index`, including `index` itself.
    #[must_use]
    pub fn ancestor_indices(&self, index: usize) -> &[usize] {
        row(&self.ancestors, index)
    }

    /// Sorted indices of all descendants of `index`, including `index` itself.
    #[must_use]
    pub fn descendant_indices(&self, index: usize) -> &[usize] {
        row(&self.descendants, index)
    }

    /// Returns `true` if `ancestor` is an ancestor of `descendant`, including when both
    /// are the same vertex. Unknown identities yield `false`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: &W, descendant: &W) -> bool {
        match (self.vertex_index(ancestor), self.vertex_index(descendant)) {
            (Some(a), Some(d)) => self.is_ancestor_index(a, d),
            _ => false,
        }
    }

    /// Returns `true` if `descendant` is a descendant of `ancestor`, including when both
    /// are the same vertex. Unknown identities yield `false`.
    #[must_use]
    pub fn is_descendant(&self, descendant: &W, ancestor: &W) -> bool {
        match (self.vertex_index(descendant), self.vertex_index(ancestor)) {
            (Some(d), Some(a)) => self.is_descendant_index(d, a),
            _ => false,
        }
    }

    /// All ancestors of a vertex, itself included, in index order.
    pub fn ancestors(&self, vertex: &W) -> impl Iterator<Item = &W> + '_ {
        self.resolve(&self.ancestors, vertex)
    }

    /// All descendants of a vertex, itself included, in index order.
    pub fn descendants(&self, vertex: &W) -> impl Iterator<Item = &W> + '_ {
        self.resolve(&self.descendants, vertex)
    }

    /// The direct parents of a vertex, in index order.
    pub fn parents(&self, vertex: &W) -> impl Iterator<Item = &W> + '_ {
        self.resolve(&self.parents, vertex)
    }

    /// The direct children of a vertex, in index order.
    pub fn children(&self, vertex: &W) -> impl Iterator<Item = &W> + '_ {
        self.resolve(&self.children, vertex)
    }

    fn resolve<'a>(&'a self, table: &'a [Vec<usize>], vertex: &W) -> impl Iterator<Item = &'a W> + 'a {
        let indices = self.vertex_index(vertex).map_or(&[][..], |i| row(table, i));
        indices.iter().filter_map(move |&i| self.vertices.get(i))
    }
}

fn row(table: &[Vec<usize>], index: usize) -> &[usize] {
    table.get(index).map_or(&[][..], Vec::as_slice)
}

/// Maps graph slots to view indices, sorted and deduplicated.
fn project(slot_to_index: &[Option<usize>], ids: impl Iterator<Item = NodeId>) -> Vec<usize> {
    let mut out: Vec<usize> = ids
        .filter_map(|n| slot_to_index.get(n.index()).copied().flatten())
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn contains_sorted(table: &[Vec<usize>], index: usize, needle: usize) -> bool {
    row(table, index).binary_search(&needle).is_ok()
}

/// Sorted reachability closure (self included) of every index over `adjacency`.
fn closure_table(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let closure_of = |i: usize| -> Vec<usize> {
        let mut reached: Vec<usize> = bfs_by(adjacency.len(), [NodeId::new(i)], |n| {
            adjacency[n.index()].iter().map(|&j| NodeId::new(j))
        })
        .map(NodeId::index)
        .collect();
        reached.sort_unstable();
        reached
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..adjacency.len()).into_par_iter().map(closure_of).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..adjacency.len()).map(closure_of).collect()
    }
}

impl<W> GraphBase for SlimDirectedGraphView<W> {
    fn node_count(&self) -> usize {
        self.vertices.len()
    }

    fn node_bound(&self) -> usize {
        self.vertices.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.vertices.len()).map(NodeId::new)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.vertices.len()
    }
}

impl<W> Successors for SlimDirectedGraphView<W> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        row(&self.children, node.index()).iter().map(|&i| NodeId::new(i))
    }
}

impl<W> Predecessors for SlimDirectedGraphView<W> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        row(&self.parents, node.index()).iter().map(|&i| NodeId::new(i))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{algorithms, DirectedGraph, Direction, Edge, NodeId, SlimDirectedGraphView};

    /// root -> a, root -> b, a -> leaf, b -> leaf, plus isolated `lone`
    fn fixture() -> DirectedGraph<&'static str> {
        let mut graph = DirectedGraph::new();
        for v in ["root", "a", "b", "leaf", "lone"] {
            graph.add_vertex(v);
        }
        for (s, d) in [("root", "a"), ("root", "b"), ("a", "leaf"), ("b", "leaf")] {
            graph.add_edge(Edge::new(s, d)).unwrap();
        }
        graph
    }

    #[test]
    fn test_indices_follow_graph_order() {
        let view = SlimDirectedGraphView::from_graph(&fixture());
        assert_eq!(view.vertex_count(), 5);
        assert_eq!(view.vertices(), &["root", "a", "b", "leaf", "lone"]);
        assert_eq!(view.vertex_index(&"leaf"), Some(3));
        assert_eq!(view.vertex(1), Some(&"a"));
        assert_eq!(view.vertex(9), None);
        assert_eq!(view.vertex_index(&"nope"), None);
    }

    #[test]
    fn test_direct_relations() {
        let view = SlimDirectedGraphView::from_graph(&fixture());
        assert_eq!(view.parent_indices(3), &[1, 2]);
        assert_eq!(view.child_indices(0), &[1, 2]);
        assert!(view.parent_indices(0).is_empty());
        assert!(view.child_indices(42).is_empty());
        assert_eq!(view.children(&"root").copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(view.parents(&"leaf").copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_closures_include_self_and_are_sorted() {
        let view = SlimDirectedGraphView::from_graph(&fixture());
        assert_eq!(view.ancestor_indices(3), &[0, 1, 2, 3]);
        assert_eq!(view.descendant_indices(0), &[0, 1, 2, 3]);
        assert_eq!(view.ancestor_indices(4), &[4]);
        assert_eq!(view.descendant_indices(4), &[4]);
        for i in 0..view.vertex_count() {
            assert!(view.is_ancestor_index(i, i));
            assert!(view.is_descendant_index(i, i));
        }
    }

    #[test]
    fn test_identity_queries() {
        let view = SlimDirectedGraphView::from_graph(&fixture());
        assert!(view.is_ancestor(&"root", &"leaf"));
        assert!(!view.is_ancestor(&"leaf", &"root"));
        assert!(view.is_descendant(&"leaf", &"a"));
        assert!(!view.is_descendant(&"a", &"b"));
        assert!(!view.is_ancestor(&"lone", &"leaf"));
        assert!(!view.is_ancestor(&"ghost", &"leaf"));
        assert_eq!(view.ancestors(&"ghost").count(), 0);
        assert_eq!(
            view.descendants(&"a").copied().collect::<Vec<_>>(),
            vec!["a", "leaf"]
        );
    }

    #[test]
    fn test_snapshot_ignores_later_mutation() {
        let mut graph = fixture();
        let view = SlimDirectedGraphView::from_graph(&graph);
        graph.remove_vertex(&"a");
        graph.add_vertex("new");
        assert!(view.is_ancestor(&"a", &"leaf"));
        assert_eq!(view.vertex_index(&"new"), None);
    }

    #[test]
    fn test_built_from_graph_with_vacated_slots() {
        let mut graph = fixture();
        graph.remove_vertex(&"b");
        let view = SlimDirectedGraphView::from_graph(&graph);
        assert_eq!(view.vertices(), &["root", "a", "leaf", "lone"]);
        assert_eq!(view.ancestor_indices(2), &[0, 1, 2]);
    }

    #[test]
    fn test_mapped_identities() {
        let view = SlimDirectedGraphView::from_graph_mapped(&fixture(), |v| v.len());
        // "root" and "leaf" and "lone" collide at length 4; the first wins
        assert_eq!(view.vertex_index(&4), Some(0));
        assert_eq!(view.vertex_count(), 5);
        assert!(view.is_ancestor(&4, &1));
        assert!(!view.is_ancestor(&1, &4));
    }

    #[test]
    fn test_cycles_share_closures() {
        let mut graph: DirectedGraph<u8> = DirectedGraph::new();
        for v in 0..3 {
            graph.add_vertex(v);
        }
        for (s, d) in [(0, 1), (1, 2), (2, 0)] {
            graph.add_edge(Edge::new(s, d)).unwrap();
        }
        let view = SlimDirectedGraphView::from_graph(&graph);
        for i in 0..3 {
            assert_eq!(view.ancestor_indices(i), &[0, 1, 2]);
            assert_eq!(view.descendant_indices(i), &[0, 1, 2]);
        }
    }

    #[test]
    fn test_generic_algorithms_run_on_view() {
        let view = SlimDirectedGraphView::from_graph(&fixture());
        let order = algorithms::topological_order(&view);
        assert_eq!(order.len(), 5);
        let up: Vec<_> = algorithms::bfs(&view, [NodeId::new(3)], Direction::Backward)
            .map(NodeId::index)
            .collect();
        assert_eq!(up, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_view_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SlimDirectedGraphView<String>>();
    }
}
