//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the mutable graph keyed by caller-supplied vertex
//! identities. Vertices live in insertion-ordered slots, edges in an arena; each slot keeps
//! the ids of its incoming and outgoing edges, so an edge is referenced exactly twice (once
//! by its source, once by its destination) and both references are always removed together.
//!
//! Removing a vertex or an edge vacates its slot instead of compacting storage. Existing
//! [`NodeId`]s and [`EdgeId`]s therefore stay valid until the element they name is removed,
//! or until [`DirectedGraph::compact`] reclaims the vacated slots and renumbers everything.

use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    graph::{
        algorithms,
        edge::{Edge, EdgeId, EdgeRef, DEFAULT_WEIGHT},
        node::NodeId,
        traits::{Direction, EdgeWeights, GraphBase, Neighbours, Predecessors, Successors},
    },
    Error, Result,
};

/// Internal storage for edge endpoints and payload.
#[derive(Debug, Clone)]
pub(crate) struct EdgeData<E> {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) weight: i64,
    pub(crate) data: E,
}

/// Internal per-vertex storage: the identity and both adjacency lists.
#[derive(Debug, Clone)]
pub(crate) struct VertexSlot<V> {
    pub(crate) vertex: V,
    pub(crate) incoming: Vec<EdgeId>,
    pub(crate) outgoing: Vec<EdgeId>,
}

/// A directed graph over caller-supplied vertex identities.
///
/// `DirectedGraph` is the engine's mutable graph. It supports:
///
/// - Idempotent vertex insertion keyed by identity (`V: Hash + Eq`)
/// - Weighted edges with an optional payload `E` (for example a relation type)
/// - Vertex removal, with or without splicing the vertex's parents onto its children
/// - Vertex merging for collapsing equivalent terms onto a representative
/// - Forward (children) and backward (parents) adjacency in insertion order
///
/// The generic algorithms in [`algorithms`](crate::graph::algorithms) work on it through
/// the [`GraphBase`], [`Successors`], [`Predecessors`] and [`EdgeWeights`] traits. The
/// convenience methods on this type wrap them so callers can stay in terms of identities.
///
/// # Memory Layout
///
/// - Vertex slots are stored in a vector indexed by [`NodeId`], in insertion order
/// - An identity → `NodeId` map provides O(1) membership lookups
/// - Edges are stored in an arena indexed by [`EdgeId`]
/// - Adjacency lists (outgoing/incoming) store `EdgeId` references into the arena
///
/// # Multi-edges
///
/// The graph assumes at most one edge per ordered vertex pair. This is not checked by
/// [`add_edge`](Self::add_edge); [`remove_connections`](Self::remove_connections) detects
/// violations and refuses to proceed.
///
/// # Thread Safety
///
/// `DirectedGraph<V, E>` is [`Send`] and [`Sync`] when `V` and `E` are. Mutation needs
/// `&mut self`, so concurrent readers are only possible while no writer exists; callers
/// sharing a graph between threads must synchronize writers externally.
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, Edge};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_vertex("biological_process");
/// graph.add_vertex("cell death");
/// graph.add_vertex("apoptosis");
///
/// graph.add_edge(Edge::new("biological_process", "cell death"))?;
/// graph.add_edge(Edge::new("cell death", "apoptosis"))?;
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.exists_path(&"biological_process", &"apoptosis"));
///
/// let parents: Vec<_> = graph.parents(&"apoptosis")?.collect();
/// assert_eq!(parents, vec![&"cell death"]);
/// # Ok::<(), ontograph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, E = ()> {
    /// Vertex slots; `None` marks a removed vertex
    pub(crate) slots: Vec<Option<VertexSlot<V>>>,
    /// Identity lookup
    pub(crate) index: HashMap<V, NodeId>,
    /// Edge arena; `None` marks a removed edge
    pub(crate) edges: Vec<Option<EdgeData<E>>>,
    /// Number of `Some` entries in `edges`
    pub(crate) live_edges: usize,
}

impl<V, E> Default for DirectedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> DirectedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
{
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            slots: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    /// Creates a new directed graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of vertices
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            slots: Vec::with_capacity(node_capacity),
            index: HashMap::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            live_edges: 0,
        }
    }

    /// Adds a vertex, or returns the existing `NodeId` if the identity is already present.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex identity to insert
    ///
    /// # Returns
    ///
    /// The `NodeId` of the (new or existing) vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    /// let first = graph.add_vertex(10);
    /// let again = graph.add_vertex(10);
    ///
    /// assert_eq!(first, again);
    /// assert_eq!(graph.vertex_count(), 1);
    /// ```
    pub fn add_vertex(&mut self, vertex: V) -> NodeId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }

        let id = NodeId::new(self.slots.len());
        self.index.insert(vertex.clone(), id);
        self.slots.push(Some(VertexSlot {
            vertex,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }));
        id
    }

    /// Returns `true` if the identity is a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the `NodeId` of a vertex identity, if present.
    #[must_use]
    pub fn node_id(&self, vertex: &V) -> Option<NodeId> {
        self.index.get(vertex).copied()
    }

    /// Returns the identity stored in a slot, if the slot is live.
    #[must_use]
    pub fn vertex(&self, node: NodeId) -> Option<&V> {
        self.slot(node).map(|slot| &slot.vertex)
    }

    /// Returns an iterator over all vertex identities in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.slots.iter().flatten().map(|slot| &slot.vertex)
    }

    /// Returns an iterator over `(NodeId, &V)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &V)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (NodeId::new(i), &s.vertex)))
    }

    /// Returns the number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Removes a vertex together with all incident edges.
    ///
    /// # Arguments
    ///
    /// * `vertex` - The vertex to remove
    ///
    /// # Returns
    ///
    /// `true` if the vertex was present and has been removed, `false` if it was not a
    /// member (in which case the graph is unchanged).
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(id) = self.node_id(vertex) else {
            return false;
        };

        let incident: Vec<EdgeId> = self
            .slot(id)
            .map(|slot| slot.incoming.iter().chain(&slot.outgoing).copied().collect())
            .unwrap_or_default();
        for edge in incident {
            self.unlink(edge);
        }

        self.slots[id.index()] = None;
        self.index.remove(vertex);
        true
    }

    /// Removes a vertex after connecting each of its parents to each of its children.
    ///
    /// For every pair (in-edge source, out-edge destination) that is not yet connected a new
    /// edge with the default weight and payload is added, skipping pairs that would form a
    /// self-loop. The vertex is then removed as by [`remove_vertex`](Self::remove_vertex).
    /// Reachability between all remaining vertices is preserved.
    ///
    /// Runs in O(in-degree × out-degree) edge insertions.
    ///
    /// # Returns
    ///
    /// `true` if the vertex was present and has been removed.
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
    ///
    /// assert!(graph.remove_vertex_maintain_connectivity(&'B'));
    /// assert!(graph.has_edge(&'A', &'C'));
    /// assert_eq!(graph.edge_count(), 1);
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    pub fn remove_vertex_maintain_connectivity(&mut self, vertex: &V) -> bool
    where
        E: Default,
    {
        let Some(id) = self.node_id(vertex) else {
            return false;
        };

        let sources: Vec<NodeId> = self.predecessors(id).filter(|&s| s != id).collect();
        let dests: Vec<NodeId> = self.successors(id).filter(|&d| d != id).collect();

        let mut added = 0usize;
        for &source in &sources {
            for &dest in &dests {
                if source != dest && self.find_edge(source, dest).is_none() {
                    self.link(source, dest, DEFAULT_WEIGHT, E::default());
                    added += 1;
                }
            }
        }

        log::debug!(
            "spliced out {vertex:?}: {} parents x {} children, {added} edges added",
            sources.len(),
            dests.len()
        );
        self.remove_vertex(vertex)
    }

    /// Adds a directed edge between two member vertices.
    ///
    /// The edge is appended to its source's outgoing list and its destination's incoming
    /// list. Parallel edges are not detected here; callers own the one-edge-per-pair
    /// invariant.
    ///
    /// # Arguments
    ///
    /// * `edge` - The edge to insert
    ///
    /// # Returns
    ///
    /// The `EdgeId` assigned to the new edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, edge: Edge<V, E>) -> Result<EdgeId> {
        let (source, dest, weight, data) = edge.into_parts();
        match (self.node_id(&source), self.node_id(&dest)) {
            (Some(s), Some(d)) => Ok(self.link(s, d, weight, data)),
            _ => Err(Error::InvalidEdge {
                from: format!("{source:?}"),
                to: format!("{dest:?}"),
            }),
        }
    }

    /// Returns `true` if an edge `source -> dest` exists.
    ///
    /// Scans the outgoing edges of `source`. Absent vertices simply yield `false`.
    #[must_use]
    pub fn has_edge(&self, source: &V, dest: &V) -> bool {
        self.get_edge(source, dest).is_some()
    }

    /// Returns the edge `source -> dest`, if one exists.
    #[must_use]
    pub fn get_edge(&self, source: &V, dest: &V) -> Option<EdgeRef<'_, V, E>> {
        let s = self.node_id(source)?;
        let d = self.node_id(dest)?;
        self.find_edge(s, d).and_then(|id| self.edge(id))
    }

    /// Returns the edge stored under an arena id, if it is still live.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<EdgeRef<'_, V, E>> {
        let data = self.edges.get(id.index())?.as_ref()?;
        Some(EdgeRef {
            id,
            source_id: data.source,
            dest_id: data.target,
            source: &self.slot(data.source)?.vertex,
            dest: &self.slot(data.target)?.vertex,
            weight: data.weight,
            data: &data.data,
        })
    }

    /// Returns an iterator over all live edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, V, E>> + '_ {
        (0..self.edges.len()).filter_map(move |i| self.edge(EdgeId::new(i)))
    }

    /// Removes the edge `source -> dest` and returns it as an owned [`Edge`].
    ///
    /// Returns `None` when no such edge exists.
    pub fn remove_edge(&mut self, source: &V, dest: &V) -> Option<Edge<V, E>> {
        let id = self.find_edge(self.node_id(source)?, self.node_id(dest)?)?;
        let data = self.unlink(id)?;
        Some(Edge::with_data(source.clone(), dest.clone(), data.data).with_weight(data.weight))
    }

    /// Removes every edge between `a` and `b`, in both directions.
    ///
    /// # Returns
    ///
    /// The number of edges removed (0, 1 or 2).
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if either vertex is not in the graph
    /// - [`Error::TooManyEdges`] if more than one edge runs in the same direction between
    ///   the pair. This signals a broken one-edge-per-pair invariant; nothing is removed.
    pub fn remove_connections(&mut self, a: &V, b: &V) -> Result<usize> {
        let a_id = self.node_id(a).ok_or_else(|| vertex_not_found!(a))?;
        let b_id = self.node_id(b).ok_or_else(|| vertex_not_found!(b))?;

        let forward = self.edges_between(a_id, b_id);
        let backward = if a_id == b_id {
            Vec::new()
        } else {
            self.edges_between(b_id, a_id)
        };

        for (edges, from, to) in [(&forward, a, b), (&backward, b, a)] {
            if edges.len() > 1 {
                return Err(Error::TooManyEdges {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                    count: edges.len(),
                });
            }
        }

        let mut removed = 0;
        for id in forward.into_iter().chain(backward) {
            if self.unlink(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Returns the number of incoming edges of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn number_of_in_edges(&self, vertex: &V) -> Result<usize> {
        self.in_degree(vertex).ok_or_else(|| vertex_not_found!(vertex))
    }

    /// Returns the number of outgoing edges of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn number_of_out_edges(&self, vertex: &V) -> Result<usize> {
        self.out_degree(vertex).ok_or_else(|| vertex_not_found!(vertex))
    }

    /// Returns the in-degree of a vertex, or `None` if it is not in the graph.
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.slot_of(vertex).map(|slot| slot.incoming.len())
    }

    /// Returns the out-degree of a vertex, or `None` if it is not in the graph.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.slot_of(vertex).map(|slot| slot.outgoing.len())
    }

    /// Returns the parents (sources of incoming edges) of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn parents(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_> {
        Ok(self.in_edges(vertex)?.map(|edge| edge.source()))
    }

    /// Returns the children (destinations of outgoing edges) of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn children(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_> {
        Ok(self.out_edges(vertex)?.map(|edge| edge.dest()))
    }

    /// Returns the incoming edges of a vertex in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn in_edges(&self, vertex: &V) -> Result<impl Iterator<Item = EdgeRef<'_, V, E>> + '_> {
        let slot = self.slot_of(vertex).ok_or_else(|| vertex_not_found!(vertex))?;
        Ok(slot.incoming.iter().filter_map(move |&id| self.edge(id)))
    }

    /// Returns the outgoing edges of a vertex in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn out_edges(&self, vertex: &V) -> Result<impl Iterator<Item = EdgeRef<'_, V, E>> + '_> {
        let slot = self.slot_of(vertex).ok_or_else(|| vertex_not_found!(vertex))?;
        Ok(slot.outgoing.iter().filter_map(move |&id| self.edge(id)))
    }

    /// Computes the local clustering coefficient of a vertex (Watts-Strogatz, directed).
    ///
    /// The neighbourhood of `v` is the set of its distinct parents and children, excluding
    /// `v` itself. With `k` neighbours the coefficient is the number of directed edges
    /// between distinct neighbours divided by `k * (k - 1)`.
    ///
    /// Vertices with fewer than two neighbours have a coefficient of `0.0` (not `1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    #[allow(clippy::cast_precision_loss)]
    pub fn clustering_coefficient(&self, vertex: &V) -> Result<f64> {
        let id = self.node_id(vertex).ok_or_else(|| vertex_not_found!(vertex))?;

        let mut neighbourhood: Vec<NodeId> = Vec::new();
        let mut seen = HashSet::new();
        for n in self.predecessors(id).chain(self.successors(id)) {
            if n != id && seen.insert(n) {
                neighbourhood.push(n);
            }
        }

        let k = neighbourhood.len();
        if k < 2 {
            return Ok(0.0);
        }

        let mut links = 0usize;
        for &u in &neighbourhood {
            links += self
                .successors(u)
                .filter(|&w| w != u && seen.contains(&w))
                .count();
        }

        Ok(links as f64 / (k * (k - 1)) as f64)
    }

    /// Merges a set of equivalent vertices into a representative.
    ///
    /// Every edge incident to an equivalent vertex is redirected to `representative`, then
    /// the equivalent vertices are removed. Redirected edges that would duplicate an existing
    /// edge, or that would become a self-loop on the representative, are dropped, so the
    /// one-edge-per-pair invariant survives the merge. Listing the representative among the
    /// equivalents has no effect.
    ///
    /// The graph is [compacted](Self::compact) afterwards, so `NodeId`s and `EdgeId`s
    /// obtained before the merge are invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the representative or any equivalent is not in
    /// the graph. All identities are validated before the graph is modified.
    pub fn merge_vertices<'v, I>(&mut self, representative: &V, equivalents: I) -> Result<()>
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
    {
        let rep = self
            .node_id(representative)
            .ok_or_else(|| vertex_not_found!(representative))?;

        let mut merged: Vec<NodeId> = Vec::new();
        for eq in equivalents {
            let id = self.node_id(eq).ok_or_else(|| vertex_not_found!(eq))?;
            if id != rep && !merged.contains(&id) {
                merged.push(id);
            }
        }

        let mut redirected = 0usize;
        let mut dropped = 0usize;
        for &eq in &merged {
            let incident: Vec<EdgeId> = self
                .slot(eq)
                .map(|slot| slot.incoming.iter().chain(&slot.outgoing).copied().collect())
                .unwrap_or_default();

            for edge in incident {
                // self-loops on `eq` show up in both lists
                let Some(data) = self.unlink(edge) else {
                    continue;
                };
                let source = if data.source == eq { rep } else { data.source };
                let target = if data.target == eq { rep } else { data.target };

                if source == target || self.find_edge(source, target).is_some() {
                    dropped += 1;
                } else {
                    self.link(source, target, data.weight, data.data);
                    redirected += 1;
                }
            }

            if let Some(slot) = self.slots[eq.index()].take() {
                self.index.remove(&slot.vertex);
            }
        }

        log::debug!(
            "merged {} vertices into {representative:?}: {redirected} edges redirected, {dropped} dropped",
            merged.len()
        );
        self.compact();
        Ok(())
    }

    /// Reclaims vacated vertex slots and edge arena entries in place.
    ///
    /// Live vertices are renumbered densely in their current order and live edges likewise,
    /// so afterwards [`node_bound`](GraphBase::node_bound) equals
    /// [`vertex_count`](Self::vertex_count). Adjacency lists keep their order. Does nothing
    /// when there is nothing to reclaim.
    ///
    /// Every previously obtained [`NodeId`] and [`EdgeId`] is invalidated; look them up
    /// again through [`node_id`](Self::node_id) or [`get_edge`](Self::get_edge).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::{graph::GraphBase, DirectedGraph, Edge};
    ///
    /// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    /// graph.add_vertex(0);
    /// for i in 1..100 {
    ///     graph.add_vertex(i);
    ///     graph.add_edge(Edge::new(0, i))?;
    ///     graph.remove_vertex(&i);
    /// }
    /// assert_eq!(graph.node_bound(), 100);
    ///
    /// graph.compact();
    /// assert_eq!(graph.node_bound(), 1);
    /// assert_eq!(graph.node_id(&0).map(|n| n.index()), Some(0));
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    pub fn compact(&mut self) {
        let vacant_slots = self.slots.len() - self.index.len();
        let vacant_edges = self.edges.len() - self.live_edges;
        if vacant_slots == 0 && vacant_edges == 0 {
            return;
        }

        let mut renumbered: Vec<Option<NodeId>> = vec![None; self.slots.len()];
        let mut slots = Vec::with_capacity(self.index.len());
        for (old, slot) in std::mem::take(&mut self.slots).into_iter().enumerate() {
            let Some(mut slot) = slot else { continue };
            let id = NodeId::new(slots.len());
            if let Some(entry) = self.index.get_mut(&slot.vertex) {
                *entry = id;
            }
            slot.incoming.clear();
            slot.outgoing.clear();
            renumbered[old] = Some(id);
            slots.push(Some(slot));
        }
        self.slots = slots;

        // arena order is insertion order, so rebuilt adjacency lists keep theirs
        let old_edges = std::mem::take(&mut self.edges);
        self.edges.reserve(self.live_edges);
        self.live_edges = 0;
        for data in old_edges.into_iter().flatten() {
            let source = renumbered[data.source.index()];
            let target = renumbered[data.target.index()];
            if let (Some(source), Some(target)) = (source, target) {
                self.link(source, target, data.weight, data.data);
            }
        }

        log::debug!(
            "compacted graph: reclaimed {vacant_slots} vertex slots and {vacant_edges} edge entries"
        );
    }

    fn slot_of(&self, vertex: &V) -> Option<&VertexSlot<V>> {
        self.node_id(vertex).and_then(|id| self.slot(id))
    }

    /// Returns the first edge `source -> target`, scanning `source`'s outgoing list.
    pub(crate) fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.slot(source)?
            .outgoing
            .iter()
            .copied()
            .find(|&id| self.edge_data(id).is_some_and(|e| e.target == target))
    }

    fn edges_between(&self, source: NodeId, target: NodeId) -> Vec<EdgeId> {
        self.slot(source)
            .map(|slot| {
                slot.outgoing
                    .iter()
                    .copied()
                    .filter(|&id| self.edge_data(id).is_some_and(|e| e.target == target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends an edge between two live slots without validation.
    pub(crate) fn link(&mut self, source: NodeId, target: NodeId, weight: i64, data: E) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeData {
            source,
            target,
            weight,
            data,
        }));
        self.live_edges += 1;

        if let Some(slot) = self.slots[source.index()].as_mut() {
            slot.outgoing.push(id);
        }
        if let Some(slot) = self.slots[target.index()].as_mut() {
            slot.incoming.push(id);
        }
        id
    }

    /// Removes an edge from the arena and from both adjacency lists.
    pub(crate) fn unlink(&mut self, id: EdgeId) -> Option<EdgeData<E>> {
        let data = self.edges.get_mut(id.index())?.take()?;
        self.live_edges -= 1;

        if let Some(slot) = self.slots[data.source.index()].as_mut() {
            slot.outgoing.retain(|&e| e != id);
        }
        if let Some(slot) = self.slots[data.target.index()].as_mut() {
            slot.incoming.retain(|&e| e != id);
        }
        Some(data)
    }
}

// Algorithm convenience methods
impl<V, E> DirectedGraph<V, E>
where
    V: Hash + Eq + Clone + Debug,
{
    /// Breadth-first search from a set of start vertices.
    ///
    /// The visitor is called once per discovered vertex, start vertices included, in
    /// discovery order. Returning `false` stops the traversal. Start identities that are
    /// not in the graph are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ontograph::{DirectedGraph, Direction, Edge};
    ///
    /// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    /// for v in ["root", "a", "b", "leaf"] {
    ///     graph.add_vertex(v);
    /// }
    /// graph.add_edge(Edge::new("root", "a"))?;
    /// graph.add_edge(Edge::new("root", "b"))?;
    /// graph.add_edge(Edge::new("a", "leaf"))?;
    ///
    /// let mut order = Vec::new();
    /// graph.bfs([&"root"], Direction::Forward, |v| {
    ///     order.push(*v);
    ///     true
    /// });
    /// assert_eq!(order, vec!["root", "a", "b", "leaf"]);
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    pub fn bfs<'v, I, F>(&self, starts: I, direction: Direction, mut visitor: F)
    where
        I: IntoIterator<Item = &'v V>,
        V: 'v,
        F: FnMut(&V) -> bool,
    {
        let starts: Vec<NodeId> = starts.into_iter().filter_map(|v| self.node_id(v)).collect();
        algorithms::bfs_visit(self, starts, direction, |node| {
            self.vertex(node).map_or(true, |v| visitor(v))
        });
    }

    /// Depth-first search from a start vertex.
    ///
    /// The visitor is called once per reachable vertex; returning `false` stops the
    /// traversal. An absent start vertex visits nothing.
    pub fn dfs<F>(&self, start: &V, direction: Direction, mut visitor: F)
    where
        F: FnMut(&V) -> bool,
    {
        let Some(start) = self.node_id(start) else {
            return;
        };
        algorithms::dfs_visit(self, start, direction, |node| {
            self.vertex(node).map_or(true, |v| visitor(v))
        });
    }

    /// Returns `true` if `dest` is reachable from `source` following edge direction.
    ///
    /// Every vertex reaches itself. Absent vertices reach nothing.
    #[must_use]
    pub fn exists_path(&self, source: &V, dest: &V) -> bool {
        match (self.node_id(source), self.node_id(dest)) {
            (Some(s), Some(d)) => algorithms::exists_path(self, s, d),
            _ => false,
        }
    }

    /// Computes DFS shortcut links from `start`.
    ///
    /// See [`algorithms::dfs_shortcut_links`](crate::graph::algorithms::dfs_shortcut_links)
    /// for the semantics. An absent start yields an empty map.
    #[must_use]
    pub fn dfs_shortcut_links(&self, start: &V, direction: Direction) -> HashMap<&V, Option<&V>> {
        let Some(start) = self.node_id(start) else {
            return HashMap::new();
        };

        let links =
            algorithms::dfs_shortcut_links(self.node_bound(), start, |n| self.neighbours(n, direction));
        links
            .into_iter()
            .filter_map(|(from, to)| {
                let from = self.vertex(from)?;
                Some((from, to.and_then(|t| self.vertex(t))))
            })
            .collect()
    }

    /// Returns the vertices in topological order (Kahn's algorithm).
    ///
    /// If the graph has a cycle the returned order is shorter than
    /// [`vertex_count`](Self::vertex_count): vertices on a cycle, and vertices only reachable
    /// through one, are left out. Checking the length is the cycle test.
    #[must_use]
    pub fn topological_order(&self) -> Vec<&V> {
        algorithms::topological_order(self)
            .into_iter()
            .filter_map(|n| self.vertex(n))
            .collect()
    }

    /// Returns the vertices in topological order, or an error if the graph has a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] when not every vertex could be ordered.
    pub fn try_topological_order(&self) -> Result<Vec<&V>> {
        let order = self.topological_order();
        if order.len() == self.vertex_count() {
            Ok(order)
        } else {
            Err(Error::CycleDetected {
                ordered: order.len(),
                total: self.vertex_count(),
            })
        }
    }

    /// Returns the vertex and all its ancestors, in BFS order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn ancestors(&self, vertex: &V) -> Result<Vec<&V>> {
        self.closure(vertex, Direction::Backward)
    }

    /// Returns the vertex and all its descendants, in BFS order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the vertex is not in the graph.
    pub fn descendants(&self, vertex: &V) -> Result<Vec<&V>> {
        self.closure(vertex, Direction::Forward)
    }

    fn closure(&self, vertex: &V, direction: Direction) -> Result<Vec<&V>> {
        let id = self.node_id(vertex).ok_or_else(|| vertex_not_found!(vertex))?;
        Ok(algorithms::reachable(self, id, direction)
            .into_iter()
            .filter_map(|n| self.vertex(n))
            .collect())
    }

    /// Dijkstra single-source shortest paths.
    ///
    /// Requires non-negative weights. The visitor receives each reachable vertex once, in
    /// non-decreasing distance order, with the path from `source` (inclusive at both ends)
    /// and the distance. Equal distances are reported in the order they were queued.
    /// Returning `false` stops the search. With `against_flow` the search follows incoming
    /// edges instead of outgoing ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` is not in the graph.
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
    /// graph.add_edge(Edge::weighted('A', 'B', 1))?;
    /// graph.add_edge(Edge::weighted('B', 'C', 2))?;
    /// graph.add_edge(Edge::weighted('A', 'C', 5))?;
    ///
    /// let mut to_c = None;
    /// graph.single_source_shortest_path(&'A', false, |v, path, dist| {
    ///     if *v == 'C' {
    ///         to_c = Some((path.iter().map(|p| **p).collect::<String>(), dist));
    ///     }
    ///     true
    /// })?;
    /// assert_eq!(to_c, Some(("ABC".to_string(), 3)));
    /// # Ok::<(), ontograph::Error>(())
    /// ```
    pub fn single_source_shortest_path<F>(
        &self,
        source: &V,
        against_flow: bool,
        mut visitor: F,
    ) -> Result<()>
    where
        F: FnMut(&V, &[&V], i64) -> bool,
    {
        let source = self.node_id(source).ok_or_else(|| vertex_not_found!(source))?;
        let direction = Direction::from_against_flow(against_flow);
        algorithms::dijkstra(self, source, direction, |node, path, distance| {
            self.visit_path(node, path, distance, &mut visitor)
        });
        Ok(())
    }

    /// Bellman-Ford single-source paths with every weight multiplied by `weight_multiplier`.
    ///
    /// Each vertex reachable from `source` is reported once, in insertion order, with its
    /// path and its relaxed distance multiplied by `weight_multiplier` again (which restores
    /// the original sign for multipliers of `1` and `-1`). Returning `false` stops reporting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` is not in the graph.
    pub fn bf<F>(&self, source: &V, weight_multiplier: i64, mut visitor: F) -> Result<()>
    where
        F: FnMut(&V, &[&V], i64) -> bool,
    {
        let source = self.node_id(source).ok_or_else(|| vertex_not_found!(source))?;
        algorithms::bellman_ford(self, source, weight_multiplier, |node, path, distance| {
            self.visit_path(node, path, distance, &mut visitor)
        });
        Ok(())
    }

    /// Bellman-Ford shortest paths; tolerates negative edge weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` is not in the graph.
    pub fn single_source_shortest_path_bf<F>(&self, source: &V, visitor: F) -> Result<()>
    where
        F: FnMut(&V, &[&V], i64) -> bool,
    {
        self.bf(source, 1, visitor)
    }

    /// Longest paths from `source`, computed as Bellman-Ford over negated weights.
    ///
    /// Only meaningful on acyclic graphs. On a graph with a cycle reachable from `source`
    /// the negated weights form a negative cycle: the relaxation still terminates after
    /// |V| rounds, but the reported distances are not longest paths and no error is raised.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `source` is not in the graph.
    pub fn single_source_longest_path<F>(&self, source: &V, visitor: F) -> Result<()>
    where
        F: FnMut(&V, &[&V], i64) -> bool,
    {
        self.bf(source, -1, visitor)
    }

    fn visit_path<F>(&self, node: NodeId, path: &[NodeId], distance: i64, visitor: &mut F) -> bool
    where
        F: FnMut(&V, &[&V], i64) -> bool,
    {
        let Some(vertex) = self.vertex(node) else {
            return true;
        };
        let path: Vec<&V> = path.iter().filter_map(|&n| self.vertex(n)).collect();
        visitor(vertex, &path, distance)
    }
}

impl<V, E> GraphBase for DirectedGraph<V, E> {
    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId::new(i))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.slots.get(node.index()).is_some_and(Option::is_some)
    }
}

impl<V, E> DirectedGraph<V, E> {
    /// Returns the slot for a node id, if live.
    pub(crate) fn slot(&self, node: NodeId) -> Option<&VertexSlot<V>> {
        self.slots.get(node.index()).and_then(Option::as_ref)
    }

    pub(crate) fn edge_data(&self, id: EdgeId) -> Option<&EdgeData<E>> {
        self.edges.get(id.index()).and_then(Option::as_ref)
    }

    fn adjacency(&self, node: NodeId, outgoing: bool) -> &[EdgeId] {
        match self.slot(node) {
            Some(slot) if outgoing => slot.outgoing.as_slice(),
            Some(slot) => slot.incoming.as_slice(),
            None => &[],
        }
    }
}

impl<V, E> Successors for DirectedGraph<V, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.weighted_successors(node).map(|(n, _)| n)
    }
}

impl<V, E> Predecessors for DirectedGraph<V, E> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.weighted_predecessors(node).map(|(n, _)| n)
    }
}

impl<V, E> EdgeWeights for DirectedGraph<V, E> {
    fn weighted_successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)> {
        self.adjacency(node, true)
            .iter()
            .filter_map(move |&id| self.edge_data(id).map(|e| (e.target, e.weight)))
    }

    fn weighted_predecessors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, i64)> {
        self.adjacency(node, false)
            .iter()
            .filter_map(move |&id| self.edge_data(id).map(|e| (e.source, e.weight)))
    }
}
