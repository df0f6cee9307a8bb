//! Edge types for directed graphs.
//!
//! - [`EdgeId`] - strongly-typed index into a graph's edge arena
//! - [`Edge`] - an owned, caller-constructed edge between two vertex identities
//! - [`EdgeRef`] - a borrowed view of an edge stored in a graph
//!
//! An [`Edge`] is a request: nothing is validated until it is handed to
//! [`DirectedGraph::add_edge`](crate::DirectedGraph::add_edge), which checks that both
//! endpoints are members of that graph.

use std::fmt;

use crate::graph::NodeId;

/// The weight given to edges that do not specify one.
pub const DEFAULT_WEIGHT: i64 = 1;

/// A strongly-typed identifier for an edge within a directed graph.
///
/// Edge IDs index the graph's edge arena. Like [`NodeId`], they are never reused or
/// renumbered while the graph lives; a removed edge leaves a vacant arena entry behind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw arena index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw arena index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, weighted link from `source` to `dest`.
///
/// Edges carry an integer weight (default [`DEFAULT_WEIGHT`]) used by the weighted path
/// algorithms, and an arbitrary payload `E` such as an ontology relation type. The payload
/// defaults to `()` for plain structural graphs.
///
/// Once built an edge is immutable from the outside; the builder methods consume and
/// return it.
///
/// # Examples
///
/// ```rust
/// use ontograph::Edge;
///
/// let is_a: Edge<&str> = Edge::new("GO:0006915", "GO:0008219");
/// assert_eq!(is_a.weight(), 1);
///
/// let heavy: Edge<&str> = Edge::weighted("A", "B", 5);
/// assert_eq!(heavy.weight(), 5);
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// enum Relation { #[default] IsA, PartOf }
///
/// let part_of = Edge::with_data("nucleus", "cell", Relation::PartOf).with_weight(2);
/// assert_eq!(part_of.data(), &Relation::PartOf);
/// assert_eq!(part_of.weight(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V, E = ()> {
    source: V,
    dest: V,
    weight: i64,
    data: E,
}

impl<V, E: Default> Edge<V, E> {
    /// Creates an edge with the default weight and default payload.
    #[must_use]
    pub fn new(source: V, dest: V) -> Self {
        Self::weighted(source, dest, DEFAULT_WEIGHT)
    }

    /// Creates an edge with an explicit weight and the default payload.
    #[must_use]
    pub fn weighted(source: V, dest: V, weight: i64) -> Self {
        Edge {
            source,
            dest,
            weight,
            data: E::default(),
        }
    }
}

impl<V, E> Edge<V, E> {
    /// Creates an edge carrying `data`, with the default weight.
    #[must_use]
    pub fn with_data(source: V, dest: V, data: E) -> Self {
        Edge {
            source,
            dest,
            weight: DEFAULT_WEIGHT,
            data,
        }
    }

    /// Returns this edge with its weight replaced.
    #[must_use]
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    /// The vertex this edge leaves.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// The vertex this edge enters.
    pub fn dest(&self) -> &V {
        &self.dest
    }

    /// The weight of this edge.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// The payload of this edge.
    pub fn data(&self) -> &E {
        &self.data
    }

    pub(crate) fn into_parts(self) -> (V, V, i64, E) {
        (self.source, self.dest, self.weight, self.data)
    }
}

/// A borrowed view of an edge stored in a [`DirectedGraph`](crate::DirectedGraph).
///
/// Returned by edge lookups and edge iterators. It resolves both endpoints back to their
/// vertex identities while also exposing the internal ids for use with the generic
/// algorithms.
pub struct EdgeRef<'g, V, E> {
    pub(crate) id: EdgeId,
    pub(crate) source_id: NodeId,
    pub(crate) dest_id: NodeId,
    pub(crate) source: &'g V,
    pub(crate) dest: &'g V,
    pub(crate) weight: i64,
    pub(crate) data: &'g E,
}

impl<'g, V, E> EdgeRef<'g, V, E> {
    /// The arena id of this edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The source vertex identity.
    pub fn source(&self) -> &'g V {
        self.source
    }

    /// The destination vertex identity.
    pub fn dest(&self) -> &'g V {
        self.dest
    }

    /// The slot of the source vertex.
    pub fn source_id(&self) -> NodeId {
        self.source_id
    }

    /// The slot of the destination vertex.
    pub fn dest_id(&self) -> NodeId {
        self.dest_id
    }

    /// The weight of this edge.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// The payload of this edge.
    pub fn data(&self) -> &'g E {
        self.data
    }

    /// Clones this view into an owned [`Edge`].
    #[must_use]
    pub fn to_edge(&self) -> Edge<V, E>
    where
        V: Clone,
        E: Clone,
    {
        Edge::with_data(self.source.clone(), self.dest.clone(), self.data.clone())
            .with_weight(self.weight)
    }
}

impl<V, E> Clone for EdgeRef<'_, V, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, E> Copy for EdgeRef<'_, V, E> {}

impl<V: fmt::Debug, E> fmt::Debug for EdgeRef<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("source", self.source)
            .field("dest", self.dest)
            .field("weight", &self.weight)
            .finish()
    }
}
