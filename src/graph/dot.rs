//! DOT (Graphviz) rendering.
//!
//! The engine's only text serialization. Styling is left entirely to the caller through a
//! [`DotAttributes`] provider, which may attach an attribute list to the graph, to each
//! node and to each edge. Nodes are named `n<slot>` after their [`NodeId`](crate::NodeId),
//! so names are stable across renders of the same graph.
//!
//! ```text
//! digraph G {
//!     rankdir=BT;
//!
//!     n0 [label="biological_process"];
//!     n1 [label="cell death"];
//!
//!     n0 -> n1 [label="is_a"];
//! }
//! ```

use std::{
    fmt::{Debug, Display, Write as _},
    hash::Hash,
    io,
};

use crate::{graph::DirectedGraph, utils::escape_dot, Result};

/// Supplies optional DOT attribute lists while a graph is rendered.
///
/// Every method returns the attribute list *without* surrounding brackets, for example
/// `label="cell death", shape=box`, or `None` to emit nothing. Values are inserted verbatim;
/// use [`escape_dot`] on any free text placed inside quotes.
///
/// The unit type `()` is the provider that attaches nothing.
///
/// # Examples
///
/// ```rust
/// use ontograph::{graph::dot::{to_dot, DotAttributes}, DirectedGraph, Edge};
///
/// struct Relations;
///
/// impl DotAttributes<&str, &str> for Relations {
///     fn graph_attributes(&self) -> Option<String> {
///         Some("rankdir=BT".to_string())
///     }
///
///     fn edge_attributes(&self, _: &&str, _: &&str, relation: &&str) -> Option<String> {
///         Some(format!("label=\"{relation}\""))
///     }
/// }
///
/// let mut graph: DirectedGraph<&str, &str> = DirectedGraph::new();
/// graph.add_vertex("cell");
/// graph.add_vertex("nucleus");
/// graph.add_edge(Edge::with_data("cell", "nucleus", "has_part"))?;
///
/// let dot = to_dot(&graph, &Relations);
/// assert!(dot.contains("    rankdir=BT;"));
/// assert!(dot.contains("    n0 -> n1 [label=\"has_part\"];"));
/// # Ok::<(), ontograph::Error>(())
/// ```
pub trait DotAttributes<V, E> {
    /// Attributes for the graph as a whole, emitted as one statement after the header.
    fn graph_attributes(&self) -> Option<String> {
        None
    }

    /// Attributes for one node.
    fn node_attributes(&self, _vertex: &V) -> Option<String> {
        None
    }

    /// Attributes for one edge.
    fn edge_attributes(&self, _source: &V, _dest: &V, _data: &E) -> Option<String> {
        None
    }
}

impl<V, E> DotAttributes<V, E> for () {}

/// Labels every node with its identity's [`Display`] form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelAttributes;

impl<V: Display, E> DotAttributes<V, E> for LabelAttributes {
    fn node_attributes(&self, vertex: &V) -> Option<String> {
        Some(format!("label=\"{}\"", escape_dot(&vertex.to_string())))
    }
}

/// Renders a graph as DOT text.
///
/// Nodes are listed in vertex order, then edges in insertion order.
#[must_use]
pub fn to_dot<V, E, P>(graph: &DirectedGraph<V, E>, provider: &P) -> String
where
    V: Hash + Eq + Clone + Debug,
    P: DotAttributes<V, E> + ?Sized,
{
    let mut dot = String::new();

    dot.push_str("digraph G {\n");
    if let Some(attrs) = provider.graph_attributes() {
        let _ = writeln!(dot, "    {attrs};");
        dot.push('\n');
    }

    for (id, vertex) in graph.nodes() {
        match provider.node_attributes(vertex) {
            Some(attrs) => {
                let _ = writeln!(dot, "    {id} [{attrs}];");
            }
            None => {
                let _ = writeln!(dot, "    {id};");
            }
        }
    }

    dot.push('\n');

    for edge in graph.edges() {
        let (s, d) = (edge.source_id(), edge.dest_id());
        match provider.edge_attributes(edge.source(), edge.dest(), edge.data()) {
            Some(attrs) => {
                let _ = writeln!(dot, "    {s} -> {d} [{attrs}];");
            }
            None => {
                let _ = writeln!(dot, "    {s} -> {d};");
            }
        }
    }

    dot.push_str("}\n");
    dot
}

/// Renders a graph as DOT text into `writer`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if writing fails.
pub fn write_dot<V, E, W, P>(graph: &DirectedGraph<V, E>, writer: &mut W, provider: &P) -> Result<()>
where
    V: Hash + Eq + Clone + Debug,
    W: io::Write + ?Sized,
    P: DotAttributes<V, E> + ?Sized,
{
    writer.write_all(to_dot(graph, provider).as_bytes())?;
    writer.flush()?;
    Ok(())
}
