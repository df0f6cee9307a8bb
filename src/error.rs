use thiserror::Error;

/// Builds an [`Error::VertexNotFound`] from any `Debug` vertex identity.
///
/// ```rust, ignore
/// let id = self.node_id(vertex).ok_or_else(|| vertex_not_found!(vertex))?;
/// ```
macro_rules! vertex_not_found {
    ($vertex:expr) => {
        crate::Error::VertexNotFound(format!("{:?}", $vertex))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Graph operations either succeed deterministically or fail with one of the variants below;
/// nothing in the engine is retried or recovered internally. Vertex identities are opaque to
/// the library, so offending vertices are rendered into messages through their `Debug`
/// implementation.
///
/// # Error Categories
///
/// ## Invalid Arguments
/// - [`Error::VertexNotFound`] - A named vertex is not a member of the graph
/// - [`Error::InvalidEdge`] - An edge references an endpoint that is not in the graph
///
/// ## Invariant Violations
/// - [`Error::TooManyEdges`] - More than one parallel edge between an ordered vertex pair
///
/// ## Structural Results
/// - [`Error::CycleDetected`] - A topological order was requested on a cyclic graph
///
/// ## I/O
/// - [`Error::Io`] - Writing a DOT rendering failed
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, Edge, Error};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_vertex("A");
///
/// match graph.add_edge(Edge::new("A", "B")) {
///     Ok(_) => println!("edge added"),
///     Err(Error::InvalidEdge { from, to }) => println!("cannot link {from} -> {to}"),
///     Err(e) => println!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The requested vertex is not a member of the graph.
    ///
    /// Raised by operations that need an existing vertex to work on, such as neighbour
    /// queries, `remove_connections` or `merge_vertices`. The payload is the `Debug`
    /// rendering of the vertex identity.
    #[error("vertex {0} does not exist in the graph")]
    VertexNotFound(String),

    /// An edge could not be added because one of its endpoints is missing.
    ///
    /// # Fields
    ///
    /// * `from` - `Debug` rendering of the edge source
    /// * `to` - `Debug` rendering of the edge destination
    #[error("edge {from} -> {to} references a vertex that does not exist in the graph")]
    InvalidEdge {
        /// The source vertex of the rejected edge
        from: String,
        /// The destination vertex of the rejected edge
        to: String,
    },

    /// More than one edge connects an ordered vertex pair.
    ///
    /// The graph assumes at most one directed edge per ordered pair. Finding more signals a
    /// broken invariant upstream and is surfaced as-is; the graph is left untouched.
    #[error("too many edges to delete: {count} parallel edges from {from} to {to}")]
    TooManyEdges {
        /// The source vertex of the parallel edges
        from: String,
        /// The destination vertex of the parallel edges
        to: String,
        /// The number of parallel edges that were found
        count: usize,
    },

    /// The graph contains a cycle and cannot be fully ordered.
    ///
    /// `ordered` is the number of vertices Kahn's algorithm managed to emit before running out
    /// of zero in-degree vertices; `total` is the vertex count of the graph.
    #[error("graph contains a cycle - only {ordered} of {total} vertices could be ordered")]
    CycleDetected {
        /// Number of vertices placed in the partial order
        ordered: usize,
        /// Number of vertices in the graph
        total: usize,
    },

    /// I/O error while writing a rendering of the graph.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_not_found_macro_uses_debug() {
        let err = vertex_not_found!("GO:0008150");
        assert!(matches!(err, Error::VertexNotFound(ref s) if s == "\"GO:0008150\""));
        assert_eq!(
            err.to_string(),
            "vertex \"GO:0008150\" does not exist in the graph"
        );
    }

    #[test]
    fn test_too_many_edges_message() {
        let err = Error::TooManyEdges {
            from: "1".into(),
            to: "2".into(),
            count: 3,
        };
        assert!(err.to_string().contains("too many edges to delete"));
        assert!(err.to_string().contains("3 parallel edges"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "disk full");
    }
}
