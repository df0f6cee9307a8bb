// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # ontograph
//!
//! A generic directed-graph engine for ontology tooling. Vertices are arbitrary hashable
//! identities (term ids, interned strings, small structs), edges carry an integer weight and
//! an optional payload, and the algorithm layer answers the questions an ontology model keeps
//! asking: what lies above or below a term, in which order can terms be processed, what is the
//! cheapest or longest chain between two terms, and what does a hierarchy look like when only
//! a handful of its terms are kept.
//!
//! ## Features
//!
//! - **Mutable graph**: [`DirectedGraph`] with identity lookup, stable [`NodeId`]s, weighted and
//!   payload-carrying edges, vertex merging and connectivity-preserving removal
//! - **Traversal**: breadth-first and depth-first walks with early termination, reachability
//!   tests and shortcut links
//! - **Ordering**: Kahn topological ordering with explicit cycle reporting
//! - **Paths**: Dijkstra and Bellman-Ford shortest paths, longest paths by weight negation
//! - **Subgraphs**: induced subgraphs, transitive closures and path-maintaining reductions
//! - **Slim view**: [`SlimDirectedGraphView`], an immutable snapshot with precomputed
//!   ancestor/descendant tables (built in parallel with the `parallel` feature)
//! - **Rendering**: DOT output via [`graph::dot`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ontograph::prelude::*;
//!
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! for term in ["entity", "continuant", "occurrent", "process"] {
//!     graph.add_vertex(term);
//! }
//! graph.add_edge(Edge::new("entity", "continuant"))?;
//! graph.add_edge(Edge::new("entity", "occurrent"))?;
//! graph.add_edge(Edge::new("occurrent", "process"))?;
//!
//! let order = graph.try_topological_order()?;
//! assert_eq!(order.first(), Some(&&"entity"));
//!
//! let view = SlimDirectedGraphView::from_graph(&graph);
//! assert!(view.is_ancestor(&"entity", &"process"));
//! assert!(!view.is_ancestor(&"continuant", &"process"));
//! # Ok::<(), ontograph::Error>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`graph`] - Graph storage, traits, algorithms, subgraphs, the slim view and DOT output
//! - [`utils`] - Bit sets and DOT escaping shared by the graph layer
//! - [`prelude`] - Glob-importable selection of the common types
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`], whose error type is [`Error`]. Queries that merely
//! find nothing (an unknown vertex passed to [`DirectedGraph::has_edge`], a target that is not
//! reachable) return `false`, `None` or an empty collection instead of an error.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug` for structural summaries such as
//! reductions and merges, `trace` for per-edge detail, and `warn` when a path computation
//! has to give up (negative cycles, truncated predecessor chains). Install any `log`
//! implementation to see them.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use ontograph::prelude::*;
///
/// let mut graph: DirectedGraph<u32> = DirectedGraph::new();
/// graph.add_vertex(1);
/// assert_eq!(graph.vertex_count(), 1);
/// ```
pub mod prelude;

/// Directed graph storage and algorithms.
///
/// See the module documentation for the architecture and usage examples.
pub mod graph;

/// Low-level helpers shared by the graph layer.
pub mod utils;

/// `ontograph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, Edge, Result};
///
/// fn chain(len: u32) -> Result<DirectedGraph<u32>> {
///     let mut graph = DirectedGraph::new();
///     for v in 0..len {
///         graph.add_vertex(v);
///     }
///     for v in 1..len {
///         graph.add_edge(Edge::new(v - 1, v))?;
///     }
///     Ok(graph)
/// }
///
/// assert_eq!(chain(4)?.edge_count(), 3);
/// # Ok::<(), ontograph::Error>(())
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `ontograph` Error type
///
/// # Examples
///
/// ```rust
/// use ontograph::{DirectedGraph, Edge, Error};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_vertex("a");
///
/// match graph.ancestors(&"missing") {
///     Err(Error::VertexNotFound(name)) => assert!(name.contains("missing")),
///     other => panic!("unexpected: {other:?}"),
/// }
///
/// assert!(matches!(
///     graph.add_edge(Edge::new("a", "missing")),
///     Err(Error::InvalidEdge { .. })
/// ));
/// ```
pub use error::Error;

/// The mutable directed graph.
///
/// See [`graph::DirectedGraph`] for construction, mutation and queries.
pub use graph::DirectedGraph;

/// The immutable, index-based snapshot for fast ancestry queries.
pub use graph::SlimDirectedGraphView;

/// Edge values, edge identifiers and borrowed edge views.
pub use graph::{Edge, EdgeId, EdgeRef};

/// Stable vertex slot identifier.
pub use graph::NodeId;

/// Traversal direction for the direction-aware operations.
pub use graph::Direction;
