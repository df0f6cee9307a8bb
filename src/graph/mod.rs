//! Directed graph engine for ontology hierarchies.
//!
//! This module provides the graph storage and algorithms an ontology model is built on:
//! terms become vertices, and is-a / part-of / regulates relations become directed edges
//! from the more general term to the more specific one.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`], [`EdgeId`], [`Edge`] and [`DirectedGraph`], the mutable
//!   graph keyed by caller-supplied vertex identities
//! - **Traits**: [`GraphBase`], [`Successors`], [`Predecessors`], [`Neighbours`] and
//!   [`EdgeWeights`], the capabilities the generic algorithms are written against
//! - **Algorithms**: traversal, shortcut links, topological ordering and weighted paths in
//!   [`algorithms`]
//! - **Subgraphs**: induced subgraphs, transitive closures and path-maintaining reductions,
//!   as methods on [`DirectedGraph`]
//! - **Slim view**: [`SlimDirectedGraphView`], a frozen index-based snapshot for fast
//!   ancestor/descendant queries
//! - **Rendering**: DOT output in [`dot`]
//!
//! # Design Principles
//!
//! ## Identity Keyed, Index Backed
//!
//! Callers work with their own vertex values. Internally every vertex occupies a slot
//! named by a [`NodeId`], and the generic algorithms only ever see those ids.
//!
//! ## Stable Identifiers
//!
//! Removing a vertex or edge vacates its slot instead of compacting storage, so ids held
//! by a caller never start naming a different element.
//!
//! ## Snapshots For Heavy Querying
//!
//! Repeated ancestry tests should go through a [`SlimDirectedGraphView`] built once from
//! the finished graph rather than re-running a traversal for every query.
//!
//! # Usage Examples
//!
//! ## Building and Querying
//!
//! ```rust
//! use ontograph::{DirectedGraph, Direction, Edge};
//!
//! // biological_process -> cell death -> apoptosis
//! //                    \-> cell cycle
//! let mut graph: DirectedGraph<&str> = DirectedGraph::new();
//! for term in ["biological_process", "cell death", "apoptosis", "cell cycle"] {
//!     graph.add_vertex(term);
//! }
//! graph.add_edge(Edge::new("biological_process", "cell death"))?;
//! graph.add_edge(Edge::new("cell death", "apoptosis"))?;
//! graph.add_edge(Edge::new("biological_process", "cell cycle"))?;
//!
//! let ancestors = graph.ancestors(&"apoptosis")?;
//! assert_eq!(ancestors, vec![&"apoptosis", &"cell death", &"biological_process"]);
//!
//! let mut below_root = 0;
//! graph.bfs([&"biological_process"], Direction::Forward, |_| {
//!     below_root += 1;
//!     true
//! });
//! assert_eq!(below_root, 4);
//! # Ok::<(), ontograph::Error>(())
//! ```
//!
//! ## Reducing a Subset
//!
//! ```rust
//! use ontograph::{DirectedGraph, Edge};
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::new();
//! for v in 1..=4 {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(Edge::new(1, 2))?;
//! graph.add_edge(Edge::new(2, 3))?;
//! graph.add_edge(Edge::new(3, 4))?;
//!
//! // keep 1, 2 and 4; 4 hangs off 2 once 3 is gone
//! let reduced = graph.path_maintaining_sub_graph([&1, &2, &4]);
//! assert!(reduced.has_edge(&1, &2));
//! assert!(reduced.has_edge(&2, &4));
//! assert_eq!(reduced.edge_count(), 2);
//! # Ok::<(), ontograph::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! All types in this module are [`Send`] and [`Sync`] when their generic parameters are.
//! Mutation of a [`DirectedGraph`] requires exclusive access; a [`SlimDirectedGraphView`]
//! is never mutated and can be shared between any number of readers.

mod directed;
mod edge;
mod node;
mod slim;
mod subgraph;
mod traits;

pub mod algorithms;
pub mod dot;

pub use directed::DirectedGraph;
pub use edge::{Edge, EdgeId, EdgeRef, DEFAULT_WEIGHT};
pub use node::NodeId;
pub use slim::SlimDirectedGraphView;
pub use traits::{Direction, EdgeWeights, GraphBase, Neighbours, Predecessors, Successors};
