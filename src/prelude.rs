//! # ontograph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the ontograph library. Import this module to get quick access to the graph types,
//! the capability traits the generic algorithms are written against, and the algorithms
//! themselves.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all ontograph operations
pub use crate::Error;

/// The result type used throughout ontograph
pub use crate::Result;

// ================================================================================================
// Graph Storage
// ================================================================================================

/// The mutable directed graph and its immutable ancestry snapshot
pub use crate::graph::{DirectedGraph, SlimDirectedGraphView};

/// Edge values, borrowed edge views and the default edge weight
pub use crate::graph::{Edge, EdgeId, EdgeRef, DEFAULT_WEIGHT};

/// Stable vertex slot identifier
pub use crate::graph::NodeId;

// ================================================================================================
// Capability Traits
// ================================================================================================

/// Traits implemented by every graph representation in the crate
pub use crate::graph::{Direction, EdgeWeights, GraphBase, Neighbours, Predecessors, Successors};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversals and reachability
pub use crate::graph::algorithms::{bfs, bfs_visit, dfs, dfs_visit, exists_path, reachable};

/// Shortcut links and topological ordering
pub use crate::graph::algorithms::{dfs_shortcut_links, topological_order, topological_sort};

/// Weighted path searches
pub use crate::graph::algorithms::{bellman_ford, dijkstra, longest_path, shortest_path_bf};

// ================================================================================================
// Rendering
// ================================================================================================

/// DOT output and attribute providers
pub use crate::graph::dot::{to_dot, write_dot, DotAttributes, LabelAttributes};

/// Escaping for free text placed inside DOT attribute values
pub use crate::utils::escape_dot;
