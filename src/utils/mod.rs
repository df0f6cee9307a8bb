//! Shared low-level helpers used by the graph engine.
//!
//! - [`BitSet`] - Dense visited/membership set over node indices
//! - [`escape_dot`] - Escaping for double-quoted DOT strings

mod bitset;
mod dot;

pub use bitset::BitSet;
pub use dot::escape_dot;
