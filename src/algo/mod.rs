//! Read-only graph algorithms.
//!
//! All algorithms operate on a dense, index-based [`TopologyView`] rather
//! than on the container itself, so they can be reused against any adjacency
//! data. [`crate::DirectedGraph`] builds a view internally and delegates
//! here for its `reachable`, `has_cycle`, and `is_connected` queries.

pub mod common;
pub mod cycles;
pub mod traversal;

pub use common::TopologyView;
pub use cycles::has_cycle;
pub use traversal::{connected_from, reachable};
