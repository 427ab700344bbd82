//! Directed-graph container core.
//!
//! This module implements the storage model:
//! - Vertex registry with comparator-defined identity and insertion order
//! - Edge store with ordered outgoing lists and degree counters
//! - Status-style errors for the fallible mutators

pub mod store;
pub mod types;

mod vertex;

// Re-export main types
pub use store::{DirectedGraph, GraphError, GraphResult, InsertError};
pub use types::{CompareFn, DisposeFn, Ownership};
