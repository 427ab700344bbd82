//! Grafo — an embeddable directed-graph container.
//!
//! Grafo stores caller-supplied opaque payloads as vertices and directed
//! edges between them. Vertex identity is decided by a three-way comparator
//! injected at construction, so payloads never need to implement `Hash` or
//! `Eq` themselves. On top of the storage model the crate exposes the
//! classic read-only traversals: reachability, cycle detection, and
//! root connectivity.
//!
//! # Design
//!
//! - Vertices are kept in insertion order, which is observable through
//!   [`DirectedGraph::payloads`] and [`DirectedGraph::neighbors`].
//! - Directed edges are unique per ordered pair; self-loops are permitted.
//! - Payload lifetime is governed by an [`Ownership`] mode fixed at
//!   construction: either the graph runs a disposer once per payload on
//!   removal and teardown, or removal hands the payload back to the caller.
//! - Fallible mutators return a [`GraphError`] status; pure queries never
//!   fail and collapse missing payloads to a neutral `false`/`0`.
//! - The algorithms in [`algo`] operate on a dense
//!   [`TopologyView`](algo::TopologyView) and can be reused against any
//!   adjacency data, not just a [`DirectedGraph`].
//!
//! # Example
//!
//! ```rust
//! use grafo::DirectedGraph;
//!
//! let mut graph = DirectedGraph::<u32>::with_natural_order();
//! graph.insert(1).unwrap();
//! graph.insert(2).unwrap();
//! graph.insert(3).unwrap();
//!
//! graph.connect(&1, &2).unwrap();
//! graph.connect(&2, &3).unwrap();
//!
//! assert!(graph.reachable(&1, &3));
//! assert!(graph.is_connected());
//! assert!(!graph.has_cycle());
//! ```
//!
//! The container is single-threaded and synchronous; callers sharing a graph
//! across threads are responsible for their own serialization.

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    CompareFn, DirectedGraph, DisposeFn, GraphError, GraphResult, InsertError, Ownership,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
