//! In-memory directed-graph storage.
//!
//! [`DirectedGraph`] is the aggregate root: it owns the vertex registry
//! (comparator-defined identity, insertion order preserved), the edge store
//! (ordered outgoing lists plus degree counters and a global edge count),
//! and the read-only algorithm entry points.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;
use tracing::trace;

use super::types::{CompareFn, Ownership};
use super::vertex::Vertex;
use crate::algo::{self, TopologyView};

/// Errors that can occur during graph operations.
///
/// Only the fallible mutators and lookups return these; pure queries
/// (`contains`, degrees, `reachable`, ...) collapse missing structure to a
/// neutral `false`/`0` instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A payload comparing `Equal` to the inserted one is already present.
    #[error("payload compares equal to an existing vertex")]
    DuplicatePayload,

    /// The directed edge for this ordered pair already exists.
    #[error("directed edge already exists")]
    DuplicateEdge,

    /// A referenced payload or edge is not in the graph.
    #[error("payload or edge not found in graph")]
    NotFound,

    /// Internal storage could not be grown. The graph is left in its prior
    /// valid state.
    #[error("internal storage allocation failed")]
    NoMemory,
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Error returned by [`DirectedGraph::insert`].
///
/// Hands the rejected payload back so the caller keeps ownership of values
/// the registry did not retain.
#[derive(Error)]
#[error("{kind}")]
pub struct InsertError<P> {
    /// Why the insertion was rejected.
    pub kind: GraphError,
    /// The payload, returned to the caller untouched.
    pub payload: P,
}

impl<P> fmt::Debug for InsertError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads are opaque and may not implement Debug.
        f.debug_struct("InsertError")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A directed graph over opaque payloads.
///
/// Identity is decided by the injected comparator; payload lifetime by the
/// [`Ownership`] mode. Vertices stay in insertion order, and each vertex
/// keeps its outgoing targets in edge-creation order, so enumeration APIs
/// are deterministic.
///
/// Single-threaded by design: every mutator takes `&mut self`, which also
/// statically invalidates any outstanding snapshot views.
pub struct DirectedGraph<P> {
    compare: CompareFn<P>,
    ownership: Ownership<P>,
    vertices: Vec<Vertex<P>>,
    edge_count: usize,
}

impl<P> DirectedGraph<P> {
    /// Create an empty graph with caller-retained payload semantics.
    ///
    /// [`remove`](Self::remove) hands payloads back; payloads still present
    /// at teardown are dropped normally.
    pub fn new(compare: impl Fn(&P, &P) -> Ordering + 'static) -> Self {
        Self::build(Box::new(compare), Ownership::Caller)
    }

    /// Create an empty graph that disposes of payloads itself.
    ///
    /// The disposer runs exactly once per payload on [`remove`](Self::remove),
    /// [`clear`](Self::clear), and drop.
    pub fn with_disposer(
        compare: impl Fn(&P, &P) -> Ordering + 'static,
        dispose: impl FnMut(P) + 'static,
    ) -> Self {
        Self::build(Box::new(compare), Ownership::Managed(Box::new(dispose)))
    }

    fn build(compare: CompareFn<P>, ownership: Ownership<P>) -> Self {
        DirectedGraph {
            compare,
            ownership,
            vertices: Vec::new(),
            edge_count: 0,
        }
    }

    /// Slot index of the vertex whose payload compares `Equal`, if any.
    fn index_of(&self, payload: &P) -> Option<usize> {
        self.vertices
            .iter()
            .position(|v| (self.compare)(&v.payload, payload) == Ordering::Equal)
    }

    // ------------------------------------------------------------------
    // Vertex registry
    // ------------------------------------------------------------------

    /// Insert a payload as a new vertex.
    ///
    /// Duplicates are not permitted: if an existing payload compares `Equal`,
    /// the insertion is rejected with [`GraphError::DuplicatePayload`] and the
    /// payload travels back inside the error. On allocation failure the graph
    /// is left untouched and the payload travels back with
    /// [`GraphError::NoMemory`].
    pub fn insert(&mut self, payload: P) -> Result<(), InsertError<P>> {
        if self.index_of(&payload).is_some() {
            return Err(InsertError {
                kind: GraphError::DuplicatePayload,
                payload,
            });
        }
        if self.vertices.try_reserve(1).is_err() {
            return Err(InsertError {
                kind: GraphError::NoMemory,
                payload,
            });
        }
        self.vertices.push(Vertex::new(payload));
        trace!(vertices = self.vertices.len(), "vertex inserted");
        Ok(())
    }

    /// Remove a vertex and every edge where it is source or target.
    ///
    /// Partner vertices' degree counters and the global edge count are
    /// updated; a self-loop is counted once. In [`Ownership::Managed`] mode
    /// the disposer consumes the payload and `Ok(None)` is returned; in
    /// [`Ownership::Caller`] mode the payload is handed back as `Ok(Some(_))`.
    pub fn remove(&mut self, payload: &P) -> GraphResult<Option<P>> {
        let idx = self.index_of(payload).ok_or(GraphError::NotFound)?;

        // Outgoing edges: decrement the targets' indegrees. A self-loop has
        // no partner entry and never contributed to an indegree.
        let outgoing = std::mem::take(&mut self.vertices[idx].outgoing);
        self.edge_count -= outgoing.len();
        for target in outgoing {
            if target != idx {
                self.vertices[target].indegree -= 1;
            }
        }

        // Incoming edges: drop every reference to this slot, then shift the
        // indices above it down by one to match the vertex vector after
        // removal.
        for (slot, vertex) in self.vertices.iter_mut().enumerate() {
            if slot == idx {
                continue;
            }
            let before = vertex.outgoing.len();
            vertex.outgoing.retain(|&t| t != idx);
            self.edge_count -= before - vertex.outgoing.len();
            for t in vertex.outgoing.iter_mut() {
                if *t > idx {
                    *t -= 1;
                }
            }
        }

        let vertex = self.vertices.remove(idx);
        trace!(
            slot = idx,
            vertices = self.vertices.len(),
            edges = self.edge_count,
            "vertex removed"
        );

        match &mut self.ownership {
            Ownership::Managed(dispose) => {
                dispose(vertex.payload);
                Ok(None)
            }
            Ownership::Caller => Ok(Some(vertex.payload)),
        }
    }

    /// Whether a payload comparing `Equal` is present.
    pub fn contains(&self, payload: &P) -> bool {
        self.index_of(payload).is_some()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All payloads in insertion order.
    ///
    /// The returned vector is a snapshot; the borrow checker ties the
    /// references to the absence of further mutation.
    pub fn payloads(&self) -> Vec<&P> {
        self.vertices.iter().map(|v| &v.payload).collect()
    }

    /// Remove every vertex and edge, running the disposer in
    /// [`Ownership::Managed`] mode.
    pub fn clear(&mut self) {
        let vertices = std::mem::take(&mut self.vertices);
        self.edge_count = 0;
        if let Ownership::Managed(dispose) = &mut self.ownership {
            for vertex in vertices {
                dispose(vertex.payload);
            }
        }
        trace!("graph cleared");
    }

    // ------------------------------------------------------------------
    // Edge store
    // ------------------------------------------------------------------

    /// Add a directed edge `from -> to`.
    ///
    /// Directed edges are unique per ordered pair; `connect(a, b)` and
    /// `connect(b, a)` are independent. A self-loop increments the source's
    /// outdegree and the global edge count but not the target's indegree.
    pub fn connect(&mut self, from: &P, to: &P) -> GraphResult<()> {
        let from_idx = self.index_of(from).ok_or(GraphError::NotFound)?;
        let to_idx = self.index_of(to).ok_or(GraphError::NotFound)?;

        if self.vertices[from_idx].points_to(to_idx) {
            return Err(GraphError::DuplicateEdge);
        }
        self.vertices[from_idx]
            .outgoing
            .try_reserve(1)
            .map_err(|_| GraphError::NoMemory)?;

        self.vertices[from_idx].outgoing.push(to_idx);
        if from_idx != to_idx {
            self.vertices[to_idx].indegree += 1;
        }
        self.edge_count += 1;
        trace!(
            from = from_idx,
            to = to_idx,
            edges = self.edge_count,
            "edge added"
        );
        Ok(())
    }

    /// Remove the directed edge `from -> to`, reversing the counter updates
    /// of [`connect`](Self::connect).
    pub fn disconnect(&mut self, from: &P, to: &P) -> GraphResult<()> {
        let from_idx = self.index_of(from).ok_or(GraphError::NotFound)?;
        let to_idx = self.index_of(to).ok_or(GraphError::NotFound)?;

        let outgoing = &mut self.vertices[from_idx].outgoing;
        let pos = outgoing
            .iter()
            .position(|&t| t == to_idx)
            .ok_or(GraphError::NotFound)?;
        outgoing.remove(pos);

        if from_idx != to_idx {
            self.vertices[to_idx].indegree -= 1;
        }
        self.edge_count -= 1;
        trace!(
            from = from_idx,
            to = to_idx,
            edges = self.edge_count,
            "edge removed"
        );
        Ok(())
    }

    /// Outgoing neighbors of a payload, in edge-creation order.
    pub fn neighbors(&self, payload: &P) -> GraphResult<Vec<&P>> {
        let idx = self.index_of(payload).ok_or(GraphError::NotFound)?;
        Ok(self.vertices[idx]
            .outgoing
            .iter()
            .map(|&t| &self.vertices[t].payload)
            .collect())
    }

    /// Whether the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &P, to: &P) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => self.vertices[f].points_to(t),
            _ => false,
        }
    }

    /// Number of outgoing edges at `payload`; `0` when absent.
    pub fn outdegree(&self, payload: &P) -> usize {
        self.index_of(payload)
            .map(|i| self.vertices[i].outdegree())
            .unwrap_or(0)
    }

    /// Number of incoming edges at `payload`, self-loops excluded; `0` when
    /// absent.
    pub fn indegree(&self, payload: &P) -> usize {
        self.index_of(payload)
            .map(|i| self.vertices[i].indegree)
            .unwrap_or(0)
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    // ------------------------------------------------------------------
    // Algorithms
    // ------------------------------------------------------------------

    fn topology(&self) -> TopologyView<'_> {
        TopologyView::new(self.vertices.iter().map(|v| v.outgoing.as_slice()).collect())
    }

    /// Whether a directed path (length >= 0) exists from `from` to `to`.
    ///
    /// A vertex is reachable from itself even with no outgoing edges.
    /// Returns `false` when either payload is absent.
    pub fn reachable(&self, from: &P, to: &P) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(f), Some(t)) => algo::reachable(&self.topology(), f, t),
            _ => false,
        }
    }

    /// Whether the graph contains any directed cycle, self-loops included.
    pub fn has_cycle(&self) -> bool {
        algo::has_cycle(&self.topology())
    }

    /// Whether every vertex is reachable from the first vertex ever inserted.
    ///
    /// This is a one-sided notion of connectivity (reachability from a fixed
    /// root, following edge direction), not mutual or undirected
    /// connectivity. Empty and single-vertex graphs are trivially connected.
    pub fn is_connected(&self) -> bool {
        algo::connected_from(&self.topology(), 0)
    }
}

impl<P: Ord + 'static> DirectedGraph<P> {
    /// Convenience constructor using the payload type's `Ord` as comparator,
    /// with caller-retained payload semantics.
    pub fn with_natural_order() -> Self {
        Self::new(P::cmp)
    }
}

impl<P> Drop for DirectedGraph<P> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<P> fmt::Debug for DirectedGraph<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("vertices", &self.vertices.len())
            .field("edges", &self.edge_count)
            .field("ownership", &self.ownership)
            .finish()
    }
}
