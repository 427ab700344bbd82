//! Vertex storage.

/// A vertex wraps exactly one payload plus its adjacency bookkeeping.
///
/// Outgoing targets are stored as slot indices into the graph's vertex
/// vector, in the order the edges were created. The indegree counter is
/// maintained by the store; a self-loop does not contribute to it.
pub(crate) struct Vertex<P> {
    /// The caller-supplied payload.
    pub payload: P,

    /// Outgoing edge targets in `connect` call order.
    pub outgoing: Vec<usize>,

    /// Number of incoming edges, self-loops excluded.
    pub indegree: usize,
}

impl<P> Vertex<P> {
    pub fn new(payload: P) -> Self {
        Vertex {
            payload,
            outgoing: Vec::new(),
            indegree: 0,
        }
    }

    /// Number of outgoing edges, self-loops included.
    pub fn outdegree(&self) -> usize {
        self.outgoing.len()
    }

    /// Whether a directed edge to `target` exists.
    pub fn points_to(&self, target: usize) -> bool {
        self.outgoing.contains(&target)
    }
}
