//! Shared view type for graph algorithms.
//!
//! Provides a read-only, dense-index snapshot of a graph's outgoing
//! adjacency for algorithm execution.

/// An index-based view of outgoing adjacency.
///
/// Vertices are the indices `0..vertex_count()`; each successor list holds
/// target indices in edge-creation order. The view borrows the underlying
/// lists, so it is valid exactly as long as the source structure is not
/// mutated.
pub struct TopologyView<'a> {
    outgoing: Vec<&'a [usize]>,
}

impl<'a> TopologyView<'a> {
    /// Build a view from per-vertex successor slices.
    ///
    /// # Panics
    /// Panics if any target index is out of bounds.
    pub fn new(outgoing: Vec<&'a [usize]>) -> Self {
        let n = outgoing.len();
        for (u, successors) in outgoing.iter().enumerate() {
            for &v in *successors {
                assert!(v < n, "edge {u}->{v} out of bounds for {n} vertices");
            }
        }
        TopologyView { outgoing }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Outgoing targets of a vertex, in edge-creation order.
    pub fn successors(&self, idx: usize) -> &[usize] {
        self.outgoing[idx]
    }
}
