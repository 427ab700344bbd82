//! Directed-cycle detection.

use super::common::TopologyView;

/// DFS vertex state.
#[derive(Clone, Copy, PartialEq)]
enum Color {
    /// Not yet discovered.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully explored.
    Black,
}

/// Whether the view contains any directed cycle, self-loops included.
///
/// Iterative three-color DFS: the work stack carries `(vertex, cursor)`
/// pairs where the cursor indexes into the vertex's successor list, so the
/// search depth is bounded by the heap instead of the call stack. A `Gray`
/// successor is a back edge onto the current path, i.e. a cycle. The search
/// restarts from every still-`White` vertex so all components are covered.
pub fn has_cycle(view: &TopologyView) -> bool {
    let n = view.vertex_count();
    let mut color = vec![Color::White; n];
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        stack.push((root, 0));

        while let Some((u, cursor)) = stack.pop() {
            if let Some(&v) = view.successors(u).get(cursor) {
                stack.push((u, cursor + 1));
                match color[v] {
                    Color::Gray => return true,
                    Color::White => {
                        color[v] = Color::Gray;
                        stack.push((v, 0));
                    }
                    Color::Black => {}
                }
            } else {
                color[u] = Color::Black;
            }
        }
    }
    false
}
