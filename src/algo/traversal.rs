//! Reachability and root-connectivity searches.

use super::common::TopologyView;

/// Whether a directed path (length >= 0) exists from `from` to `to`.
///
/// Reflexive: every vertex reaches itself, outgoing edges or not. The search
/// is an explicit-stack forward DFS that short-circuits as soon as `to` is
/// seen; visit order does not affect the result.
pub fn reachable(view: &TopologyView, from: usize, to: usize) -> bool {
    if from == to {
        return true;
    }

    let mut visited = vec![false; view.vertex_count()];
    let mut stack = vec![from];
    visited[from] = true;

    while let Some(u) = stack.pop() {
        for &v in view.successors(u) {
            if v == to {
                return true;
            }
            if !visited[v] {
                visited[v] = true;
                stack.push(v);
            }
        }
    }
    false
}

/// Whether every vertex is reachable from `root` via directed edges.
///
/// An empty view is vacuously connected. This is one-sided connectivity:
/// edges are only followed forward, so a spoke pointing at the root does not
/// make the root reach the spoke.
pub fn connected_from(view: &TopologyView, root: usize) -> bool {
    let n = view.vertex_count();
    if n == 0 {
        return true;
    }

    let mut visited = vec![false; n];
    let mut stack = vec![root];
    visited[root] = true;
    let mut seen = 1;

    while let Some(u) = stack.pop() {
        for &v in view.successors(u) {
            if !visited[v] {
                visited[v] = true;
                seen += 1;
                stack.push(v);
            }
        }
    }
    seen == n
}
