// crates/algokit-core/src/graphs/traverse.rs
// ============================================================================
// Module: Depth-First Traversal
// Description: Explicit-stack depth-first search with visit callbacks.
// Purpose: One recursion-free DFS shared by every depth-first client.
// Dependencies: crate::graphs::graph
// ============================================================================

//! ## Overview
//! [`depth_first`] reproduces the visit order of the textbook recursive DFS:
//! a vertex's neighbors are scanned in adjacency order and each unmarked
//! neighbor is fully explored before the scan resumes. Each stack frame holds
//! a vertex and the position of the next neighbor to scan, so stack depth is
//! bounded by the vertex count rather than the call stack.

use crate::graphs::graph::Adjacency;

/// A step reported by [`depth_first`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    /// `vertex` was reached for the first time through `parent`.
    Enter {
        /// Newly marked vertex.
        vertex: usize,
        /// Vertex whose scan discovered it; `None` for the source.
        parent: Option<usize>,
    },
    /// The scan of `vertex` found the already marked `neighbor`.
    Revisit {
        /// Vertex being scanned.
        vertex: usize,
        /// Marked neighbor.
        neighbor: usize,
    },
    /// Every neighbor of `vertex` has been scanned.
    Leave(usize),
}

/// Explores everything reachable from `source` that is not yet marked.
///
/// Does nothing when `source` is already marked or out of range.
pub(crate) fn depth_first<G, F>(graph: &G, source: usize, marked: &mut [bool], mut visit: F)
where
    G: Adjacency + ?Sized,
    F: FnMut(Visit),
{
    match marked.get_mut(source) {
        Some(seen) if !*seen => *seen = true,
        _ => return,
    }
    visit(Visit::Enter {
        vertex: source,
        parent: None,
    });
    let mut stack = vec![(source, 0_usize)];
    while let Some(frame) = stack.last_mut() {
        let (v, next) = *frame;
        if let Some(&w) = graph.neighbors(v).get(next) {
            frame.1 += 1;
            if marked[w] {
                visit(Visit::Revisit {
                    vertex: v,
                    neighbor: w,
                });
            } else {
                marked[w] = true;
                visit(Visit::Enter {
                    vertex: w,
                    parent: Some(v),
                });
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            visit(Visit::Leave(v));
        }
    }
}

/// Follows `edge_to` links from `v` back to `stop` and returns the vertices
/// visited, starting with `v` and ending with `stop`.
pub(crate) fn climb(edge_to: &[Option<usize>], v: usize, stop: usize) -> Vec<usize> {
    let mut path = vec![v];
    let mut x = v;
    while x != stop {
        match edge_to.get(x).copied().flatten() {
            Some(parent) => {
                path.push(parent);
                x = parent;
            }
            None => break,
        }
    }
    path
}
