// crates/algokit-core/src/graphs/directed.rs
// ============================================================================
// Module: Directed Search
// Description: Reachability, paths and cycle detection in digraphs.
// Purpose: Name the digraph searches and add directed cycle finding.
// Dependencies: crate::graphs
// ============================================================================

//! ## Overview
//! Reachability and path searches over a [`Digraph`] are the
//! [`Adjacency`](crate::graphs::Adjacency)-generic searches from
//! [`crate::graphs::search`]; the aliases here give them their directed names.
//! Directed cycle detection differs from the undirected case: an edge to a
//! marked vertex closes a cycle only when that vertex is still on the
//! depth-first stack.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::graphs::digraph::Digraph;
use crate::graphs::edge::DirectedEdge;
use crate::graphs::search::BreadthFirstPaths;
use crate::graphs::search::DepthFirstPaths;
use crate::graphs::search::DepthFirstSearch;
use crate::graphs::search::close_cycle;
use crate::graphs::traverse::Visit;
use crate::graphs::traverse::depth_first;
use crate::graphs::weighted::EdgeWeightedDigraph;

// ============================================================================
// SECTION: Aliases
// ============================================================================

/// Vertices reachable from one or more sources in a digraph.
pub type DirectedDfs = DepthFirstSearch;

/// Depth-first directed paths from a single source.
pub type DepthFirstDirectedPaths = DepthFirstPaths;

/// Fewest-edge directed paths from one or more sources.
pub type BreadthFirstDirectedPaths = BreadthFirstPaths;

// ============================================================================
// SECTION: Directed Cycle
// ============================================================================

/// Finds a directed cycle, if one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedCycle {
    /// Cycle vertices with the first repeated at the end.
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches `digraph` for a directed cycle.
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        let n = digraph.v();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut cycle = None;
        for s in 0 .. n {
            if cycle.is_some() {
                break;
            }
            depth_first(digraph, s, &mut marked, |step| match step {
                Visit::Enter {
                    vertex,
                    parent,
                } => {
                    on_stack[vertex] = true;
                    edge_to[vertex] = parent;
                }
                Visit::Revisit {
                    vertex,
                    neighbor,
                } => {
                    if cycle.is_none() && on_stack[neighbor] {
                        cycle = Some(close_cycle(&edge_to, vertex, neighbor));
                    }
                }
                Visit::Leave(vertex) => on_stack[vertex] = false,
            });
        }
        Self {
            cycle,
        }
    }

    /// Returns true when a directed cycle exists.
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle as a closed vertex walk.
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Finds a directed cycle in an edge-weighted digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedDirectedCycle {
    /// Cycle edges in path order.
    cycle: Option<Vec<DirectedEdge>>,
}

impl EdgeWeightedDirectedCycle {
    /// Searches `digraph` for a directed cycle.
    #[must_use]
    pub fn new(digraph: &EdgeWeightedDigraph) -> Self {
        let vertices = DirectedCycle::new(&digraph.to_digraph()).cycle;
        let cycle = vertices.and_then(|walk| {
            walk.windows(2)
                .map(|pair| digraph.adj(pair[0]).iter().find(|edge| edge.to() == pair[1]).copied())
                .collect::<Option<Vec<_>>>()
        });
        Self {
            cycle,
        }
    }

    /// Returns true when a directed cycle exists.
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the cycle's edges; each edge's head is the next edge's tail.
    #[must_use]
    pub fn cycle(&self) -> Option<&[DirectedEdge]> {
        self.cycle.as_deref()
    }

    /// Returns the total weight of the cycle.
    #[must_use]
    pub fn weight(&self) -> Option<f64> {
        self.cycle.as_ref().map(|edges| edges.iter().map(DirectedEdge::weight).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::DirectedCycle;
    use super::EdgeWeightedDirectedCycle;
    use crate::error::AlgoError;
    use crate::graphs::digraph::Digraph;
    use crate::graphs::edge::DirectedEdge;
    use crate::graphs::weighted::EdgeWeightedDigraph;

    #[test]
    fn finds_cycle_on_stack_only() -> Result<(), AlgoError> {
        let mut diamond = Digraph::new(4);
        diamond.add_edge(0, 1)?;
        diamond.add_edge(0, 2)?;
        diamond.add_edge(1, 3)?;
        diamond.add_edge(2, 3)?;
        assert!(!DirectedCycle::new(&diamond).has_cycle());
        diamond.add_edge(3, 0)?;
        assert_eq!(DirectedCycle::new(&diamond).cycle(), Some(&[3, 0, 1, 3][..]));
        Ok(())
    }

    #[test]
    fn weighted_cycle_chains_edges() -> Result<(), AlgoError> {
        let mut digraph = EdgeWeightedDigraph::new(3);
        digraph.add_edge(DirectedEdge::new(0, 1, 0.5))?;
        digraph.add_edge(DirectedEdge::new(1, 2, 0.25))?;
        digraph.add_edge(DirectedEdge::new(2, 0, 0.25))?;
        let found = EdgeWeightedDirectedCycle::new(&digraph);
        let edges = found.cycle().unwrap_or_default();
        assert_eq!(edges.len(), 3);
        for pair in edges.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
        assert_eq!(found.weight(), Some(1.0));
        Ok(())
    }
}
