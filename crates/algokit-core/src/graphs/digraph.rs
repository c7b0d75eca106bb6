// crates/algokit-core/src/graphs/digraph.rs
// ============================================================================
// Module: Directed Graph
// Description: Adjacency-list digraph with in-degree tracking.
// Purpose: Core representation for reachability, ordering and strong components.
// Dependencies: crate::error, crate::graphs::graph
// ============================================================================

//! ## Overview
//! `adj(v)` lists the heads of edges leaving `v` in insertion order. In-degrees
//! are maintained on every insertion so [`Digraph::in_degree`] is constant
//! time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::error::AlgoResult;
use crate::error::check_vertex;
use crate::graphs::graph::Adjacency;
use crate::graphs::graph::write_adjacency;

// ============================================================================
// SECTION: Digraph
// ============================================================================

/// Directed graph with adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph {
    /// Out-neighbors per vertex.
    adj: Vec<Vec<usize>>,
    /// In-degree per vertex.
    in_degree: Vec<usize>,
    /// Number of edges.
    e: usize,
}

impl Digraph {
    /// Creates a digraph with `v` vertices and no edges.
    #[must_use]
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
            in_degree: vec![0; v],
            e: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn v(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub const fn e(&self) -> usize {
        self.e
    }

    /// Adds the directed edge `v->w`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid endpoint.
    pub fn add_edge(&mut self, v: usize, w: usize) -> AlgoResult<()> {
        check_vertex(v, self.v())?;
        check_vertex(w, self.v())?;
        self.adj[v].push(w);
        self.in_degree[w] += 1;
        self.e += 1;
        Ok(())
    }

    /// Returns the heads of edges leaving `v`.
    #[must_use]
    pub fn adj(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of edges leaving `v`.
    #[must_use]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    /// Returns the number of edges entering `v`.
    #[must_use]
    pub fn in_degree(&self, v: usize) -> usize {
        self.in_degree.get(v).copied().unwrap_or(0)
    }

    /// Builds a digraph from prepared adjacency lists whose heads are all in
    /// range.
    pub(crate) fn from_adjacency(adj: Vec<Vec<usize>>) -> Self {
        let mut in_degree = vec![0; adj.len()];
        let mut e = 0;
        for heads in &adj {
            for &w in heads {
                in_degree[w] += 1;
                e += 1;
            }
        }
        Self {
            adj,
            in_degree,
            e,
        }
    }

    /// Returns the digraph with every edge reversed.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.v());
        for (v, heads) in self.adj.iter().enumerate() {
            for &w in heads {
                reversed.adj[w].push(v);
                reversed.in_degree[v] += 1;
            }
        }
        reversed.e = self.e;
        reversed
    }
}

impl Adjacency for Digraph {
    fn vertex_count(&self) -> usize {
        self.v()
    }

    fn neighbors(&self, v: usize) -> &[usize] {
        self.adj(v)
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v(), self.e)?;
        write_adjacency(f, &self.adj)
    }
}

#[cfg(test)]
mod tests {
    use super::Digraph;
    use crate::error::AlgoError;

    #[test]
    fn reverse_swaps_degrees() -> Result<(), AlgoError> {
        let mut digraph = Digraph::new(3);
        digraph.add_edge(0, 1)?;
        digraph.add_edge(0, 2)?;
        digraph.add_edge(2, 1)?;
        let reversed = digraph.reverse();
        assert_eq!(reversed.e(), 3);
        assert_eq!(reversed.out_degree(1), digraph.in_degree(1));
        assert_eq!(reversed.in_degree(0), digraph.out_degree(0));
        assert_eq!(reversed.adj(1), &[0, 2]);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_vertex() {
        let mut digraph = Digraph::new(2);
        assert_eq!(
            digraph.add_edge(0, 2),
            Err(AlgoError::VertexOutOfBounds {
                vertex: 2,
                vertices: 2,
            })
        );
        assert!(digraph.adj(7).is_empty());
    }
}
