// crates/algokit-core/src/graphs/graph.rs
// ============================================================================
// Module: Undirected Graph
// Description: Adjacency-list graph over vertices `0 .. v`.
// Purpose: Core representation for undirected search and connectivity.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Neighbors are stored in insertion order, and every traversal in this crate
//! visits them in that order, so results are deterministic for a given edge
//! list. An undirected edge `v-w` appears in both `adj(v)` and `adj(w)`; a
//! self-loop therefore appears twice in its vertex's list.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::error::AlgoResult;
use crate::error::check_vertex;

// ============================================================================
// SECTION: Adjacency Contract
// ============================================================================

/// Read access shared by [`Graph`] and [`crate::graphs::Digraph`].
///
/// Traversals written against this trait run unchanged on either graph kind.
pub trait Adjacency {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the neighbors of `v`; out-of-range vertices have none.
    fn neighbors(&self, v: usize) -> &[usize];
}

// ============================================================================
// SECTION: Graph
// ============================================================================

/// Undirected graph with adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Neighbor list per vertex.
    adj: Vec<Vec<usize>>,
    /// Number of edges.
    e: usize,
}

impl Graph {
    /// Creates a graph with `v` vertices and no edges.
    #[must_use]
    pub fn new(v: usize) -> Self {
        Self {
            adj: vec![Vec::new(); v],
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

    /// Adds the undirected edge `v-w`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid endpoint.
    pub fn add_edge(&mut self, v: usize, w: usize) -> AlgoResult<()> {
        check_vertex(v, self.v())?;
        check_vertex(w, self.v())?;
        self.adj[v].push(w);
        self.adj[w].push(v);
        self.e += 1;
        Ok(())
    }

    /// Returns the neighbors of `v` in insertion order.
    #[must_use]
    pub fn adj(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the degree of `v`; self-loops count twice.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    /// Returns the largest vertex degree.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the number of self-loops.
    #[must_use]
    pub fn self_loops(&self) -> usize {
        let twice: usize = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, neighbors)| neighbors.iter().filter(|&&w| w == v).count())
            .sum();
        twice / 2
    }
}

impl Adjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.v()
    }

    fn neighbors(&self, v: usize) -> &[usize] {
        self.adj(v)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v(), self.e)?;
        write_adjacency(f, &self.adj)
    }
}

/// Writes one `v: w1 w2 ...` line per vertex.
pub(crate) fn write_adjacency(f: &mut fmt::Formatter<'_>, adj: &[Vec<usize>]) -> fmt::Result {
    for (v, neighbors) in adj.iter().enumerate() {
        write!(f, "{v}:")?;
        for w in neighbors {
            write!(f, " {w}")?;
        }
        writeln!(f)?;
    }
    Ok(())
}
