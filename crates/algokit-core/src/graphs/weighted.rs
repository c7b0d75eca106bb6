// crates/algokit-core/src/graphs/weighted.rs
// ============================================================================
// Module: Edge-Weighted Graphs
// Description: Undirected and directed graphs whose edges carry weights.
// Purpose: Inputs for minimum spanning trees and shortest paths.
// Dependencies: crate::error, crate::graphs::{digraph, edge}
// ============================================================================

//! ## Overview
//! Both graphs store edge values directly in per-vertex lists. An undirected
//! edge is stored at both endpoints, so a self-loop is stored twice at its
//! vertex; [`EdgeWeightedGraph::edges`] still reports it once.
//!
//! ## Invariants
//! - No stored edge has a NaN weight.
//! - Every stored endpoint is below `v()`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::error::check_vertex;
use crate::graphs::digraph::Digraph;
use crate::graphs::edge::DirectedEdge;
use crate::graphs::edge::Edge;

// ============================================================================
// SECTION: Undirected
// ============================================================================

/// Undirected graph with weighted edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedGraph {
    /// Incident edges per vertex.
    adj: Vec<Vec<Edge>>,
    /// Number of edges.
    e: usize,
}

impl EdgeWeightedGraph {
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

    /// Adds `edge` to both endpoint lists.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::VertexOutOfBounds`] for an invalid endpoint and
    /// [`AlgoError::InvalidWeight`] for a NaN weight.
    pub fn add_edge(&mut self, edge: Edge) -> AlgoResult<()> {
        let v = edge.either();
        let w = edge.other(v).unwrap_or(v);
        check_vertex(v, self.v())?;
        check_vertex(w, self.v())?;
        if edge.weight().is_nan() {
            return Err(AlgoError::InvalidWeight {
                from: v,
                to: w,
            });
        }
        self.adj[v].push(edge);
        self.adj[w].push(edge);
        self.e += 1;
        Ok(())
    }

    /// Returns the edges incident to `v`.
    #[must_use]
    pub fn adj(&self, v: usize) -> &[Edge] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the degree of `v`; self-loops count twice.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.adj(v).len()
    }

    /// Returns every edge once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.e);
        for (v, incident) in self.adj.iter().enumerate() {
            let mut self_loops = 0;
            for edge in incident {
                match edge.other(v) {
                    Some(w) if w > v => edges.push(*edge),
                    Some(w) if w == v => {
                        if self_loops % 2 == 0 {
                            edges.push(*edge);
                        }
                        self_loops += 1;
                    }
                    _ => {}
                }
            }
        }
        edges
    }
}

impl fmt::Display for EdgeWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v(), self.e)?;
        for (v, incident) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for edge in incident {
                write!(f, "  {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Directed
// ============================================================================

/// Directed graph with weighted edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeWeightedDigraph {
    /// Outgoing edges per vertex.
    adj: Vec<Vec<DirectedEdge>>,
    /// In-degree per vertex.
    in_degree: Vec<usize>,
    /// Number of edges.
    e: usize,
}

impl EdgeWeightedDigraph {
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

    /// Adds `edge` to its tail's list.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::VertexOutOfBounds`] for an invalid endpoint and
    /// [`AlgoError::InvalidWeight`] for a NaN weight.
    pub fn add_edge(&mut self, edge: DirectedEdge) -> AlgoResult<()> {
        check_vertex(edge.from(), self.v())?;
        check_vertex(edge.to(), self.v())?;
        if edge.weight().is_nan() {
            return Err(AlgoError::InvalidWeight {
                from: edge.from(),
                to: edge.to(),
            });
        }
        self.adj[edge.from()].push(edge);
        self.in_degree[edge.to()] += 1;
        self.e += 1;
        Ok(())
    }

    /// Returns the edges leaving `v`.
    #[must_use]
    pub fn adj(&self, v: usize) -> &[DirectedEdge] {
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

    /// Returns every edge, grouped by tail vertex.
    #[must_use]
    pub fn edges(&self) -> Vec<DirectedEdge> {
        self.adj.iter().flatten().copied().collect()
    }

    /// Returns the unweighted digraph with the same edges, in the same order.
    #[must_use]
    pub fn to_digraph(&self) -> Digraph {
        Digraph::from_adjacency(
            self.adj.iter().map(|out| out.iter().map(DirectedEdge::to).collect()).collect(),
        )
    }
}

impl fmt::Display for EdgeWeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.v(), self.e)?;
        for (v, out) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for edge in out {
                write!(f, "  {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeWeightedDigraph;
    use super::EdgeWeightedGraph;
    use crate::error::AlgoError;
    use crate::graphs::edge::DirectedEdge;
    use crate::graphs::edge::Edge;

    #[test]
    fn self_loop_listed_once() -> Result<(), AlgoError> {
        let mut graph = EdgeWeightedGraph::new(3);
        graph.add_edge(Edge::new(0, 1, 0.5))?;
        graph.add_edge(Edge::new(2, 2, 0.25))?;
        graph.add_edge(Edge::new(1, 2, 0.75))?;
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.edges().len(), 3);
        Ok(())
    }

    #[test]
    fn rejects_nan_weight() {
        let mut graph = EdgeWeightedGraph::new(2);
        assert_eq!(
            graph.add_edge(Edge::new(0, 1, f64::NAN)),
            Err(AlgoError::InvalidWeight {
                from: 0,
                to: 1,
            })
        );
        let mut digraph = EdgeWeightedDigraph::new(2);
        assert!(digraph.add_edge(DirectedEdge::new(1, 0, f64::NAN)).is_err());
        assert_eq!(digraph.e(), 0);
    }

    #[test]
    fn structure_survives_weight_removal() -> Result<(), AlgoError> {
        let mut digraph = EdgeWeightedDigraph::new(3);
        digraph.add_edge(DirectedEdge::new(0, 2, 1.0))?;
        digraph.add_edge(DirectedEdge::new(0, 1, 2.0))?;
        let plain = digraph.to_digraph();
        assert_eq!(plain.adj(0), &[2, 1]);
        assert_eq!(plain.in_degree(1), 1);
        assert_eq!(digraph.in_degree(2), 1);
        Ok(())
    }
}
