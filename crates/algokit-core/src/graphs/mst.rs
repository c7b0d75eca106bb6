// crates/algokit-core/src/graphs/mst.rs
// ============================================================================
// Module: Minimum Spanning Forests
// Description: Lazy Prim and Kruskal over edge-weighted graphs.
// Purpose: Lightest edge set connecting every component.
// Dependencies: crate::fundamentals, crate::sorting, crate::graphs
// ============================================================================

//! ## Overview
//! Both algorithms produce a minimum spanning forest: one tree per connected
//! component, so a disconnected graph yields `V - C` edges for `C`
//! components. With distinct weights the forest is unique and both agree
//! edge for edge; with ties they agree on total weight.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use crate::fundamentals::UnionFind;
use crate::fundamentals::WeightedQuickUnion;
use crate::graphs::edge::Edge;
use crate::graphs::weighted::EdgeWeightedGraph;
use crate::sorting::MinPq;

// ============================================================================
// SECTION: Weight Ordering
// ============================================================================

/// Orders edges by weight for the priority queue.
#[derive(Debug, Clone, Copy)]
struct ByWeight(Edge);

impl PartialEq for ByWeight {
    fn eq(&self, other: &Self) -> bool {
        self.0.compare_weight(&other.0) == Ordering::Equal
    }
}

impl PartialOrd for ByWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.compare_weight(&other.0))
    }
}

// ============================================================================
// SECTION: Lazy Prim
// ============================================================================

/// Minimum spanning forest by lazy Prim.
///
/// Crossing edges wait in a priority queue; edges that become ineligible are
/// discarded when they reach the front.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyPrimMst {
    /// Forest edges in the order they were added.
    edges: Vec<Edge>,
    /// Sum of forest edge weights.
    weight: f64,
}

impl LazyPrimMst {
    /// Computes the forest of `graph`.
    #[must_use]
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let n = graph.v();
        let mut marked = vec![false; n];
        let mut pq = MinPq::new();
        let mut edges = Vec::new();
        for s in 0 .. n {
            if marked[s] {
                continue;
            }
            visit(graph, s, &mut marked, &mut pq);
            while let Some(ByWeight(edge)) = pq.del_min() {
                let v = edge.either();
                let Some(w) = edge.other(v) else {
                    continue;
                };
                if marked[v] && marked[w] {
                    continue;
                }
                edges.push(edge);
                if !marked[v] {
                    visit(graph, v, &mut marked, &mut pq);
                }
                if !marked[w] {
                    visit(graph, w, &mut marked, &mut pq);
                }
            }
        }
        let weight = edges.iter().map(Edge::weight).sum();
        Self {
            edges,
            weight,
        }
    }

    /// Returns the forest edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the total forest weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

/// Marks `v` and queues its edges to unmarked vertices.
fn visit(graph: &EdgeWeightedGraph, v: usize, marked: &mut [bool], pq: &mut MinPq<ByWeight>) {
    marked[v] = true;
    for edge in graph.adj(v) {
        if edge.other(v).is_some_and(|w| !marked[w]) {
            pq.insert(ByWeight(*edge));
        }
    }
}

// ============================================================================
// SECTION: Kruskal
// ============================================================================

/// Minimum spanning forest by Kruskal.
///
/// Edges are taken in ascending weight order unless they would close a cycle,
/// which a weighted quick-union detects.
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalMst {
    /// Forest edges in ascending weight order.
    edges: Vec<Edge>,
    /// Sum of forest edge weights.
    weight: f64,
}

impl KruskalMst {
    /// Computes the forest of `graph`.
    #[must_use]
    pub fn new(graph: &EdgeWeightedGraph) -> Self {
        let mut candidates = graph.edges();
        candidates.sort_by(Edge::compare_weight);
        let mut components = WeightedQuickUnion::new(graph.v());
        let limit = graph.v().saturating_sub(1);
        let mut edges = Vec::with_capacity(limit);
        for edge in candidates {
            if edges.len() == limit {
                break;
            }
            let v = edge.either();
            let w = edge.other(v).unwrap_or(v);
            if components.union(v, w).unwrap_or(false) {
                edges.push(edge);
            }
        }
        let weight = edges.iter().map(Edge::weight).sum();
        Self {
            edges,
            weight,
        }
    }

    /// Returns the forest edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the total forest weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::KruskalMst;
    use super::LazyPrimMst;
    use crate::error::AlgoError;
    use crate::graphs::edge::Edge;
    use crate::graphs::weighted::EdgeWeightedGraph;

    #[test]
    fn spans_each_component() -> Result<(), AlgoError> {
        let mut graph = EdgeWeightedGraph::new(5);
        graph.add_edge(Edge::new(0, 1, 1.0))?;
        graph.add_edge(Edge::new(1, 2, 2.0))?;
        graph.add_edge(Edge::new(0, 2, 3.0))?;
        graph.add_edge(Edge::new(3, 4, 0.5))?;
        graph.add_edge(Edge::new(4, 4, 0.1))?;
        let prim = LazyPrimMst::new(&graph);
        let kruskal = KruskalMst::new(&graph);
        assert_eq!(prim.edges().len(), 3);
        assert_eq!(kruskal.edges().len(), 3);
        assert!((prim.weight() - 3.5).abs() < 1e-12);
        assert!((kruskal.weight() - 3.5).abs() < 1e-12);
        Ok(())
    }
}
