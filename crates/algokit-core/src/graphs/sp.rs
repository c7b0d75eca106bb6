// crates/algokit-core/src/graphs/sp.rs
// ============================================================================
// Module: Shortest Paths
// Description: Single-source shortest paths in edge-weighted graphs.
// Purpose: Dijkstra, DAG relaxation and Bellman-Ford behind one query surface.
// Dependencies: tracing, crate::error, crate::sorting::IndexMinPq, crate::graphs
// ============================================================================

//! ## Overview
//! Every solver builds a shortest-paths tree of `edge_to` links and distances
//! by edge relaxation; they differ in the order edges are relaxed.
//!
//! | Solver | Weights | Order |
//! |---|---|---|
//! | [`DijkstraSp`] | non-negative | closest vertex first |
//! | [`AcyclicSp`] | any, DAG only | topological |
//! | [`BellmanFordSp`] | any | `V` full passes |
//!
//! ## Invariants
//! - `dist_to(v)` is `f64::INFINITY` exactly when `v` is unreachable.
//! - `path_to(v)` is a chain of edges from the source whose weights sum to
//!   `dist_to(v)`; it is empty for the source and for unreachable vertices.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::error::check_vertex;
use crate::graphs::directed::EdgeWeightedDirectedCycle;
use crate::graphs::edge::DirectedEdge;
use crate::graphs::edge::Edge;
use crate::graphs::order::Topological;
use crate::graphs::weighted::EdgeWeightedDigraph;
use crate::graphs::weighted::EdgeWeightedGraph;
use crate::sorting::IndexMinPq;

// ============================================================================
// SECTION: Shortest-Paths Tree
// ============================================================================

/// Distances and parent edges shared by the directed solvers.
#[derive(Debug, Clone, PartialEq)]
struct PathTree {
    /// Source vertex.
    source: usize,
    /// Best known distance per vertex.
    dist_to: Vec<f64>,
    /// Last edge on the best known path per vertex.
    edge_to: Vec<Option<DirectedEdge>>,
}

impl PathTree {
    /// Creates a tree where only `source` is reachable.
    fn new(vertices: usize, source: usize) -> AlgoResult<Self> {
        check_vertex(source, vertices)?;
        let mut dist_to = vec![f64::INFINITY; vertices];
        dist_to[source] = 0.0;
        Ok(Self {
            source,
            dist_to,
            edge_to: vec![None; vertices],
        })
    }

    /// Relaxes `edge` and returns true when it shortened the path to its head.
    fn relax(&mut self, edge: DirectedEdge) -> bool {
        let candidate = self.dist_to[edge.from()] + edge.weight();
        if candidate < self.dist_to[edge.to()] {
            self.dist_to[edge.to()] = candidate;
            self.edge_to[edge.to()] = Some(edge);
            true
        } else {
            false
        }
    }

    /// Returns the distance to `v`.
    fn dist_to(&self, v: usize) -> f64 {
        self.dist_to.get(v).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns the edges from the source to `v`.
    ///
    /// The walk stops after `V` edges so a parent cycle cannot loop forever.
    fn path_to(&self, v: usize) -> Vec<DirectedEdge> {
        if self.dist_to(v).is_infinite() {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to.get(x).copied().flatten() {
            if path.len() == self.edge_to.len() {
                break;
            }
            path.push(edge);
            x = edge.from();
        }
        path.reverse();
        path
    }
}

/// Fails on the first negative edge of `digraph`.
fn reject_negative(digraph: &EdgeWeightedDigraph) -> AlgoResult<()> {
    let Some(edge) = digraph.edges().into_iter().find(|edge| edge.weight() < 0.0) else {
        return Ok(());
    };
    debug!(from = edge.from(), to = edge.to(), "rejecting negative edge weight");
    Err(AlgoError::NegativeWeight {
        from: edge.from(),
        to: edge.to(),
    })
}

// ============================================================================
// SECTION: Dijkstra
// ============================================================================

/// Dijkstra's algorithm on an edge-weighted digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraSp {
    /// Shortest-paths tree.
    tree: PathTree,
}

impl DijkstraSp {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::NegativeWeight`] when any edge weight is negative
    /// and [`AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new(digraph: &EdgeWeightedDigraph, source: usize) -> AlgoResult<Self> {
        reject_negative(digraph)?;
        let mut tree = PathTree::new(digraph.v(), source)?;
        let mut pq = IndexMinPq::new(digraph.v());
        pq.insert(source, 0.0)?;
        while let Some(v) = pq.del_min() {
            for &edge in digraph.adj(v) {
                if tree.relax(edge) {
                    let to = edge.to();
                    let dist = tree.dist_to[to];
                    if pq.contains(to) { pq.decrease_key(to, dist)? } else { pq.insert(to, dist)? }
                }
            }
        }
        Ok(Self {
            tree,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.tree.source
    }

    /// Returns the shortest distance to `v`, or infinity when unreachable.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> f64 {
        self.tree.dist_to(v)
    }

    /// Returns true when `v` is reachable.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v) < f64::INFINITY
    }

    /// Returns a shortest path to `v`.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<DirectedEdge> {
        self.tree.path_to(v)
    }
}

/// Dijkstra's algorithm on an undirected edge-weighted graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraUndirectedSp {
    /// Source vertex.
    source: usize,
    /// Best distance per vertex.
    dist_to: Vec<f64>,
    /// Last edge on the best path per vertex.
    edge_to: Vec<Option<Edge>>,
}

impl DijkstraUndirectedSp {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::NegativeWeight`] when any edge weight is negative
    /// and [`AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new(graph: &EdgeWeightedGraph, source: usize) -> AlgoResult<Self> {
        let n = graph.v();
        check_vertex(source, n)?;
        if let Some(edge) = graph.edges().into_iter().find(|edge| edge.weight() < 0.0) {
            let v = edge.either();
            debug!(from = v, "rejecting negative edge weight");
            return Err(AlgoError::NegativeWeight {
                from: v,
                to: edge.other(v).unwrap_or(v),
            });
        }
        let mut dist_to = vec![f64::INFINITY; n];
        let mut edge_to = vec![None; n];
        dist_to[source] = 0.0;
        let mut pq = IndexMinPq::new(n);
        pq.insert(source, 0.0)?;
        while let Some(v) = pq.del_min() {
            for &edge in graph.adj(v) {
                let Some(w) = edge.other(v) else {
                    continue;
                };
                let candidate = dist_to[v] + edge.weight();
                if candidate < dist_to[w] {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(edge);
                    if pq.contains(w) {
                        pq.decrease_key(w, candidate)?;
                    } else {
                        pq.insert(w, candidate)?;
                    }
                }
            }
        }
        Ok(Self {
            source,
            dist_to,
            edge_to,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the shortest distance to `v`, or infinity when unreachable.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> f64 {
        self.dist_to.get(v).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns true when `v` is reachable.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v) < f64::INFINITY
    }

    /// Returns a shortest path to `v`, each edge sharing an endpoint with
    /// the next.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<Edge> {
        if !self.has_path_to(v) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(edge) = self.edge_to.get(x).copied().flatten() {
            path.push(edge);
            match edge.other(x) {
                Some(next) => x = next,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

// ============================================================================
// SECTION: Acyclic
// ============================================================================

/// Shortest paths in a DAG by relaxing vertices in topological order.
///
/// Negative weights are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct AcyclicSp {
    /// Shortest-paths tree.
    tree: PathTree,
}

impl AcyclicSp {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::NotAcyclic`] when the digraph has a directed
    /// cycle and [`AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new(digraph: &EdgeWeightedDigraph, source: usize) -> AlgoResult<Self> {
        let mut tree = PathTree::new(digraph.v(), source)?;
        let topological = Topological::from_weighted(digraph);
        let order = topological.order().ok_or(AlgoError::NotAcyclic)?;
        for &v in order {
            if tree.dist_to(v).is_infinite() {
                continue;
            }
            for &edge in digraph.adj(v) {
                tree.relax(edge);
            }
        }
        Ok(Self {
            tree,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.tree.source
    }

    /// Returns the shortest distance to `v`, or infinity when unreachable.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> f64 {
        self.tree.dist_to(v)
    }

    /// Returns true when `v` is reachable.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v) < f64::INFINITY
    }

    /// Returns a shortest path to `v`.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<DirectedEdge> {
        self.tree.path_to(v)
    }
}

// ============================================================================
// SECTION: Bellman-Ford
// ============================================================================

/// Bellman-Ford by `V` full relaxation passes.
///
/// A further pass that still shortens a path proves a negative cycle is
/// reachable from the source; distances are then not meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct BellmanFordSp {
    /// Shortest-paths tree.
    tree: PathTree,
    /// Negative cycle reachable from the source, if any.
    negative_cycle: Option<Vec<DirectedEdge>>,
}

impl BellmanFordSp {
    /// Computes shortest paths from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new(digraph: &EdgeWeightedDigraph, source: usize) -> AlgoResult<Self> {
        let mut tree = PathTree::new(digraph.v(), source)?;
        let edges = digraph.edges();
        for _ in 0 .. digraph.v() {
            let mut changed = false;
            for &edge in &edges {
                changed |= tree.relax(edge);
            }
            if !changed {
                break;
            }
        }
        let mut still_relaxing = false;
        for &edge in &edges {
            still_relaxing |= tree.relax(edge);
        }
        let negative_cycle = if still_relaxing { find_parent_cycle(&tree) } else { None };
        if negative_cycle.is_some() {
            debug!(source, "negative cycle reachable from source");
        }
        Ok(Self {
            tree,
            negative_cycle,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.tree.source
    }

    /// Returns true when a negative cycle is reachable from the source.
    #[must_use]
    pub const fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Returns a negative cycle reachable from the source.
    #[must_use]
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge]> {
        self.negative_cycle.as_deref()
    }

    /// Returns the shortest distance to `v`, or infinity when unreachable.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> f64 {
        self.tree.dist_to(v)
    }

    /// Returns true when `v` is reachable.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v) < f64::INFINITY
    }

    /// Returns a shortest path to `v`; empty when a negative cycle exists.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<DirectedEdge> {
        if self.has_negative_cycle() { Vec::new() } else { self.tree.path_to(v) }
    }
}

/// Finds a cycle among the parent edges of `tree`.
fn find_parent_cycle(tree: &PathTree) -> Option<Vec<DirectedEdge>> {
    let mut parents = EdgeWeightedDigraph::new(tree.edge_to.len());
    for edge in tree.edge_to.iter().flatten() {
        parents.add_edge(*edge).ok()?;
    }
    EdgeWeightedDirectedCycle::new(&parents).cycle().map(<[DirectedEdge]>::to_vec)
}
