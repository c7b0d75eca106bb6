// crates/algokit-core/src/graphs/order.rs
// ============================================================================
// Module: Vertex Orderings
// Description: Depth-first orders and topological sorts of digraphs.
// Purpose: Scheduling and the ordering step of strong components.
// Dependencies: crate::fundamentals::Queue, crate::graphs
// ============================================================================

//! ## Overview
//! [`DepthFirstOrder`] records preorder, postorder and reverse postorder over
//! a full depth-first sweep (sources tried in vertex order). Reverse
//! postorder of a DAG is a topological order, which [`Topological`] exposes.
//! [`KahnTopological`] instead repeatedly removes in-degree-zero vertices.
//!
//! ## Invariants
//! - A topological order lists every vertex exactly once and places the tail
//!   of each edge before its head.
//! - Both topological sorts report no order for a digraph with a cycle.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::fundamentals::Queue;
use crate::graphs::digraph::Digraph;
use crate::graphs::directed::DirectedCycle;
use crate::graphs::graph::Adjacency;
use crate::graphs::traverse::Visit;
use crate::graphs::traverse::depth_first;
use crate::graphs::weighted::EdgeWeightedDigraph;

// ============================================================================
// SECTION: Depth-First Order
// ============================================================================

/// Preorder, postorder and reverse postorder of a depth-first sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstOrder {
    /// Vertices in preorder.
    pre: Vec<usize>,
    /// Vertices in postorder.
    post: Vec<usize>,
    /// Preorder number per vertex.
    pre_number: Vec<usize>,
    /// Postorder number per vertex.
    post_number: Vec<usize>,
}

impl DepthFirstOrder {
    /// Orders every vertex of `graph`.
    #[must_use]
    pub fn new<G: Adjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut order = Self {
            pre: Vec::with_capacity(n),
            post: Vec::with_capacity(n),
            pre_number: vec![0; n],
            post_number: vec![0; n],
        };
        for s in 0 .. n {
            depth_first(graph, s, &mut marked, |step| match step {
                Visit::Enter {
                    vertex,
                    ..
                } => {
                    order.pre_number[vertex] = order.pre.len();
                    order.pre.push(vertex);
                }
                Visit::Leave(vertex) => {
                    order.post_number[vertex] = order.post.len();
                    order.post.push(vertex);
                }
                Visit::Revisit {
                    ..
                } => {}
            });
        }
        order
    }

    /// Orders every vertex of an edge-weighted digraph.
    #[must_use]
    pub fn from_weighted(digraph: &EdgeWeightedDigraph) -> Self {
        Self::new(&digraph.to_digraph())
    }

    /// Returns the vertices in preorder.
    #[must_use]
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// Returns the vertices in postorder.
    #[must_use]
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// Returns the vertices in reverse postorder.
    #[must_use]
    pub fn reverse_post(&self) -> Vec<usize> {
        self.post.iter().rev().copied().collect()
    }

    /// Returns the position of `v` in preorder.
    #[must_use]
    pub fn pre_number(&self, v: usize) -> Option<usize> {
        self.pre_number.get(v).copied()
    }

    /// Returns the position of `v` in postorder.
    #[must_use]
    pub fn post_number(&self, v: usize) -> Option<usize> {
        self.post_number.get(v).copied()
    }
}

// ============================================================================
// SECTION: Topological Sort
// ============================================================================

/// Topological order from reverse postorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topological {
    /// Vertices in topological order; `None` when the digraph has a cycle.
    order: Option<Vec<usize>>,
    /// Position of each vertex in `order`.
    rank: Vec<usize>,
}

impl Topological {
    /// Sorts `digraph`.
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        if DirectedCycle::new(digraph).has_cycle() {
            return Self {
                order: None,
                rank: Vec::new(),
            };
        }
        Self::from_order(DepthFirstOrder::new(digraph).reverse_post())
    }

    /// Sorts an edge-weighted digraph by its structure.
    #[must_use]
    pub fn from_weighted(digraph: &EdgeWeightedDigraph) -> Self {
        Self::new(&digraph.to_digraph())
    }

    /// Wraps a complete order and derives ranks.
    fn from_order(order: Vec<usize>) -> Self {
        let mut rank = vec![0; order.len()];
        for (position, &v) in order.iter().enumerate() {
            rank[v] = position;
        }
        Self {
            order: Some(order),
            rank,
        }
    }

    /// Returns true when the digraph is a DAG.
    #[must_use]
    pub const fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the topological order.
    #[must_use]
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the order.
    #[must_use]
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().and_then(|_| self.rank.get(v).copied())
    }
}

/// Queue-based topological sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KahnTopological {
    /// Vertices in topological order; `None` when the digraph has a cycle.
    order: Option<Vec<usize>>,
    /// Position of each vertex in `order`.
    rank: Vec<usize>,
}

impl KahnTopological {
    /// Sorts `digraph` by repeatedly removing sources.
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        let n = digraph.v();
        let mut in_degree: Vec<usize> = (0 .. n).map(|v| digraph.in_degree(v)).collect();
        let mut queue: Queue<usize> = (0 .. n).filter(|&v| in_degree[v] == 0).collect();
        let mut order = Vec::with_capacity(n);
        let mut rank = vec![0; n];
        while let Some(v) = queue.dequeue() {
            rank[v] = order.len();
            order.push(v);
            for &w in digraph.adj(v) {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.enqueue(w);
                }
            }
        }
        if order.len() == n {
            Self {
                order: Some(order),
                rank,
            }
        } else {
            Self {
                order: None,
                rank: Vec::new(),
            }
        }
    }

    /// Returns true when the digraph is a DAG.
    #[must_use]
    pub const fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the topological order.
    #[must_use]
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the order.
    #[must_use]
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().and_then(|_| self.rank.get(v).copied())
    }
}
