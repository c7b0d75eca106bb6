// crates/algokit-core/src/graphs/edge.rs
// ============================================================================
// Module: Weighted Edges
// Description: Undirected and directed edges carrying an f64 weight.
// Purpose: Shared value types for spanning trees and shortest paths.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Weights are plain `f64`. Graph constructors reject NaN, so every stored
//! edge has a weight that [`f64::total_cmp`] orders the same way as `<`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Undirected Edge
// ============================================================================

/// Weighted undirected edge `v-w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint.
    v: usize,
    /// The other endpoint.
    w: usize,
    /// Edge weight.
    weight: f64,
}

impl Edge {
    /// Creates an edge between `v` and `w`.
    #[must_use]
    pub const fn new(v: usize, w: usize, weight: f64) -> Self {
        Self {
            v,
            w,
            weight,
        }
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns one endpoint.
    #[must_use]
    pub const fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint.
    #[must_use]
    pub const fn other(&self, vertex: usize) -> Option<usize> {
        if vertex == self.v {
            Some(self.w)
        } else if vertex == self.w {
            Some(self.v)
        } else {
            None
        }
    }

    /// Orders edges by weight.
    #[must_use]
    pub fn compare_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

// ============================================================================
// SECTION: Directed Edge
// ============================================================================

/// Weighted directed edge `from->to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectedEdge {
    /// Tail vertex.
    from: usize,
    /// Head vertex.
    to: usize,
    /// Edge weight.
    weight: f64,
}

impl DirectedEdge {
    /// Creates the edge `from->to`.
    #[must_use]
    pub const fn new(from: usize, to: usize, weight: f64) -> Self {
        Self {
            from,
            to,
            weight,
        }
    }

    /// Returns the tail vertex.
    #[must_use]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Returns the head vertex.
    #[must_use]
    pub const fn to(&self) -> usize {
        self.to
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:.2}", self.from, self.to, self.weight)
    }
}
