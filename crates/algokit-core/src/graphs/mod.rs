// crates/algokit-core/src/graphs/mod.rs
// ============================================================================
// Module: Graphs
// Description: Graph representations and graph-processing algorithms.
// Purpose: Search, ordering, connectivity, spanning trees and shortest paths.
// Dependencies: rand, tracing, crate::error, crate::fundamentals, crate::sorting
// ============================================================================

//! ## Overview
//! Four representations share the vertex numbering `0 .. V`:
//! [`Graph`], [`Digraph`], [`EdgeWeightedGraph`] and [`EdgeWeightedDigraph`].
//! [`SymbolGraph`] and [`SymbolDigraph`] layer string names on top, and
//! [`io`] parses the plain-text formats under caller-supplied
//! [`GraphLimits`].
//!
//! Every depth-first client runs on one explicit-stack traversal that visits
//! neighbors in adjacency order, so results match the recursive formulation
//! without risking stack exhaustion on long paths.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod digraph;
pub mod directed;
pub mod edge;
pub mod generator;
pub mod graph;
pub mod io;
pub mod mst;
pub mod order;
pub mod scc;
pub mod search;
pub mod sp;
pub mod symbol;
mod traverse;
pub mod weighted;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use digraph::Digraph;
pub use directed::BreadthFirstDirectedPaths;
pub use directed::DepthFirstDirectedPaths;
pub use directed::DirectedCycle;
pub use directed::DirectedDfs;
pub use directed::EdgeWeightedDirectedCycle;
pub use edge::DirectedEdge;
pub use edge::Edge;
pub use graph::Adjacency;
pub use graph::Graph;
pub use io::GraphLimits;
pub use io::read_digraph;
pub use io::read_edge_weighted_digraph;
pub use io::read_edge_weighted_graph;
pub use io::read_graph;
pub use mst::KruskalMst;
pub use mst::LazyPrimMst;
pub use order::DepthFirstOrder;
pub use order::KahnTopological;
pub use order::Topological;
pub use scc::KosarajuScc;
pub use scc::NaiveScc;
pub use search::Bipartite;
pub use search::BreadthFirstPaths;
pub use search::ConnectedComponents;
pub use search::Cycle;
pub use search::DepthFirstPaths;
pub use search::DepthFirstSearch;
pub use sp::AcyclicSp;
pub use sp::BellmanFordSp;
pub use sp::DijkstraSp;
pub use sp::DijkstraUndirectedSp;
pub use symbol::SymbolDigraph;
pub use symbol::SymbolGraph;
pub use weighted::EdgeWeightedDigraph;
pub use weighted::EdgeWeightedGraph;
