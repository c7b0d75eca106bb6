// crates/algokit-core/src/graphs/symbol.rs
// ============================================================================
// Module: Symbol Graphs
// Description: Graphs whose vertices are named by arbitrary strings.
// Purpose: Map delimited name lists onto integer-indexed graphs.
// Dependencies: tracing, crate::error, crate::graphs
// ============================================================================

//! ## Overview
//! Each input line is a delimiter-separated list of names. The first name is
//! connected to every other name on its line. Names receive indices in the
//! order they are first seen, so the same text always yields the same graph.
//! Blank lines are skipped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use tracing::debug;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::graphs::digraph::Digraph;
use crate::graphs::graph::Graph;
use crate::graphs::io::GraphLimits;

// ============================================================================
// SECTION: Name Index
// ============================================================================

/// Bidirectional mapping between names and vertex indices.
#[derive(Debug, Clone, Default)]
struct NameIndex {
    /// Name to index.
    indices: HashMap<String, usize>,
    /// Index to name.
    names: Vec<String>,
}

impl NameIndex {
    /// Indexes every name in `text` and returns the edge list it describes.
    fn build(
        text: &str,
        delimiter: &str,
        limits: &GraphLimits,
    ) -> AlgoResult<(Self, Vec<(usize, usize)>)> {
        if delimiter.is_empty() {
            return Err(AlgoError::parse(0, "delimiter must not be empty"));
        }
        let mut index = Self::default();
        let mut edges = Vec::new();
        for (number, line) in text.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
            let mut names = line.split(delimiter);
            let Some(first) = names.next() else {
                continue;
            };
            let source = index.intern(first, number + 1, limits)?;
            for name in names {
                let target = index.intern(name, number + 1, limits)?;
                limits.check_edges(edges.len() + 1, number + 1)?;
                edges.push((source, target));
            }
        }
        Ok((index, edges))
    }

    /// Returns the index of `name`, assigning the next free one if new.
    fn intern(&mut self, name: &str, line: usize, limits: &GraphLimits) -> AlgoResult<usize> {
        if let Some(&index) = self.indices.get(name) {
            return Ok(index);
        }
        let index = self.names.len();
        limits.check_vertices(index + 1, line)?;
        self.indices.insert(name.to_string(), index);
        self.names.push(name.to_string());
        Ok(index)
    }

    /// Returns the index of `name`.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the name of `v`.
    fn name_of(&self, v: usize) -> Option<&str> {
        self.names.get(v).map(String::as_str)
    }
}

// ============================================================================
// SECTION: Symbol Graph
// ============================================================================

/// Undirected graph with named vertices.
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    /// Vertex names.
    index: NameIndex,
    /// Underlying graph.
    graph: Graph,
}

impl SymbolGraph {
    /// Builds a symbol graph from delimited lines.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::Parse`] for an empty delimiter or when the name or
    /// edge count exceeds `limits`.
    pub fn parse(text: &str, delimiter: &str, limits: &GraphLimits) -> AlgoResult<Self> {
        let (index, edges) = NameIndex::build(text, delimiter, limits)?;
        let mut graph = Graph::new(index.names.len());
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        debug!(vertices = graph.v(), edges = graph.e(), "parsed symbol graph");
        Ok(Self {
            index,
            graph,
        })
    }

    /// Returns true when a vertex is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.index_of(name).is_some()
    }

    /// Returns the vertex named `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.index_of(name)
    }

    /// Returns the name of vertex `v`.
    #[must_use]
    pub fn name_of(&self, v: usize) -> Option<&str> {
        self.index.name_of(v)
    }

    /// Returns the underlying graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }
}

// ============================================================================
// SECTION: Symbol Digraph
// ============================================================================

/// Digraph with named vertices; each line's first name points to the rest.
#[derive(Debug, Clone)]
pub struct SymbolDigraph {
    /// Vertex names.
    index: NameIndex,
    /// Underlying digraph.
    digraph: Digraph,
}

impl SymbolDigraph {
    /// Builds a symbol digraph from delimited lines.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::Parse`] as for [`SymbolGraph::parse`].
    pub fn parse(text: &str, delimiter: &str, limits: &GraphLimits) -> AlgoResult<Self> {
        let (index, edges) = NameIndex::build(text, delimiter, limits)?;
        let mut digraph = Digraph::new(index.names.len());
        for (v, w) in edges {
            digraph.add_edge(v, w)?;
        }
        debug!(vertices = digraph.v(), edges = digraph.e(), "parsed symbol digraph");
        Ok(Self {
            index,
            digraph,
        })
    }

    /// Returns true when a vertex is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.index_of(name).is_some()
    }

    /// Returns the vertex named `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.index_of(name)
    }

    /// Returns the name of vertex `v`.
    #[must_use]
    pub fn name_of(&self, v: usize) -> Option<&str> {
        self.index.name_of(v)
    }

    /// Returns the underlying digraph.
    #[must_use]
    pub const fn digraph(&self) -> &Digraph {
        &self.digraph
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolDigraph;
    use super::SymbolGraph;
    use crate::error::AlgoError;
    use crate::graphs::io::GraphLimits;

    #[test]
    fn first_seen_order() -> Result<(), AlgoError> {
        let graph = SymbolGraph::parse("b/a/c\n\na/d\n", "/", &GraphLimits::default())?;
        assert_eq!(graph.index_of("b"), Some(0));
        assert_eq!(graph.index_of("d"), Some(3));
        assert_eq!(graph.name_of(2), Some("c"));
        assert_eq!(graph.name_of(9), None);
        assert_eq!(graph.graph().e(), 3);
        Ok(())
    }

    #[test]
    fn digraph_points_from_first_name() -> Result<(), AlgoError> {
        let digraph = SymbolDigraph::parse("x y z\ny z\n", " ", &GraphLimits::default())?;
        assert!(digraph.contains("z"));
        assert_eq!(digraph.digraph().adj(0), &[1, 2]);
        assert_eq!(digraph.digraph().in_degree(2), 2);
        Ok(())
    }

    #[test]
    fn name_limit_applies() {
        let limits = GraphLimits {
            max_vertices: 2,
            max_edges: 10,
        };
        assert!(SymbolGraph::parse("a b c\n", " ", &limits).is_err());
        assert!(SymbolGraph::parse("a b\n", "", &limits).is_err());
    }
}
