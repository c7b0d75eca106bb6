// crates/algokit-core/src/graphs/io.rs
// ============================================================================
// Module: Graph Text Formats
// Description: Parsers for the `V E edges...` graph file formats.
// Purpose: Build graphs from untrusted text with bounded size and line errors.
// Dependencies: tracing, crate::error, crate::graphs
// ============================================================================

//! ## Overview
//! Every format starts with the vertex count `V` and edge count `E`, followed
//! by `E` edges of two vertex tokens (`v w`) or two vertex tokens and a weight
//! (`v w weight`). Tokens are whitespace separated and may span lines. Lines
//! whose first non-blank character is `#` are comments.
//!
//! Security posture: input is untrusted. `V` and `E` are checked against
//! [`GraphLimits`] before any allocation proportional to them, and trailing
//! tokens after the last edge are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::vec::IntoIter;

use tracing::debug;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::graphs::digraph::Digraph;
use crate::graphs::edge::DirectedEdge;
use crate::graphs::edge::Edge;
use crate::graphs::graph::Graph;
use crate::graphs::weighted::EdgeWeightedDigraph;
use crate::graphs::weighted::EdgeWeightedGraph;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum vertex count accepted by the parsers.
pub const DEFAULT_MAX_VERTICES: usize = 1_000_000;
/// Default maximum edge count accepted by the parsers.
pub const DEFAULT_MAX_EDGES: usize = 10_000_000;

/// Size bounds applied while parsing graph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    /// Largest accepted `V`.
    pub max_vertices: usize,
    /// Largest accepted `E`.
    pub max_edges: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            max_edges: DEFAULT_MAX_EDGES,
        }
    }
}

impl GraphLimits {
    /// Returns an error when `v` exceeds the vertex limit.
    pub(crate) fn check_vertices(&self, v: usize, line: usize) -> AlgoResult<()> {
        if v > self.max_vertices {
            return Err(AlgoError::parse(
                line,
                format!("vertex count {v} exceeds limit {}", self.max_vertices),
            ));
        }
        Ok(())
    }

    /// Returns an error when `e` exceeds the edge limit.
    pub(crate) fn check_edges(&self, e: usize, line: usize) -> AlgoResult<()> {
        if e > self.max_edges {
            return Err(AlgoError::parse(
                line,
                format!("edge count {e} exceeds limit {}", self.max_edges),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Tokenizer
// ============================================================================

/// Whitespace tokens tagged with their one-based line numbers.
struct Tokens<'a> {
    /// Remaining tokens.
    tokens: IntoIter<(usize, &'a str)>,
    /// Line of the most recently consumed token.
    line: usize,
}

impl<'a> Tokens<'a> {
    /// Splits `text` into tokens, skipping comment lines.
    fn new(text: &'a str) -> Self {
        let tokens: Vec<(usize, &'a str)> = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with('#'))
            .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)))
            .collect();
        Self {
            tokens: tokens.into_iter(),
            line: 0,
        }
    }

    /// Consumes the next token, naming `what` in the error when input ends.
    fn advance(&mut self, what: &str) -> AlgoResult<&'a str> {
        let Some((line, token)) = self.tokens.next() else {
            return Err(AlgoError::parse(self.line, format!("missing {what}")));
        };
        self.line = line;
        Ok(token)
    }

    /// Consumes a non-negative integer.
    fn count(&mut self, what: &str) -> AlgoResult<usize> {
        let token = self.advance(what)?;
        token.parse().map_err(|_| AlgoError::parse(self.line, format!("invalid {what} '{token}'")))
    }

    /// Consumes a floating-point weight.
    fn weight(&mut self) -> AlgoResult<f64> {
        let token = self.advance("weight")?;
        token.parse().map_err(|_| AlgoError::parse(self.line, format!("invalid weight '{token}'")))
    }

    /// Reads and bounds the `V E` header.
    fn header(&mut self, limits: &GraphLimits) -> AlgoResult<(usize, usize)> {
        let v = self.count("vertex count")?;
        limits.check_vertices(v, self.line)?;
        let e = self.count("edge count")?;
        limits.check_edges(e, self.line)?;
        Ok((v, e))
    }

    /// Fails when any token remains.
    fn finish(mut self) -> AlgoResult<()> {
        self.tokens.next().map_or(Ok(()), |(line, token)| {
            Err(AlgoError::parse(line, format!("unexpected trailing token '{token}'")))
        })
    }

    /// Tags a structural error with the current line.
    fn at_line(&self, err: &AlgoError) -> AlgoError {
        AlgoError::parse(self.line, err.to_string())
    }
}

// ============================================================================
// SECTION: Parsers
// ============================================================================

/// Parses an undirected graph.
///
/// # Errors
///
/// Returns [`AlgoError::Parse`] naming the offending line for malformed
/// tokens, out-of-range vertices, limit violations and trailing input.
pub fn read_graph(text: &str, limits: &GraphLimits) -> AlgoResult<Graph> {
    let mut tokens = Tokens::new(text);
    let (v, e) = tokens.header(limits)?;
    let mut graph = Graph::new(v);
    for _ in 0 .. e {
        let from = tokens.count("vertex")?;
        let to = tokens.count("vertex")?;
        graph.add_edge(from, to).map_err(|err| tokens.at_line(&err))?;
    }
    tokens.finish()?;
    debug!(vertices = v, edges = e, "parsed graph");
    Ok(graph)
}

/// Parses a digraph.
///
/// # Errors
///
/// Returns [`AlgoError::Parse`] as for [`read_graph`].
pub fn read_digraph(text: &str, limits: &GraphLimits) -> AlgoResult<Digraph> {
    let mut tokens = Tokens::new(text);
    let (v, e) = tokens.header(limits)?;
    let mut digraph = Digraph::new(v);
    for _ in 0 .. e {
        let from = tokens.count("vertex")?;
        let to = tokens.count("vertex")?;
        digraph.add_edge(from, to).map_err(|err| tokens.at_line(&err))?;
    }
    tokens.finish()?;
    debug!(vertices = v, edges = e, "parsed digraph");
    Ok(digraph)
}

/// Parses an edge-weighted undirected graph.
///
/// # Errors
///
/// Returns [`AlgoError::Parse`] as for [`read_graph`], including NaN weights.
pub fn read_edge_weighted_graph(text: &str, limits: &GraphLimits) -> AlgoResult<EdgeWeightedGraph> {
    let mut tokens = Tokens::new(text);
    let (v, e) = tokens.header(limits)?;
    let mut graph = EdgeWeightedGraph::new(v);
    for _ in 0 .. e {
        let from = tokens.count("vertex")?;
        let to = tokens.count("vertex")?;
        let weight = tokens.weight()?;
        graph.add_edge(Edge::new(from, to, weight)).map_err(|err| tokens.at_line(&err))?;
    }
    tokens.finish()?;
    debug!(vertices = v, edges = e, "parsed edge-weighted graph");
    Ok(graph)
}

/// Parses an edge-weighted digraph.
///
/// # Errors
///
/// Returns [`AlgoError::Parse`] as for [`read_graph`], including NaN weights.
pub fn read_edge_weighted_digraph(
    text: &str,
    limits: &GraphLimits,
) -> AlgoResult<EdgeWeightedDigraph> {
    let mut tokens = Tokens::new(text);
    let (v, e) = tokens.header(limits)?;
    let mut digraph = EdgeWeightedDigraph::new(v);
    for _ in 0 .. e {
        let from = tokens.count("vertex")?;
        let to = tokens.count("vertex")?;
        let weight = tokens.weight()?;
        digraph
            .add_edge(DirectedEdge::new(from, to, weight))
            .map_err(|err| tokens.at_line(&err))?;
    }
    tokens.finish()?;
    debug!(vertices = v, edges = e, "parsed edge-weighted digraph");
    Ok(digraph)
}

#[cfg(test)]
mod tests {
    use super::GraphLimits;
    use super::read_digraph;
    use super::read_edge_weighted_graph;
    use super::read_graph;
    use crate::error::AlgoError;

    #[test]
    fn skips_comments_and_spans_lines() -> Result<(), AlgoError> {
        let text = "# tiny\n3\n2\n0 1 1\n2\n";
        let graph = read_graph(text, &GraphLimits::default())?;
        assert_eq!(graph.e(), 2);
        assert_eq!(graph.adj(1), &[0, 2]);
        Ok(())
    }

    #[test]
    fn reports_line_of_bad_vertex() {
        let text = "3\n2\n0 1\n1 9\n";
        assert_eq!(
            read_digraph(text, &GraphLimits::default()),
            Err(AlgoError::parse(4, "vertex 9 out of range 0..3"))
        );
    }

    #[test]
    fn enforces_limits_before_allocating() {
        let limits = GraphLimits {
            max_vertices: 10,
            max_edges: 5,
        };
        assert!(matches!(
            read_graph("11\n0\n", &limits),
            Err(AlgoError::Parse {
                line: 1,
                ..
            })
        ));
        assert!(matches!(
            read_graph("10\n6\n", &limits),
            Err(AlgoError::Parse {
                line: 2,
                ..
            })
        ));
    }

    #[test]
    fn rejects_truncated_and_trailing_input() {
        let limits = GraphLimits::default();
        assert!(read_graph("3\n2\n0 1\n", &limits).is_err());
        assert!(read_graph("3\n1\n0 1 2\n", &limits).is_err());
        assert!(read_edge_weighted_graph("2\n1\n0 1 NaN\n", &limits).is_err());
        assert!(read_edge_weighted_graph("2\n1\n0 1 abc\n", &limits).is_err());
    }

    #[test]
    fn parses_leading_dot_weights() -> Result<(), AlgoError> {
        let graph = read_edge_weighted_graph("2\n1\n0 1 .35\n", &GraphLimits::default())?;
        assert!((graph.edges()[0].weight() - 0.35).abs() < 1e-12);
        Ok(())
    }
}
