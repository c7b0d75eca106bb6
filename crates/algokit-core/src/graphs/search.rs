// crates/algokit-core/src/graphs/search.rs
// ============================================================================
// Module: Graph Search
// Description: Depth-first and breadth-first search clients.
// Purpose: Reachability, paths, components, cycles and two-coloring.
// Dependencies: crate::error, crate::fundamentals::Queue, crate::graphs
// ============================================================================

//! ## Overview
//! Reachability and path searches are written against
//! [`Adjacency`], so the same type answers the question for a [`Graph`] or a
//! [`crate::graphs::Digraph`]. Component, cycle and coloring searches rely on
//! undirected semantics and take a [`Graph`].
//!
//! Constructors validate their sources and return
//! [`crate::AlgoError::VertexOutOfBounds`]; queries on out-of-range vertices
//! answer `false`, `None` or an empty path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::AlgoResult;
use crate::error::check_vertex;
use crate::fundamentals::Queue;
use crate::graphs::graph::Adjacency;
use crate::graphs::graph::Graph;
use crate::graphs::traverse::Visit;
use crate::graphs::traverse::climb;
use crate::graphs::traverse::depth_first;

// ============================================================================
// SECTION: Reachability
// ============================================================================

/// Vertices reachable from one or more sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstSearch {
    /// `marked[v]` is true when `v` is reachable.
    marked: Vec<bool>,
    /// Number of reachable vertices.
    count: usize,
}

impl DepthFirstSearch {
    /// Searches from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> AlgoResult<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Searches from every vertex in `sources`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn from_sources<G: Adjacency + ?Sized>(graph: &G, sources: &[usize]) -> AlgoResult<Self> {
        let n = graph.vertex_count();
        for &s in sources {
            check_vertex(s, n)?;
        }
        let mut marked = vec![false; n];
        let mut count = 0;
        for &s in sources {
            depth_first(graph, s, &mut marked, |step| {
                if matches!(step, Visit::Enter { .. }) {
                    count += 1;
                }
            });
        }
        Ok(Self {
            marked,
            count,
        })
    }

    /// Returns true when `v` is reachable.
    #[must_use]
    pub fn marked(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Returns the number of reachable vertices, sources included.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

// ============================================================================
// SECTION: Paths
// ============================================================================

/// Walks `edge_to` from `v` back to a source and returns the forward path.
fn path_from_links(edge_to: &[Option<usize>], reachable: bool, v: usize) -> Vec<usize> {
    if !reachable {
        return Vec::new();
    }
    let mut path = climb(edge_to, v, usize::MAX);
    path.reverse();
    path
}

/// Depth-first paths from a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthFirstPaths {
    /// Source vertex.
    source: usize,
    /// Reachability per vertex.
    marked: Vec<bool>,
    /// Previous vertex on the discovered path.
    edge_to: Vec<Option<usize>>,
}

impl DepthFirstPaths {
    /// Searches from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> AlgoResult<Self> {
        let n = graph.vertex_count();
        check_vertex(source, n)?;
        let mut marked = vec![false; n];
        let mut edge_to = vec![None; n];
        depth_first(graph, source, &mut marked, |step| {
            if let Visit::Enter {
                vertex,
                parent,
            } = step
            {
                edge_to[vertex] = parent;
            }
        });
        Ok(Self {
            source,
            marked,
            edge_to,
        })
    }

    /// Returns the source vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns true when a path to `v` exists.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked.get(v).copied().unwrap_or(false)
    }

    /// Returns the path from the source to `v`, empty when unreachable.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<usize> {
        path_from_links(&self.edge_to, self.has_path_to(v), v)
    }
}

/// Shortest (fewest-edge) paths from one or more sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadthFirstPaths {
    /// Previous vertex on the shortest path.
    edge_to: Vec<Option<usize>>,
    /// Edge count of the shortest path; `None` when unreachable.
    dist_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Searches from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn new<G: Adjacency + ?Sized>(graph: &G, source: usize) -> AlgoResult<Self> {
        Self::from_sources(graph, &[source])
    }

    /// Searches from every vertex in `sources` at once.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgoError::VertexOutOfBounds`] for an invalid source.
    pub fn from_sources<G: Adjacency + ?Sized>(graph: &G, sources: &[usize]) -> AlgoResult<Self> {
        let n = graph.vertex_count();
        let mut edge_to = vec![None; n];
        let mut dist_to = vec![None; n];
        let mut queue = Queue::new();
        for &s in sources {
            check_vertex(s, n)?;
            if dist_to[s].is_none() {
                dist_to[s] = Some(0);
                queue.enqueue(s);
            }
        }
        while let Some(v) = queue.dequeue() {
            let next = dist_to[v].map_or(0, |d: usize| d + 1);
            for &w in graph.neighbors(v) {
                if dist_to[w].is_none() {
                    edge_to[w] = Some(v);
                    dist_to[w] = Some(next);
                    queue.enqueue(w);
                }
            }
        }
        Ok(Self {
            edge_to,
            dist_to,
        })
    }

    /// Returns true when a path to `v` exists.
    #[must_use]
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v).is_some()
    }

    /// Returns the number of edges on the shortest path to `v`.
    #[must_use]
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }

    /// Returns a shortest path from a source to `v`, empty when unreachable.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Vec<usize> {
        path_from_links(&self.edge_to, self.has_path_to(v), v)
    }
}

// ============================================================================
// SECTION: Connected Components
// ============================================================================

/// Connected components of an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    /// Component id per vertex, numbered in discovery order.
    id: Vec<usize>,
    /// Vertex count per component.
    size: Vec<usize>,
}

impl ConnectedComponents {
    /// Labels every vertex of `graph` with its component.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let n = graph.v();
        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut size = Vec::new();
        for s in 0 .. n {
            if marked[s] {
                continue;
            }
            let component = size.len();
            let mut members = 0;
            depth_first(graph, s, &mut marked, |step| {
                if let Visit::Enter {
                    vertex,
                    ..
                } = step
                {
                    id[vertex] = component;
                    members += 1;
                }
            });
            size.push(members);
        }
        Self {
            id,
            size,
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.size.len()
    }

    /// Returns the component of `v`.
    #[must_use]
    pub fn id(&self, v: usize) -> Option<usize> {
        self.id.get(v).copied()
    }

    /// Returns the number of vertices in `v`'s component.
    #[must_use]
    pub fn size(&self, v: usize) -> usize {
        self.id(v).and_then(|c| self.size.get(c)).copied().unwrap_or(0)
    }

    /// Returns true when `v` and `w` are in the same component.
    #[must_use]
    pub fn connected(&self, v: usize, w: usize) -> bool {
        matches!((self.id(v), self.id(w)), (Some(a), Some(b)) if a == b)
    }

    /// Returns the members of every component, each in ascending order.
    #[must_use]
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.count()];
        for (v, &c) in self.id.iter().enumerate() {
            members[c].push(v);
        }
        members
    }
}

// ============================================================================
// SECTION: Cycles
// ============================================================================

/// Finds a cycle in an undirected graph.
///
/// Self-loops and parallel edges are cycles: `[v, v]` and `[v, w, v]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Cycle vertices with the first repeated at the end.
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    /// Searches `graph` for a cycle.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let cycle = self_loop(graph).or_else(|| parallel_edges(graph)).or_else(|| back_edge(graph));
        Self {
            cycle,
        }
    }

    /// Returns true when the graph has a cycle.
    #[must_use]
    pub const fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a cycle as a closed vertex walk.
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Returns `[v, v]` for the first vertex with a self-loop.
fn self_loop(graph: &Graph) -> Option<Vec<usize>> {
    (0 .. graph.v()).find(|&v| graph.adj(v).contains(&v)).map(|v| vec![v, v])
}

/// Returns `[v, w, v]` for the first pair joined by two edges.
fn parallel_edges(graph: &Graph) -> Option<Vec<usize>> {
    let mut seen = vec![false; graph.v()];
    for v in 0 .. graph.v() {
        let adj = graph.adj(v);
        let repeated = adj.iter().copied().find(|&w| std::mem::replace(&mut seen[w], true));
        for &w in adj {
            seen[w] = false;
        }
        if let Some(w) = repeated {
            return Some(vec![v, w, v]);
        }
    }
    None
}

/// Returns the cycle closed by the first back edge of a depth-first search.
fn back_edge(graph: &Graph) -> Option<Vec<usize>> {
    let n = graph.v();
    let mut marked = vec![false; n];
    let mut edge_to = vec![None; n];
    let mut cycle = None;
    for s in 0 .. n {
        if cycle.is_some() {
            break;
        }
        depth_first(graph, s, &mut marked, |step| match step {
            Visit::Enter {
                vertex,
                parent,
            } => edge_to[vertex] = parent,
            Visit::Revisit {
                vertex,
                neighbor,
            } => {
                if cycle.is_none() && edge_to[vertex] != Some(neighbor) {
                    cycle = Some(close_cycle(&edge_to, vertex, neighbor));
                }
            }
            Visit::Leave(_) => {}
        });
    }
    cycle
}

/// Builds `[v, w, ..., v]` for the edge `v-w` where `w` is an ancestor of `v`.
pub(crate) fn close_cycle(edge_to: &[Option<usize>], v: usize, w: usize) -> Vec<usize> {
    let mut cycle = vec![v];
    cycle.extend(climb(edge_to, v, w).into_iter().rev());
    cycle
}

// ============================================================================
// SECTION: Two-Coloring
// ============================================================================

/// Two-coloring of an undirected graph, or an odd cycle proving none exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartite {
    /// Side per vertex.
    color: Vec<bool>,
    /// Odd-length cycle when the graph is not bipartite.
    odd_cycle: Option<Vec<usize>>,
}

impl Bipartite {
    /// Attempts to two-color `graph`.
    #[must_use]
    pub fn new(graph: &Graph) -> Self {
        let n = graph.v();
        let mut marked = vec![false; n];
        let mut color = vec![false; n];
        let mut edge_to = vec![None; n];
        let mut odd_cycle = None;
        for s in 0 .. n {
            if odd_cycle.is_some() {
                break;
            }
            depth_first(graph, s, &mut marked, |step| match step {
                Visit::Enter {
                    vertex,
                    parent,
                } => {
                    edge_to[vertex] = parent;
                    if let Some(p) = parent {
                        color[vertex] = !color[p];
                    }
                }
                Visit::Revisit {
                    vertex,
                    neighbor,
                } => {
                    if odd_cycle.is_none() && color[vertex] == color[neighbor] {
                        odd_cycle = Some(close_cycle(&edge_to, vertex, neighbor));
                    }
                }
                Visit::Leave(_) => {}
            });
        }
        Self {
            color,
            odd_cycle,
        }
    }

    /// Returns true when the graph is two-colorable.
    #[must_use]
    pub const fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Returns the side of `v`; `None` when the graph is not bipartite.
    #[must_use]
    pub fn color(&self, v: usize) -> Option<bool> {
        if self.is_bipartite() { self.color.get(v).copied() } else { None }
    }

    /// Returns an odd cycle as a closed vertex walk.
    #[must_use]
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::BreadthFirstPaths;
    use super::Cycle;
    use super::DepthFirstPaths;
    use crate::error::AlgoError;
    use crate::graphs::graph::Graph;

    fn graph(v: usize, edges: &[(usize, usize)]) -> Result<Graph, AlgoError> {
        let mut graph = Graph::new(v);
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    #[test]
    fn dfs_and_bfs_paths_differ() -> Result<(), AlgoError> {
        let g = graph(6, &[(0, 5), (2, 4), (2, 3), (1, 2), (0, 1), (3, 4), (3, 5), (0, 2)])?;
        let dfs = DepthFirstPaths::new(&g, 0)?;
        assert_eq!(dfs.path_to(2), vec![0, 5, 3, 2]);
        let bfs = BreadthFirstPaths::new(&g, 0)?;
        assert_eq!(bfs.path_to(2), vec![0, 2]);
        assert_eq!(bfs.dist_to(4), Some(2));
        assert!(DepthFirstPaths::new(&g, 6).is_err());
        Ok(())
    }

    #[test]
    fn self_loop_and_parallel_edges_are_cycles() -> Result<(), AlgoError> {
        let looped = graph(2, &[(0, 1), (1, 1)])?;
        assert_eq!(Cycle::new(&looped).cycle(), Some(&[1, 1][..]));
        let parallel = graph(3, &[(0, 1), (1, 2), (2, 1)])?;
        assert_eq!(Cycle::new(&parallel).cycle(), Some(&[1, 2, 1][..]));
        let tree = graph(3, &[(0, 1), (1, 2)])?;
        assert!(!Cycle::new(&tree).has_cycle());
        Ok(())
    }
}
