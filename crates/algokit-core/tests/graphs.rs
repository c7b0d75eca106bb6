// crates/algokit-core/tests/graphs.rs
// ============================================================================
// Module: Graph Processing Tests
// Description: End-to-end graph algorithms over the textbook fixture graphs.
// Purpose: Pin traversal orders, components, orderings and path weights.
// Dependencies: algokit_core::graphs, support::fixtures
// ============================================================================
//! ## Overview
//! Every fixture is parsed with the library readers, then run through the
//! graph clients. Expected values are the classic published answers for
//! adjacency lists kept in insertion order.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use algokit_core::AlgoError;
use algokit_core::GraphLimits;
use algokit_core::graphs::AcyclicSp;
use algokit_core::graphs::BellmanFordSp;
use algokit_core::graphs::Bipartite;
use algokit_core::graphs::BreadthFirstDirectedPaths;
use algokit_core::graphs::BreadthFirstPaths;
use algokit_core::graphs::ConnectedComponents;
use algokit_core::graphs::Cycle;
use algokit_core::graphs::DepthFirstDirectedPaths;
use algokit_core::graphs::DepthFirstOrder;
use algokit_core::graphs::DepthFirstPaths;
use algokit_core::graphs::DepthFirstSearch;
use algokit_core::graphs::DijkstraSp;
use algokit_core::graphs::DijkstraUndirectedSp;
use algokit_core::graphs::DirectedCycle;
use algokit_core::graphs::DirectedDfs;
use algokit_core::graphs::DirectedEdge;
use algokit_core::graphs::EdgeWeightedDigraph;
use algokit_core::graphs::EdgeWeightedDirectedCycle;
use algokit_core::graphs::KahnTopological;
use algokit_core::graphs::KosarajuScc;
use algokit_core::graphs::KruskalMst;
use algokit_core::graphs::LazyPrimMst;
use algokit_core::graphs::NaiveScc;
use algokit_core::graphs::SymbolDigraph;
use algokit_core::graphs::SymbolGraph;
use algokit_core::graphs::Topological;
use algokit_core::graphs::read_digraph;
use algokit_core::graphs::read_edge_weighted_digraph;
use algokit_core::graphs::read_edge_weighted_graph;
use algokit_core::graphs::read_graph;
use support::TestResult;
use support::ensure;
use support::ensure_close;
use support::fixtures::ROUTES;
use support::fixtures::TINY_CG;
use support::fixtures::TINY_DAG;
use support::fixtures::TINY_DG;
use support::fixtures::TINY_EWD;
use support::fixtures::TINY_EWDAG;
use support::fixtures::TINY_EWG;
use support::fixtures::TINY_G;

/// Distances from vertex 0 in the positive edge-weighted digraph.
const EWD_FROM_0: [f64; 8] = [0.0, 1.05, 0.26, 0.99, 0.38, 0.73, 1.51, 0.60];

/// Same digraph with three negative edges out of vertex 6.
const TINY_EWDN: &str = "\
8 15
4 5 0.35
5 4 0.35
4 7 0.37
5 7 0.28
7 5 0.28
5 1 0.32
0 4 0.38
0 2 0.26
7 3 0.39
1 3 0.29
2 7 0.34
6 2 -1.20
3 6 0.52
6 0 -1.40
6 4 -1.25
";

// ============================================================================
// SECTION: Undirected Graphs
// ============================================================================

/// Parsed undirected graph reports its shape.
#[test]
fn tiny_graph_shape() -> TestResult {
    let g = read_graph(TINY_G, &GraphLimits::default())?;
    ensure(g.v() == 13 && g.e() == 13, "tinyG has 13 vertices and 13 edges")?;
    ensure(g.degree(5) == 3, "vertex 5 has degree 3")?;
    ensure(g.adj(0) == [5, 1, 2, 6], "adjacency keeps insertion order")?;
    ensure(g.self_loops() == 0, "tinyG has no self-loops")?;
    Ok(())
}

/// Depth-first search marks exactly one component.
#[test]
fn depth_first_search_counts_reachable() -> TestResult {
    let g = read_graph(TINY_G, &GraphLimits::default())?;
    let from_zero = DepthFirstSearch::new(&g, 0)?;
    ensure(from_zero.count() == 7, "component of 0 has 7 vertices")?;
    ensure(!from_zero.marked(7), "7 is not connected to 0")?;
    let from_nine = DepthFirstSearch::new(&g, 9)?;
    ensure(from_nine.count() == 4, "component of 9 has 4 vertices")?;
    ensure(
        matches!(
            DepthFirstSearch::new(&g, 13),
            Err(AlgoError::VertexOutOfBounds {
                vertex: 13,
                vertices: 13,
            })
        ),
        "source outside the graph is rejected",
    )?;
    Ok(())
}

/// Depth-first and breadth-first paths take different routes.
#[test]
fn paths_follow_search_order() -> TestResult {
    let g = read_graph(TINY_CG, &GraphLimits::default())?;
    let dfs = DepthFirstPaths::new(&g, 0)?;
    ensure(dfs.path_to(2) == [0, 5, 3, 2], "dfs reaches 2 through 5 and 3")?;
    ensure(dfs.path_to(5) == [0, 5], "dfs reaches 5 directly")?;
    let bfs = BreadthFirstPaths::new(&g, 0)?;
    ensure(bfs.path_to(2) == [0, 2], "bfs path to 2 is one edge")?;
    ensure(bfs.path_to(3) == [0, 5, 3], "bfs path to 3")?;
    ensure(bfs.path_to(4) == [0, 2, 4], "bfs path to 4")?;
    ensure(bfs.dist_to(4) == Some(2), "bfs distance to 4 is 2")?;
    ensure(bfs.path_to(0) == [0], "path to the source is the source")?;
    Ok(())
}

/// Unreachable vertices have no path.
#[test]
fn unreachable_vertices_have_no_path() -> TestResult {
    let g = read_graph(TINY_G, &GraphLimits::default())?;
    let dfs = DepthFirstPaths::new(&g, 0)?;
    ensure(!dfs.has_path_to(9) && dfs.path_to(9).is_empty(), "dfs cannot reach 9")?;
    let bfs = BreadthFirstPaths::from_sources(&g, &[0, 7])?;
    ensure(bfs.dist_to(8) == Some(1), "second source reaches 8 in one hop")?;
    ensure(bfs.dist_to(12).is_none(), "no source reaches 12")?;
    ensure(!bfs.has_path_to(99), "out-of-range vertex has no path")?;
    Ok(())
}

/// Components partition the vertex set.
#[test]
fn connected_components_partition() -> TestResult {
    let g = read_graph(TINY_G, &GraphLimits::default())?;
    let cc = ConnectedComponents::new(&g);
    ensure(cc.count() == 3, "tinyG has three components")?;
    ensure(cc.connected(0, 6) && cc.connected(9, 12), "members share a component")?;
    ensure(!cc.connected(0, 7), "separate components are not connected")?;
    ensure(cc.size(0) == 7 && cc.size(7) == 2 && cc.size(11) == 4, "component sizes")?;
    let components = cc.components();
    ensure(components.len() == 3, "components lists each component")?;
    ensure(components[1] == [7, 8], "second component is 7 and 8")?;
    ensure(cc.id(13).is_none(), "no id beyond the last vertex")?;
    Ok(())
}

/// A cycle is reported as a closed walk.
#[test]
fn cycle_detection() -> TestResult {
    let g = read_graph(TINY_G, &GraphLimits::default())?;
    let cycle = Cycle::new(&g);
    let Some(walk) = cycle.cycle() else {
        return Err("tinyG contains a cycle".into());
    };
    ensure(walk.len() >= 4, "simple cycle has at least three edges")?;
    ensure(walk.first() == walk.last(), "cycle closes on its first vertex")?;
    for pair in walk.windows(2) {
        ensure(g.adj(pair[0]).contains(&pair[1]), "consecutive cycle vertices are adjacent")?;
    }
    let tree = read_graph("4 3\n0 1\n1 2\n1 3\n", &GraphLimits::default())?;
    ensure(!Cycle::new(&tree).has_cycle(), "a tree has no cycle")?;
    Ok(())
}

/// Two-coloring succeeds on bipartite graphs and names an odd cycle otherwise.
#[test]
fn bipartite_coloring() -> TestResult {
    let even = read_graph("6 5\n0 1\n1 2\n1 3\n3 5\n2 4\n", &GraphLimits::default())?;
    let colored = Bipartite::new(&even);
    ensure(colored.is_bipartite(), "tree is bipartite")?;
    ensure(colored.color(0) != colored.color(1), "neighbors get different colors")?;
    ensure(colored.odd_cycle().is_none(), "no odd cycle in a bipartite graph")?;

    let odd = read_graph(TINY_CG, &GraphLimits::default())?;
    let check = Bipartite::new(&odd);
    ensure(!check.is_bipartite(), "triangle 0-1-2 breaks bipartiteness")?;
    let Some(cycle) = check.odd_cycle() else {
        return Err("odd cycle expected".into());
    };
    ensure(cycle.first() == cycle.last(), "odd cycle is closed")?;
    ensure((cycle.len() - 1) % 2 == 1, "odd cycle has an odd number of edges")?;
    Ok(())
}

// ============================================================================
// SECTION: Symbol Graphs
// ============================================================================

/// Route names resolve to vertices and back.
#[test]
fn symbol_graph_routes() -> TestResult {
    let sg = SymbolGraph::parse(ROUTES, " ", &GraphLimits::default())?;
    ensure(sg.graph().v() == 10 && sg.graph().e() == 18, "ten airports, eighteen routes")?;
    ensure(!sg.contains("LAB"), "unknown airport is absent")?;
    let Some(jfk) = sg.index_of("JFK") else {
        return Err("JFK is indexed".into());
    };
    let mut names: Vec<&str> = sg.graph().adj(jfk).iter().filter_map(|&w| sg.name_of(w)).collect();
    names.sort_unstable();
    ensure(names == ["ATL", "MCO", "ORD"], "JFK neighbors")?;
    let Some(lax) = sg.index_of("LAX") else {
        return Err("LAX is indexed".into());
    };
    let mut names: Vec<&str> = sg.graph().adj(lax).iter().filter_map(|&w| sg.name_of(w)).collect();
    names.sort_unstable();
    ensure(names == ["LAS", "PHX"], "LAX neighbors")?;
    ensure(sg.name_of(10).is_none(), "no name past the last index")?;
    Ok(())
}

/// Directed symbol graphs keep edge direction.
#[test]
fn symbol_digraph_direction() -> TestResult {
    let sd = SymbolDigraph::parse("a/b/c\nb/c\n", "/", &GraphLimits::default())?;
    let (Some(a), Some(c)) = (sd.index_of("a"), sd.index_of("c")) else {
        return Err("names are indexed".into());
    };
    ensure(sd.digraph().out_degree(a) == 2, "a points to b and c")?;
    ensure(sd.digraph().out_degree(c) == 0, "c has no outgoing edges")?;
    ensure(sd.digraph().in_degree(c) == 2, "a and b point to c")?;
    Ok(())
}

// ============================================================================
// SECTION: Digraphs
// ============================================================================

/// Parsed digraph reports degrees and reversal.
#[test]
fn tiny_digraph_shape() -> TestResult {
    let dg = read_digraph(TINY_DG, &GraphLimits::default())?;
    ensure(dg.e() == 22, "tinyDG has 22 edges")?;
    ensure(dg.in_degree(5) == 2 && dg.out_degree(5) == 1, "degrees of 5")?;
    let mut adj = dg.adj(6).to_vec();
    adj.sort_unstable();
    ensure(adj == [0, 4, 9], "successors of 6")?;
    let reversed = dg.reverse();
    ensure(reversed.e() == 22 && reversed.out_degree(5) == 2, "reverse flips degrees")?;
    Ok(())
}

/// Reachability from single and multiple sources.
#[test]
fn directed_reachability() -> TestResult {
    let dg = read_digraph(TINY_DG, &GraphLimits::default())?;
    ensure(DirectedDfs::new(&dg, 1)?.count() == 1, "1 reaches only itself")?;
    ensure(DirectedDfs::new(&dg, 2)?.count() == 6, "2 reaches six vertices")?;
    let many = DirectedDfs::from_sources(&dg, &[1, 2, 6])?;
    ensure(many.count() == 11, "1, 2 and 6 together reach eleven vertices")?;
    ensure(!many.marked(7) && !many.marked(8), "7 and 8 are not reachable")?;
    Ok(())
}

/// Directed paths from vertex 3.
#[test]
fn directed_paths() -> TestResult {
    let dg = read_digraph(TINY_DG, &GraphLimits::default())?;
    let dfs = DepthFirstDirectedPaths::new(&dg, 3)?;
    ensure(dfs.path_to(0) == [3, 2, 0], "dfs path to 0")?;
    ensure(dfs.path_to(1) == [3, 2, 0, 1], "dfs path to 1")?;
    ensure(!dfs.has_path_to(6), "6 is unreachable from 3")?;
    let bfs = BreadthFirstDirectedPaths::new(&dg, 3)?;
    ensure(bfs.dist_to(0) == Some(2), "bfs distance to 0")?;
    Ok(())
}

/// Directed cycle follows edge direction.
#[test]
fn directed_cycle() -> TestResult {
    let dg = read_digraph(TINY_DG, &GraphLimits::default())?;
    let finder = DirectedCycle::new(&dg);
    ensure(finder.cycle() == Some(&[3, 2, 3][..]), "first back edge closes 3 -> 2 -> 3")?;
    let dag = read_digraph(TINY_DAG, &GraphLimits::default())?;
    ensure(!DirectedCycle::new(&dag).has_cycle(), "DAG has no directed cycle")?;
    Ok(())
}

/// Strong components agree between Kosaraju and the quadratic check.
#[test]
fn strong_components() -> TestResult {
    let dg = read_digraph(TINY_DG, &GraphLimits::default())?;
    let kosaraju = KosarajuScc::new(&dg);
    let naive = NaiveScc::new(&dg);
    ensure(kosaraju.count() == 5 && naive.count() == 5, "tinyDG has five strong components")?;
    for (v, w) in [(0, 2), (2, 3), (3, 4), (4, 5), (7, 8)] {
        ensure(kosaraju.strongly_connected(v, w), format!("{v} and {w} are strong"))?;
    }
    for (v, w) in [(0, 1), (0, 7)] {
        ensure(!kosaraju.strongly_connected(v, w), format!("{v} and {w} are not strong"))?;
    }
    for v in 0 .. dg.v() {
        for w in 0 .. dg.v() {
            ensure(
                kosaraju.strongly_connected(v, w) == naive.strongly_connected(v, w),
                format!("algorithms agree on {v} and {w}"),
            )?;
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Orderings
// ============================================================================

/// Preorder, postorder and reverse postorder of the DAG.
#[test]
fn depth_first_orders() -> TestResult {
    let dag = read_digraph(TINY_DAG, &GraphLimits::default())?;
    let order = DepthFirstOrder::new(&dag);
    ensure(order.pre() == [0, 6, 4, 9, 12, 11, 10, 1, 5, 2, 3, 7, 8], "preorder")?;
    ensure(order.post() == [4, 12, 11, 10, 9, 6, 1, 5, 0, 3, 2, 7, 8], "postorder")?;
    ensure(order.pre_number(9) == Some(3), "9 is the fourth vertex entered")?;
    ensure(order.post_number(0) == Some(8), "0 finishes ninth")?;
    Ok(())
}

/// Topological orders from DFS and from Kahn's algorithm.
#[test]
fn topological_orders() -> TestResult {
    let dag = read_digraph(TINY_DAG, &GraphLimits::default())?;
    let topo = Topological::new(&dag);
    ensure(topo.order() == Some(&[8, 7, 2, 3, 0, 5, 1, 6, 9, 10, 11, 12, 4][..]), "dfs order")?;
    ensure(topo.rank(8) == Some(0) && topo.rank(4) == Some(12), "ranks")?;
    let kahn = KahnTopological::new(&dag);
    ensure(kahn.order() == Some(&[2, 8, 3, 0, 7, 1, 5, 6, 4, 9, 11, 10, 12][..]), "kahn order")?;
    for v in 0 .. dag.v() {
        for &w in dag.adj(v) {
            ensure(kahn.rank(v) < kahn.rank(w), format!("edge {v}->{w} points forward"))?;
        }
    }
    let cyclic = read_digraph(TINY_DG, &GraphLimits::default())?;
    ensure(!Topological::new(&cyclic).has_order(), "cyclic digraph has no dfs order")?;
    ensure(!KahnTopological::new(&cyclic).has_order(), "cyclic digraph has no kahn order")?;
    ensure(KahnTopological::new(&cyclic).rank(0).is_none(), "no rank without an order")?;
    Ok(())
}

// ============================================================================
// SECTION: Minimum Spanning Trees
// ============================================================================

/// Prim and Kruskal find trees of equal weight.
#[test]
fn minimum_spanning_trees() -> TestResult {
    let g = read_edge_weighted_graph(TINY_EWG, &GraphLimits::default())?;
    let prim = LazyPrimMst::new(&g);
    let kruskal = KruskalMst::new(&g);
    ensure(prim.edges().len() == 7 && kruskal.edges().len() == 7, "spanning tree has V-1 edges")?;
    ensure_close(prim.weight(), 1.81, "prim weight")?;
    ensure_close(kruskal.weight(), 1.81, "kruskal weight")?;
    ensure(
        kruskal.edges().windows(2).all(|pair| pair[0].weight() <= pair[1].weight()),
        "kruskal accepts edges in weight order",
    )?;
    Ok(())
}

/// Disconnected input yields a spanning forest.
#[test]
fn spanning_forest() -> TestResult {
    let g = read_edge_weighted_graph("4 2\n0 1 0.5\n2 3 0.25\n", &GraphLimits::default())?;
    ensure(LazyPrimMst::new(&g).edges().len() == 2, "prim covers both components")?;
    ensure_close(KruskalMst::new(&g).weight(), 0.75, "forest weight")?;
    Ok(())
}

// ============================================================================
// SECTION: Shortest Paths
// ============================================================================

/// Dijkstra on the positive digraph.
#[test]
fn dijkstra_shortest_paths() -> TestResult {
    let g = read_edge_weighted_digraph(TINY_EWD, &GraphLimits::default())?;
    let sp = DijkstraSp::new(&g, 0)?;
    for (v, expected) in EWD_FROM_0.iter().enumerate() {
        ensure_close(sp.dist_to(v), *expected, &format!("distance to {v}"))?;
    }
    let path = sp.path_to(6);
    let hops: Vec<usize> = path.iter().map(DirectedEdge::to).collect();
    ensure(hops == [2, 7, 3, 6], "path to 6 runs 0->2->7->3->6")?;
    ensure_close(path.iter().map(DirectedEdge::weight).sum(), 1.51, "path weight to 6")?;
    Ok(())
}

/// Dijkstra rejects negative weights up front.
#[test]
fn dijkstra_rejects_negative_weights() -> TestResult {
    let g = read_edge_weighted_digraph(TINY_EWDN, &GraphLimits::default())?;
    ensure(
        matches!(
            DijkstraSp::new(&g, 0),
            Err(AlgoError::NegativeWeight {
                from: 6,
                ..
            })
        ),
        "negative edge out of 6 is reported",
    )?;
    Ok(())
}

/// Dijkstra on the undirected weighted graph.
#[test]
fn dijkstra_undirected() -> TestResult {
    let g = read_edge_weighted_graph(TINY_EWG, &GraphLimits::default())?;
    let sp = DijkstraUndirectedSp::new(&g, 6)?;
    let expected = [0.58, 0.76, 0.40, 0.52, 0.93, 1.02, 0.0, 0.74];
    for (v, distance) in expected.iter().enumerate() {
        ensure_close(sp.dist_to(v), *distance, &format!("distance to {v}"))?;
    }
    ensure(sp.path_to(6).is_empty(), "path to the source has no edges")?;
    Ok(())
}

/// Topological relaxation on the DAG.
#[test]
fn acyclic_shortest_paths() -> TestResult {
    let g = read_edge_weighted_digraph(TINY_EWDAG, &GraphLimits::default())?;
    let sp = AcyclicSp::new(&g, 5)?;
    let expected = [0.73, 0.32, 0.62, 0.61, 0.35, 0.0, 1.13, 0.28];
    for (v, distance) in expected.iter().enumerate() {
        ensure_close(sp.dist_to(v), *distance, &format!("distance to {v}"))?;
    }
    let cyclic = read_edge_weighted_digraph(TINY_EWD, &GraphLimits::default())?;
    ensure(
        matches!(AcyclicSp::new(&cyclic, 0), Err(AlgoError::NotAcyclic)),
        "cyclic input is rejected",
    )?;
    Ok(())
}

/// Bellman-Ford matches Dijkstra and handles negative edges.
#[test]
fn bellman_ford_shortest_paths() -> TestResult {
    let g = read_edge_weighted_digraph(TINY_EWD, &GraphLimits::default())?;
    let sp = BellmanFordSp::new(&g, 0)?;
    ensure(!sp.has_negative_cycle(), "positive digraph has no negative cycle")?;
    for (v, expected) in EWD_FROM_0.iter().enumerate() {
        ensure_close(sp.dist_to(v), *expected, &format!("distance to {v}"))?;
    }

    let negative = read_edge_weighted_digraph(TINY_EWDN, &GraphLimits::default())?;
    let sp = BellmanFordSp::new(&negative, 0)?;
    let expected = [0.0, 0.93, 0.26, 0.99, 0.26, 0.61, 1.51, 0.60];
    for (v, distance) in expected.iter().enumerate() {
        ensure_close(sp.dist_to(v), *distance, &format!("distance to {v}"))?;
    }
    ensure(sp.path_to(4).len() == 5, "path to 4 detours through 6")?;
    Ok(())
}

/// A reachable negative cycle is reported and paths are withheld.
#[test]
fn bellman_ford_negative_cycle() -> TestResult {
    let mut g = EdgeWeightedDigraph::new(4);
    g.add_edge(DirectedEdge::new(0, 1, 1.0))?;
    g.add_edge(DirectedEdge::new(1, 2, -3.0))?;
    g.add_edge(DirectedEdge::new(2, 1, 1.0))?;
    g.add_edge(DirectedEdge::new(2, 3, 1.0))?;
    let sp = BellmanFordSp::new(&g, 0)?;
    let Some(cycle) = sp.negative_cycle() else {
        return Err("negative cycle expected".into());
    };
    let weight: f64 = cycle.iter().map(DirectedEdge::weight).sum();
    ensure(weight < 0.0, "reported cycle has negative weight")?;
    ensure(cycle.len() == 2, "cycle is 1->2->1")?;
    ensure(sp.path_to(3).is_empty(), "no paths while a negative cycle exists")?;

    let unreachable = {
        let mut h = EdgeWeightedDigraph::new(3);
        h.add_edge(DirectedEdge::new(1, 2, -1.0))?;
        h.add_edge(DirectedEdge::new(2, 1, -1.0))?;
        h
    };
    let sp = BellmanFordSp::new(&unreachable, 0)?;
    ensure(!sp.has_negative_cycle(), "cycle unreachable from the source is ignored")?;
    ensure(sp.dist_to(1).is_infinite(), "unreachable vertex stays at infinity")?;
    Ok(())
}

/// Directed cycle detection over weighted edges.
#[test]
fn edge_weighted_directed_cycle() -> TestResult {
    let g = read_edge_weighted_digraph(TINY_EWD, &GraphLimits::default())?;
    let finder = EdgeWeightedDirectedCycle::new(&g);
    let Some(cycle) = finder.cycle() else {
        return Err("tinyEWD has a cycle".into());
    };
    for pair in cycle.windows(2) {
        ensure(pair[0].to() == pair[1].from(), "cycle edges chain head to tail")?;
    }
    let (Some(first), Some(last)) = (cycle.first(), cycle.last()) else {
        return Err("cycle has edges".into());
    };
    ensure(last.to() == first.from(), "cycle returns to its start")?;
    let dag = read_edge_weighted_digraph(TINY_EWDAG, &GraphLimits::default())?;
    ensure(!EdgeWeightedDirectedCycle::new(&dag).has_cycle(), "DAG has no cycle")?;
    Ok(())
}

// ============================================================================
// SECTION: Parsing Limits
// ============================================================================

/// Headers beyond configured limits are rejected with their line.
#[test]
fn limits_bound_headers() -> TestResult {
    let limits = GraphLimits {
        max_vertices: 10,
        max_edges: 20,
    };
    ensure(read_graph(TINY_G, &limits).is_err(), "13 vertices exceed a limit of 10")?;
    ensure(read_graph("5 21\n", &limits).is_err(), "21 edges exceed a limit of 20")?;
    ensure(
        matches!(
            read_graph("3\n2\n0 1\n", &GraphLimits::default()),
            Err(AlgoError::Parse { .. })
        ),
        "truncated edge list is a parse error",
    )?;
    Ok(())
}
