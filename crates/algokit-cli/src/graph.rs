// crates/algokit-cli/src/graph.rs
// ============================================================================
// Module: CLI Graph Commands
// Description: Graph processing clients for the `algokit graph` subcommands.
// Purpose: Parse graph text under configured limits and report results.
// Dependencies: clap, algokit-core, serde, tracing
// ============================================================================

//! ## Overview
//! Each subcommand parses one graph representation from the command input,
//! runs the selected algorithm and emits a [`Report`]. Unknown source
//! vertices and cyclic inputs to acyclic algorithms fail with an error exit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Display;
use std::process::ExitCode;

use algokit_cli::t;
use algokit_core::graphs::AcyclicSp;
use algokit_core::graphs::Adjacency;
use algokit_core::graphs::BellmanFordSp;
use algokit_core::graphs::Bipartite;
use algokit_core::graphs::BreadthFirstPaths;
use algokit_core::graphs::ConnectedComponents;
use algokit_core::graphs::Cycle;
use algokit_core::graphs::DepthFirstPaths;
use algokit_core::graphs::DijkstraSp;
use algokit_core::graphs::DijkstraUndirectedSp;
use algokit_core::graphs::DirectedCycle;
use algokit_core::graphs::DirectedEdge;
use algokit_core::graphs::Edge;
use algokit_core::graphs::KahnTopological;
use algokit_core::graphs::KosarajuScc;
use algokit_core::graphs::KruskalMst;
use algokit_core::graphs::LazyPrimMst;
use algokit_core::graphs::NaiveScc;
use algokit_core::graphs::SymbolGraph;
use algokit_core::graphs::Topological;
use algokit_core::graphs::read_digraph;
use algokit_core::graphs::read_edge_weighted_digraph;
use algokit_core::graphs::read_edge_weighted_graph;
use algokit_core::graphs::read_graph;
use clap::ArgAction;
use clap::Args;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::CliError;
use crate::CliResult;
use crate::Context;
use crate::InputArgs;
use crate::Report;
use crate::join;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Graph subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum GraphCommand {
    /// Paths from a source vertex.
    Paths(PathsCommand),
    /// Connected components of an undirected graph.
    Components(InputArgs),
    /// Find a cycle, if any.
    Cycle(CycleCommand),
    /// Two-color an undirected graph.
    Bipartite(InputArgs),
    /// Topological order of a digraph.
    Topological(TopologicalCommand),
    /// Strong components of a digraph.
    Scc(SccCommand),
    /// Minimum spanning forest of an edge-weighted graph.
    Mst(MstCommand),
    /// Single-source shortest paths.
    ShortestPaths(ShortestPathsCommand),
    /// Degrees of separation in a symbol graph.
    Routes(RoutesCommand),
}

/// Arguments for `graph paths`.
#[derive(Args, Debug)]
pub(crate) struct PathsCommand {
    /// Source vertex.
    #[arg(long, value_name = "S")]
    source: usize,
    /// Search strategy.
    #[arg(long, value_enum, default_value_t = PathStrategy::Dfs)]
    strategy: PathStrategy,
    /// Read a digraph instead of an undirected graph.
    #[arg(long, action = ArgAction::SetTrue)]
    directed: bool,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph cycle`.
#[derive(Args, Debug)]
pub(crate) struct CycleCommand {
    /// Read a digraph instead of an undirected graph.
    #[arg(long, action = ArgAction::SetTrue)]
    directed: bool,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph topological`.
#[derive(Args, Debug)]
pub(crate) struct TopologicalCommand {
    /// Ordering strategy.
    #[arg(long, value_enum, default_value_t = TopologicalStrategy::Dfs)]
    strategy: TopologicalStrategy,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph scc`.
#[derive(Args, Debug)]
pub(crate) struct SccCommand {
    /// Strong component strategy.
    #[arg(long, value_enum, default_value_t = SccStrategy::Kosaraju)]
    strategy: SccStrategy,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph mst`.
#[derive(Args, Debug)]
pub(crate) struct MstCommand {
    /// Spanning tree strategy.
    #[arg(long, value_enum, default_value_t = MstStrategy::Prim)]
    strategy: MstStrategy,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph shortest-paths`.
#[derive(Args, Debug)]
pub(crate) struct ShortestPathsCommand {
    /// Source vertex.
    #[arg(long, value_name = "S")]
    source: usize,
    /// Shortest-path strategy.
    #[arg(long, value_enum, default_value_t = SpStrategy::Dijkstra)]
    strategy: SpStrategy,
    /// Read an edge-weighted undirected graph (dijkstra only).
    #[arg(long, action = ArgAction::SetTrue)]
    undirected: bool,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Arguments for `graph routes`.
#[derive(Args, Debug)]
pub(crate) struct RoutesCommand {
    /// Separator between names on each line.
    #[arg(long, value_name = "D", default_value = " ")]
    delimiter: String,
    /// Starting name.
    #[arg(long, value_name = "NAME")]
    source: String,
    /// Names to report (defaults to every name).
    #[arg(long, value_name = "NAME")]
    target: Vec<String>,
    /// Input source.
    #[command(flatten)]
    input: InputArgs,
}

/// Path search strategy.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum PathStrategy {
    /// Depth-first paths.
    Dfs,
    /// Breadth-first (fewest-edge) paths.
    Bfs,
}

/// Topological ordering strategy.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum TopologicalStrategy {
    /// Reverse postorder of a depth-first search.
    Dfs,
    /// Queue of zero in-degree vertices.
    Queue,
}

/// Strong component strategy.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SccStrategy {
    /// Kosaraju-Sharir two-pass search.
    Kosaraju,
    /// Pairwise reachability.
    Naive,
}

/// Spanning tree strategy.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum MstStrategy {
    /// Lazy Prim.
    Prim,
    /// Kruskal.
    Kruskal,
}

/// Shortest-path strategy.
#[derive(ValueEnum, Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SpStrategy {
    /// Dijkstra (non-negative weights).
    Dijkstra,
    /// Relaxation in topological order (acyclic digraphs).
    Acyclic,
    /// Bellman-Ford (detects negative cycles).
    BellmanFord,
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Path from the source to one vertex.
#[derive(Debug, Serialize)]
struct PathEntry {
    /// Destination vertex.
    target: usize,
    /// Vertices from source to target, or `None` when unreachable.
    path: Option<Vec<usize>>,
}

/// Output of `graph paths`.
#[derive(Debug, Serialize)]
struct PathsReport {
    /// Source vertex.
    source: usize,
    /// Strategy used.
    strategy: PathStrategy,
    /// One entry per vertex.
    paths: Vec<PathEntry>,
}

impl Report for PathsReport {
    fn text_lines(&self) -> Vec<String> {
        self.paths
            .iter()
            .map(|entry| match &entry.path {
                Some(path) => t!(
                    "graph.path",
                    source = self.source,
                    target = entry.target,
                    path = join(path, "-")
                ),
                None => t!("graph.path.none", source = self.source, target = entry.target),
            })
            .collect()
    }
}

/// Output of `graph components` and `graph scc`.
#[derive(Debug, Serialize)]
struct ComponentsReport {
    /// Number of components.
    count: usize,
    /// Vertices of each component, by component id.
    components: Vec<Vec<usize>>,
}

impl Report for ComponentsReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![t!("graph.components.count", count = self.count)];
        lines.extend(self.components.iter().map(|component| join(component, " ")));
        lines
    }
}

/// Output of `graph cycle`.
#[derive(Debug, Serialize)]
struct CycleReport {
    /// Whether the input was a digraph.
    directed: bool,
    /// Cycle vertices, first vertex repeated at the end.
    cycle: Option<Vec<usize>>,
}

impl Report for CycleReport {
    fn text_lines(&self) -> Vec<String> {
        let line = self.cycle.as_ref().map_or_else(
            || t!("graph.cycle.none"),
            |cycle| t!("graph.cycle.found", cycle = join(cycle, " ")),
        );
        vec![line]
    }
}

/// Output of `graph bipartite`.
#[derive(Debug, Serialize)]
struct BipartiteReport {
    /// Whether a two-coloring exists.
    bipartite: bool,
    /// Color of each vertex when bipartite.
    colors: Option<Vec<bool>>,
    /// An odd-length cycle when not bipartite.
    odd_cycle: Option<Vec<usize>>,
}

impl Report for BipartiteReport {
    fn text_lines(&self) -> Vec<String> {
        match (&self.colors, &self.odd_cycle) {
            (Some(colors), _) => {
                let mut lines = vec![t!("graph.bipartite.yes")];
                lines.extend(colors.iter().enumerate().map(|(vertex, color)| {
                    t!("graph.bipartite.color", vertex = vertex, color = u8::from(*color))
                }));
                lines
            }
            (None, cycle) => {
                let cycle = cycle.as_deref().map(|c| join(c, " ")).unwrap_or_default();
                vec![t!("graph.bipartite.no", cycle = cycle)]
            }
        }
    }
}

/// Output of `graph topological`.
#[derive(Debug, Serialize)]
struct TopologicalReport {
    /// Strategy used.
    strategy: TopologicalStrategy,
    /// Vertices in topological order.
    order: Vec<usize>,
}

impl Report for TopologicalReport {
    fn text_lines(&self) -> Vec<String> {
        vec![join(&self.order, " ")]
    }
}

/// Output of `graph mst`.
#[derive(Debug, Serialize)]
struct MstReport {
    /// Strategy used.
    strategy: MstStrategy,
    /// Forest edges.
    edges: Vec<Edge>,
    /// Total forest weight.
    weight: f64,
}

impl Report for MstReport {
    fn text_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.edges.iter().map(ToString::to_string).collect();
        lines.push(t!("graph.mst.weight", weight = format!("{:.5}", self.weight)));
        lines
    }
}

/// Shortest path from the source to one vertex.
#[derive(Debug, Serialize)]
struct WeightedPathEntry<E> {
    /// Destination vertex.
    target: usize,
    /// Path length, or `None` when unreachable.
    distance: Option<f64>,
    /// Path edges from the source.
    edges: Vec<E>,
}

/// Output of `graph shortest-paths`.
#[derive(Debug, Serialize)]
struct ShortestPathsReport<E> {
    /// Source vertex.
    source: usize,
    /// Strategy used.
    strategy: SpStrategy,
    /// One entry per vertex; empty when a negative cycle was found.
    paths: Vec<WeightedPathEntry<E>>,
    /// Negative cycle reachable from the source, if any.
    negative_cycle: Option<Vec<E>>,
}

impl<E: Display + Serialize> Report for ShortestPathsReport<E> {
    fn text_lines(&self) -> Vec<String> {
        if let Some(cycle) = &self.negative_cycle {
            return vec![t!("graph.negative_cycle", cycle = join(cycle, "  "))];
        }
        self.paths
            .iter()
            .map(|entry| match entry.distance {
                Some(distance) => t!(
                    "graph.path.weighted",
                    source = self.source,
                    target = entry.target,
                    distance = format!("{distance:.2}"),
                    path = join(&entry.edges, "  ")
                ),
                None => t!("graph.path.none", source = self.source, target = entry.target),
            })
            .collect()
    }
}

/// Route from the source name to one target name.
#[derive(Debug, Serialize)]
struct RouteEntry {
    /// Target name.
    name: String,
    /// Names from source to target, or `None` when unreachable.
    path: Option<Vec<String>>,
}

/// Output of `graph routes`.
#[derive(Debug, Serialize)]
struct RoutesReport {
    /// Source name.
    source: String,
    /// One entry per requested target.
    routes: Vec<RouteEntry>,
}

impl Report for RoutesReport {
    fn text_lines(&self) -> Vec<String> {
        self.routes
            .iter()
            .map(|route| match &route.path {
                Some(path) => t!(
                    "graph.routes.path",
                    name = route.name,
                    degrees = path.len().saturating_sub(1),
                    path = path.join(" -> ")
                ),
                None => t!("graph.routes.none", name = route.name, source = self.source),
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Dispatch
// ============================================================================

/// Dispatches `graph` subcommands.
pub(crate) fn command_graph(context: &Context, command: &GraphCommand) -> CliResult<ExitCode> {
    match command {
        GraphCommand::Paths(paths) => command_paths(context, paths),
        GraphCommand::Components(input) => {
            let graph = read_graph(&context.read(input.path())?, &context.limits())
                .map_err(|err| CliError::algorithm(&err))?;
            let cc = ConnectedComponents::new(&graph);
            context.emit(&ComponentsReport {
                count: cc.count(),
                components: cc.components(),
            })
        }
        GraphCommand::Cycle(cycle) => command_cycle(context, cycle),
        GraphCommand::Bipartite(input) => {
            let graph = read_graph(&context.read(input.path())?, &context.limits())
                .map_err(|err| CliError::algorithm(&err))?;
            let bipartite = Bipartite::new(&graph);
            let colors = bipartite.is_bipartite().then(|| {
                (0 .. graph.v()).map(|v| bipartite.color(v).unwrap_or(false)).collect()
            });
            context.emit(&BipartiteReport {
                bipartite: bipartite.is_bipartite(),
                colors,
                odd_cycle: bipartite.odd_cycle().map(<[usize]>::to_vec),
            })
        }
        GraphCommand::Topological(topological) => command_topological(context, topological),
        GraphCommand::Scc(scc) => command_scc(context, scc),
        GraphCommand::Mst(mst) => {
            let text = context.read(mst.input.path())?;
            let graph = read_edge_weighted_graph(&text, &context.limits())
                .map_err(|err| CliError::algorithm(&err))?;
            let (edges, weight) = match mst.strategy {
                MstStrategy::Prim => {
                    let tree = LazyPrimMst::new(&graph);
                    (tree.edges().to_vec(), tree.weight())
                }
                MstStrategy::Kruskal => {
                    let tree = KruskalMst::new(&graph);
                    (tree.edges().to_vec(), tree.weight())
                }
            };
            context.emit(&MstReport {
                strategy: mst.strategy,
                edges,
                weight,
            })
        }
        GraphCommand::ShortestPaths(sp) => command_shortest_paths(context, sp),
        GraphCommand::Routes(routes) => command_routes(context, routes),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes `graph paths`.
fn command_paths(context: &Context, command: &PathsCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let limits = context.limits();
    let paths = if command.directed {
        let digraph = read_digraph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
        search_paths(&digraph, command.source, command.strategy)?
    } else {
        let graph = read_graph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
        search_paths(&graph, command.source, command.strategy)?
    };
    context.emit(&PathsReport {
        source: command.source,
        strategy: command.strategy,
        paths,
    })
}

/// Runs the selected path search over any adjacency structure.
fn search_paths<G: Adjacency>(
    graph: &G,
    source: usize,
    strategy: PathStrategy,
) -> CliResult<Vec<PathEntry>> {
    let vertices = graph.vertex_count();
    let entries = match strategy {
        PathStrategy::Dfs => {
            let paths =
                DepthFirstPaths::new(graph, source).map_err(|err| CliError::algorithm(&err))?;
            (0 .. vertices)
                .map(|target| PathEntry {
                    target,
                    path: paths.has_path_to(target).then(|| paths.path_to(target)),
                })
                .collect()
        }
        PathStrategy::Bfs => {
            let paths =
                BreadthFirstPaths::new(graph, source).map_err(|err| CliError::algorithm(&err))?;
            (0 .. vertices)
                .map(|target| PathEntry {
                    target,
                    path: paths.has_path_to(target).then(|| paths.path_to(target)),
                })
                .collect()
        }
    };
    Ok(entries)
}

/// Executes `graph cycle`.
fn command_cycle(context: &Context, command: &CycleCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let limits = context.limits();
    let cycle = if command.directed {
        let digraph = read_digraph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
        DirectedCycle::new(&digraph).cycle().map(<[usize]>::to_vec)
    } else {
        let graph = read_graph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
        Cycle::new(&graph).cycle().map(<[usize]>::to_vec)
    };
    context.emit(&CycleReport {
        directed: command.directed,
        cycle,
    })
}

/// Executes `graph topological`.
fn command_topological(context: &Context, command: &TopologicalCommand) -> CliResult<ExitCode> {
    let digraph = read_digraph(&context.read(command.input.path())?, &context.limits())
        .map_err(|err| CliError::algorithm(&err))?;
    let order = match command.strategy {
        TopologicalStrategy::Dfs => Topological::new(&digraph).order().map(<[usize]>::to_vec),
        TopologicalStrategy::Queue => KahnTopological::new(&digraph).order().map(<[usize]>::to_vec),
    };
    let order = order.ok_or_else(|| CliError::new(t!("graph.topological.none")))?;
    context.emit(&TopologicalReport {
        strategy: command.strategy,
        order,
    })
}

/// Executes `graph scc`.
fn command_scc(context: &Context, command: &SccCommand) -> CliResult<ExitCode> {
    let digraph = read_digraph(&context.read(command.input.path())?, &context.limits())
        .map_err(|err| CliError::algorithm(&err))?;
    let (count, ids): (usize, Vec<Option<usize>>) = match command.strategy {
        SccStrategy::Kosaraju => {
            let scc = KosarajuScc::new(&digraph);
            (scc.count(), (0 .. digraph.v()).map(|v| scc.id(v)).collect())
        }
        SccStrategy::Naive => {
            let scc = NaiveScc::new(&digraph);
            (scc.count(), (0 .. digraph.v()).map(|v| scc.id(v)).collect())
        }
    };
    let mut components = vec![Vec::new(); count];
    for (vertex, id) in ids.into_iter().enumerate() {
        if let Some(component) = id.and_then(|id| components.get_mut(id)) {
            component.push(vertex);
        }
    }
    debug!(count, "computed strong components");
    context.emit(&ComponentsReport {
        count,
        components,
    })
}

/// Executes `graph shortest-paths`.
fn command_shortest_paths(
    context: &Context,
    command: &ShortestPathsCommand,
) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let limits = context.limits();
    let source = command.source;
    let strategy = command.strategy;
    if command.undirected {
        if strategy != SpStrategy::Dijkstra {
            return Err(CliError::new(t!("graph.undirected_requires_dijkstra")));
        }
        let graph =
            read_edge_weighted_graph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
        let sp =
            DijkstraUndirectedSp::new(&graph, source).map_err(|err| CliError::algorithm(&err))?;
        let paths = weighted_paths(graph.v(), |v| sp.has_path_to(v), |v| sp.dist_to(v), |v| {
            sp.path_to(v)
        });
        return context.emit(&ShortestPathsReport::<Edge> {
            source,
            strategy,
            paths,
            negative_cycle: None,
        });
    }
    let digraph =
        read_edge_weighted_digraph(&text, &limits).map_err(|err| CliError::algorithm(&err))?;
    let vertices = digraph.v();
    let report: ShortestPathsReport<DirectedEdge> = match strategy {
        SpStrategy::Dijkstra => {
            let sp = DijkstraSp::new(&digraph, source).map_err(|err| CliError::algorithm(&err))?;
            ShortestPathsReport {
                source,
                strategy,
                paths: weighted_paths(vertices, |v| sp.has_path_to(v), |v| sp.dist_to(v), |v| {
                    sp.path_to(v)
                }),
                negative_cycle: None,
            }
        }
        SpStrategy::Acyclic => {
            let sp = AcyclicSp::new(&digraph, source).map_err(|err| CliError::algorithm(&err))?;
            ShortestPathsReport {
                source,
                strategy,
                paths: weighted_paths(vertices, |v| sp.has_path_to(v), |v| sp.dist_to(v), |v| {
                    sp.path_to(v)
                }),
                negative_cycle: None,
            }
        }
        SpStrategy::BellmanFord => {
            let sp =
                BellmanFordSp::new(&digraph, source).map_err(|err| CliError::algorithm(&err))?;
            match sp.negative_cycle() {
                Some(cycle) => ShortestPathsReport {
                    source,
                    strategy,
                    paths: Vec::new(),
                    negative_cycle: Some(cycle.to_vec()),
                },
                None => ShortestPathsReport {
                    source,
                    strategy,
                    paths: weighted_paths(
                        vertices,
                        |v| sp.has_path_to(v),
                        |v| sp.dist_to(v),
                        |v| sp.path_to(v),
                    ),
                    negative_cycle: None,
                },
            }
        }
    };
    context.emit(&report)
}

/// Collects one weighted path entry per vertex.
fn weighted_paths<E>(
    vertices: usize,
    has_path_to: impl Fn(usize) -> bool,
    dist_to: impl Fn(usize) -> f64,
    path_to: impl Fn(usize) -> Vec<E>,
) -> Vec<WeightedPathEntry<E>> {
    (0 .. vertices)
        .map(|target| {
            let reachable = has_path_to(target);
            WeightedPathEntry {
                target,
                distance: reachable.then(|| dist_to(target)),
                edges: if reachable { path_to(target) } else { Vec::new() },
            }
        })
        .collect()
}

/// Executes `graph routes`.
fn command_routes(context: &Context, command: &RoutesCommand) -> CliResult<ExitCode> {
    let text = context.read(command.input.path())?;
    let symbols = SymbolGraph::parse(&text, &command.delimiter, &context.limits())
        .map_err(|err| CliError::algorithm(&err))?;
    let source = symbols
        .index_of(&command.source)
        .ok_or_else(|| CliError::new(t!("graph.routes.unknown", name = command.source)))?;
    let paths =
        BreadthFirstPaths::new(symbols.graph(), source).map_err(|err| CliError::algorithm(&err))?;
    let targets: Vec<usize> = if command.target.is_empty() {
        (0 .. symbols.graph().v()).collect()
    } else {
        command
            .target
            .iter()
            .map(|name| {
                symbols
                    .index_of(name)
                    .ok_or_else(|| CliError::new(t!("graph.routes.unknown", name = name)))
            })
            .collect::<CliResult<_>>()?
    };
    let name = |v: usize| symbols.name_of(v).unwrap_or_default().to_string();
    let routes = targets
        .into_iter()
        .map(|target| RouteEntry {
            name: name(target),
            path: paths
                .has_path_to(target)
                .then(|| paths.path_to(target).into_iter().map(name).collect()),
        })
        .collect();
    context.emit(&RoutesReport {
        source: command.source.clone(),
        routes,
    })
}
