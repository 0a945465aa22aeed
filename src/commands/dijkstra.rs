//! `routeplan dijkstra` command - point-to-point shortest path
//!
//! Node ids on the command line and in all output are 1-indexed.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use routeplan_core::error::{Result, RouteError};
use routeplan_core::format::{format_cost, OutputFormat};
use routeplan_core::graph::{AdjacencyList, Graph};
use routeplan_core::shortestpath::{
    AlgorithmKind, BidirectionalDijkstra, CancelToken, Dijkstra, Route, ShortestPath,
};

use super::{interrupt_token, load_graph, resolve_node};
use crate::cli::{Cli, Settings};

/// JSON shape of a query result
#[derive(Debug, Serialize)]
pub struct RouteOutput {
    pub source: usize,
    pub target: usize,
    pub algorithm: &'static str,
    pub found: bool,
    pub cost: Option<f64>,
    pub hops: usize,
    pub nodes: Vec<usize>,
    pub edges: Vec<EdgeOutput>,
}

#[derive(Debug, Serialize)]
pub struct EdgeOutput {
    pub from: usize,
    pub to: usize,
    pub cost: f64,
}

impl RouteOutput {
    pub fn new(route: &Route, algorithm: &'static str) -> Self {
        RouteOutput {
            source: route.source + 1,
            target: route.target + 1,
            algorithm,
            found: route.is_reachable(),
            cost: route.is_reachable().then_some(route.cost),
            hops: route.hops(),
            nodes: route.nodes().iter().map(|v| v + 1).collect(),
            edges: route
                .edges
                .iter()
                .map(|e| EdgeOutput {
                    from: e.from + 1,
                    to: e.to + 1,
                    cost: e.cost,
                })
                .collect(),
        }
    }
}

/// Execute the dijkstra command
pub fn execute(
    cli: &Cli,
    settings: &Settings,
    source: usize,
    target: usize,
    file: &Path,
) -> Result<()> {
    let loaded = load_graph(settings.format, file)?;
    let graph = &loaded.graph;
    let s = resolve_node(source, graph.node_count())?;
    let t = resolve_node(target, graph.node_count())?;

    let verbose = cli.verbose && !cli.quiet && settings.output == OutputFormat::Human;
    if verbose {
        println!(
            "Loaded {} edges and {} nodes",
            loaded.edges,
            graph.node_count()
        );
    }

    let algorithm = build_algorithm(settings.algorithm, graph, interrupt_token());

    let start = Instant::now();
    let route = algorithm.pair(s, t)?;
    let took = start.elapsed();
    tracing::debug!(
        algorithm = algorithm.name(),
        elapsed = ?took,
        cost = route.cost,
        hops = route.hops(),
        "query"
    );

    match settings.output {
        OutputFormat::Json => {
            let output = RouteOutput::new(&route, algorithm.name());
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if verbose {
                println!("Shortest path algorithm took: {:?}", took);
            }
            if route.is_reachable() {
                println!("Cost: {}, Hops: {}", format_cost(route.cost), route.hops());
                if verbose {
                    println!("{}", node_sequence(&route));
                }
            }
        }
    }

    if !route.is_reachable() {
        return Err(RouteError::NoPath {
            from: source,
            to: target,
        });
    }
    Ok(())
}

fn build_algorithm<'g>(
    kind: AlgorithmKind,
    graph: &'g AdjacencyList,
    cancel: CancelToken,
) -> Box<dyn ShortestPath + 'g> {
    match kind {
        AlgorithmKind::Dijkstra => Box::new(Dijkstra::new(graph).with_cancel(cancel)),
        AlgorithmKind::Bidirectional => {
            Box::new(BidirectionalDijkstra::new(graph).with_cancel(cancel))
        }
    }
}

/// `[1 8 7 6 5]` style listing of the 1-indexed nodes on the route
fn node_sequence(route: &Route) -> String {
    let nodes: Vec<String> = route
        .nodes()
        .iter()
        .map(|v| (v + 1).to_string())
        .collect();
    format!("[{}]", nodes.join(" "))
}
