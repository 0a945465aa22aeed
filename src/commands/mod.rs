//! CLI commands for routeplan

pub mod dijkstra;
pub mod dispatch;
pub mod tree;

use std::path::Path;
use std::time::Instant;

use routeplan_core::error::{Result, RouteError};
use routeplan_core::graph::{AdjacencyList, Graph, Node};
use routeplan_core::graphio::{self, GraphFormat};
use routeplan_core::shortestpath::CancelToken;
use routeplan_core::trace_time;

/// A graph loaded from disk along with the number of edges in the file
pub struct LoadedGraph {
    pub graph: AdjacencyList,
    pub edges: usize,
}

/// Read `file` in `format` and build its adjacency list
pub fn load_graph(format: GraphFormat, file: &Path) -> Result<LoadedGraph> {
    let start = Instant::now();
    let list = graphio::graph_file(format, file).load_graph()?;
    let graph = list.to_adjacency_list();
    trace_time!(start, "load_graph", nodes = graph.node_count(), edges = list.edges.len());

    Ok(LoadedGraph {
        edges: list.edges.len(),
        graph,
    })
}

/// Translate a 1-indexed user node id to a 0-indexed node, checking the range
pub fn resolve_node(id: usize, node_count: usize) -> Result<Node> {
    if id == 0 || id > node_count {
        return Err(RouteError::NodeOutOfRange {
            node: id,
            node_count,
        });
    }
    Ok(id - 1)
}

/// Cancellation token tripped by Ctrl-C
pub fn interrupt_token() -> CancelToken {
    let token = CancelToken::new();
    let handler_token = token.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        tracing::debug!(error = %e, "failed to install Ctrl-C handler");
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_node() {
        assert_eq!(resolve_node(1, 3).unwrap(), 0);
        assert_eq!(resolve_node(3, 3).unwrap(), 2);
        assert!(matches!(
            resolve_node(0, 3),
            Err(RouteError::NodeOutOfRange { node: 0, .. })
        ));
        assert!(matches!(
            resolve_node(4, 3),
            Err(RouteError::NodeOutOfRange {
                node: 4,
                node_count: 3
            })
        ));
    }
}
