//! `routeplan tree` command - distances from one node to every node

use std::path::Path;

use serde::Serialize;

use routeplan_core::error::Result;
use routeplan_core::format::{format_cost, OutputFormat};
use routeplan_core::graph::Graph;
use routeplan_core::shortestpath::{Dijkstra, ShortestPathTree};

use super::{interrupt_token, load_graph, resolve_node};
use crate::cli::{Cli, Settings};

#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub node: usize,
    pub cost: Option<f64>,
    pub predecessor: Option<usize>,
}

/// 1-indexed entries for every node of the tree
pub fn entries(tree: &ShortestPathTree) -> Vec<TreeEntry> {
    tree.cost
        .iter()
        .zip(&tree.predecessor)
        .enumerate()
        .map(|(v, (cost, edge))| TreeEntry {
            node: v + 1,
            cost: cost.is_finite().then_some(*cost),
            predecessor: edge.map(|e| e.from + 1),
        })
        .collect()
}

/// Execute the tree command
pub fn execute(cli: &Cli, settings: &Settings, source: usize, file: &Path) -> Result<()> {
    let loaded = load_graph(settings.format, file)?;
    let s = resolve_node(source, loaded.graph.node_count())?;

    let tree = Dijkstra::new(&loaded.graph)
        .with_cancel(interrupt_token())
        .to_all(s)?;

    match settings.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries(&tree))?);
        }
        OutputFormat::Human => {
            if cli.verbose && !cli.quiet {
                println!(
                    "Loaded {} edges and {} nodes",
                    loaded.edges,
                    loaded.graph.node_count()
                );
            }
            for (v, cost) in tree.cost.iter().enumerate() {
                println!("{}\t{}", v + 1, format_cost(*cost));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeplan_core::graph::{AdjacencyList, Edge};

    #[test]
    fn test_entries() {
        let graph = AdjacencyList::new(&[Edge::new(0, 1, 5.0)], 3);
        let tree = Dijkstra::new(&graph).to_all(0).unwrap();
        let entries = entries(&tree);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].cost, Some(0.0));
        assert_eq!(entries[0].predecessor, None);
        assert_eq!(entries[1].node, 2);
        assert_eq!(entries[1].cost, Some(5.0));
        assert_eq!(entries[1].predecessor, Some(1));
        assert_eq!(entries[2].cost, None);
    }
}
