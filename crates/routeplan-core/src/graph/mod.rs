//! Weighted directed graph model
//!
//! Provides the read-only graph abstraction the shortest path algorithms run on:
//! - `Graph` trait: outgoing edges, node count and reversal
//! - `AdjacencyList`: one edge vector per node
//! - `CompressedGraph`: compressed sparse rows over a single edge array

pub mod adjacency_list;
pub mod compressed;

use serde::{Deserialize, Serialize};

pub use adjacency_list::AdjacencyList;
pub use compressed::CompressedGraph;

/// Node identifier, always 0-indexed inside the core
pub type Node = usize;

/// Directed, weighted connection between two nodes
///
/// Costs are expected to be non-negative; this is never checked.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub cost: f64,
}

impl Edge {
    pub fn new(from: Node, to: Node, cost: f64) -> Self {
        Edge { from, to, cost }
    }

    /// The same connection pointing the other way, cost preserved
    pub fn reverted(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

/// Read-only access to a weighted directed graph
///
/// Shortest path algorithms depend only on this trait, so storage layouts can be
/// swapped without touching them. Implementations must be immutable once built.
pub trait Graph {
    /// Edges leaving `v`, in the order they were supplied at construction
    ///
    /// Panics if `v >= self.node_count()`.
    fn outgoing_edges(&self, v: Node) -> &[Edge];

    /// Number of nodes, fixed at construction
    fn node_count(&self) -> usize;

    /// Total number of edges
    fn edge_count(&self) -> usize;

    /// A new graph with every edge `(u, v, c)` replaced by `(v, u, c)`
    fn reverted(&self) -> Self
    where
        Self: Sized;

    /// All edges, node by node
    fn edges(&self) -> impl Iterator<Item = Edge> + '_
    where
        Self: Sized,
    {
        (0..self.node_count()).flat_map(move |v| self.outgoing_edges(v).iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_reverted() {
        let edge = Edge::new(2, 7, 3.5);
        let reverted = edge.reverted();
        assert_eq!(reverted, Edge::new(7, 2, 3.5));
        assert_eq!(reverted.reverted(), edge);
    }

    #[test]
    fn test_edge_serializes_as_triple_fields() {
        let json = serde_json::to_value(Edge::new(0, 1, 5.0)).unwrap();
        assert_eq!(json["from"], 0);
        assert_eq!(json["to"], 1);
        assert_eq!(json["cost"], 5.0);
    }
}
