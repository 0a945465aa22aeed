use super::{Edge, Graph, Node};

/// Graph stored as one outgoing edge vector per node
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdjacencyList {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Build a graph with `n` nodes from an edge list
    ///
    /// Edge endpoints must lie in `[0, n)`; an out-of-range endpoint panics.
    pub fn new(edges: &[Edge], n: usize) -> Self {
        let mut adjacency = vec![Vec::new(); n];
        for edge in edges {
            adjacency[edge.from].push(*edge);
        }

        AdjacencyList {
            adjacency,
            edge_count: edges.len(),
        }
    }
}

impl Graph for AdjacencyList {
    fn outgoing_edges(&self, v: Node) -> &[Edge] {
        &self.adjacency[v]
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn reverted(&self) -> Self {
        let mut adjacency = vec![Vec::new(); self.node_count()];
        for edge in self.edges() {
            adjacency[edge.to].push(edge.reverted());
        }

        AdjacencyList {
            adjacency,
            edge_count: self.edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_edges() -> Vec<Edge> {
        vec![
            Edge::new(0, 1, 4.0),
            Edge::new(0, 2, 1.0),
            Edge::new(2, 1, 2.0),
            Edge::new(1, 3, 5.0),
            Edge::new(0, 1, 7.0),
        ]
    }

    fn sorted(mut edges: Vec<Edge>) -> Vec<Edge> {
        edges.sort_by(|a, b| {
            a.from
                .cmp(&b.from)
                .then(a.to.cmp(&b.to))
                .then(a.cost.total_cmp(&b.cost))
        });
        edges
    }

    #[test]
    fn test_outgoing_edges_keep_insertion_order() {
        let graph = AdjacencyList::new(&sample_edges(), 4);

        assert_eq!(
            graph.outgoing_edges(0),
            &[
                Edge::new(0, 1, 4.0),
                Edge::new(0, 2, 1.0),
                Edge::new(0, 1, 7.0)
            ]
        );
        assert!(graph.outgoing_edges(3).is_empty());
    }

    #[test]
    fn test_counts() {
        let graph = AdjacencyList::new(&sample_edges(), 6);
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        assert!(graph.outgoing_edges(5).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = AdjacencyList::new(&[], 0);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_reverted_swaps_endpoints() {
        let graph = AdjacencyList::new(&sample_edges(), 4);
        let reverted = graph.reverted();

        assert_eq!(reverted.edge_count(), graph.edge_count());
        assert_eq!(
            reverted.outgoing_edges(1),
            &[
                Edge::new(1, 0, 4.0),
                Edge::new(1, 0, 7.0),
                Edge::new(1, 2, 2.0)
            ]
        );
        assert!(reverted.outgoing_edges(0).is_empty());
        assert_eq!(reverted.outgoing_edges(3), &[Edge::new(3, 1, 5.0)]);
    }

    #[test]
    fn test_reverted_twice_keeps_edge_multiset() {
        let graph = AdjacencyList::new(&sample_edges(), 4);
        let twice = graph.reverted().reverted();

        assert_eq!(
            sorted(twice.edges().collect()),
            sorted(graph.edges().collect())
        );
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_endpoint_panics() {
        AdjacencyList::new(&[Edge::new(3, 0, 1.0)], 2);
    }
}
