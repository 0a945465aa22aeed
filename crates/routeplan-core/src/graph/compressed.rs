use super::{Edge, Graph, Node};

/// Graph stored in compressed sparse row form
///
/// All edges live in one array grouped by source node; `offsets[v]..offsets[v + 1]`
/// is the slice of edges leaving `v`. Within a node, edges keep construction order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompressedGraph {
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl CompressedGraph {
    /// Build a graph with `n` nodes from an edge list
    ///
    /// Edge endpoints must lie in `[0, n)`; an out-of-range source panics.
    pub fn new(edges: &[Edge], n: usize) -> Self {
        let mut offsets = vec![0; n + 1];
        for edge in edges {
            offsets[edge.from + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        // Counting sort keeps per-node insertion order.
        let mut cursor = offsets.clone();
        let mut sorted = vec![Edge::default(); edges.len()];
        for edge in edges {
            sorted[cursor[edge.from]] = *edge;
            cursor[edge.from] += 1;
        }

        CompressedGraph {
            offsets,
            edges: sorted,
        }
    }
}

impl Graph for CompressedGraph {
    fn outgoing_edges(&self, v: Node) -> &[Edge] {
        &self.edges[self.offsets[v]..self.offsets[v + 1]]
    }

    fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn reverted(&self) -> Self {
        let reverted: Vec<Edge> = self.edges.iter().map(Edge::reverted).collect();
        CompressedGraph::new(&reverted, self.node_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;

    fn sample_edges() -> Vec<Edge> {
        vec![
            Edge::new(2, 0, 1.0),
            Edge::new(0, 1, 4.0),
            Edge::new(2, 1, 2.0),
            Edge::new(0, 2, 1.5),
        ]
    }

    #[test]
    fn test_matches_adjacency_list() {
        let edges = sample_edges();
        let compressed = CompressedGraph::new(&edges, 4);
        let list = AdjacencyList::new(&edges, 4);

        assert_eq!(compressed.node_count(), list.node_count());
        assert_eq!(compressed.edge_count(), list.edge_count());
        for v in 0..4 {
            assert_eq!(compressed.outgoing_edges(v), list.outgoing_edges(v));
        }
    }

    #[test]
    fn test_reverted() {
        let compressed = CompressedGraph::new(&sample_edges(), 3);
        let reverted = compressed.reverted();

        assert_eq!(reverted.outgoing_edges(0), &[Edge::new(0, 2, 1.0)]);
        assert_eq!(
            reverted.outgoing_edges(1),
            &[Edge::new(1, 0, 4.0), Edge::new(1, 2, 2.0)]
        );
        assert_eq!(reverted.outgoing_edges(2), &[Edge::new(2, 0, 1.5)]);
        assert_eq!(reverted.reverted().edges().count(), 4);
    }

    #[test]
    fn test_isolated_nodes() {
        let compressed = CompressedGraph::new(&[Edge::new(1, 1, 0.0)], 3);
        assert!(compressed.outgoing_edges(0).is_empty());
        assert_eq!(compressed.outgoing_edges(1), &[Edge::new(1, 1, 0.0)]);
        assert!(compressed.outgoing_edges(2).is_empty());
    }

    #[test]
    fn test_empty() {
        let compressed = CompressedGraph::new(&[], 0);
        assert_eq!(compressed.node_count(), 0);
        assert_eq!(compressed.edge_count(), 0);
    }
}
