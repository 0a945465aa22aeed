use crate::error::Result;
use crate::graph::{Edge, Graph, Node};

use super::state::{Popped, SearchState};
use super::{predecessor_chain, CancelToken, Route, ShortestPath};

/// Single-source Dijkstra over a borrowed graph
#[derive(Debug, Clone)]
pub struct Dijkstra<'g, G: Graph> {
    graph: &'g G,
    cancel: Option<CancelToken>,
}

/// Distances and predecessor edges from one source to every node
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    pub source: Node,
    /// Distance per node, `+∞` when unreachable
    pub cost: Vec<f64>,
    /// Last edge on a shortest path per node; `None` for the source and unreachable nodes
    pub predecessor: Vec<Option<Edge>>,
}

impl ShortestPathTree {
    /// Shortest path from the tree's source to `target`
    pub fn route_to(&self, target: Node) -> Route {
        if self.cost[target].is_infinite() {
            return Route::unreachable(self.source, target);
        }

        let mut edges = predecessor_chain(&self.predecessor, self.source, target);
        edges.reverse();

        Route {
            source: self.source,
            target,
            cost: self.cost[target],
            edges,
        }
    }
}

impl<'g, G: Graph> Dijkstra<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Dijkstra {
            graph,
            cancel: None,
        }
    }

    /// Abort queries with [`crate::error::RouteError::Interrupted`] once `token` is cancelled
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Grow a shortest path tree from `source`
    ///
    /// After each settled pop, `stop` is asked whether to finish early; it sees the
    /// node just settled and the current state. Returns the final search state.
    pub fn run<F>(&self, source: Node, mut stop: F) -> Result<SearchState>
    where
        F: FnMut(Node, &SearchState) -> bool,
    {
        let mut state = SearchState::new(self.graph.node_count(), source);

        while let Some(popped) = state.pop() {
            CancelToken::check(self.cancel.as_ref())?;

            let Popped::Settled(element) = popped else {
                continue;
            };

            let v = element.node;
            if stop(v, &state) {
                break;
            }

            for edge in self.graph.outgoing_edges(v) {
                state.relax(edge);
            }
        }

        tracing::debug!(
            source,
            settled = state.stats.settled,
            relaxed = state.stats.relaxed,
            stale = state.stats.stale,
            "dijkstra_search"
        );

        Ok(state)
    }

    /// Distances and predecessors from `source` to every node
    #[tracing::instrument(skip(self), fields(nodes = self.graph.node_count()))]
    pub fn to_all(&self, source: Node) -> Result<ShortestPathTree> {
        let state = self.run(source, |_, _| false)?;
        Ok(ShortestPathTree {
            source,
            cost: state.cost,
            predecessor: state.predecessor,
        })
    }
}

impl<G: Graph> ShortestPath for Dijkstra<'_, G> {
    #[tracing::instrument(skip(self), fields(algorithm = "dijkstra"))]
    fn pair(&self, s: Node, t: Node) -> Result<Route> {
        let state = self.run(s, |v, _| v == t)?;

        let tree = ShortestPathTree {
            source: s,
            cost: state.cost,
            predecessor: state.predecessor,
        };
        Ok(tree.route_to(t))
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}
