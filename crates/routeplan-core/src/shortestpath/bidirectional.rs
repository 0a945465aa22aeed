use crate::error::Result;
use crate::graph::{Edge, Graph, Node};

use super::state::{Popped, SearchState};
use super::{predecessor_chain, CancelToken, Route, ShortestPath};

/// Point-to-point Dijkstra searching from both ends at once
///
/// A forward search grows from the source on the graph while a backward search
/// grows from the target on the reverted graph. Each step advances the side with
/// the cheaper frontier. The search stops once the two frontier minima together
/// reach the best connecting path seen so far.
#[derive(Debug, Clone)]
pub struct BidirectionalDijkstra<'g, G: Graph> {
    forward: &'g G,
    backward: G,
    cancel: Option<CancelToken>,
}

/// One half of a bidirectional search
struct SearchPart<'a, G: Graph> {
    graph: &'a G,
    state: SearchState,
    /// The other half's source; reaching it directly finishes the search
    target: Node,
}

/// Best connection between the two halves found so far
#[derive(Debug, Clone, Copy)]
struct Meeting {
    node: Option<Node>,
    upper_bound: f64,
}

enum Advance {
    Continue,
    ReachedTarget,
}

impl<'a, G: Graph> SearchPart<'a, G> {
    fn new(graph: &'a G, source: Node, target: Node) -> Self {
        SearchPart {
            graph,
            state: SearchState::new(graph.node_count(), source),
            target,
        }
    }

    fn min_cost(&self) -> f64 {
        self.state.queue.min_cost()
    }

    /// Settle one node of this half, checking relaxed nodes against the other half
    fn advance(&mut self, other: &SearchState, meeting: &mut Meeting) -> Advance {
        let Some(Popped::Settled(element)) = self.state.pop() else {
            return Advance::Continue;
        };

        let v = element.node;
        if v == self.target {
            meeting.node = Some(v);
            meeting.upper_bound = self.state.cost[v];
            return Advance::ReachedTarget;
        }

        for edge in self.graph.outgoing_edges(v) {
            if !self.state.relax(edge) {
                continue;
            }

            let w = edge.to;
            let candidate = self.state.cost[w] + other.cost[w];
            if candidate < meeting.upper_bound {
                meeting.node = Some(w);
                meeting.upper_bound = candidate;
            }
        }

        Advance::Continue
    }
}

impl<'g, G: Graph> BidirectionalDijkstra<'g, G> {
    /// Prepare searches over `graph`, building its reversal once up front
    pub fn new(graph: &'g G) -> Self {
        Self::with_backward(graph, graph.reverted())
    }

    /// Use an already reverted copy of `forward` for the backward half
    pub fn with_backward(forward: &'g G, backward: G) -> Self {
        BidirectionalDijkstra {
            forward,
            backward,
            cancel: None,
        }
    }

    /// Abort queries with [`crate::error::RouteError::Interrupted`] once `token` is cancelled
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

impl<G: Graph> ShortestPath for BidirectionalDijkstra<'_, G> {
    #[tracing::instrument(skip(self), fields(algorithm = "bidirectional"))]
    fn pair(&self, s: Node, t: Node) -> Result<Route> {
        let mut forward = SearchPart::new(self.forward, s, t);
        let mut backward = SearchPart::new(&self.backward, t, s);
        let mut meeting = Meeting {
            node: None,
            upper_bound: f64::INFINITY,
        };

        while !forward.state.queue.is_empty() || !backward.state.queue.is_empty() {
            CancelToken::check(self.cancel.as_ref())?;

            let (forward_min, backward_min) = (forward.min_cost(), backward.min_cost());
            if meeting.upper_bound <= forward_min + backward_min {
                break;
            }

            let advance = if forward_min <= backward_min {
                forward.advance(&backward.state, &mut meeting)
            } else {
                backward.advance(&forward.state, &mut meeting)
            };

            if let Advance::ReachedTarget = advance {
                break;
            }
        }

        tracing::debug!(
            meeting_node = ?meeting.node,
            upper_bound = meeting.upper_bound,
            forward_settled = forward.state.stats.settled,
            backward_settled = backward.state.stats.settled,
            stale = forward.state.stats.stale + backward.state.stats.stale,
            "bidirectional_search"
        );

        let Some(m) = meeting.node.filter(|_| meeting.upper_bound.is_finite()) else {
            return Ok(Route::unreachable(s, t));
        };

        Ok(Route {
            source: s,
            target: t,
            cost: forward.state.cost[m] + backward.state.cost[m],
            edges: stitch(&forward.state, &backward.state, s, t, m),
        })
    }

    fn name(&self) -> &'static str {
        "bidirectional"
    }
}

/// Join the forward chain `s → m` with the backward chain `m → t`
///
/// Backward predecessors are edges of the reverted graph, so each is reverted again
/// to point along the real graph. A meeting at `t` leaves the backward chain empty;
/// a meeting at `s` leaves the forward chain empty.
pub(super) fn stitch(
    forward: &SearchState,
    backward: &SearchState,
    s: Node,
    t: Node,
    m: Node,
) -> Vec<Edge> {
    let mut edges = predecessor_chain(&forward.predecessor, s, m);
    edges.reverse();
    edges.extend(
        predecessor_chain(&backward.predecessor, t, m)
            .iter()
            .map(Edge::reverted),
    );
    edges
}
