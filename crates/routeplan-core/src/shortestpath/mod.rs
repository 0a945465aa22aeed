//! Shortest path algorithms
//!
//! - `dijkstra`: single-source Dijkstra, to all nodes or stopping at a target
//! - `bidirectional`: meet-in-the-middle Dijkstra for point-to-point queries
//! - `state`: per-query search state shared by both
//!
//! Every query allocates its own state; graphs are only borrowed, so independent
//! queries over the same graph never interact.

pub mod bidirectional;
pub mod dijkstra;
pub mod state;

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{Edge, Node};

pub use bidirectional::BidirectionalDijkstra;
pub use dijkstra::{Dijkstra, ShortestPathTree};
pub use state::{Popped, SearchState, SearchStats};

/// Point-to-point shortest path algorithm
pub trait ShortestPath {
    /// Shortest path from `s` to `t`
    ///
    /// An unreachable target is not an error: it yields a route with infinite cost
    /// and no edges. Errors are reserved for cancelled queries.
    fn pair(&self, s: Node, t: Node) -> Result<Route>;

    /// Short algorithm name for logs and output
    fn name(&self) -> &'static str;
}

/// Result of a point-to-point query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub source: Node,
    pub target: Node,
    pub cost: f64,
    pub edges: Vec<Edge>,
}

impl Route {
    /// The sentinel for "no path from `source` to `target`"
    pub fn unreachable(source: Node, target: Node) -> Self {
        Route {
            source,
            target,
            cost: f64::INFINITY,
            edges: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    /// Nodes visited from source to target; empty when unreachable
    pub fn nodes(&self) -> Vec<Node> {
        if !self.is_reachable() {
            return Vec::new();
        }
        let mut nodes = Vec::with_capacity(self.edges.len() + 1);
        nodes.push(self.source);
        nodes.extend(self.edges.iter().map(|e| e.to));
        nodes
    }
}

/// Which point-to-point algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    #[default]
    Dijkstra,
    Bidirectional,
}

impl FromStr for AlgorithmKind {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            "bidirectional" => Ok(AlgorithmKind::Bidirectional),
            other => Err(RouteError::unsupported(
                "algorithm",
                other,
                "dijkstra, bidirectional",
            )),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Dijkstra => write!(f, "dijkstra"),
            AlgorithmKind::Bidirectional => write!(f, "bidirectional"),
        }
    }
}

/// Cooperative cancellation flag, checked once per queue pop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn check(token: Option<&CancelToken>) -> Result<()> {
        match token {
            Some(token) if token.is_cancelled() => Err(RouteError::Interrupted),
            _ => Ok(()),
        }
    }
}

/// Walk a predecessor chain from `from` until `root` (or an unreached node)
///
/// Edges come out in walk order, i.e. from `from` back towards `root`. The walk is
/// capped at one edge per node so a corrupt chain cannot loop forever.
pub(crate) fn predecessor_chain(
    predecessor: &[Option<Edge>],
    root: Node,
    from: Node,
) -> Vec<Edge> {
    let mut chain = Vec::new();
    let mut v = from;
    while v != root && chain.len() < predecessor.len() {
        match predecessor[v] {
            Some(edge) => {
                chain.push(edge);
                v = edge.from;
            }
            None => break,
        }
    }
    chain
}
