use crate::graph::{Edge, Node};
use crate::queue::{Element, MinHeap};

/// Counters collected while a search runs, reported through tracing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped with an up-to-date cost and expanded
    pub settled: usize,
    /// Edge relaxations that improved a cost
    pub relaxed: usize,
    /// Queue entries dropped because a better cost was already known
    pub stale: usize,
}

/// Outcome of popping the search frontier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Popped {
    /// Entry carries the node's current best cost and may be expanded
    Settled(Element),
    /// A better cost was recorded after this entry was queued
    Stale,
}

/// Mutable state of one search, owned exclusively by a single query
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Best known distance from the source, `+∞` if unreached
    pub cost: Vec<f64>,
    /// Edge that last improved each node; `None` for the source and unreached nodes
    pub predecessor: Vec<Option<Edge>>,
    pub queue: MinHeap,
    pub stats: SearchStats,
}

impl SearchState {
    /// Fresh state for a graph with `n` nodes, with `source` queued at cost 0
    pub fn new(n: usize, source: Node) -> Self {
        let mut cost = vec![f64::INFINITY; n];
        cost[source] = 0.0;

        let mut queue = MinHeap::new();
        queue.push(Element::new(source, 0.0));

        SearchState {
            cost,
            predecessor: vec![None; n],
            queue,
            stats: SearchStats::default(),
        }
    }

    /// Pop the cheapest queue entry, or `None` when the frontier is exhausted
    ///
    /// Stale entries are reported rather than skipped so callers decide how a
    /// discarded pop counts towards their loop.
    pub fn pop(&mut self) -> Option<Popped> {
        let element = self.queue.pop()?;
        if element.is_stale(&self.cost) {
            self.stats.stale += 1;
            return Some(Popped::Stale);
        }
        self.stats.settled += 1;
        Some(Popped::Settled(element))
    }

    /// Try to improve `edge.to` through `edge`; returns whether it improved
    pub fn relax(&mut self, edge: &Edge) -> bool {
        let new_cost = self.cost[edge.from] + edge.cost;
        if new_cost < self.cost[edge.to] {
            self.cost[edge.to] = new_cost;
            self.predecessor[edge.to] = Some(*edge);
            self.queue.push(Element::new(edge.to, new_cost));
            self.stats.relaxed += 1;
            true
        } else {
            false
        }
    }
}
