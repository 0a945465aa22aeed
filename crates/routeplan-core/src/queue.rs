//! Binary min-heap keyed by tentative path cost
//!
//! The queue has no decrease-key. When a node's cost improves, the algorithm pushes
//! a fresh element and leaves the old one in place; on pop it compares the element's
//! cost with its own authoritative cost array and drops the entry if it is stale
//! (see [`Element::is_stale`]). The queue can therefore hold up to O(E) elements.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::Node;

/// A queued node together with the cost it was queued at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub node: Node,
    pub cost: f64,
}

impl Element {
    pub fn new(node: Node, cost: f64) -> Self {
        Element { node, cost }
    }

    /// Whether a better cost has been recorded for this node since it was queued
    pub fn is_stale(&self, cost: &[f64]) -> bool {
        self.cost > cost[self.node]
    }
}

impl Eq for Element {}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.total_cmp(&other.cost)
    }
}

/// Min-heap of [`Element`]s ordered by cost; ties are broken arbitrarily
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    heap: BinaryHeap<Reverse<Element>>,
}

impl MinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.heap.push(Reverse(element));
    }

    /// Remove and return the cheapest element
    pub fn pop(&mut self) -> Option<Element> {
        self.heap.pop().map(|Reverse(element)| element)
    }

    /// The cheapest element, without removing it
    pub fn peek(&self) -> Option<&Element> {
        self.heap.peek().map(|Reverse(element)| element)
    }

    /// Cost of the cheapest element, `+∞` when empty
    pub fn min_cost(&self) -> f64 {
        self.peek().map_or(f64::INFINITY, |element| element.cost)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
