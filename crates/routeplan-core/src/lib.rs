//! Routeplan Core Library
//!
//! Shortest-path queries on weighted directed graphs: graph storage, a binary
//! min-heap, unidirectional and bidirectional Dijkstra, and graph file readers.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod graphio;
pub mod logging;
pub mod queue;
pub mod shortestpath;
