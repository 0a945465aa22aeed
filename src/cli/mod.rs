//! CLI argument parsing for routeplan
//!
//! Global flags: --format, --output, --config, --quiet, --verbose, --log-level, --log-json

pub mod settings;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use routeplan_core::format::OutputFormat;
use routeplan_core::graphio::GraphFormat;
use routeplan_core::shortestpath::AlgorithmKind;

pub use settings::Settings;

/// Routeplan - shortest path queries on weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "routeplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Input graph format (dimacs, mtx)
    #[arg(long, short, global = true)]
    pub format: Option<GraphFormat>,

    /// Output format (human, json)
    #[arg(long, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file (defaults to ./routeplan.toml when present)
    #[arg(long, global = true, env = "ROUTEPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show graph size, query timing and the node sequence
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, routeplan_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two nodes
    Dijkstra {
        /// Source node (1-indexed)
        #[arg(long, short)]
        source: usize,

        /// Target node (1-indexed)
        #[arg(long, short)]
        target: usize,

        /// Search from both ends at once
        #[arg(long = "bidirect", short = 'b', conflicts_with = "algorithm")]
        bidirectional: bool,

        /// Algorithm to run (dijkstra, bidirectional)
        #[arg(long)]
        algorithm: Option<AlgorithmKind>,

        /// Graph file
        file: PathBuf,
    },

    /// Print the distance from one node to every node
    Tree {
        /// Source node (1-indexed)
        #[arg(long, short)]
        source: usize,

        /// Graph file
        file: PathBuf,
    },
}
