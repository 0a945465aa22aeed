//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::graphio::GraphFormat;
use crate::shortestpath::AlgorithmKind;

/// File name looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "routeplan.toml";

/// Defaults for the command-line tool; flags always take precedence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouteConfig {
    /// Input graph format
    pub format: GraphFormat,

    /// Point-to-point algorithm
    pub algorithm: AlgorithmKind,

    /// Output format
    pub output: OutputFormat,

    /// Log level or filter directive (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
