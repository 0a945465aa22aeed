//! Effective settings: command-line flags layered over the config file

use std::env;
use std::path::Path;

use routeplan_core::config::RouteConfig;
use routeplan_core::error::Result;
use routeplan_core::format::OutputFormat;
use routeplan_core::graphio::GraphFormat;
use routeplan_core::shortestpath::AlgorithmKind;

use super::{Cli, Commands};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: GraphFormat,
    pub output: OutputFormat,
    pub algorithm: AlgorithmKind,
    pub log_level: Option<String>,
}

impl Settings {
    /// Load the config named by `--config`, or discover one in the working directory
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => RouteConfig::load(path)?,
            None => {
                let cwd = env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
                RouteConfig::discover(&cwd)?
            }
        };
        Ok(Self::merge(cli, config))
    }

    /// Flags win over config values
    pub fn merge(cli: &Cli, config: RouteConfig) -> Self {
        let algorithm = match &cli.command {
            Commands::Dijkstra {
                bidirectional: true,
                ..
            } => AlgorithmKind::Bidirectional,
            Commands::Dijkstra {
                algorithm: Some(kind),
                ..
            } => *kind,
            _ => config.algorithm,
        };

        Settings {
            format: cli.format.unwrap_or(config.format),
            output: cli.output.unwrap_or(config.output),
            algorithm,
            log_level: cli.log_level.clone().or(config.log_level),
        }
    }

    /// Settings used when the config file itself could not be loaded
    pub fn fallback(cli: &Cli) -> Self {
        Self::merge(cli, RouteConfig::default())
    }
}
