//! Command dispatch logic for routeplan

use std::time::Instant;

use routeplan_core::error::Result;

use crate::cli::{Cli, Commands, Settings};
use crate::commands;

pub fn run(cli: &Cli, settings: &Settings, start: Instant) -> Result<()> {
    tracing::debug!(
        format = %settings.format,
        output = %settings.output,
        algorithm = %settings.algorithm,
        elapsed = ?start.elapsed(),
        "dispatch"
    );

    match &cli.command {
        Commands::Dijkstra {
            source,
            target,
            file,
            ..
        } => commands::dijkstra::execute(cli, settings, *source, *target, file),

        Commands::Tree { source, file } => commands::tree::execute(cli, settings, *source, file),
    }
}
