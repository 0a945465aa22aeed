//! Routeplan - shortest path queries on weighted directed graphs
//!
//! Loads a graph from a DIMACS or MatrixMarket file and answers point-to-point
//! or single-source shortest path queries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, Settings};
use routeplan_core::error::{ExitCode as RouteExitCode, RouteError};
use routeplan_core::format::OutputFormat;
use routeplan_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing failed before `--output` could be read; honour a JSON request anyway
            if argv_requests_json() {
                match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => {
                        let route_error = RouteError::UsageError(err.to_string());
                        eprintln!("{}", route_error.to_json());
                        return ExitCode::from(route_error.exit_code() as u8);
                    }
                }
            }

            err.exit();
        }
    };

    let resolved = Settings::resolve(&cli);
    let settings = match &resolved {
        Ok(settings) => settings.clone(),
        Err(_) => Settings::fallback(&cli),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, settings.log_level.as_deref(), cli.log_json)
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = resolved.and_then(|settings| commands::dispatch::run(&cli, &settings, start));

    match result {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if settings.output == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--output" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--output=json" {
            return true;
        }
    }
    false
}
