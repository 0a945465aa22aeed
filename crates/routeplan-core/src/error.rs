//! Error types and exit codes for routeplan
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, interrupted query, unreachable target)
//! - 2: Usage error (bad flags/args, node id out of range)
//! - 3: Data error (malformed graph file, invalid config)

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::Node;

/// Exit codes for the routeplan binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed graph or config file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading graphs or answering queries
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("node {node} is out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: usize, node_count: usize },

    // Data errors (exit code 3)
    #[error("{format} parsing failed at line {line}: {reason}")]
    Parse {
        format: &'static str,
        line: usize,
        reason: String,
    },

    #[error("invalid config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("no path from {from} to {to}")]
    NoPath { from: Node, to: Node },

    #[error("query interrupted")]
    Interrupted,
}

impl RouteError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RouteError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RouteError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create a parse error for a graph file line (1-based)
    pub fn parse(format: &'static str, line: usize, reason: impl Into<String>) -> Self {
        RouteError::Parse {
            format,
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::UsageError(_)
            | RouteError::Unsupported { .. }
            | RouteError::NodeOutOfRange { .. } => ExitCode::Usage,

            RouteError::Parse { .. } | RouteError::InvalidConfig { .. } => ExitCode::Data,

            RouteError::Io(_)
            | RouteError::Json(_)
            | RouteError::FailedOperationWithTarget { .. }
            | RouteError::NoPath { .. }
            | RouteError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            RouteError::UsageError(_) => "usage_error",
            RouteError::Unsupported { .. } => "unsupported",
            RouteError::NodeOutOfRange { .. } => "node_out_of_range",
            RouteError::Parse { .. } => "parse_error",
            RouteError::InvalidConfig { .. } => "invalid_config",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RouteError::NoPath { .. } => "no_path",
            RouteError::Interrupted => "interrupted",
        }
    }

    /// Render this error as the JSON envelope used by `--output json`
    pub fn to_json(&self) -> String {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
        .to_string()
    }
}

/// Result type alias for routeplan operations
pub type Result<T> = std::result::Result<T, RouteError>;
