//! Configuration for routeplan
//!
//! Configuration is read from an optional TOML file: an explicit path, or
//! `routeplan.toml` in the working directory.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RouteError};

pub use types::{RouteConfig, CONFIG_FILE_NAME};

impl RouteConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;

        toml::from_str(&content).map_err(|e| RouteError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `routeplan.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
