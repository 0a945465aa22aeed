use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for routeplan with a clean environment
pub fn routeplan() -> Command {
    let mut cmd = cargo_bin_cmd!("routeplan");
    cmd.env_remove("RUST_LOG")
        .env_remove("ROUTEPLAN_LOG")
        .env_remove("ROUTEPLAN_CONFIG");
    cmd
}

/// Path to a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Write `content` to `name` inside `dir` and return its path
#[allow(dead_code)]
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
