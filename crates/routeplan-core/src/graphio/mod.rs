//! Graph file readers
//!
//! Both supported formats number nodes from 1; readers translate to the
//! 0-based ids used by [`crate::graph`].

pub mod dimacs;
pub mod mtx;

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{AdjacencyList, Edge, Node};

/// Edges read from a graph file together with the declared node count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    pub node_count: usize,
}

impl EdgeList {
    /// Build the adjacency-list graph for these edges
    pub fn to_adjacency_list(&self) -> AdjacencyList {
        AdjacencyList::new(&self.edges, self.node_count)
    }
}

/// Source of a graph, typically a file on disk
pub trait GraphInput {
    fn load_graph(&self) -> Result<EdgeList>;
}

/// Supported graph file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// DIMACS shortest-path challenge format (`p sp` / `a` lines)
    #[default]
    Dimacs,
    /// MatrixMarket coordinate pattern symmetric format
    Mtx,
}

impl FromStr for GraphFormat {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dimacs" => Ok(GraphFormat::Dimacs),
            "mtx" => Ok(GraphFormat::Mtx),
            other => Err(RouteError::unsupported("graph format", other, "dimacs, mtx")),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphFormat::Dimacs => write!(f, "dimacs"),
            GraphFormat::Mtx => write!(f, "mtx"),
        }
    }
}

/// Graph file in DIMACS format
#[derive(Debug, Clone)]
pub struct DimacsFile {
    path: PathBuf,
}

impl DimacsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DimacsFile { path: path.into() }
    }
}

impl GraphInput for DimacsFile {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load_graph(&self) -> Result<EdgeList> {
        let start = Instant::now();
        let list = dimacs::parse(open(&self.path)?)?;
        crate::trace_time!(start, "load_dimacs", edges = list.edges.len());
        Ok(list)
    }
}

/// Graph file in MatrixMarket format
#[derive(Debug, Clone)]
pub struct MtxFile {
    path: PathBuf,
}

impl MtxFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        MtxFile { path: path.into() }
    }
}

impl GraphInput for MtxFile {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn load_graph(&self) -> Result<EdgeList> {
        let start = Instant::now();
        let list = mtx::parse(open(&self.path)?)?;
        crate::trace_time!(start, "load_mtx", edges = list.edges.len());
        Ok(list)
    }
}

/// Reader for `path` in the given format
pub fn graph_file(format: GraphFormat, path: &Path) -> Box<dyn GraphInput> {
    match format {
        GraphFormat::Dimacs => Box::new(DimacsFile::new(path)),
        GraphFormat::Mtx => Box::new(MtxFile::new(path)),
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| RouteError::io_operation("open graph file", path.display(), e))?;
    Ok(BufReader::new(file))
}

/// Translate a 1-based node field to a 0-based id, checking it against `node_count`
fn node_field(
    format: &'static str,
    line: usize,
    field: &str,
    node_count: usize,
) -> Result<Node> {
    let id: usize = field
        .parse()
        .map_err(|_| RouteError::parse(format, line, format!("invalid node id '{}'", field)))?;

    if id == 0 || id > node_count {
        return Err(RouteError::parse(
            format,
            line,
            format!("node id {} outside 1..={}", id, node_count),
        ));
    }

    Ok(id - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_graph_format() {
        assert_eq!("dimacs".parse::<GraphFormat>().unwrap(), GraphFormat::Dimacs);
        assert_eq!("MTX".parse::<GraphFormat>().unwrap(), GraphFormat::Mtx);
        assert!("csv".parse::<GraphFormat>().is_err());
        assert_eq!(GraphFormat::Mtx.to_string(), "mtx");
    }

    #[test]
    fn test_node_field() {
        assert_eq!(node_field("DIMACS", 1, "1", 3).unwrap(), 0);
        assert_eq!(node_field("DIMACS", 1, "3", 3).unwrap(), 2);
        assert!(node_field("DIMACS", 1, "0", 3).is_err());
        assert!(node_field("DIMACS", 1, "4", 3).is_err());
        assert!(node_field("DIMACS", 1, "-1", 3).is_err());
        assert!(node_field("DIMACS", 1, "x", 3).is_err());
    }

    #[test]
    fn test_load_files_from_disk() {
        let dir = tempdir().unwrap();
        let dimacs_path = dir.path().join("g.gr");
        fs::write(&dimacs_path, "p sp 2 1\na 1 2 5\n").unwrap();
        let mtx_path = dir.path().join("g.mtx");
        fs::write(
            &mtx_path,
            "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n1 2\n",
        )
        .unwrap();

        let dimacs = graph_file(GraphFormat::Dimacs, &dimacs_path)
            .load_graph()
            .unwrap();
        assert_eq!(dimacs.node_count, 2);
        assert_eq!(dimacs.edges, vec![Edge::new(0, 1, 5.0)]);

        let graph = graph_file(GraphFormat::Mtx, &mtx_path)
            .load_graph()
            .unwrap()
            .to_adjacency_list();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = DimacsFile::new(dir.path().join("absent.gr"))
            .load_graph()
            .unwrap_err();
        assert!(matches!(err, RouteError::FailedOperationWithTarget { .. }));
    }
}
