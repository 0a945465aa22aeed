//! MatrixMarket coordinate pattern symmetric format
//!
//! Each entry `<v> <w>` is an undirected unit-cost connection and becomes two
//! directed edges.

use std::io::BufRead;

use crate::error::{Result, RouteError};
use crate::graph::Edge;

use super::{node_field, EdgeList};

const FORMAT: &str = "MTX";

const HEADER: &str = "MatrixMarket matrix coordinate pattern symmetric";

const MAX_RESERVE: usize = 1 << 20;

#[derive(Debug, Clone, Copy)]
struct Size {
    nodes: usize,
    nonzeros: usize,
}

/// Parse a symmetric pattern matrix as an undirected unit-cost graph
pub fn parse<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut lines = reader.lines();

    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| RouteError::parse(FORMAT, 0, "empty file"))?;
    check_header(&header)?;

    let mut size: Option<Size> = None;
    let mut edges = Vec::new();
    let mut entries = 0;
    let mut last_line = 1;

    for (index, line) in lines.enumerate() {
        let line = line?;
        let line_no = index + 2;
        last_line = line_no;

        let line = line.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some(dims) = size else {
            let parsed = size_line(&fields, line_no)?;
            edges.reserve(parsed.nonzeros.saturating_mul(2).min(MAX_RESERVE));
            size = Some(parsed);
            continue;
        };

        if entries == dims.nonzeros {
            return Err(RouteError::parse(
                FORMAT,
                line_no,
                format!("more than the declared {} entries", dims.nonzeros),
            ));
        }

        if fields.len() != 2 {
            return Err(RouteError::parse(
                FORMAT,
                line_no,
                "expected entry line of format '<row> <col>'",
            ));
        }
        let v = node_field(FORMAT, line_no, fields[0], dims.nodes)?;
        let w = node_field(FORMAT, line_no, fields[1], dims.nodes)?;
        edges.push(Edge::new(v, w, 1.0));
        edges.push(Edge::new(w, v, 1.0));
        entries += 1;
    }

    let size = size.ok_or_else(|| {
        RouteError::parse(FORMAT, last_line, "file only contains header and comments")
    })?;
    if entries != size.nonzeros {
        return Err(RouteError::parse(
            FORMAT,
            last_line,
            format!(
                "expected {} entries but only got {}",
                size.nonzeros, entries
            ),
        ));
    }

    tracing::debug!(nodes = size.nodes, entries, "parsed mtx graph");
    Ok(EdgeList {
        edges,
        node_count: size.nodes,
    })
}

fn check_header(line: &str) -> Result<()> {
    let banner = line
        .strip_prefix("%%")
        .or_else(|| line.strip_prefix('%'))
        .ok_or_else(|| {
            RouteError::parse(FORMAT, 1, "header line expected to begin with '%'")
        })?;

    if banner.trim_end() != HEADER {
        return Err(RouteError::parse(
            FORMAT,
            1,
            format!("unsupported mtx format '{}'", banner.trim_end()),
        ));
    }
    Ok(())
}

fn size_line(fields: &[&str], line_no: usize) -> Result<Size> {
    if fields.len() != 3 {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            "expected size line of format '<rows> <cols> <nonzeros>'",
        ));
    }

    let number = |field: &str| {
        field.parse::<usize>().map_err(|_| {
            RouteError::parse(FORMAT, line_no, format!("invalid size value '{}'", field))
        })
    };
    let (rows, cols, nonzeros) = (number(fields[0])?, number(fields[1])?, number(fields[2])?);

    if rows != cols {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            format!("expected a square matrix but got {}x{}", rows, cols),
        ));
    }

    Ok(Size {
        nodes: rows,
        nonzeros,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "%%MatrixMarket matrix coordinate pattern symmetric\n";

    fn parse_str(input: &str) -> Result<EdgeList> {
        parse(input.as_bytes())
    }

    fn parse_error_line(input: &str) -> usize {
        match parse_str(input) {
            Err(RouteError::Parse { line, .. }) => line,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_symmetric_pattern() {
        let input = format!("{}% a comment\n3 3 2\n2 1\n\n3 2\n", BANNER);
        let list = parse_str(&input).unwrap();

        assert_eq!(list.node_count, 3);
        assert_eq!(
            list.edges,
            vec![
                Edge::new(1, 0, 1.0),
                Edge::new(0, 1, 1.0),
                Edge::new(2, 1, 1.0),
                Edge::new(1, 2, 1.0),
            ]
        );
    }

    #[test]
    fn test_single_percent_banner() {
        let input = "%MatrixMarket matrix coordinate pattern symmetric\n2 2 1\n1 2\n";
        assert_eq!(parse_str(input).unwrap().edges.len(), 2);
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(parse_error_line(""), 0);
    }

    #[test]
    fn test_unsupported_banner() {
        assert_eq!(
            parse_error_line("%%MatrixMarket matrix coordinate real general\n2 2 0\n"),
            1
        );
        assert_eq!(parse_error_line("2 2 0\n"), 1);
    }

    #[test]
    fn test_only_header_and_comments() {
        let err = parse_str(&format!("{}% nothing else\n", BANNER)).unwrap_err();
        assert!(err.to_string().contains("only contains header and comments"));
    }

    #[test]
    fn test_non_square_size() {
        assert_eq!(parse_error_line(&format!("{}3 4 1\n1 2\n", BANNER)), 2);
    }

    #[test]
    fn test_bad_entries() {
        assert_eq!(parse_error_line(&format!("{}3 3 1\n1 x\n", BANNER)), 3);
        assert_eq!(parse_error_line(&format!("{}3 3 1\n1 4\n", BANNER)), 3);
        assert_eq!(parse_error_line(&format!("{}3 3 1\n1\n", BANNER)), 3);
    }

    #[test]
    fn test_entry_count_must_match() {
        let err = parse_str(&format!("{}3 3 2\n1 2\n", BANNER)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "MTX parsing failed at line 3: expected 2 entries but only got 1"
        );
        assert_eq!(parse_error_line(&format!("{}3 3 1\n1 2\n2 3\n", BANNER)), 4);
    }
}
