//! DIMACS shortest-path format
//!
//! ```text
//! c comment
//! p sp <nodes> <arcs>
//! a <from> <to> <cost>
//! ```

use std::io::BufRead;

use crate::error::{Result, RouteError};
use crate::graph::Edge;

use super::{node_field, EdgeList};

const FORMAT: &str = "DIMACS";

/// Upper bound on preallocation taken from the declared arc count
const MAX_RESERVE: usize = 1 << 20;

/// Parse a DIMACS graph, rejecting the whole input on the first malformed line
pub fn parse<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut node_count = None;
    let mut edges = Vec::new();
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        last_line = line_no;

        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match node_count {
            None => {
                let (n, m) = problem_line(&fields, line_no)?;
                edges.reserve(m.min(MAX_RESERVE));
                node_count = Some(n);
            }
            Some(n) => edges.push(arc_line(&fields, line_no, n)?),
        }
    }

    let node_count = node_count.ok_or_else(|| {
        RouteError::parse(FORMAT, last_line, "missing problem line 'p sp <nodes> <arcs>'")
    })?;

    tracing::debug!(nodes = node_count, arcs = edges.len(), "parsed dimacs graph");
    Ok(EdgeList { edges, node_count })
}

fn problem_line(fields: &[&str], line_no: usize) -> Result<(usize, usize)> {
    if fields.first() != Some(&"p") {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            format!("expected problem line but got '{}'", fields.join(" ")),
        ));
    }
    if fields.len() != 4 || fields[1] != "sp" {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            "expected problem line of format 'p sp <nodes> <arcs>'",
        ));
    }

    let count = |field: &str, name: &str| {
        field.parse::<usize>().map_err(|_| {
            RouteError::parse(FORMAT, line_no, format!("invalid {} count '{}'", name, field))
        })
    };

    Ok((count(fields[2], "node")?, count(fields[3], "arc")?))
}

fn arc_line(fields: &[&str], line_no: usize, node_count: usize) -> Result<Edge> {
    if fields.first() != Some(&"a") {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            format!("expected arc descriptor line but got '{}'", fields.join(" ")),
        ));
    }
    if fields.len() != 4 {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            "expected arc descriptor line of format 'a <from> <to> <cost>'",
        ));
    }

    let from = node_field(FORMAT, line_no, fields[1], node_count)?;
    let to = node_field(FORMAT, line_no, fields[2], node_count)?;
    let cost: i64 = fields[3].parse().map_err(|_| {
        RouteError::parse(FORMAT, line_no, format!("invalid arc cost '{}'", fields[3]))
    })?;
    if cost < 0 {
        return Err(RouteError::parse(
            FORMAT,
            line_no,
            format!("negative arc cost {}", cost),
        ));
    }

    Ok(Edge::new(from, to, cost as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_parse_small_graph() {
        let input = "c sample graph\n\
                     p sp 3 3\n\
                     c arcs follow\n\
                     a 1 2 4\n\
                     \n\
                     a 2 3 1\n\
                     a 3 1 7\n";
        let list = parse_str(input).unwrap();

        assert_eq!(list.node_count, 3);
        assert_eq!(
            list.edges,
            vec![
                Edge::new(0, 1, 4.0),
                Edge::new(1, 2, 1.0),
                Edge::new(2, 0, 7.0),
            ]
        );
    }

    #[test]
    fn test_arc_count_is_only_a_hint() {
        let list = parse_str("p sp 2 10\na 1 2 3\n").unwrap();
        assert_eq!(list.edges.len(), 1);
    }

    #[test]
    fn test_nodes_without_arcs() {
        let list = parse_str("p sp 5 0\n").unwrap();
        assert_eq!(list.node_count, 5);
        assert!(list.edges.is_empty());
    }

    #[test]
    fn test_missing_problem_line() {
        assert!(matches!(parse_str(""), Err(RouteError::Parse { .. })));
        assert!(matches!(
            parse_str("c only comments\n"),
            Err(RouteError::Parse { .. })
        ));
    }

    #[test]
    fn test_arc_before_problem_line() {
        assert_eq!(parse_error_line("c header\na 1 2 3\n"), 2);
    }

    #[test]
    fn test_malformed_problem_line() {
        assert_eq!(parse_error_line("p max 3 3\n"), 1);
        assert_eq!(parse_error_line("p sp 3\n"), 1);
        assert_eq!(parse_error_line("p sp three 3\n"), 1);
    }

    #[test]
    fn test_malformed_arc_lines() {
        assert_eq!(parse_error_line("p sp 3 1\nx 1 2 3\n"), 2);
        assert_eq!(parse_error_line("p sp 3 1\na 1 2\n"), 2);
        assert_eq!(parse_error_line("p sp 3 1\na 1 2 3 4\n"), 2);
        assert_eq!(parse_error_line("p sp 3 2\na 1 2 3\na 1 two 3\n"), 3);
        assert_eq!(parse_error_line("p sp 3 1\na 1 2 1.5\n"), 2);
    }

    #[test]
    fn test_endpoint_out_of_range() {
        assert_eq!(parse_error_line("p sp 3 1\na 1 4 3\n"), 2);
        assert_eq!(parse_error_line("p sp 3 1\na 0 2 3\n"), 2);
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = parse_str("p sp 2 1\na 1 2 -3\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "DIMACS parsing failed at line 2: negative arc cost -3"
        );
    }
}
