use std::fs;

use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, space0, space1};
use nom::combinator::{all_consuming, map_res, opt};
use nom::number::complete::double;
use nom::sequence::{preceded, terminated, tuple};
use nom::IResult;

use crate::error::ColorMstError;
use crate::graph::{GraphModel, RawEdge};

/** reads a DIMACS-like graph file.

Accepted lines:
 - `c ...` comments (skipped)
 - `p edge <n> <m>` or `p col <n> <m>` header (optional; `<n>` pads the
   vertex set with isolated vertices)
 - `[e] <u> <v> [<w>]` edges, the `e` prefix and the float weight both
   optional; ids are arbitrary non-negative labels (DIMACS files count
   from 1), remapped to a dense 0..n range by the graph constructor

Malformed lines are skipped, matching the tolerance of the usual
hand-written instance files. */
pub fn read_from_file(filename: &str) -> Result<GraphModel, ColorMstError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| ColorMstError::InvalidGraph(format!("{}: {}", filename, e)))?;
    read_from_str(&content)
}

/// parses the content of a graph file, see [`read_from_file`]
pub fn read_from_str(content: &str) -> Result<GraphModel, ColorMstError> {
    let mut declared_n = None;
    let mut edges: Vec<RawEdge> = Vec::new();
    for line in content.lines() {
        let line = line.trim_start_matches('\u{feff}').trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if let Ok((_, n)) = header(line) {
            declared_n = Some(n);
            continue;
        }
        if let Ok((_, e)) = edge(line) {
            edges.push(e);
        } // anything else is skipped
    }
    GraphModel::from_edges(&edges, declared_n)
}

fn uint(s: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse)(s)
}

/// `p edge <n> <m>` (the edge count is informative only)
fn header(s: &str) -> IResult<&str, usize> {
    preceded(tuple((tag("p"), space1, alpha1, space1)), uint)(s)
}

/// `[e] <u> <v> [<w>]`
fn edge(s: &str) -> IResult<&str, RawEdge> {
    all_consuming(terminated(
        tuple((
            preceded(opt(terminated(tag("e"), space1)), uint),
            preceded(space1, uint),
            opt(preceded(space1, double)),
        )),
        space0,
    ))(s)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(header("p edge 4 3").unwrap().1, 4);
        assert_eq!(header("p col 10 20").unwrap().1, 10);
        assert!(header("e 1 2").is_err());
    }

    #[test]
    fn test_edge_line() {
        assert_eq!(edge("e 1 2").unwrap().1, (1, 2, None));
        assert_eq!(edge("1 2").unwrap().1, (1, 2, None));
        assert_eq!(edge("e 1 2 3.5").unwrap().1, (1, 2, Some(3.5)));
        assert_eq!(edge("7 9 2").unwrap().1, (7, 9, Some(2.0)));
        assert!(edge("e 1").is_err());
        assert!(edge("one two").is_err());
    }

    #[test]
    fn test_read_dimacs_instance() {
        let inst = read_from_str(
            "c 2x2 grid\np edge 4 4\ne 1 2\ne 1 3\ne 2 4\ne 3 4\n"
        ).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1, 2]);
        // 1-based labels survive in the reverse map
        assert_eq!(inst.label(0), 1);
    }

    #[test]
    fn test_read_weighted_instance() {
        let inst = read_from_str(
            "0 1 1.0\n1 2 2.0\n2 3 3.0\n3 0 4.0\n0 2 5.0\n"
        ).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.weight(0, 2), 5.0);
        assert_eq!(inst.weight(2, 0), 5.0);
    }

    #[test]
    fn test_skips_garbage_lines() {
        let inst = read_from_str(
            "c comment\n\nnot an edge at all\ne 1 2\n"
        ).unwrap();
        assert_eq!(inst.nb_vertices(), 2);
        assert_eq!(inst.nb_edges(), 1);
    }

    #[test]
    fn test_empty_file_is_invalid() {
        assert!(read_from_str("c nothing here\n").is_err());
    }
}
