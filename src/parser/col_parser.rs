//! Parser for graphs in DIMACS `.col` syntax.
//! Only `p <format> <n> <m>` and `e <u> <v>` lines
//! carry information, everything else is skipped.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    graph::{Graph, VertexIndex},
    Error,
};

use super::{starts_with_token, Input, ParseResult};

#[derive(Debug, PartialEq, Eq)]
enum GraphLine {
    Header { vertices: usize, edges: usize },
    Edge(VertexIndex, VertexIndex),
    Ignored,
}

/// Parse the problem line `p <format> <n> <m>`.
/// The format (usually `edge` or `col`) is not checked.
fn parse_header(input: Input<'_>) -> ParseResult<'_, (usize, usize)> {
    use nom::{
        bytes::complete::take_till1,
        character::complete::{char, space0, space1, u64},
        combinator::eof,
        error::context,
        sequence::{preceded, tuple},
    };

    let format = take_till1(|c: char| c.is_whitespace());

    let mut header = tuple((
        char('p'),
        context("problem format", preceded(space1, format)),
        context("vertex count", preceded(space1, u64)),
        context("edge count", preceded(space1, u64)),
        space0,
        context("end of problem line", eof),
    ));

    let (rest, (_, _, vertices, edges, _, _)) = header(input)?;
    Ok((rest, (vertices as usize, edges as usize)))
}

/// Parse a single 1-based vertex index and shift it to 0-based.
fn parse_vertex_index(input: Input<'_>) -> ParseResult<'_, VertexIndex> {
    use nom::{
        character::complete::u64,
        combinator::{map, verify},
    };

    map(verify(u64, |index: &u64| *index >= 1), |index| {
        (index - 1) as VertexIndex
    })(input)
}

/// Parse the edge line `e <u> <v>`.
fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexIndex, VertexIndex)> {
    use nom::{
        character::complete::{char, space0, space1},
        combinator::eof,
        error::context,
        sequence::{preceded, tuple},
    };

    let mut edge = tuple((
        char('e'),
        context("edge start", preceded(space1, parse_vertex_index)),
        context("edge end", preceded(space1, parse_vertex_index)),
        space0,
        context("end of edge line", eof),
    ));

    let (rest, (_, start, end, _, _)) = edge(input)?;
    Ok((rest, (start, end)))
}

fn parse_line(input: Input<'_>) -> ParseResult<'_, GraphLine> {
    if starts_with_token(input, "p") {
        let (rest, (vertices, edges)) = parse_header(input)?;
        Ok((rest, GraphLine::Header { vertices, edges }))
    } else if starts_with_token(input, "e") {
        let (rest, (start, end)) = parse_edge(input)?;
        Ok((rest, GraphLine::Edge(start, end)))
    } else {
        Ok(("", GraphLine::Ignored))
    }
}

/// Read a graph in DIMACS syntax line by line.
/// Edge endpoints are not checked against the
/// declared size here, see `Graph::validate`.
pub fn parse_col<B: BufRead>(input: B) -> Result<Graph, Error> {
    let mut graph = Graph::new(0);
    let mut header_seen = false;

    for (line_index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        let (_, parsed) =
            parse_line(trimmed).map_err(|pe| Error::at_line(line_index + 1, trimmed, pe))?;

        match parsed {
            GraphLine::Header { vertices, edges } => {
                if header_seen {
                    log::warn!(
                        "Line {}: another problem line, using n={} m={} from here on",
                        line_index + 1,
                        vertices,
                        edges
                    );
                }
                header_seen = true;
                graph.set_header(vertices, edges);
            }
            GraphLine::Edge(start, end) => graph.add_edge(start, end),
            GraphLine::Ignored => (),
        }
    }

    if !header_seen {
        log::warn!("No problem line found, assuming an empty graph");
    }
    if graph.declared_edges() != graph.number_edges() {
        log::warn!(
            "Problem line declares {} edges, but {} were read",
            graph.declared_edges(),
            graph.number_edges()
        );
    }

    Ok(graph)
}

pub fn parse_graph_file(path: &Path) -> Result<Graph, Error> {
    let file = File::open(path)?;
    parse_col(BufReader::new(file))
}
