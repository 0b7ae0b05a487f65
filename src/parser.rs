use std::fs;

use nom::IResult;
use nom::character::complete::{digit1, multispace0, space1};
use nom::combinator::map_res;

use crate::color::{ColoringError, VertexId};

/** parsed instance: the declared vertex set and the edge list */
pub type ParsedInstance = (Vec<VertexId>, Vec<(VertexId, VertexId)>);

/// reads two numbers separated by spaces (leading whitespace allowed)
fn read_two_integers(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = multispace0(s)?;
    let (s, a) = map_res(digit1, str::parse::<usize>)(s)?;
    let (s, _) = space1(s)?;
    let (s, b) = map_res(digit1, str::parse::<usize>)(s)?;
    Ok((s, (a, b)))
}

/** parses the line-based instance format:
a `"<nb_vertices> <nb_edges>"` header, followed by one `"<i> <j>"` line per
edge. Vertices are the dense range `0..nb_vertices` (the header declares them,
so isolated vertices are kept even if no edge mentions them). */
pub fn parse_instance(input: &str) -> Result<ParsedInstance, ColoringError> {
    let (mut rest, (n, m)) = read_two_integers(input)
        .map_err(|e| ColoringError::MalformedInput(e.to_string()))?;
    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let (tmp, (a, b)) = read_two_integers(rest)
            .map_err(|e| ColoringError::MalformedInput(e.to_string()))?;
        rest = tmp;
        edges.push((a, b));
    }
    Ok(((0..n).collect(), edges))
}

/// reads an instance from a file
pub fn read_from_file(filename: &str) -> Result<ParsedInstance, ColoringError> {
    let content = fs::read_to_string(filename)
        .map_err(|e| ColoringError::MalformedInput(format!("{}: {}", filename, e)))?;
    parse_instance(content.replace('\r', "").as_str())
}
