use thiserror::Error;

use crate::graph::Graph;
use crate::report::ColoringResult;

/** Vertex Id */
pub type VertexId = usize;

/** Color Id (colors are introduced lazily with consecutive indices) */
pub type ColorId = usize;

/** errors raised while building a graph or coloring it.

`InvalidEdge`, `EmptyGraph` and `MalformedInput` are input errors surfaced to
the caller. `AlreadyColored` and `ConflictingColor` are internal-invariant
violations: a correct algorithm never triggers them, and the restart search
only aborts the offending trial when one appears. */
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// an edge references a vertex outside the declared vertex set
    #[error("edge ({0},{1}) references an unknown vertex")]
    InvalidEdge(VertexId, VertexId),
    /// the instance has no vertex and the configuration disallows it
    #[error("empty graph rejected by configuration")]
    EmptyGraph,
    /// the instance text does not follow the expected format
    #[error("malformed instance: {0}")]
    MalformedInput(String),
    /// a vertex was assigned a color twice within the same run
    #[error("vertex {0} is already colored")]
    AlreadyColored(VertexId),
    /// a vertex was assigned a color already held by one of its neighbors
    #[error("color {color} is already used by a neighbor of vertex {vertex}")]
    ConflictingColor {
        /// vertex being colored
        vertex: VertexId,
        /// rejected color
        color: ColorId,
    },
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the coloring is feasible, with its number of colors
    Ok(usize),
    /// some vertex has no color entry
    VertexNotColored(VertexId),
    /// both endpoints of an edge carry the same color
    ConflictingEdge(VertexId, VertexId),
    /// the declared color count does not match the distinct colors used
    WrongColorCount {
        /// color count declared by the result
        declared: usize,
        /// distinct colors actually present in the assignment
        actual: usize,
    },
}

/**
checks a coloring result against the instance it was computed for:
every vertex colored, no monochromatic edge, declared color count consistent.
returns `CheckerResult::Ok(nb_colors)` if the solution is feasible.
*/
pub fn checker(graph: &Graph, result: &ColoringResult) -> CheckerResult {
    let n = graph.nb_vertices();
    // colors_of[i]: color of the vertex with internal index i
    let mut colors_of: Vec<Option<ColorId>> = vec![None; n];
    for (id, c) in &result.colors {
        match graph.index_of(*id) {
            None => return CheckerResult::VertexNotColored(*id),
            Some(i) => colors_of[i] = Some(*c),
        }
    }
    for i in 0..n {
        if colors_of[i].is_none() {
            return CheckerResult::VertexNotColored(graph.vertex_ids()[i]);
        }
    }
    // check conflicts
    for (u, v) in graph.edges() {
        if colors_of[*u] == colors_of[*v] {
            return CheckerResult::ConflictingEdge(
                graph.vertex_ids()[*u],
                graph.vertex_ids()[*v],
            );
        }
    }
    // check the declared number of colors
    let mut distinct: Vec<ColorId> = colors_of.iter().map(|c| c.unwrap()).collect();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() != result.nb_colors {
        return CheckerResult::WrongColorCount {
            declared: result.nb_colors,
            actual: distinct.len(),
        };
    }
    CheckerResult::Ok(result.nb_colors)
}
