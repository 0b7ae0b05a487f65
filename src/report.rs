use std::cmp::Reverse;

use serde::Serialize;

use crate::color::{ColorId, VertexId};
use crate::graph::Graph;
use crate::state::ColoringState;

/** final coloring packaged for the outside world: the number of colors used
and one `(vertex identity, color)` entry per vertex, ordered by identity.

Colors are re-indexed by descending usage when the result is built; this is a
pure relabeling for presentation and cannot introduce conflicts. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoringResult {
    /// number of distinct colors used
    pub nb_colors: usize,
    /// assignment, ordered by original vertex identity
    pub colors: Vec<(VertexId, ColorId)>,
}

impl ColoringResult {
    /** packages a complete coloring state, relabeling colors so that the most
    used color gets index 0 (ties by original color index). */
    pub fn from_state(graph: &Graph, state: &ColoringState) -> Self {
        let usage = state.usage();
        let nb_colors = usage.len();
        let mut by_usage: Vec<ColorId> = (0..nb_colors).collect();
        by_usage.sort_by_key(|c| (Reverse(usage[*c]), *c));
        // remap[old color] -> new color
        let mut remap = vec![0; nb_colors];
        for (new, old) in by_usage.iter().enumerate() {
            remap[*old] = new;
        }
        let colors = graph.vertex_ids().iter().enumerate()
            .map(|(i, id)| (*id, remap[state.color_of(i).unwrap()]))
            .collect();
        Self { nb_colors, colors }
    }

    /// color of a vertex identity (None if unknown)
    pub fn color_of(&self, id: VertexId) -> Option<ColorId> {
        self.colors.iter().find(|(v, _)| *v == id).map(|(_, c)| *c)
    }

    /** renders the result line format: a `"<nb_colors> 0"` header (the 0 is
    the optimality flag, never claimed by a heuristic), then the colors
    space-separated in vertex identity order. */
    pub fn to_output_string(&self) -> String {
        let values: Vec<String> = self.colors.iter().map(|(_, c)| c.to_string()).collect();
        format!("{} {}\n{}", self.nb_colors, 0, values.join(" "))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{checker, CheckerResult};

    /// star: center 0 with three leaves
    fn star() -> Graph {
        Graph::build(&[0, 1, 2, 3], &[(0, 1), (0, 2), (0, 3)]).unwrap()
    }

    #[test]
    fn test_most_used_color_comes_first() {
        let graph = star();
        let mut state = ColoringState::initialize(&graph);
        // color the center first: it takes color 0, the leaves take color 1
        state.assign(0, 0).unwrap();
        for v in 1..4 { state.assign(v, 1).unwrap(); }
        let result = ColoringResult::from_state(&graph, &state);
        assert_eq!(result.nb_colors, 2);
        // after the usage re-indexing the leaf color becomes 0
        assert_eq!(result.color_of(0), Some(1));
        assert_eq!(result.color_of(1), Some(0));
        assert_eq!(result.color_of(3), Some(0));
    }

    #[test]
    fn test_reindexing_preserves_feasibility() {
        let graph = star();
        let mut state = ColoringState::initialize(&graph);
        state.assign(0, 0).unwrap();
        for v in 1..4 { state.assign(v, 1).unwrap(); }
        let result = ColoringResult::from_state(&graph, &state);
        assert_eq!(checker(&graph, &result), CheckerResult::Ok(2));
    }

    #[test]
    fn test_output_string() {
        let graph = Graph::build(&[0, 1], &[(0, 1)]).unwrap();
        let mut state = ColoringState::initialize(&graph);
        state.assign(0, 0).unwrap();
        state.assign(1, 1).unwrap();
        let result = ColoringResult::from_state(&graph, &state);
        assert_eq!(result.to_output_string(), "2 0\n0 1");
    }

    #[test]
    fn test_assignment_ordered_by_identity() {
        let graph = Graph::build(&[42, 7], &[(7, 42)]).unwrap();
        let mut state = ColoringState::initialize(&graph);
        state.assign(0, 0).unwrap(); // identity 7
        state.assign(1, 1).unwrap(); // identity 42
        let result = ColoringResult::from_state(&graph, &state);
        assert_eq!(result.colors[0].0, 7);
        assert_eq!(result.colors[1].0, 42);
    }

    #[test]
    fn test_empty_result() {
        let graph = Graph::build(&[], &[]).unwrap();
        let state = ColoringState::initialize(&graph);
        let result = ColoringResult::from_state(&graph, &state);
        assert_eq!(result.nb_colors, 0);
        assert_eq!(result.to_output_string(), "0 0\n");
    }
}
