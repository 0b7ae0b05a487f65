/// deterministic saturation-ordered greedy (DSATUR)
pub mod greedy_dsatur;

/// randomized-order greedy
pub mod greedy_random;

/// randomized restart search & size-based dispatch
pub mod restart;

pub use restart::SearchConfig;

use crate::color::{ColoringError, VertexId};
use crate::graph::Graph;
use crate::report::ColoringResult;

/**
colors a graph given by a vertex identity set and an edge list.

Builds the graph model, dispatches to the restart search (small graphs) or a
single deterministic DSATUR run (large graphs), and packages the winning
coloring. Fails with `InvalidEdge` on a malformed edge list, and with
`EmptyGraph` if the vertex set is empty while the configuration disallows it
(otherwise an empty graph trivially yields zero colors).
*/
pub fn color_graph(
    vertices: &[VertexId],
    edges: &[(VertexId, VertexId)],
    config: &SearchConfig,
) -> Result<ColoringResult, ColoringError> {
    let graph = Graph::build(vertices, edges)?;
    let state = restart::solve(&graph, config)?;
    Ok(ColoringResult::from_state(&graph, &state))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{checker, CheckerResult};

    fn seeded(trials: usize) -> SearchConfig {
        SearchConfig { trial_count: trials, random_seed: Some(42), ..SearchConfig::default() }
    }

    #[test]
    fn test_empty_graph() {
        let result = color_graph(&[], &[], &seeded(100)).unwrap();
        assert_eq!(result.nb_colors, 0);
        assert!(result.colors.is_empty());
    }

    #[test]
    fn test_empty_graph_forbidden() {
        let config = SearchConfig { forbid_empty_graph: true, ..seeded(100) };
        assert_eq!(color_graph(&[], &[], &config), Err(ColoringError::EmptyGraph));
    }

    #[test]
    fn test_single_edge() {
        let result = color_graph(&[0, 1], &[(0, 1)], &seeded(100)).unwrap();
        assert_eq!(result.nb_colors, 2);
        assert_ne!(result.color_of(0), result.color_of(1));
    }

    #[test]
    fn test_triangle() {
        let result = color_graph(&[0, 1, 2], &[(0, 1), (1, 2), (0, 2)], &seeded(100)).unwrap();
        assert_eq!(result.nb_colors, 3);
    }

    #[test]
    fn test_complete_graph_k4() {
        let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        let result = color_graph(&[0, 1, 2, 3], &edges, &seeded(100)).unwrap();
        assert_eq!(result.nb_colors, 4);
    }

    #[test]
    fn test_bipartite_path() {
        let result =
            color_graph(&[0, 1, 2, 3], &[(0, 1), (1, 2), (2, 3)], &seeded(1000)).unwrap();
        assert_eq!(result.nb_colors, 2);
    }

    #[test]
    fn test_invalid_edge() {
        assert_eq!(
            color_graph(&[0, 1], &[(0, 7)], &seeded(10)),
            Err(ColoringError::InvalidEdge(0, 7))
        );
    }

    #[test]
    fn test_result_is_feasible() {
        // petersen-like ring with chords
        let edges = [
            (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
            (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
            (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
        ];
        let vertices: Vec<usize> = (0..10).collect();
        let graph = Graph::build(&vertices, &edges).unwrap();
        let result = color_graph(&vertices, &edges, &seeded(200)).unwrap();
        assert!(matches!(checker(&graph, &result), CheckerResult::Ok(_)));
    }

    #[test]
    fn test_determinism_under_fixed_seed() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
        let vertices = [0, 1, 2, 3];
        let a = color_graph(&vertices, &edges, &seeded(50)).unwrap();
        let b = color_graph(&vertices, &edges, &seeded(50)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_graph_uses_deterministic_branch() {
        // cycle on 300 vertices, above the default threshold
        let vertices: Vec<usize> = (0..300).collect();
        let edges: Vec<(usize, usize)> = (0..300).map(|i| (i, (i + 1) % 300)).collect();
        let graph = Graph::build(&vertices, &edges).unwrap();
        let result = color_graph(&vertices, &edges, &SearchConfig::default()).unwrap();
        // even cycle: DSATUR colors it with 2
        assert_eq!(result.nb_colors, 2);
        assert!(matches!(checker(&graph, &result), CheckerResult::Ok(2)));
    }
}
