use std::time::Instant;

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::ColoringError;
use crate::graph::Graph;
use crate::state::ColoringState;

use super::greedy_dsatur::greedy_dsatur;
use super::greedy_random::greedy_random;

/** search knobs. All of these are explicit configuration, never inferred
magic numbers. */
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// below this vertex count, use the randomized restart search;
    /// at or above it, a single deterministic DSATUR run
    pub small_graph_vertex_threshold: usize,
    /// number of randomized greedy trials in the restart search
    pub trial_count: usize,
    /// base seed for reproducible runs (drawn from the thread RNG if absent)
    pub random_seed: Option<u64>,
    /// optional wall-clock budget (seconds) for the restart loop;
    /// the best coloring found so far is returned when it runs out
    pub time_limit: Option<f32>,
    /// if set, a zero-vertex instance is an error instead of a
    /// trivial zero-color result
    pub forbid_empty_graph: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            small_graph_vertex_threshold: 100,
            trial_count: 1000,
            random_seed: None,
            time_limit: None,
            forbid_empty_graph: false,
        }
    }
}

/** runs the randomized greedy many times and keeps the coloring with the
fewest colors; ties keep the first found. Each trial owns a fresh state and
an independent generator seeded with `base_seed + trial`, so a fixed seed
reproduces the whole search. A trial hitting an internal-invariant error is
logged and excluded from the comparison; it never aborts the search. */
pub fn restart_search<'a>(
    graph: &'a Graph,
    config: &SearchConfig,
) -> Result<ColoringState<'a>, ColoringError> {
    let base_seed: u64 = config.random_seed.unwrap_or_else(|| rand::thread_rng().gen());
    let t_start = Instant::now();
    let mut best: Option<ColoringState> = None;
    for trial in 0..config.trial_count {
        if trial > 0 { // always complete at least one trial
            if let Some(limit) = config.time_limit {
                if t_start.elapsed().as_secs_f32() > limit {
                    info!("time budget exhausted after {} trials", trial);
                    break;
                }
            }
        }
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));
        let mut state = ColoringState::initialize(graph);
        if let Err(e) = greedy_random(graph, &mut state, &mut rng) {
            error!("trial {} aborted on internal error: {}", trial, e);
            continue;
        }
        let improved = match &best {
            None => true,
            Some(b) => state.nb_colors() < b.nb_colors(),
        };
        if improved {
            debug!("trial {}: improved to {} colors", trial, state.nb_colors());
            best = Some(state);
        }
    }
    match best {
        Some(state) => {
            info!("restart search kept a {}-color solution", state.nb_colors());
            Ok(state)
        }
        None => {
            // zero-trial budget (or every trial aborted): fall back to one
            // deterministic run so the caller still gets a valid coloring
            let mut state = ColoringState::initialize(graph);
            greedy_dsatur(graph, &mut state)?;
            Ok(state)
        }
    }
}

/** size-based dispatch: restart search below the vertex threshold, single
deterministic DSATUR run at or above it. */
pub fn solve<'a>(
    graph: &'a Graph,
    config: &SearchConfig,
) -> Result<ColoringState<'a>, ColoringError> {
    let n = graph.nb_vertices();
    if n == 0 {
        if config.forbid_empty_graph {
            return Err(ColoringError::EmptyGraph);
        }
        return Ok(ColoringState::initialize(graph));
    }
    if n < config.small_graph_vertex_threshold {
        restart_search(graph, config)
    } else {
        info!(
            "{} vertices (>= threshold {}): single DSATUR run",
            n, config.small_graph_vertex_threshold
        );
        let mut state = ColoringState::initialize(graph);
        greedy_dsatur(graph, &mut state)?;
        Ok(state)
    }
}
