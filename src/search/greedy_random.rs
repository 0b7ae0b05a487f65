use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{ColoringError, VertexId};
use crate::graph::Graph;
use crate::state::ColoringState;

/** implements a greedy coloring over a uniformly-shuffled vertex order.

The permutation is drawn once before the run starts; each vertex then receives
the first color available (same color-selection rule as DSATUR). Cheaper per
step than the saturation ordering, but the visitation order alone gives no
quality guarantee: quality comes from repeating trials in the restart search. */
pub fn greedy_random<R: Rng>(
    graph: &Graph,
    state: &mut ColoringState,
    rng: &mut R,
) -> Result<(), ColoringError> {
    let mut order: Vec<VertexId> = (0..graph.nb_vertices()).collect();
    order.shuffle(rng);
    for v in order {
        let color = state.first_usable_color(v);
        state.assign(v, color)?;
    }
    Ok(())
}
