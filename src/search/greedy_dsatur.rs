use std::cmp::Ordering;

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::color::{ColoringError, VertexId};
use crate::graph::Graph;
use crate::state::ColoringState;

/** ordering key of the uncolored pool: saturation first, degree second,
lowest vertex index last (so that ties are broken the same way on every run) */
#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    vertex: VertexId,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR coloring over the given state.
    1. choose an uncolored vertex that sees the most colors (break ties by the
       largest degree, then by the lowest index)
    2. give it the first color available
    3. mark all its uncolored neighbors as seeing this color
    4. repeat until every vertex is colored

The uncolored pool is a priority queue updated incrementally as neighbors get
colored, which keeps the selection order identical to re-sorting the pool at
every step. */
pub fn greedy_dsatur(graph: &Graph, state: &mut ColoringState) -> Result<(), ColoringError> {
    let n: usize = graph.nb_vertices();
    let mut remaining_vertices: PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in 0..n {
        remaining_vertices.push(i, DSatInfo { dsat: 0, degree: graph.degree(i), vertex: i });
    }
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n]; // adj_colors[v] -> colors v sees
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        let color = state.first_usable_color(current_vertex);
        state.assign(current_vertex, color)?;
        // update saturation degree information of the uncolored neighbors
        for conflict_vertex in graph.neighbors(current_vertex).iter()
            .filter(|conflict_vertex| state.color_of(**conflict_vertex).is_none()) {
            if !adj_colors[*conflict_vertex].contains(color) {
                adj_colors[*conflict_vertex].insert(color);
                remaining_vertices.change_priority_by(conflict_vertex, |p| { p.dsat += 1; });
            }
        }
    }
    Ok(())
}
