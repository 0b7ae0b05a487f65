use bit_set::BitSet;

use crate::color::{ColorId, ColoringError};
use crate::graph::Graph;

/** per-run coloring state.

Stores the color assignment and the per-color usage counts as index-based
arrays. Neighbor colors are derived from the stored assignment on demand, so
saturation information can never go stale. A fresh state is created for every
trial of the restart search. */
#[derive(Debug)]
pub struct ColoringState<'a> {
    /// the (immutable) instance being colored
    graph: &'a Graph,
    /// colors[v] -> color assigned to vertex v (None while uncolored)
    colors: Vec<Option<ColorId>>,
    /// usage[c] -> number of vertices holding color c
    usage: Vec<usize>,
    /// number of colored vertices
    nb_colored: usize,
}

impl<'a> ColoringState<'a> {
    /// creates a state with every vertex uncolored
    pub fn initialize(graph: &'a Graph) -> Self {
        Self {
            graph,
            colors: vec![None; graph.nb_vertices()],
            usage: Vec::new(),
            nb_colored: 0,
        }
    }

    /// color currently assigned to v (None while uncolored)
    pub fn color_of(&self, v: usize) -> Option<ColorId> { self.colors[v] }

    /// colors currently held by the colored neighbors of v
    pub fn neighbor_colors(&self, v: usize) -> BitSet {
        let mut res = BitSet::default();
        for u in self.graph.neighbors(v) {
            if let Some(c) = self.colors[*u] {
                res.insert(c);
            }
        }
        res
    }

    /// saturation of v: number of distinct colors among its colored neighbors
    pub fn saturation(&self, v: usize) -> usize {
        self.neighbor_colors(v).len()
    }

    /** smallest existing color not held by a neighbor of v, or the next fresh
    color index if every existing color is blocked. Shared color-selection
    rule of both greedy variants. */
    pub fn first_usable_color(&self, v: usize) -> ColorId {
        let blocked = self.neighbor_colors(v);
        (0..self.usage.len())
            .find(|c| !blocked.contains(*c))
            .unwrap_or_else(|| self.usage.len())
    }

    /** assigns a color to v, introducing the color lazily if it is new.

    Fails with `AlreadyColored` if v holds a color, and with
    `ConflictingColor` if a neighbor of v already holds `color`. Both are
    defensive checks on the coloring invariant. */
    pub fn assign(&mut self, v: usize, color: ColorId) -> Result<(), ColoringError> {
        if self.colors[v].is_some() {
            return Err(ColoringError::AlreadyColored(v));
        }
        if self.neighbor_colors(v).contains(color) {
            return Err(ColoringError::ConflictingColor { vertex: v, color });
        }
        if color >= self.usage.len() {
            self.usage.resize(color + 1, 0);
        }
        self.colors[v] = Some(color);
        self.usage[color] += 1;
        self.nb_colored += 1;
        Ok(())
    }

    /// number of distinct colors in use
    pub fn nb_colors(&self) -> usize { self.usage.len() }

    /// per-color usage counts
    pub fn usage(&self) -> &[usize] { &self.usage }

    /// number of colored vertices
    pub fn nb_colored(&self) -> usize { self.nb_colored }

    /// true when every vertex holds a color
    pub fn is_complete(&self) -> bool {
        self.nb_colored == self.graph.nb_vertices()
    }
}
