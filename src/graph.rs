use std::collections::HashMap;

use bit_set::BitSet;

use crate::color::{ColoringError, VertexId};

/** models a Graph Coloring instance.

Vertex identities from the input are remapped to a dense `0..n` index range;
all internal structures (adjacency lists, adjacency matrix, edge list) speak
internal indices. The structure is immutable once built. */
#[derive(Debug)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// vertex_ids[i]: original identity of internal vertex i (sorted)
    vertex_ids: Vec<VertexId>,
    /// maps an original identity to its internal index
    index_of: HashMap<VertexId, usize>,
    /// edges of the graph (internal indices, each edge once with u < v)
    edges: Vec<(usize, usize)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<usize>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Graph {
    /** builds a graph from a vertex identity set and an edge list.

    Identities are deduplicated and sorted before being mapped to dense
    indices. Re-adding an existing edge is a no-op; self-loops are skipped.
    Fails with `InvalidEdge` if an edge endpoint is not in `vertices`. */
    pub fn build(
        vertices: &[VertexId],
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, ColoringError> {
        let mut vertex_ids = vertices.to_vec();
        vertex_ids.sort_unstable();
        vertex_ids.dedup();
        let n = vertex_ids.len();
        let index_of: HashMap<VertexId, usize> = vertex_ids.iter()
            .enumerate().map(|(i, id)| (*id, i)).collect();
        let mut adj_list = vec![Vec::new(); n];
        let mut adj_matrix = vec![BitSet::default(); n];
        let mut m = 0;
        for (a, b) in edges {
            let u = *index_of.get(a).ok_or(ColoringError::InvalidEdge(*a, *b))?;
            let v = *index_of.get(b).ok_or(ColoringError::InvalidEdge(*a, *b))?;
            if u == v {
                log::debug!("ignoring self-loop on vertex {}", a);
                continue;
            }
            if adj_matrix[u].contains(v) { continue; } // duplicate edge
            adj_matrix[u].insert(v);
            adj_matrix[v].insert(u);
            adj_list[u].push(v);
            adj_list[v].push(u);
            m += 1;
        }
        let internal_edges = Self::build_edges(&adj_list);
        Ok(Self { n, m, vertex_ids, index_of, edges: internal_edges, adj_list, adj_matrix })
    }

    /// builds the edge list
    fn build_edges(adj_list: &[Vec<usize>]) -> Vec<(usize, usize)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i, *j));
                }
            }
        }
        res
    }

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to internal vertex i
    pub fn neighbors(&self, i: usize) -> &[usize] { &self.adj_list[i] }

    /// degree of internal vertex i
    pub fn degree(&self, i: usize) -> usize { self.adj_list[i].len() }

    /// edge list (internal indices, each edge once)
    pub fn edges(&self) -> &[(usize, usize)] { &self.edges }

    /// original identities, ordered by internal index
    pub fn vertex_ids(&self) -> &[VertexId] { &self.vertex_ids }

    /// internal index of an original identity (None if unknown)
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    /// returns true if u and v are adjacent (O(1) through the matrix)
    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.adj_matrix[u].contains(v)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        if self.n > 0 {
            let degrees: Vec<usize> = (0..self.n).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}
