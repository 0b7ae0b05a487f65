//! Greedy + randomized-restart heuristics for the Graph Coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// base types, error taxonomy and solution checker
pub mod color;

/// read the line-based instance format
pub mod parser;

/// graph model (dense indices, adjacency lists & matrix)
pub mod graph;

/// per-run coloring state (assignments, usage counts, saturation)
pub mod state;

/// greedy algorithms and the restart search
pub mod search;

/// final result packaging & output formatting
pub mod report;
