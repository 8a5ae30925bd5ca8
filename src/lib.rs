//! Graph coloring & minimum spanning tree algorithm comparison

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


/// error taxonomy shared by the whole crate
pub mod error;

/// immutable graph model (adjacency + edge weights)
pub mod graph;

/// coloring representation and checker
pub mod color;

/// read DIMACS-like graph files (optionally weighted)
pub mod dimacs;

/// coloring algorithms (greedy, Welsh-Powell, DSATUR, bounded exact)
pub mod search;

/// minimum spanning tree algorithms (Prim, Kruskal)
pub mod mst;

/// helper and utility methods for executables
pub mod util;
