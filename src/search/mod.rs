//! Coloring algorithms. Each one maps a read-only [`GraphModel`](crate::graph::GraphModel)
//! to a [`Coloring`](crate::color::Coloring) and is deterministic.

use bit_set::BitSet;

use crate::color::Coloring;
use crate::graph::{GraphModel, VertexId};

/// sequential greedy coloring (index order)
pub mod greedy;

/// Welsh-Powell coloring (degree-descending order)
pub mod welsh_powell;

/// DSATUR coloring (dynamic saturation-driven order)
pub mod dsatur;

/// bounded exact coloring (iterative deepening + backtracking)
pub mod exact;

/// smallest color not used by any already-colored neighbor of v
pub(crate) fn first_free_color(inst: &GraphModel, colors: &Coloring, v: VertexId) -> usize {
    let mut forbidden: BitSet = BitSet::default();
    for w in inst.neighbors(v) {
        if let Some(c) = colors[*w] {
            forbidden.insert(c);
        }
    }
    let mut color = 0;
    while forbidden.contains(color) { color += 1; }
    color
}
