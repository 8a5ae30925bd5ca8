use crate::color::Coloring;
use crate::graph::GraphModel;

use super::first_free_color;

/** greedy coloring: visit vertices in index order, give each one the
smallest color unused among its already-colored neighbors. O(n·Δ). */
pub fn greedy(inst: &GraphModel) -> Coloring {
    let n = inst.nb_vertices();
    let mut colors: Coloring = vec![None; n];
    for v in 0..n {
        colors[v] = Some(first_free_color(inst, &colors, v));
    }
    colors
}
