use std::cmp::Reverse;

use crate::color::Coloring;
use crate::graph::{GraphModel, VertexId};

use super::first_free_color;

/** Welsh-Powell coloring: same assignment rule as the greedy, but vertices
are visited by decreasing degree (stable sort, so ties keep index order).
Coloring high-degree vertices first tends to need fewer colors. */
pub fn welsh_powell(inst: &GraphModel) -> Coloring {
    let n = inst.nb_vertices();
    let mut order: Vec<VertexId> = (0..n).collect();
    order.sort_by_key(|v| Reverse(inst.degree(*v)));
    let mut colors: Coloring = vec![None; n];
    for v in order {
        colors[v] = Some(first_free_color(inst, &colors, v));
    }
    colors
}
