use crate::graph::GraphModel;

/** coloring of a graph: colors[v] is the color assigned to vertex v,
`None` meaning "not colored yet". Colors are labeled 0..k-1 contiguously
(no algorithm ever skips a color label). */
pub type Coloring = Vec<Option<usize>>;

/** returns true if no edge connects two vertices sharing a real color.
An uncolored vertex conflicts with nothing, so a partial assignment is
only rejected where both endpoints carry the same color. */
pub fn is_valid(inst: &GraphModel, colors: &Coloring) -> bool {
    inst.edges().iter().all(|(u, v)| {
        match (colors[*u], colors[*v]) {
            (Some(cu), Some(cv)) => cu != cv,
            _ => true,
        }
    })
}

/** number of colors of an assignment, defined as max used color + 1
(a gap in the used labels still counts towards the total). */
pub fn color_count(colors: &Coloring) -> usize {
    colors.iter().flatten().max().map_or(0, |c| c + 1)
}
