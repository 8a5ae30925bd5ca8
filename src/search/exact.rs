use bit_set::BitSet;

use crate::color::Coloring;
use crate::error::ColorMstError;
use crate::graph::{GraphModel, VertexId};

/// default vertex-count limit of [`exact`]
pub const DEFAULT_LIMIT: usize = 12;

/** optimal coloring by iterative deepening: for k = 1, 2, 3, ... try a
depth-first backtracking search over k colors; the first k admitting a
complete proper assignment is the chromatic number.

A graph with more than `limit` vertices is rejected with `ResourceLimit`
before any search work begins (hard precondition against combinatorial
blow-up, not a soft warning). If every k up to n were to fail (cannot
happen on a well-formed graph, as n distinct colors are always proper),
the all-distinct coloring is returned as a safety net. */
pub fn exact(inst: &GraphModel, limit: usize) -> Result<Coloring, ColorMstError> {
    let n = inst.nb_vertices();
    if n > limit {
        return Err(ColorMstError::ResourceLimit { n, limit });
    }
    let mut colors: Coloring = vec![None; n];
    for k in 1..=n {
        if try_color(inst, &mut colors, 0, k) {
            return Ok(colors);
        }
        colors.iter_mut().for_each(|c| *c = None);
    }
    Ok((0..n).map(Some).collect())
}

/** tries to extend a partial coloring of vertices 0..v to a complete one
using colors 0..k, undoing each assignment on a dead end. */
fn try_color(inst: &GraphModel, colors: &mut Coloring, v: VertexId, k: usize) -> bool {
    if v == inst.nb_vertices() {
        return true;
    }
    let mut forbidden: BitSet = BitSet::default();
    for w in inst.neighbors(v) {
        if let Some(c) = colors[*w] {
            forbidden.insert(c);
        }
    }
    for c in 0..k {
        if forbidden.contains(c) { continue; }
        colors[v] = Some(c);
        if try_color(inst, colors, v + 1, k) {
            return true;
        }
        colors[v] = None;
    }
    false
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{color_count, is_valid};
    use crate::search::{dsatur::dsatur, greedy::greedy, welsh_powell::welsh_powell};

    #[test]
    fn test_triangle_needs_three_colors() {
        let inst = GraphModel::new(vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        let colors = exact(&inst, DEFAULT_LIMIT).unwrap();
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 3);
    }

    #[test]
    fn test_path_needs_two_colors() {
        let inst = GraphModel::new(vec![vec![1], vec![0, 2], vec![1, 3], vec![2]]);
        let colors = exact(&inst, DEFAULT_LIMIT).unwrap();
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 2);
        assert_eq!(colors, vec![Some(0), Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn test_complete_graph_on_five() {
        let inst = GraphModel::new(vec![
            vec![1, 2, 3, 4], vec![0, 2, 3, 4], vec![0, 1, 3, 4],
            vec![0, 1, 2, 4], vec![0, 1, 2, 3],
        ]);
        let colors = exact(&inst, DEFAULT_LIMIT).unwrap();
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 5);
    }

    #[test]
    fn test_limit_is_a_hard_precondition() {
        // 13-vertex cycle with the default limit of 12
        let n = 13;
        let adj: Vec<Vec<usize>> = (0..n)
            .map(|v| vec![(v + n - 1) % n, (v + 1) % n])
            .collect();
        let inst = GraphModel::new(adj);
        assert_eq!(
            exact(&inst, DEFAULT_LIMIT),
            Err(ColorMstError::ResourceLimit { n: 13, limit: 12 })
        );
        // raising the limit unblocks the search (odd cycle: 3 colors)
        let colors = exact(&inst, 13).unwrap();
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 3);
    }

    #[test]
    fn test_never_worse_than_the_heuristics() {
        let inst = GraphModel::new(vec![
            vec![1, 3, 4], vec![0, 2, 4], vec![1, 3], vec![0, 2, 4], vec![0, 1, 3],
        ]);
        let best = color_count(&exact(&inst, DEFAULT_LIMIT).unwrap());
        assert!(best <= color_count(&greedy(&inst)));
        assert!(best <= color_count(&welsh_powell(&inst)));
        assert!(best <= color_count(&dsatur(&inst)));
    }
}
