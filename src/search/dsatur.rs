use std::cmp::Ordering;

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::color::Coloring;
use crate::graph::{GraphModel, VertexId};

/// selection key of an uncolored vertex: maximum saturation first, ties
/// broken by the static degree, then by the smallest vertex id
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

/** DSATUR coloring.
    1. choose the uncolored vertex that sees the most colors (break ties by the largest degree)
    2. assign it the first color available
    3. mark all its uncolored neighbors as seeing this color
    4. repeat until every vertex is colored

The candidate ranking is re-evaluated after every single assignment (live
priority queue), never precomputed: the first pop is the maximum-degree
vertex (everyone saturates to 0), colored 0. */
pub fn dsatur(inst: &GraphModel) -> Coloring {
    let n = inst.nb_vertices();
    let mut remaining_vertices: PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for v in 0..n {
        remaining_vertices.push(v, DSatInfo { dsat: 0, degree: inst.degree(v), vertex: v });
    }
    let mut colors: Coloring = vec![None; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n]; // adj_colors[v] -> colors v sees
    while let Some((current_vertex, _)) = remaining_vertices.pop() {
        // assign it a color
        let mut color = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        // update saturation degree information
        for neighbor in inst.neighbors(current_vertex).iter()
            .filter(|neighbor| colors[**neighbor].is_none()) {
            if !adj_colors[*neighbor].contains(color) {
                adj_colors[*neighbor].insert(color);
                remaining_vertices.change_priority_by(neighbor, |p| { p.dsat += 1; });
            }
        }
    }
    colors
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{color_count, is_valid};

    #[test]
    fn test_triangle() {
        let inst = GraphModel::new(vec![vec![1, 2], vec![0, 2], vec![0, 1]]);
        let colors = dsatur(&inst);
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 3);
    }

    #[test]
    fn test_path() {
        let inst = GraphModel::new(vec![vec![1], vec![0, 2], vec![1, 3], vec![2]]);
        let colors = dsatur(&inst);
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 2);
    }

    #[test]
    fn test_bipartite_crown() {
        // DSATUR is exact on bipartite graphs; the sequential greedy can
        // spend more than 2 colors here
        let inst = GraphModel::new(vec![
            vec![5, 7, 9], vec![4, 6, 8], vec![5, 7, 9], vec![4, 6, 8],
            vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2], vec![1, 3], vec![0, 2],
        ]);
        let colors = dsatur(&inst);
        assert!(is_valid(&inst, &colors));
        assert_eq!(color_count(&colors), 2);
    }

    #[test]
    fn test_first_vertex_is_max_degree() {
        let inst = GraphModel::new(vec![
            vec![2], vec![2], vec![0, 1, 3], vec![2],
        ]);
        let colors = dsatur(&inst);
        assert!(is_valid(&inst, &colors));
        assert_eq!(colors[2], Some(0));
    }

    #[test]
    fn test_deterministic() {
        let inst = GraphModel::new(vec![
            vec![1, 2, 4], vec![0, 2], vec![0, 1, 3], vec![2, 4], vec![0, 3],
        ]);
        assert_eq!(dsatur(&inst), dsatur(&inst));
    }
}
