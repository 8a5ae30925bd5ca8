use std::cmp::Reverse;
use std::collections::BinaryHeap;

use bit_set::BitSet;
use ordered_float::OrderedFloat;

use crate::graph::{GraphModel, VertexId};

use super::SpanningTree;

/** Prim's algorithm starting from vertex 0.

Candidate edges sit in a min-heap keyed by (weight, u, v); instead of a
decrease-key operation the heap holds duplicates and a popped edge whose
far endpoint is already visited is simply discarded (lazy deletion).
Stops when the heap runs dry, so on a disconnected graph only the
component of vertex 0 is spanned. */
pub fn prim(inst: &GraphModel) -> SpanningTree {
    let n = inst.nb_vertices();
    let mut visited = BitSet::with_capacity(n);
    let mut edges = Vec::new();
    let mut total_weight = 0.;
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, VertexId, VertexId)>> = BinaryHeap::new();
    visited.insert(0);
    for v in inst.neighbors(0) {
        heap.push(Reverse((OrderedFloat(inst.weight(0, *v)), 0, *v)));
    }
    while visited.len() < n {
        let (weight, u, v) = match heap.pop() {
            None => break,
            Some(Reverse(entry)) => entry,
        };
        if visited.contains(v) { continue; } // stale entry
        visited.insert(v);
        total_weight += weight.into_inner();
        edges.push((u, v));
        for w in inst.neighbors(v) {
            if !visited.contains(*w) {
                heap.push(Reverse((OrderedFloat(inst.weight(v, *w)), v, *w)));
            }
        }
    }
    SpanningTree { edges, total_weight }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphModel;

    #[test]
    fn test_weighted_square() {
        let inst = GraphModel::from_edges(&[
            (0, 1, Some(1.0)), (1, 2, Some(2.0)), (2, 3, Some(3.0)),
            (3, 0, Some(4.0)), (0, 2, Some(5.0)),
        ], None).unwrap();
        let tree = prim(&inst);
        assert!(tree.spans(4));
        assert_eq!(tree.total_weight, 6.0);
        assert_eq!(tree.edges, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_unweighted_defaults_to_one() {
        let inst = GraphModel::new(vec![vec![1], vec![0, 2], vec![1]]);
        let tree = prim(&inst);
        assert!(tree.spans(3));
        assert_eq!(tree.total_weight, 2.0);
    }

    #[test]
    fn test_disconnected_spans_component_of_zero_only() {
        // two separate edges; only 0-1 is reachable from the start vertex
        let inst = GraphModel::from_edges(
            &[(0, 1, None), (2, 3, None)], None
        ).unwrap();
        let tree = prim(&inst);
        assert!(!tree.spans(4));
        assert_eq!(tree.edges, vec![(0, 1)]);
        assert_eq!(tree.total_weight, 1.0);
    }
}
