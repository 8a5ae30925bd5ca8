use ordered_float::OrderedFloat;

use crate::graph::{GraphModel, VertexId};

use super::union_find::UnionFind;
use super::SpanningTree;

/** Kruskal's algorithm.

Scans the edges by increasing weight (stable sort: equal weights keep the
construction enumeration order) and keeps an edge whenever its endpoints
are not yet connected, tracked by a union-find. On a disconnected graph
this yields a minimum spanning forest. */
pub fn kruskal(inst: &GraphModel) -> SpanningTree {
    let mut sorted_edges: Vec<(VertexId, VertexId)> = inst.edges().to_vec();
    sorted_edges.sort_by_key(|(u, v)| OrderedFloat(inst.weight(*u, *v)));
    let mut sets = UnionFind::new(inst.nb_vertices());
    let mut edges = Vec::new();
    let mut total_weight = 0.;
    for (u, v) in sorted_edges {
        if sets.union(u, v) {
            edges.push((u, v));
            total_weight += inst.weight(u, v);
        }
    }
    SpanningTree { edges, total_weight }
}
