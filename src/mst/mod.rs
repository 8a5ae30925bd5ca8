//! Minimum spanning tree algorithms over a weighted [`GraphModel`](crate::graph::GraphModel).
//!
//! On a disconnected graph both algorithms silently return a spanning
//! forest (fewer than n-1 edges) instead of an error; a caller needing a
//! connectivity guarantee must check `edges.len() == n-1` itself.

use crate::graph::VertexId;

/// Prim's algorithm (lazy-deletion binary heap)
pub mod prim;

/// Kruskal's algorithm (sorted edges + union-find)
pub mod kruskal;

/// disjoint-set structure used by Kruskal
pub mod union_find;

/** spanning tree (or forest) selected by an MST algorithm. */
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// selected edges, in selection order
    pub edges: Vec<(VertexId, VertexId)>,
    /// sum of the selected edge weights
    pub total_weight: f64,
}

impl SpanningTree {
    /// true if the result spans all n vertices (n-1 edges selected)
    pub fn spans(&self, n: usize) -> bool {
        n > 0 && self.edges.len() == n - 1
    }
}
