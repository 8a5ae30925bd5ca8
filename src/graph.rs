use std::collections::{BTreeMap, BTreeSet, HashMap};

use bit_set::BitSet;

use crate::error::ColorMstError;

/** Vertex Id (dense internal identifier in 0..n) */
pub type VertexId = usize;

/** raw edge as found in an input file: two arbitrary non-negative labels
and an optional weight. */
pub type RawEdge = (usize, usize, Option<f64>);

/** models a graph instance shared by every algorithm.
Built once from externally-supplied edge data, read-only afterwards. */
#[derive(Debug)]
pub struct GraphModel {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph (i<j, sorted by i then j)
    edges: Vec<(VertexId, VertexId)>,
    /// adj_list[i]: sorted list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
    /// weights[(i,j)] with i<j; pairs absent from the map weigh 1.0
    weights: HashMap<(VertexId, VertexId), f64>,
    /// labels[i]: original label of internal vertex i
    labels: Vec<usize>,
}

impl GraphModel {
    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex u (sorted by increasing id)
    pub fn neighbors(&self, u: VertexId) -> &[VertexId] { &self.adj_list[u] }

    /// degree of vertex u
    pub fn degree(&self, u: VertexId) -> usize { self.adj_list[u].len() }

    /// edge list (i<j, enumeration order fixed at construction)
    pub fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    /// returns if u and v are adjacent, O(1) through the adjacency matrix
    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    /// weight of the edge {u,v}; 1.0 when no weight was declared
    pub fn weight(&self, u: VertexId, v: VertexId) -> f64 {
        let key = if u < v { (u, v) } else { (v, u) };
        *self.weights.get(&key).unwrap_or(&1.0)
    }

    /// original label of internal vertex u
    pub fn label(&self, u: VertexId) -> usize { self.labels[u] }

    /** builds a graph from raw edges with arbitrary non-negative labels.

    Self-loops are dropped, parallel edges are merged (the last declared
    weight wins), labels are remapped to a dense 0..n range sorted by
    original label. `declared_n` (an optional header vertex count) pads
    the vertex set with isolated vertices, using a 0-based range when the
    smallest seen label is 0 and a 1-based range otherwise.

    Returns `InvalidGraph` when no usable edge remains. */
    pub fn from_edges(raw: &[RawEdge], declared_n: Option<usize>) -> Result<Self, ColorMstError> {
        let mut raw_weights: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        let mut vertices: BTreeSet<usize> = BTreeSet::new();
        for &(u, v, w) in raw {
            if u == v { continue; } // self-loop
            let key = if u < v { (u, v) } else { (v, u) };
            if let Some(weight) = w {
                raw_weights.insert(key, weight);
            } else {
                raw_weights.entry(key).or_insert(1.0);
            }
            vertices.insert(u);
            vertices.insert(v);
        }
        if raw_weights.is_empty() {
            return Err(ColorMstError::InvalidGraph("no valid edge found".to_string()));
        }
        if let Some(header_n) = declared_n {
            // pad with the header range so isolated vertices still appear
            let base = if vertices.iter().next() == Some(&0) { 0 } else { 1 };
            vertices.extend(base..base + header_n);
        }
        let labels: Vec<usize> = vertices.into_iter().collect();
        let index_of: HashMap<usize, VertexId> = labels.iter().enumerate()
            .map(|(i, l)| (*l, i)).collect();
        let n = labels.len();
        let mut adj_list = vec![Vec::new(); n];
        let mut weights = HashMap::new();
        for ((u, v), w) in raw_weights {
            let (i, j) = (index_of[&u], index_of[&v]);
            adj_list[i].push(j);
            adj_list[j].push(i);
            let key = if i < j { (i, j) } else { (j, i) };
            weights.insert(key, w);
        }
        for l in adj_list.iter_mut() { l.sort_unstable(); }
        Ok(Self::build(adj_list, weights, labels))
    }

    /** constructor using an already-dense adjacency list (mostly for tests);
    every pair weighs the default 1.0. */
    pub fn new(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        let labels = (0..n).collect();
        Self::build(adj_list, HashMap::new(), labels)
    }

    fn build(
        adj_list: Vec<Vec<VertexId>>,
        weights: HashMap<(VertexId, VertexId), f64>,
        labels: Vec<usize>,
    ) -> Self {
        let n = adj_list.len();
        // m = (∑ d(v)) / 2
        let m = adj_list.iter().map(|l| l.len()).sum::<usize>() / 2;
        let edges = Self::build_edges(&adj_list);
        let mut adj_matrix = vec![BitSet::default(); n];
        for (a, row) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                row.insert(*b);
            }
        }
        Self { n, m, edges, adj_list, adj_matrix, weights, labels }
    }

    /// builds the edge list
    fn build_edges(adj_list: &[Vec<VertexId>]) -> Vec<(VertexId, VertexId)> {
        let mut res = Vec::new();
        for (i, l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i, *j));
                }
            }
        }
        res
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees: Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
        if let (Some(dmin), Some(dmax)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", dmin);
            println!("\t{} \t max degree", dmax);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_remaps_labels() {
        // labels 10, 20, 30 become 0, 1, 2 (sorted by original label)
        let inst = GraphModel::from_edges(
            &[(20, 10, None), (20, 30, None)], None
        ).unwrap();
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.label(0), 10);
        assert_eq!(inst.label(2), 30);
        assert_eq!(inst.neighbors(1), &[0, 2]);
        assert!(inst.are_adjacent(0, 1));
        assert!(!inst.are_adjacent(0, 2));
    }

    #[test]
    fn test_from_edges_drops_self_loops_and_duplicates() {
        let inst = GraphModel::from_edges(
            &[(0, 0, None), (0, 1, Some(2.0)), (1, 0, Some(5.0))], None
        ).unwrap();
        assert_eq!(inst.nb_vertices(), 2);
        assert_eq!(inst.nb_edges(), 1);
        // the last declared weight wins
        assert_eq!(inst.weight(0, 1), 5.0);
        assert_eq!(inst.weight(1, 0), 5.0);
    }

    #[test]
    fn test_from_edges_empty_is_an_error() {
        assert!(GraphModel::from_edges(&[], None).is_err());
        // a single self-loop leaves no usable edge
        assert!(GraphModel::from_edges(&[(3, 3, None)], None).is_err());
    }

    #[test]
    fn test_declared_n_pads_isolated_vertices() {
        // 1-based labels with a header announcing 4 vertices
        let inst = GraphModel::from_edges(&[(1, 2, None)], Some(4)).unwrap();
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.degree(3), 0);
        assert_eq!(inst.label(3), 4);
    }

    #[test]
    fn test_default_weight() {
        let inst = GraphModel::new(vec![vec![1], vec![0]]);
        assert_eq!(inst.weight(0, 1), 1.0);
    }
}
