/** disjoint sets over a dense 0..n id range, as a plain parent arena.
Path compression only (no rank), enough to keep Kruskal near-linear.
Scoped to a single Kruskal invocation. */
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// n singleton sets
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    /// root of the set containing x, flattening the walked path
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// merges the sets of x and y; false if they already were one set
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x] = root_y;
        true
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find() {
        let mut sets = UnionFind::new(5);
        assert_ne!(sets.find(0), sets.find(1));
        assert!(sets.union(0, 1));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.find(0), sets.find(1));
        assert!(sets.union(3, 4));
        assert!(sets.union(0, 4));
        assert_eq!(sets.find(1), sets.find(3));
        // 2 stays apart
        assert_ne!(sets.find(2), sets.find(0));
    }
}
