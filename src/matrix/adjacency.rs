//! Dense symmetric 0/1 adjacency matrix

use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};

/// Square 0/1 matrix encoding which node pairs share an edge
///
/// Entry (i, j) is 1 iff nodes i and j are adjacent. Edges are written
/// through [`AdjacencyMatrix::connect`], which sets both directions, so
/// matrices built through this type stay symmetric with a zero diagonal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    entries: Array2<u8>,
}

impl AdjacencyMatrix {
    /// Create an n×n zero matrix (n isolated nodes, no edges)
    pub fn zeros(n: usize) -> Self {
        AdjacencyMatrix {
            entries: Array2::zeros((n, n)),
        }
    }

    /// Wrap an existing square array
    pub fn from_array(entries: Array2<u8>) -> Self {
        assert_eq!(entries.nrows(), entries.ncols());
        AdjacencyMatrix { entries }
    }

    /// Number of nodes (matrix dimension)
    pub fn dim(&self) -> usize {
        self.entries.nrows()
    }

    /// Check for the degenerate 0×0 matrix
    pub fn is_empty(&self) -> bool {
        self.dim() == 0
    }

    /// Get entry (i, j)
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.entries[[i, j]]
    }

    /// Connect nodes i and j with an undirected edge
    ///
    /// Sets both (i, j) and (j, i). The nodes must be distinct, or the
    /// zero-diagonal invariant is lost.
    pub fn connect(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        self.entries[[i, j]] = 1;
        self.entries[[j, i]] = 1;
    }

    /// Copy a block matrix into the submatrix starting at (offset, offset)
    ///
    /// Writes the span `[offset, offset + block.dim())` on both axes; the
    /// rest of the matrix is untouched.
    pub fn embed(&mut self, offset: usize, block: &AdjacencyMatrix) {
        let end = offset + block.dim();
        self.entries
            .slice_mut(s![offset..end, offset..end])
            .assign(&block.entries);
    }

    /// Count of nonzero entries (twice the undirected edge count)
    pub fn nonzero_count(&self) -> usize {
        self.entries.iter().filter(|&&v| v != 0).count()
    }

    /// Number of neighbors of a node
    pub fn degree(&self, node: usize) -> usize {
        self.entries.row(node).iter().filter(|&&v| v != 0).count()
    }

    /// Indices of all neighbors of a node, ascending
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.entries
            .row(node)
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Check that entry (i, j) equals entry (j, i) for all pairs
    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (i + 1..n).all(|j| self.entries[[i, j]] == self.entries[[j, i]]))
    }

    /// Check that no node is connected to itself
    pub fn has_zero_diagonal(&self) -> bool {
        self.entries.diag().iter().all(|&v| v == 0)
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<u8> {
        &self.entries
    }

    /// Unwrap into the underlying array
    pub fn into_array(self) -> Array2<u8> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_zeros() {
        let m = AdjacencyMatrix::zeros(3);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.nonzero_count(), 0);
        assert!(m.is_symmetric());
        assert!(m.has_zero_diagonal());
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut m = AdjacencyMatrix::zeros(3);
        m.connect(0, 2);

        assert_eq!(m.get(0, 2), 1);
        assert_eq!(m.get(2, 0), 1);
        assert_eq!(m.get(0, 1), 0);
        assert_eq!(m.nonzero_count(), 2);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_degree_and_neighbors() {
        let mut m = AdjacencyMatrix::zeros(4);
        m.connect(0, 1);
        m.connect(0, 3);

        assert_eq!(m.degree(0), 2);
        assert_eq!(m.degree(2), 0);
        assert_eq!(m.neighbors(0), vec![1, 3]);
        assert_eq!(m.neighbors(1), vec![0]);
    }

    #[test]
    fn test_embed() {
        let block = AdjacencyMatrix::from_array(array![[0, 1], [1, 0]]);
        let mut m = AdjacencyMatrix::zeros(4);
        m.embed(1, &block);

        assert_eq!(m.get(1, 2), 1);
        assert_eq!(m.get(2, 1), 1);
        assert_eq!(m.nonzero_count(), 2);
        // Rows outside the block stay zero
        assert_eq!(m.degree(0), 0);
        assert_eq!(m.degree(3), 0);
    }

    #[test]
    fn test_empty_matrix() {
        let m = AdjacencyMatrix::zeros(0);
        assert!(m.is_empty());
        assert!(m.is_symmetric());
        assert!(m.has_zero_diagonal());
    }
}
