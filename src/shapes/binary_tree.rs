//! Complete binary tree components

use super::ShapeGenerator;
use crate::matrix::AdjacencyMatrix;

/// Generator for complete binary trees, sized by depth
///
/// A tree of depth d has 2^d − 1 nodes stored in level order: node i is
/// adjacent to its children 2i+1 and 2i+2 where those indices exist. Depth 1
/// is a single isolated node; depth 0 yields the empty matrix. Inputs are
/// not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryTree;

impl BinaryTree {
    /// Number of nodes in a complete binary tree of the given depth
    pub fn node_count(depth: usize) -> usize {
        (1usize << depth) - 1
    }
}

impl ShapeGenerator for BinaryTree {
    fn generate(&self, depth: usize) -> AdjacencyMatrix {
        let total_nodes = Self::node_count(depth);
        let mut matrix = AdjacencyMatrix::zeros(total_nodes);

        for node in 0..total_nodes {
            let left = 2 * node + 1;
            let right = 2 * node + 2;
            if left < total_nodes {
                matrix.connect(node, left);
            }
            if right < total_nodes {
                matrix.connect(node, right);
            }
        }

        matrix
    }
}
