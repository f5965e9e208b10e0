//! Shape generators: one connected component per size parameter

mod binary_tree;
mod linear_chain;

pub use binary_tree::BinaryTree;
pub use linear_chain::LinearChain;

use serde::{Deserialize, Serialize};

use crate::matrix::AdjacencyMatrix;

/// Capability to produce a symmetric adjacency matrix from a size parameter
///
/// The meaning of `size` is shape-specific: node count for chains, depth for
/// binary trees. Generators are pure and infallible; degenerate sizes yield
/// degenerate (possibly 0×0) matrices rather than errors.
pub trait ShapeGenerator {
    /// Generate the adjacency matrix of one component
    fn generate(&self, size: usize) -> AdjacencyMatrix;
}

/// Named shape variants for configuration files
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Complete binary tree, sized by depth
    BinaryTree,
    /// Linear chain, sized by node count
    LinearChain,
}

impl ShapeGenerator for ShapeKind {
    fn generate(&self, size: usize) -> AdjacencyMatrix {
        match self {
            ShapeKind::BinaryTree => BinaryTree.generate(size),
            ShapeKind::LinearChain => LinearChain.generate(size),
        }
    }
}
