//! Linear chain (path graph) components

use super::ShapeGenerator;
use crate::matrix::AdjacencyMatrix;

/// Generator for linear chains, sized by node count
///
/// Node i is adjacent to node i+1 for i in [0, n−2]. A single node has no
/// edges; n = 0 yields the empty matrix. Inputs are not validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearChain;

impl ShapeGenerator for LinearChain {
    fn generate(&self, nodes: usize) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::zeros(nodes);

        for i in 1..nodes {
            matrix.connect(i - 1, i);
        }

        matrix
    }
}
