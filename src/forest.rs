//! Block-diagonal assembly of same-shape forests

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::matrix::AdjacencyMatrix;
use crate::shapes::ShapeGenerator;

/// An assembled forest matrix together with its component layout
///
/// The matrix is block-diagonal: each component occupies one square block on
/// the diagonal and no entry connects nodes from different components. The
/// recorded offsets make the layout queryable without re-deriving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestMatrix {
    matrix: AdjacencyMatrix,
    offsets: Vec<usize>,
    sizes: Vec<usize>,
}

impl ForestMatrix {
    /// Borrow the assembled matrix
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Unwrap into the assembled matrix, dropping the layout
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }

    /// Total node count (matrix dimension)
    pub fn total_nodes(&self) -> usize {
        self.matrix.dim()
    }

    /// Number of components, including empty ones
    pub fn component_count(&self) -> usize {
        self.sizes.len()
    }

    /// Node counts per component, in assembly order
    ///
    /// These are node counts, not the size parameters the components were
    /// generated from.
    pub fn component_sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Node index range occupied by component k
    pub fn component_range(&self, k: usize) -> Range<usize> {
        self.offsets[k]..self.offsets[k] + self.sizes[k]
    }
}

/// Assemble a forest from one generator and an ordered list of sizes
///
/// Generates one component per size parameter, then places the component
/// matrices as blocks along the diagonal of a zero matrix whose dimension is
/// the sum of the component dimensions. Component order follows input order;
/// off-diagonal blocks are never written. An empty size list yields the 0×0
/// matrix.
pub fn assemble<G: ShapeGenerator>(generator: &G, sizes: &[usize]) -> ForestMatrix {
    let components: Vec<AdjacencyMatrix> =
        sizes.iter().map(|&size| generator.generate(size)).collect();
    let total: usize = components.iter().map(|m| m.dim()).sum();

    let mut matrix = AdjacencyMatrix::zeros(total);
    let mut offsets = Vec::with_capacity(components.len());
    let mut component_sizes = Vec::with_capacity(components.len());

    let mut offset = 0;
    for component in &components {
        matrix.embed(offset, component);
        offsets.push(offset);
        component_sizes.push(component.dim());
        offset += component.dim();
    }

    ForestMatrix {
        matrix,
        offsets,
        sizes: component_sizes,
    }
}
