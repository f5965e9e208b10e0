//! Property queries over adjacency matrices
//!
//! Consumers of the fixture files use these to check what a matrix encodes:
//! edge counts, degree sequences, connected components, and whether the
//! graph is a forest at all.

use std::collections::VecDeque;

use crate::matrix::AdjacencyMatrix;

/// Number of undirected edges (nonzero entries counted once per pair)
pub fn edge_count(matrix: &AdjacencyMatrix) -> usize {
    matrix.nonzero_count() / 2
}

/// Degree of every node, in node order
pub fn degree_sequence(matrix: &AdjacencyMatrix) -> Vec<usize> {
    (0..matrix.dim()).map(|node| matrix.degree(node)).collect()
}

/// Connected components as sorted node lists, ordered by smallest member
pub fn connected_components(matrix: &AdjacencyMatrix) -> Vec<Vec<usize>> {
    let n = matrix.dim();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }

        // BFS from the lowest unvisited node
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;

        while let Some(node) = queue.pop_front() {
            component.push(node);
            for neighbor in matrix.neighbors(node) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Number of connected components
pub fn component_count(matrix: &AdjacencyMatrix) -> usize {
    connected_components(matrix).len()
}

/// Check whether the graph is a forest (every component is acyclic)
///
/// A connected component with k nodes is a tree iff it has exactly k − 1
/// edges.
pub fn is_forest(matrix: &AdjacencyMatrix) -> bool {
    connected_components(matrix).iter().all(|component| {
        let internal_degrees: usize = component.iter().map(|&node| matrix.degree(node)).sum();
        internal_degrees / 2 == component.len() - 1
    })
}

/// Check the adjacency-matrix invariants: symmetry and a zero diagonal
pub fn is_valid_adjacency(matrix: &AdjacencyMatrix) -> bool {
    matrix.is_symmetric() && matrix.has_zero_diagonal()
}
