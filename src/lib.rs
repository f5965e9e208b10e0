//! # Forest Fixtures: synthetic adjacency-matrix test data
//!
//! This library constructs adjacency matrices for synthetic graph structures
//! (complete binary trees, linear chains, and forests composed of them) and
//! serializes them to plain-text files for use as test fixtures by external
//! graph tooling.
//!
//! ## Features
//!
//! - **Shape generators**: complete binary trees and linear chains as
//!   symmetric 0/1 adjacency matrices
//! - **Forest assembly**: block-diagonal composition of same-shape components
//! - **Text serialization**: the space-delimited row-per-line fixture format,
//!   with a strict reader for round-tripping
//! - **Property queries**: edge counts, degrees, components, forest checks

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Adjacency matrices and their text serialization
pub mod matrix;

/// Shape generators for single connected components
pub mod shapes;

/// Block-diagonal assembly of same-shape forests
pub mod forest;

/// Property queries over adjacency matrices
pub mod properties;

/// Fixture set configuration and file generation
pub mod fixtures;

// Re-export commonly used types
pub use matrix::{read_matrix, read_matrix_file, write_matrix, write_matrix_file, AdjacencyMatrix};
pub use shapes::{BinaryTree, LinearChain, ShapeGenerator, ShapeKind};
pub use forest::{assemble, ForestMatrix};
pub use fixtures::{standard_fixtures, write_fixtures, FixtureSpec};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Malformed matrix text
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// 1-based line number of the offending input line
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Fixture configuration (de)serialization error
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        fixtures::{standard_fixtures, write_fixtures, FixtureSpec},
        forest::{assemble, ForestMatrix},
        matrix::{read_matrix_file, write_matrix_file, AdjacencyMatrix},
        shapes::{BinaryTree, LinearChain, ShapeGenerator, ShapeKind},
        FixtureError, Result,
    };
}
