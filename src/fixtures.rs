//! Fixture set configuration and file generation
//!
//! A [`FixtureSpec`] names one output file and the same-shape forest that
//! goes into it, decoupling parameter choice from execution. The
//! [`standard_fixtures`] set reproduces the three canonical fixture files
//! this crate exists to generate.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::forest::{assemble, ForestMatrix};
use crate::matrix::write_matrix_file;
use crate::shapes::ShapeKind;
use crate::Result;

/// One fixture file: a same-shape forest and the file it is written to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureSpec {
    /// Output file name, relative to the chosen output directory
    pub file_name: String,
    /// Shape used for every component
    pub shape: ShapeKind,
    /// Size parameter per component, in output order
    pub sizes: Vec<usize>,
}

impl FixtureSpec {
    /// Create a spec
    pub fn new<S: Into<String>>(file_name: S, shape: ShapeKind, sizes: Vec<usize>) -> Self {
        FixtureSpec {
            file_name: file_name.into(),
            shape,
            sizes,
        }
    }

    /// Assemble the forest this spec describes
    pub fn build(&self) -> ForestMatrix {
        assemble(&self.shape, &self.sizes)
    }

    /// Assemble the forest and write it under the given directory
    ///
    /// Returns the path of the written file. I/O failures surface directly.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        write_matrix_file(&path, self.build().matrix())?;
        Ok(path)
    }
}

/// Write a whole fixture set under the given directory
pub fn write_fixtures<P: AsRef<Path>>(specs: &[FixtureSpec], dir: P) -> Result<Vec<PathBuf>> {
    specs.iter().map(|spec| spec.write_to(dir.as_ref())).collect()
}

/// The three canonical fixture files
///
/// 1. `Forest.txt` — three binary trees of depths 5, 8 and 9;
/// 2. `LinearForest.txt` — three chains of 50, 40 and 20 nodes;
/// 3. `Test.txt` — a single chain of 1000 nodes.
pub fn standard_fixtures() -> Vec<FixtureSpec> {
    vec![
        FixtureSpec::new("Forest.txt", ShapeKind::BinaryTree, vec![5, 8, 9]),
        FixtureSpec::new("LinearForest.txt", ShapeKind::LinearChain, vec![50, 40, 20]),
        FixtureSpec::new("Test.txt", ShapeKind::LinearChain, vec![1000]),
    ]
}

/// Save a fixture set to a JSON file
pub fn save_specs<P: AsRef<Path>>(specs: &[FixtureSpec], path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(specs)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load a fixture set from a JSON file
pub fn load_specs<P: AsRef<Path>>(path: P) -> Result<Vec<FixtureSpec>> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    let specs = serde_json::from_str(&contents)?;
    Ok(specs)
}
