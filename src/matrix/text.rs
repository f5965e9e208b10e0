//! Plain-text matrix serialization
//!
//! Layout: one matrix row per line, decimal entries separated by single
//! spaces, every row newline-terminated, no header or trailing metadata.
//! Byte-compatible with `numpy.savetxt(..., fmt="%d", delimiter=" ")`, which
//! is what downstream graph tooling expects to load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ndarray::Array2;

use super::AdjacencyMatrix;
use crate::{FixtureError, Result};

/// Write a matrix in the plain-text fixture format
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &AdjacencyMatrix) -> Result<()> {
    for row in matrix.as_array().rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Write a matrix to a file, creating or truncating it
pub fn write_matrix_file<P: AsRef<Path>>(path: P, matrix: &AdjacencyMatrix) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_matrix(&mut writer, matrix)?;
    writer.flush()?;
    Ok(())
}

/// Read a matrix in the plain-text fixture format
///
/// Rejects non-integer entries, ragged rows, and inputs whose row count does
/// not match the row width (the format only admits square matrices). Errors
/// carry the 1-based line number of the offending line.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<AdjacencyMatrix> {
    let mut values = Vec::new();
    let mut width = None;
    let mut height = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let row: Vec<&str> = line.split_whitespace().collect();
        if row.is_empty() {
            continue;
        }

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(FixtureError::ParseError {
                line: index + 1,
                message: format!("expected {} entries, found {}", expected, row.len()),
            });
        }

        for token in row {
            let value = token.parse::<u8>().map_err(|_| FixtureError::ParseError {
                line: index + 1,
                message: format!("invalid entry '{}'", token),
            })?;
            values.push(value);
        }
        height += 1;
    }

    let width = width.unwrap_or(0);
    if height != width {
        return Err(FixtureError::ParseError {
            line: height,
            message: format!("matrix is {}x{}, expected square", height, width),
        });
    }

    let entries = Array2::from_shape_vec((height, width), values).map_err(|e| {
        FixtureError::ParseError {
            line: height,
            message: e.to_string(),
        }
    })?;
    Ok(AdjacencyMatrix::from_array(entries))
}

/// Read a matrix from a file
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyMatrix> {
    read_matrix(BufReader::new(File::open(path)?))
}
