use thiserror::Error;

/// Failures surfaced by the checked accessors and shape-validated constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Element access on a buffer that currently owns no storage.
    #[error("no storage allocated for element access at ({row}, {col})")]
    EmptyBuffer { row: usize, col: usize },

    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("buffer of {len} elements cannot be shaped as {rows}x{cols}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
}
