//! Errors raised while building a [`Grid`](crate::Grid) from raw input.

use thiserror::Error;

/// The raw grid is not a non-empty rectangular matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The grid is not a list of rows.
    #[error("grid must be a list of rows")]
    NotMatrix,
    /// A row that is not itself a list of cells.
    #[error("row {row} is not a list")]
    NotARow { row: usize },
    /// No rows at all.
    #[error("grid must be a non-empty matrix")]
    Empty,
    /// A row with zero columns.
    #[error("row {row} has no columns")]
    EmptyRow { row: usize },
    /// A row whose length differs from the first row.
    #[error("row {row} length {len} does not match expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A flat cell buffer whose length is not `rows * cols`.
    #[error("{len} cells do not fill a grid of {expected}")]
    CellCount { len: usize, expected: usize },
    /// An ASCII map contained a character that is neither free nor wall.
    #[error("invalid map character {ch:?} at ({row}, {col})")]
    InvalidChar { row: usize, col: usize, ch: char },
}

/// Errors that can occur when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid shape: {0}")]
    Shape(#[from] ShapeError),
    /// A cell value other than `0` or `1`.
    #[error("grid cell at ({row}, {col}) is {value}, expected 0 or 1")]
    CellValue { row: usize, col: usize, value: i64 },
    /// A cell that is not an integer at all.
    #[error("grid cell at ({row}, {col}) is not an integer")]
    CellType { row: usize, col: usize },
}
