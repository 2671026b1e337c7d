use thiserror::Error;

/// Errors that can occur when building a [`Table`](crate::Table).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A row does not have as many cells as the header.
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },
}
