//! Errors raised while building or indexing a [`Grid`](crate::Grid).

use crate::geom::Point;

/// Why a block of map text could not become a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// The text held no rows once surrounding whitespace was trimmed.
    #[error("no rows")]
    Empty,
    /// A row's trimmed width differs from the first row's.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors from grid construction and direct lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("malformed grid text: {0}")]
    MalformedInput(#[from] Malformed),
    #[error("point {point} is outside the {width}x{height} grid")]
    OutOfBounds { point: Point, width: i32, height: i32 },
}
