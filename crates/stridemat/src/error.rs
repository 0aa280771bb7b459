use thiserror::Error;

/// Errors raised while building, viewing, indexing or multiplying
/// vectors and matrices.
///
/// Every operation validates before it touches storage, so an `Err`
/// always means nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid size {0:?}: every extent must be positive")]
    InvalidSize(Vec<usize>),

    #[error("Invalid size: row {row} has {found} columns but row 0 has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid selection: from {from} to {to} by {stride} over an extent of {size}")]
    InvalidSelection {
        from: isize,
        to: isize,
        stride: isize,
        size: usize,
    },

    #[error("Index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Dimension mismatch: cannot multiply {}×{} by {}×{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
}

impl MatrixError {
    /// True for both flavours of bad construction extents.
    pub fn is_invalid_size(&self) -> bool {
        matches!(self, MatrixError::InvalidSize(_) | MatrixError::RaggedRows { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
