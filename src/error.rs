//! Error type shared by every fallible operation of the crate.

/// Errors reported by matrix and Pauli operations.
///
/// A failed operation never hands back a partially updated value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PauliError {
    /// An argument is not acceptable for the operation (bad label, bad phase, mismatched shapes).
    #[error("{op}: invalid argument: {detail}")]
    InvalidArgument { op: &'static str, detail: String },
    /// An entry index lies outside the matrix.
    #[error("{op}: index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    OutOfRange {
        op: &'static str,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

impl PauliError {
    pub(crate) fn invalid(op: &'static str, detail: impl Into<String>) -> Self {
        let err = PauliError::InvalidArgument {
            op,
            detail: detail.into(),
        };
        tracing::debug!(%err, "operation rejected");
        err
    }

    pub(crate) fn dimension_mismatch(op: &'static str, left: usize, right: usize) -> Self {
        Self::invalid(
            op,
            format!("dimension mismatch between {left}x{left} and {right}x{right}"),
        )
    }

    /// Returns `true` for [`PauliError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PauliError::InvalidArgument { .. })
    }

    /// Returns `true` for [`PauliError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, PauliError::OutOfRange { .. })
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PauliError>;
