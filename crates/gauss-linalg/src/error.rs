//! Error types for matrix operations.

use thiserror::Error;

/// Errors that can occur when combining matrices.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The right-hand side does not have one row per equation.
    #[error("matrix heights don't match: coefficient matrix has {expected} rows, right-hand side has {found}")]
    DimensionMismatch {
        /// Rows in the coefficient matrix.
        expected: usize,
        /// Rows in the right-hand side.
        found: usize,
    },
}
