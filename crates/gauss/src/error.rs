//! Unified error type for the gauss front end.

use gauss_linalg::LinalgError;
use gauss_solve::{ParseError, SystemParseError};
use thiserror::Error;

/// Any failure between reading equation text and printing a result.
#[derive(Debug, Error)]
pub enum Error {
    /// A single equation could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An equation in a multi-line source could not be parsed.
    #[error(transparent)]
    SystemParse(#[from] SystemParseError),

    /// Matrix dimensions did not agree.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// Equation input could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The path that failed, `-` for standard input.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
