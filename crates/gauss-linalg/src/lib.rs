//! # gauss-linalg
//!
//! Exact dense linear algebra over the rationals.
//!
//! This crate provides:
//! - Dense matrices of `Rational` in row-major order
//! - Gauss-Jordan elimination with partial pivoting and rank tracking
//! - Three-way classification of `A·x = y` as no, infinitely many, or
//!   exactly one solution
//!
//! ## Classification
//!
//! Elimination runs on the augmented matrix `[A | y]`. With `r` the rank
//! of `A` and `W` its column count:
//! - a non-zero right-hand side in any row at index `>= r` means no solution
//! - otherwise `r < W` leaves a free variable, so infinitely many solutions
//! - otherwise the solution is unique

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod elimination;
pub mod error;
pub mod solution;

pub use dense_matrix::DenseMatrix;
pub use elimination::{EliminationConfig, Pivoting};
pub use error::LinalgError;
pub use solution::Solution;
