//! # Gauss
//!
//! Exact solver for systems of linear equations over the rationals.
//!
//! Equations are written as text, collected into a system and solved by
//! Gauss-Jordan elimination on arbitrary precision rationals, so there is
//! no rounding anywhere. The outcome is one of: no solution, infinitely
//! many solutions, or a unique assignment of a value to every variable.
//!
//! ## Quick Start
//!
//! ```
//! use gauss::prelude::*;
//!
//! let system = EquationSystem::parse_lines([
//!     "-2*x1 + 3*x2 + x3 = -1",
//!     "-4*x1 + 5*x2 + 4*x3 = -7",
//!     "4*x1 - 9*x2 + 2*x3 = -9",
//! ])
//! .unwrap();
//!
//! let solution = system.solve().unwrap();
//! assert_eq!(
//!     gauss::report::render(&solution, ValueStyle::Decimal),
//!     "Unique solution:\nx1 = 1\nx2 = 1\nx3 = -2\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod report;


pub use gauss_integers as integers;
pub use gauss_linalg as linalg;
pub use gauss_solve as solve;

pub use error::Error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::report::ValueStyle;
    pub use gauss_integers::{Integer, Rational};
    pub use gauss_linalg::{DenseMatrix, EliminationConfig, Pivoting, Solution};
    pub use gauss_solve::{Equation, EquationSystem};
}
