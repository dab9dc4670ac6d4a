//! Linear equation systems for the gauss solver.
//!
//! This crate provides:
//!
//! - **Equations**: sparse `Σ aᵢ·xᵢ + c = 0` with exact rational coefficients
//! - **Parsing**: equation text such as `-2*x1 + 3*x2 + x3 = -1`
//! - **Systems**: ordered collections of equations solved by Gauss-Jordan
//!   elimination into a variable-name → value mapping
//!
//! # Example
//!
//! ```
//! use gauss_solve::{Equation, EquationSystem};
//! use gauss_integers::Rational;
//!
//! let system: EquationSystem = [
//!     "x + y = 3",
//!     "x - y = 1",
//! ]
//! .into_iter()
//! .map(Equation::parse)
//! .collect::<Result<_, _>>()
//! .unwrap();
//!
//! let values = system.solve().unwrap().unique().unwrap();
//! assert_eq!(values["x"], Rational::from(2));
//! assert_eq!(values["y"], Rational::from(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod equation;
pub mod parser;
pub mod system;

pub use equation::Equation;
pub use parser::{Expected, Found, ParseContext, ParseError};
pub use system::{EquationSystem, SystemParseError};

#[cfg(test)]
mod proptests;
