//! # gauss-integers
//!
//! Arbitrary precision integer and rational arithmetic for the gauss solver.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Exact rationals kept in canonical form (`Rational`)
//!
//! Every `Rational` is stored fully reduced with a strictly positive
//! denominator, so structural equality is value equality.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{Rational, RationalError};
