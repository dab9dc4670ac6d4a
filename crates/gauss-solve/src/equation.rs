//! Sparse linear equations.
//!
//! An [`Equation`] represents `a1*x1 + a2*x2 + ... + an*xn + c = 0`.
//! Only variables with a non-zero coefficient are stored, so `len()` and
//! iteration see exactly the variables the equation depends on.

use std::fmt;
use std::str::FromStr;

use gauss_integers::Rational;
use num_traits::{One, Zero};
use rustc_hash::FxHashMap;

use crate::parser::{ParseError, Parser};

/// A linear equation `Σ aᵢ·xᵢ + c = 0` over the rationals.
///
/// Newly created equations are all zeros.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equation {
    /// Non-zero coefficients by variable name.
    coefficients: FxHashMap<String, Rational>,
    /// The constant term `c`.
    constant: Rational,
}

impl Equation {
    /// Creates the empty equation `0 = 0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an equation such as `3x - 1/2 y = 2.5`.
    ///
    /// Both sides are sums of terms; the result is `lhs - rhs = 0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the offending character (or end of
    /// input) and what was expected instead.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::new(input).parse_equation()
    }

    /// Returns the coefficient of `name`, zero if it is not present.
    #[must_use]
    pub fn get(&self, name: &str) -> Rational {
        self.coefficients.get(name).cloned().unwrap_or_default()
    }

    /// Sets the coefficient of `name`. A zero value removes the variable.
    pub fn set(&mut self, name: impl Into<String>, value: Rational) -> &mut Self {
        let name = name.into();
        if value.is_zero() {
            self.coefficients.remove(&name);
        } else {
            self.coefficients.insert(name, value);
        }
        self
    }

    /// Adds `delta` to the coefficient of `name`.
    pub fn add_to(&mut self, name: &str, delta: &Rational) -> &mut Self {
        let value = self.get(name) + delta;
        self.set(name, value)
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant(&self) -> &Rational {
        &self.constant
    }

    /// Sets the constant term.
    pub fn set_constant(&mut self, value: Rational) -> &mut Self {
        self.constant = value;
        self
    }

    /// Builder form of [`Equation::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: Rational) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`Equation::set_constant`].
    #[must_use]
    pub fn with_constant(mut self, value: Rational) -> Self {
        self.constant = value;
        self
    }

    /// Number of variables with a non-zero coefficient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns true if no variable has a non-zero coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Iterates over `(name, coefficient)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rational)> {
        self.coefficients
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Subtracts `other` term by term, turning `lhs` and `rhs` into `lhs - rhs`.
    pub(crate) fn subtract(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            let delta = -value;
            self.add_to(name, &delta);
        }
        self.constant = &self.constant - &other.constant;
    }
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the `- ` or `+ ` separator in front of a term's magnitude.
fn write_sign(f: &mut fmt::Formatter<'_>, value: &Rational, first: bool) -> fmt::Result {
    if value.is_negative() {
        f.write_str("- ")
    } else if first {
        Ok(())
    } else {
        f.write_str("+ ")
    }
}

/// Renders variables in name order, e.g. `x - 2y + 3z - 4 = 0`.
///
/// The output parses back to an equal equation.
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<_> = self.iter().collect();
        terms.sort_unstable_by_key(|&(name, _)| name);

        let mut first = true;
        for (name, value) in terms {
            write_sign(f, value, first)?;
            let magnitude = value.abs();
            if !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            write!(f, "{name} ")?;
            first = false;
        }

        write_sign(f, &self.constant, first)?;
        write!(f, "{} = 0", self.constant.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn q(num: i64, den: i64) -> Rational {
        Rational::from_i64(num, den)
    }

    #[test]
    fn test_get_set() {
        let mut eq = Equation::new()
            .with("x", q(2, 1))
            .with("y", q(3, 1))
            .with_constant(q(-5, 1));
        eq.set("x", Rational::zero());
        eq.set("z", q(1, 1));

        assert_eq!(eq.len(), 2);
        assert_eq!(eq.get("x"), Rational::zero());
        assert_eq!(eq.get("y"), q(3, 1));
        assert_eq!(eq.get("z"), q(1, 1));
        assert_eq!(eq.get("a"), Rational::zero());
        assert_eq!(eq.constant(), &q(-5, 1));
    }

    #[test]
    fn test_zero_is_never_stored() {
        let mut eq = Equation::new();
        eq.set("a", Rational::zero());
        assert!(eq.is_empty());

        eq.add_to("b", &q(1, 2)).add_to("b", &q(-1, 2));
        assert!(eq.is_empty());
        assert_eq!(eq, Equation::new());
    }

    #[test]
    fn test_iterate() {
        let eq = Equation::new()
            .with("x", q(2, 1))
            .with("y", q(3, 1))
            .with("z", q(1, 1))
            .with("a", Rational::zero());
        let actual: BTreeMap<_, _> = eq.iter().map(|(n, v)| (n.to_string(), v.clone())).collect();
        let expected = BTreeMap::from([
            ("x".to_string(), q(2, 1)),
            ("y".to_string(), q(3, 1)),
            ("z".to_string(), q(1, 1)),
        ]);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = Equation::new().with("x", q(1, 1)).with("y", q(2, 1));
        let b = Equation::new().with("y", q(2, 1)).with("x", q(1, 1));
        assert_eq!(a, b);
        assert_ne!(a, b.with_constant(q(1, 1)));
    }

    #[test]
    fn test_display() {
        let eq = Equation::new()
            .with("x", q(1, 1))
            .with("y", q(-2, 1))
            .with("z", q(3, 1))
            .with_constant(q(-4, 1));
        assert_eq!(eq.to_string(), "x - 2y + 3z - 4 = 0");
    }

    #[test]
    fn test_display_fractions_and_leading_negative() {
        let eq = Equation::new()
            .with("a", q(-1, 1))
            .with("b", q(2, 3))
            .with("c", q(5, 8));
        assert_eq!(eq.to_string(), "- a + 2/3b + 0.625c + 0 = 0");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Equation::new().to_string(), "0 = 0");
        assert_eq!(Equation::new().with_constant(q(-7, 2)).to_string(), "- 3.5 = 0");
    }

    #[test]
    fn test_subtract() {
        let mut lhs = Equation::new().with("x", q(1, 1)).with("y", q(2, 1));
        let rhs = Equation::new()
            .with("y", q(2, 1))
            .with("z", q(1, 1))
            .with_constant(q(3, 1));
        lhs.subtract(&rhs);
        let expected = Equation::new()
            .with("x", q(1, 1))
            .with("z", q(-1, 1))
            .with_constant(q(-3, 1));
        assert_eq!(lhs, expected);
    }

    #[test]
    fn test_from_str() {
        let eq: Equation = "2x = 4".parse().unwrap();
        assert_eq!(eq, Equation::new().with("x", q(2, 1)).with_constant(q(-4, 1)));
    }
}
