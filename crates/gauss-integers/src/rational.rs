//! Exact rational numbers.
//!
//! A `Rational` wraps `dashu`'s `RBig`, which keeps every value in
//! canonical form: the denominator is strictly positive and shares no
//! common factor with the numerator, and zero is `0/1`. Two rationals are
//! therefore equal exactly when their parts are.

use dashu::base::{Abs, Inverse, Signed, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

use crate::Integer;

/// Errors raised when constructing or inverting a rational.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RationalError {
    /// A zero denominator was supplied, or zero was inverted.
    #[error("division by zero")]
    DivideByZero,
}

/// An arbitrary precision rational number.
///
/// Rationals are immutable and always stored in lowest terms with a
/// positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The sign is moved to the numerator and both parts are divided by
    /// their greatest common divisor.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the denominator is zero.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        let numerator = if denominator.is_negative() {
            -numerator
        } else {
            numerator
        };
        Ok(Self(RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        )))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        Self(RBig::from(numerator) / RBig::from(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.0.denominator().is_one()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(self.0.clone().inv())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if the rational is zero.
    pub fn checked_recip(&self) -> Result<Self, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self(self.0.clone().inv()))
    }

    /// Divides by `rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivideByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivideByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if Signed::is_negative(&self.0) {
            -1
        } else {
            1
        }
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        Signed::is_negative(&self.0)
    }

    /// Returns an adapter that always displays this value as `num/den`.
    ///
    /// Integers are displayed without a denominator.
    #[must_use]
    pub fn fraction(&self) -> Fraction<'_> {
        Fraction(self)
    }

    /// Renders the value as a terminating decimal, if it has one.
    ///
    /// The value terminates in base 10 exactly when the denominator has
    /// no prime factors other than 2 and 5. The numerator is scaled so
    /// the denominator becomes `10^max(t2, t5)` and the decimal point is
    /// placed that many digits from the right.
    fn to_decimal(&self) -> Option<String> {
        let two = Integer::new(2);
        let five = Integer::new(5);

        let mut rest = self.denominator();
        let twos = strip_factor(&mut rest, &two);
        let fives = strip_factor(&mut rest, &five);
        if !rest.is_one() {
            return None;
        }

        let scale = if twos < fives {
            two.pow(fives - twos)
        } else {
            five.pow(twos - fives)
        };
        let digits = (self.numerator().abs() * scale).to_string();
        let tens = twos.max(fives) as usize;

        let mut out = format!("{digits:0>width$}", width = tens + 1);
        if tens > 0 {
            out.insert(out.len() - tens, '.');
        }
        if self.is_negative() {
            out.insert(0, '-');
        }
        Some(out)
    }
}

/// Divides `factor` out of `n` as often as possible, returning the count.
fn strip_factor(n: &mut Integer, factor: &Integer) -> u32 {
    let mut count = 0;
    while n.is_multiple_of(factor) {
        *n = &*n / factor;
        count += 1;
    }
    count
}

/// Displays a [`Rational`] as a plain fraction. See [`Rational::fraction`].
#[derive(Clone, Copy)]
pub struct Fraction<'a>(&'a Rational);

impl fmt::Display for Fraction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = &self.0 .0;
        if self.0.is_integer() {
            write!(f, "{}", inner.numerator())
        } else {
            write!(f, "{}/{}", inner.numerator(), inner.denominator())
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.0.numerator(), self.0.denominator())
    }
}

/// Terminating decimals are written in decimal notation (`10.023`,
/// `-0.0013`, `42`); anything else as `num/den`.
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(decimal) => f.write_str(&decimal),
            None => write!(f, "{}/{}", self.0.numerator(), self.0.denominator()),
        }
    }
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;

    fn add(self, rhs: &Rational) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;

    fn sub(self, rhs: &Rational) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;

    fn mul(self, rhs: &Rational) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

/// # Panics
///
/// Panics if `rhs` is zero. Use [`Rational::checked_div`] to handle it.
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero");
        Rational(&self.0 / &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<&Rational> for Rational {
    type Output = Self;

    fn div(self, rhs: &Rational) -> Self::Output {
        &self / rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl From<Integer> for Rational {
    fn from(n: Integer) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self(RBig::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self(RBig::from(n))
    }
}
