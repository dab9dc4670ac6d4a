//! Recursive-descent parser for equation text.
//!
//! Grammar, with whitespace allowed between tokens:
//!
//! ```text
//! equation := expr '=' expr EOF
//! expr     := ['+' | '-'] term (('+' | '-') term)*
//! term     := name | number | number ['*'] name
//! number   := natural | natural '.' natural | natural '/' natural
//! name     := letter (letter | digit | '_')*
//! ```
//!
//! No whitespace is allowed around the decimal point.

use std::fmt;

use gauss_integers::{Integer, Rational};
use num_traits::Zero;
use thiserror::Error;

use crate::equation::Equation;

/// What the parser ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Found {
    /// An unexpected character.
    Char(char),
    /// The input ended early.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "`{c}`"),
            Found::EndOfInput => f.write_str("EOF"),
        }
    }
}

/// Where in the grammar the parser was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseContext {
    /// Reading the first digit of a number.
    NaturalNumber,
    /// Reading the first letter of a variable name.
    Name,
    /// Between the two sides of an equation, or after it.
    Equation,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseContext::NaturalNumber => f.write_str("at the start of a natural number"),
            ParseContext::Name => f.write_str("at the start of a name"),
            ParseContext::Equation => f.write_str("in equation"),
        }
    }
}

/// The token class the parser wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expected {
    /// An ASCII digit.
    Digit,
    /// An alphabetic character.
    Letter,
    /// The `=` separating both sides.
    EqualsSign,
    /// Nothing more.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Digit => f.write_str("a digit"),
            Expected::Letter => f.write_str("a letter"),
            Expected::EqualsSign => f.write_str("`=`"),
            Expected::EndOfInput => f.write_str("EOF"),
        }
    }
}

/// Errors produced while parsing an equation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character (or the end of input) that does not fit the grammar.
    #[error("unexpected {found} at offset {position} {context}, expecting {expected}")]
    Unexpected {
        /// The offending character.
        found: Found,
        /// Byte offset into the input.
        position: usize,
        /// Grammar position.
        context: ParseContext,
        /// Token class that would have been accepted.
        expected: Expected,
    },
    /// A fraction literal with denominator zero.
    #[error("zero denominator at offset {position}")]
    ZeroDenominator {
        /// Byte offset of the denominator.
        position: usize,
    },
}

/// Cursor over the input text.
pub(crate) struct Parser<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.cursor += c.len_utf8();
        }
    }

    /// Consumes `expected` if it is next.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn unexpected(&self, context: ParseContext, expected: Expected) -> ParseError {
        ParseError::Unexpected {
            found: self.peek().map_or(Found::EndOfInput, Found::Char),
            position: self.cursor,
            context,
            expected,
        }
    }

    /// Reads one or more digits, returning the value and the digit count.
    fn parse_natural(&mut self) -> Result<(Integer, u32), ParseError> {
        let ten = Integer::new(10);
        let mut value = Integer::zero();
        let mut digits = 0;
        while let Some(d) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value * &ten + Integer::from(d);
            digits += 1;
            self.bump();
        }
        if digits == 0 {
            return Err(self.unexpected(ParseContext::NaturalNumber, Expected::Digit));
        }
        Ok((value, digits))
    }

    fn parse_number(&mut self) -> Result<Rational, ParseError> {
        let (whole, _) = self.parse_natural()?;

        if self.eat('.') {
            let (fraction, places) = self.parse_natural()?;
            let scale = Rational::from_integer(Integer::new(10).pow(places));
            return Ok(Rational::from_integer(whole) + Rational::from_integer(fraction) / scale);
        }

        self.skip_whitespace();
        if self.eat('/') {
            self.skip_whitespace();
            let position = self.cursor;
            let (den, _) = self.parse_natural()?;
            return Rational::new(whole, den).map_err(|_| ParseError::ZeroDenominator { position });
        }

        Ok(Rational::from_integer(whole))
    }

    fn parse_name(&mut self) -> Result<&'a str, ParseError> {
        let start = self.cursor;
        if !self.peek().is_some_and(char::is_alphabetic) {
            return Err(self.unexpected(ParseContext::Name, Expected::Letter));
        }
        while self
            .peek()
            .is_some_and(|c| c.is_alphabetic() || c.is_ascii_digit() || c == '_')
        {
            self.bump();
        }
        Ok(&self.input[start..self.cursor])
    }

    /// Reads a signed sum of terms. Trailing whitespace is consumed.
    fn parse_expr(&mut self) -> Result<Equation, ParseError> {
        let mut result = Equation::new();
        self.skip_whitespace();
        let mut negative = if self.eat('+') {
            false
        } else {
            self.eat('-')
        };

        loop {
            self.skip_whitespace();
            if self.peek().is_some_and(char::is_alphabetic) {
                // lone variable
                let name = self.parse_name()?;
                let unit = if negative { -Rational::from(1) } else { Rational::from(1) };
                result.add_to(name, &unit);
            } else {
                let number = self.parse_number()?;
                let number = if negative { -number } else { number };
                self.skip_whitespace();
                if self.eat('*') {
                    self.skip_whitespace();
                    let name = self.parse_name()?;
                    result.add_to(name, &number);
                } else if self.peek().is_some_and(char::is_alphabetic) {
                    let name = self.parse_name()?;
                    result.add_to(name, &number);
                } else {
                    let constant = result.constant() + &number;
                    result.set_constant(constant);
                }
            }

            self.skip_whitespace();
            if self.eat('+') {
                negative = false;
            } else if self.eat('-') {
                negative = true;
            } else {
                break;
            }
        }

        Ok(result)
    }

    /// Parses `lhs = rhs` into the single equation `lhs - rhs = 0`.
    pub(crate) fn parse_equation(mut self) -> Result<Equation, ParseError> {
        let mut lhs = self.parse_expr()?;
        if !self.eat('=') {
            return Err(self.unexpected(ParseContext::Equation, Expected::EqualsSign));
        }
        let rhs = self.parse_expr()?;
        if self.peek().is_some() {
            return Err(self.unexpected(ParseContext::Equation, Expected::EndOfInput));
        }
        lhs.subtract(&rhs);
        Ok(lhs)
    }
}
