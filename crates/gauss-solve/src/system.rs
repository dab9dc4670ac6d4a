//! Systems of linear equations.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use gauss_integers::Rational;
use gauss_linalg::{DenseMatrix, EliminationConfig, LinalgError, Solution};
use thiserror::Error;
use tracing::debug;

use crate::equation::Equation;
use crate::parser::ParseError;

/// A parse error tagged with the 1-based line it came from.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct SystemParseError {
    /// 1-based line number.
    pub line: usize,
    /// The underlying parse error.
    #[source]
    pub source: ParseError,
}

/// An ordered collection of equations.
///
/// Order only matters for display and indexing; it does not affect the
/// solution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquationSystem {
    equations: Vec<Equation>,
}

impl EquationSystem {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one equation per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first [`SystemParseError`], with its line number.
    pub fn parse_lines<'a, I>(lines: I) -> Result<Self, SystemParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut system = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let equation = Equation::parse(line).map_err(|source| SystemParseError {
                line: index + 1,
                source,
            })?;
            system.push(equation);
        }
        Ok(system)
    }

    /// Number of equations in the system.
    #[must_use]
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns true if the system has no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the i-th equation.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Equation> {
        self.equations.get(i)
    }

    /// Appends an equation to the end of the system.
    pub fn push(&mut self, equation: Equation) {
        self.equations.push(equation);
    }

    /// Inserts an equation at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i > len()`.
    pub fn insert(&mut self, i: usize, equation: Equation) {
        self.equations.insert(i, equation);
    }

    /// Removes and returns the i-th equation.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn remove(&mut self, i: usize) -> Equation {
        self.equations.remove(i)
    }

    /// Iterates over the equations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Equation> {
        self.equations.iter()
    }

    /// Returns every variable with a non-zero coefficient in some
    /// equation, in ascending order.
    ///
    /// This is also the column order of the coefficient matrix.
    #[must_use]
    pub fn variables(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .equations
            .iter()
            .flat_map(|eq| eq.iter().map(|(name, _)| name))
            .collect();
        names.into_iter().map(str::to_owned).collect()
    }

    /// Builds the coefficient matrix `A` and right-hand side `y` for the
    /// given variable order.
    ///
    /// Equations are stored as `Σ aᵢxᵢ + c = 0`, so `y[i] = -cᵢ`.
    fn matrices(&self, variables: &[String]) -> (DenseMatrix, DenseMatrix) {
        let a = DenseMatrix::from_fn(self.len(), variables.len(), |i, j| {
            self.equations[i].get(&variables[j])
        });
        let y = DenseMatrix::from_fn(self.len(), 1, |i, _| -self.equations[i].constant());
        (a, y)
    }

    /// Solves the system with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`EquationSystem::solve_with`].
    pub fn solve(&self) -> Result<Solution<BTreeMap<String, Rational>>, LinalgError> {
        self.solve_with(&EliminationConfig::default())
    }

    /// Solves the system, mapping a unique solution to variable values.
    ///
    /// # Errors
    ///
    /// Propagates [`LinalgError`] from the matrix solver. The matrices
    /// built here always agree in height, so this does not happen in
    /// practice.
    pub fn solve_with(
        &self,
        config: &EliminationConfig,
    ) -> Result<Solution<BTreeMap<String, Rational>>, LinalgError> {
        let variables = self.variables();
        debug!(
            equations = self.len(),
            variables = variables.len(),
            "building coefficient matrix"
        );
        let (a, y) = self.matrices(&variables);

        let solution = a.solve_with(&y, config)?;
        Ok(solution.map(|x| {
            variables
                .into_iter()
                .enumerate()
                .map(|(i, name)| (name, x[(i, 0)].clone()))
                .collect()
        }))
    }
}

impl<'a> IntoIterator for &'a EquationSystem {
    type Item = &'a Equation;
    type IntoIter = std::slice::Iter<'a, Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for EquationSystem {
    type Item = Equation;
    type IntoIter = std::vec::IntoIter<Equation>;

    fn into_iter(self) -> Self::IntoIter {
        self.equations.into_iter()
    }
}

impl FromIterator<Equation> for EquationSystem {
    fn from_iter<I: IntoIterator<Item = Equation>>(iter: I) -> Self {
        Self {
            equations: iter.into_iter().collect(),
        }
    }
}

impl Extend<Equation> for EquationSystem {
    fn extend<I: IntoIterator<Item = Equation>>(&mut self, iter: I) {
        self.equations.extend(iter);
    }
}

/// One equation per line.
impl fmt::Display for EquationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for equation in &self.equations {
            writeln!(f, "{equation}")?;
        }
        Ok(())
    }
}
