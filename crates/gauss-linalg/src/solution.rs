//! Outcome of solving a linear system.

use std::fmt;

/// Solution of a matrix equation `A·x = y`.
///
/// Having no solution or infinitely many is a regular outcome of a
/// well-posed system, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Solution<T> {
    /// The system is inconsistent.
    None,
    /// The system is consistent but has at least one free variable.
    Infinite,
    /// The system has exactly one solution.
    Unique(T),
}

impl<T> Solution<T> {
    /// Transforms the payload of a unique solution, keeping the kind.
    pub fn map<U, F>(self, f: F) -> Solution<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Solution::None => Solution::None,
            Solution::Infinite => Solution::Infinite,
            Solution::Unique(value) => Solution::Unique(f(value)),
        }
    }

    /// Converts from `&Solution<T>` to `Solution<&T>`.
    pub fn as_ref(&self) -> Solution<&T> {
        match self {
            Solution::None => Solution::None,
            Solution::Infinite => Solution::Infinite,
            Solution::Unique(value) => Solution::Unique(value),
        }
    }

    /// Returns true if there is no solution.
    pub fn is_none(&self) -> bool {
        matches!(self, Solution::None)
    }

    /// Returns true if there are infinitely many solutions.
    pub fn is_infinite(&self) -> bool {
        matches!(self, Solution::Infinite)
    }

    /// Returns true if the solution is unique.
    pub fn is_unique(&self) -> bool {
        matches!(self, Solution::Unique(_))
    }

    /// Returns the unique solution, if there is one.
    pub fn unique(self) -> Option<T> {
        match self {
            Solution::Unique(value) => Some(value),
            _ => None,
        }
    }

    /// Returns a reference to the unique solution, if there is one.
    pub fn as_unique(&self) -> Option<&T> {
        match self {
            Solution::Unique(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::None => f.write_str("no solution"),
            Solution::Infinite => f.write_str("infinitely many solutions"),
            Solution::Unique(_) => f.write_str("unique solution"),
        }
    }
}
