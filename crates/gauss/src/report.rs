//! Human-readable rendering of solutions.

use std::collections::BTreeMap;

use gauss_integers::Rational;
use gauss_linalg::Solution;

/// How variable values are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueStyle {
    /// Terminating decimals where possible, `p/q` otherwise.
    #[default]
    Decimal,
    /// Always `p/q` (integers without a denominator).
    Fraction,
}

impl ValueStyle {
    /// Formats a single value in this style.
    #[must_use]
    pub fn format(self, value: &Rational) -> String {
        match self {
            ValueStyle::Decimal => value.to_string(),
            ValueStyle::Fraction => value.fraction().to_string(),
        }
    }
}

/// Renders a solved system.
///
/// A unique solution lists one `name = value` line per variable, sorted
/// by name.
#[must_use]
pub fn render(solution: &Solution<BTreeMap<String, Rational>>, style: ValueStyle) -> String {
    match solution {
        Solution::None => "No solutions exist\n".to_string(),
        Solution::Infinite => "Infinitely many solutions\n".to_string(),
        Solution::Unique(values) => {
            let mut out = String::from("Unique solution:\n");
            for (name, value) in values {
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(&style.format(value));
                out.push('\n');
            }
            out
        }
    }
}
