//! Gauss-Jordan elimination and solution classification.
//!
//! Both [`DenseMatrix::solve`] and [`DenseMatrix::rank`] work on an owned
//! scratch copy; their inputs are never modified.

use num_traits::Zero;
use tracing::{debug, trace};

use crate::dense_matrix::DenseMatrix;
use crate::error::LinalgError;
use crate::solution::Solution;

/// How the pivot row is chosen in each column.
///
/// Arithmetic is exact, so every strategy yields the same rank and the
/// same unique solution. Only the intermediate values differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Pivoting {
    /// The row with the largest absolute value; the lowest index wins ties.
    #[default]
    Partial,
    /// The first row with a non-zero entry.
    FirstNonZero,
}

/// Configuration for Gauss-Jordan elimination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EliminationConfig {
    /// Pivot selection strategy.
    pub pivoting: Pivoting,
}

impl EliminationConfig {
    /// Creates a configuration with the given pivoting strategy.
    #[must_use]
    pub fn with_pivoting(pivoting: Pivoting) -> Self {
        Self { pivoting }
    }
}

impl DenseMatrix {
    /// Finds `x` in `self · x = y` using the default configuration.
    ///
    /// See [`DenseMatrix::solve_with`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `y` does not have as
    /// many rows as `self`.
    pub fn solve(&self, y: &Self) -> Result<Solution<Self>, LinalgError> {
        self.solve_with(y, &EliminationConfig::default())
    }

    /// Finds `x` in `self · x = y`.
    ///
    /// `self` is `H×W` and `y` is `H×K`; a unique result is `W×K`, one
    /// solution column per right-hand-side column.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if `y` does not have as
    /// many rows as `self`.
    pub fn solve_with(
        &self,
        y: &Self,
        config: &EliminationConfig,
    ) -> Result<Solution<Self>, LinalgError> {
        if self.num_rows() != y.num_rows() {
            return Err(LinalgError::DimensionMismatch {
                expected: self.num_rows(),
                found: y.num_rows(),
            });
        }

        let n = self.num_cols();
        let mut aug = Self::from_fn(self.num_rows(), n + y.num_cols(), |i, j| {
            if j < n {
                self[(i, j)].clone()
            } else {
                y[(i, j - n)].clone()
            }
        });

        let rank = reduce(&mut aug, n, config.pivoting);

        // Rows without a pivot read 0 = c; any non-zero c is a contradiction.
        let inconsistent = (rank..aug.num_rows())
            .any(|i| aug.row(i)[n..].iter().any(|v| !v.is_zero()));
        if inconsistent {
            debug!(rows = aug.num_rows(), cols = n, rank, "system is inconsistent");
            return Ok(Solution::None);
        }
        if rank < n {
            debug!(rows = aug.num_rows(), cols = n, rank, free = n - rank, "system is underdetermined");
            return Ok(Solution::Infinite);
        }

        // Full column rank: the pivot of row k sits in column k.
        for k in 0..n {
            let scale = aug[(k, k)].recip();
            aug.scale_row(k, &scale);
        }
        debug!(rows = aug.num_rows(), cols = n, rank, "system has a unique solution");

        let result = Self::from_fn(n, y.num_cols(), |i, j| aug[(i, n + j)].clone());
        Ok(Solution::Unique(result))
    }

    /// Returns the rank using the default configuration.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.rank_with(&EliminationConfig::default())
    }

    /// Returns the rank: the number of pivot columns found by elimination.
    #[must_use]
    pub fn rank_with(&self, config: &EliminationConfig) -> usize {
        let mut scratch = self.clone();
        let cols = scratch.num_cols();
        reduce(&mut scratch, cols, config.pivoting)
    }
}

/// Gauss-Jordan elimination over the first `pivot_cols` columns.
///
/// Each pivot column is cleared in every other row, above and below.
/// Columns without a usable pivot are skipped and leave the rank
/// unchanged. Returns the rank; rows `0..rank` hold the pivots, in
/// increasing column order.
fn reduce(m: &mut DenseMatrix, pivot_cols: usize, pivoting: Pivoting) -> usize {
    let mut rank = 0;

    for k in 0..pivot_cols {
        if rank >= m.num_rows() {
            break;
        }

        let Some(pivot_row) = select_pivot(m, k, rank, pivoting) else {
            trace!(col = k, rank, "no pivot, free column");
            continue;
        };
        trace!(col = k, row = pivot_row, rank, "pivot selected");

        m.swap_rows(pivot_row, rank);
        let pivot = m[(rank, k)].clone();
        for i in 0..m.num_rows() {
            if i == rank || m[(i, k)].is_zero() {
                continue;
            }
            let ratio = -(&m[(i, k)] / &pivot);
            m.add_scaled_row(i, rank, &ratio);
        }

        rank += 1;
    }

    rank
}

/// Picks the pivot row for column `col` among rows `from..`.
///
/// Returns `None` when every candidate is exactly zero.
fn select_pivot(m: &DenseMatrix, col: usize, from: usize, pivoting: Pivoting) -> Option<usize> {
    match pivoting {
        Pivoting::Partial => {
            let mut best = from;
            let mut best_abs = m[(from, col)].abs();
            for row in from + 1..m.num_rows() {
                let candidate = m[(row, col)].abs();
                if candidate > best_abs {
                    best = row;
                    best_abs = candidate;
                }
            }
            (!best_abs.is_zero()).then_some(best)
        }
        Pivoting::FirstNonZero => (from..m.num_rows()).find(|&row| !m[(row, col)].is_zero()),
    }
}
