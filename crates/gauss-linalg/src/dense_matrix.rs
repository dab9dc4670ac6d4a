//! Dense matrix of exact rationals.
//!
//! Entries are stored contiguously in row-major order and addressed by
//! zero-based `(row, col)` pairs.

use std::fmt;
use std::ops::{Index, IndexMut};

use gauss_integers::Rational;
use num_traits::Zero;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl DenseMatrix {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![Rational::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a seed function.
    ///
    /// The seed receives each `(row, col)` pair in row-major order and
    /// returns the value placed there.
    pub fn from_fn<F>(num_rows: usize, num_cols: usize, mut seed: F) -> Self
    where
        F: FnMut(usize, usize) -> Rational,
    {
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in 0..num_rows {
            for col in 0..num_cols {
                data.push(seed(row, col));
            }
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from consecutive rows laid out in one vector.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not hold exactly `num_rows * num_cols` entries.
    #[must_use]
    pub fn from_row_major(num_rows: usize, num_cols: usize, data: Vec<Rational>) -> Self {
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows differ in length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<Rational> = rows.into_iter().flatten().collect();
        Self::from_row_major(num_rows, num_cols, data)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Rational> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Replaces the entry at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Rational) {
        self[(row, col)] = value;
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<Rational> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions differ.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        Self::from_fn(self.num_rows, other.num_cols, |i, j| {
            (0..self.num_cols).fold(Rational::zero(), |acc, k| {
                acc + &self[(i, k)] * &other[(k, j)]
            })
        })
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Adds a scaled row to another: row[target] += scale * row[source].
    pub fn add_scaled_row(&mut self, target: usize, source: usize, scale: &Rational) {
        for k in 0..self.num_cols {
            let val = &self[(source, k)] * scale;
            self[(target, k)] = &self[(target, k)] + &val;
        }
    }

    /// Scales a row by a scalar.
    pub fn scale_row(&mut self, row: usize, scale: &Rational) {
        for k in 0..self.num_cols {
            self[(row, k)] = &self[(row, k)] * scale;
        }
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

/// One line per row, cells separated by tabs.
impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            for (col, value) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
