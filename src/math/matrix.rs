//! Dense big-integer matrices over Z_q.
//!
//! Every algebraic operation returns a new matrix and reduces its entries
//! to `[0, q)`; inputs are never aliased or mutated. Row-level loops in
//! multiplication, scalar multiplication, addition and negation run on the
//! rayon pool by default; [`Matrix::disable_concurrency`] switches a single
//! instance to sequential execution without changing any result.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{malformed, Result};
use crate::math::sampling::RandomSource;

fn concurrent_default() -> bool {
    true
}

/// Row-major matrix of big integers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    inner: Vec<Vec<BigUint>>,
    #[serde(skip, default = "concurrent_default")]
    concurrent: bool,
}

impl Matrix {
    fn from_inner(inner: Vec<Vec<BigUint>>) -> Self {
        Self {
            inner,
            concurrent: true,
        }
    }

    /// Builds a matrix from rows. All rows must have the same nonzero
    /// length, and there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<BigUint>>) -> Self {
        debug_assert!(!rows.is_empty(), "matrix must have at least one row");
        debug_assert!(!rows[0].is_empty(), "matrix must have at least one column");
        debug_assert!(
            rows.iter().all(|r| r.len() == rows[0].len()),
            "all rows must have the same length"
        );
        Self::from_inner(rows)
    }

    /// An all-zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1, "matrix dimensions must be positive");
        Self::from_inner(vec![vec![BigUint::zero(); cols]; rows])
    }

    /// A matrix with every entry drawn uniformly from `[0, q)`.
    pub fn random<R: RandomSource>(rows: usize, cols: usize, rng: &mut R, q: &BigUint) -> Self {
        let inner = (0..rows)
            .map(|_| (0..cols).map(|_| rng.next_below(q)).collect())
            .collect();
        Self::from_inner(inner)
    }

    /// A matrix with every entry drawn uniformly from `{0, 1}`.
    pub fn random_bits<R: RandomSource>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let two = BigUint::from(2u32);
        let inner = (0..rows)
            .map(|_| (0..cols).map(|_| rng.next_below(&two)).collect())
            .collect();
        Self::from_inner(inner)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.inner.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.inner[0].len()
    }

    /// Reads one entry.
    pub fn get(&self, row: usize, col: usize) -> &BigUint {
        &self.inner[row][col]
    }

    /// Borrows one row.
    pub fn row(&self, row: usize) -> &[BigUint] {
        &self.inner[row]
    }

    /// Returns the single row or column as a vector.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless `rows == 1` or
    /// `cols == 1`.
    pub fn as_vector(&self) -> Result<Vec<BigUint>> {
        if self.rows() != 1 && self.cols() != 1 {
            return Err(malformed!(
                "matrix with dimensions {}x{} is not a vector",
                self.rows(),
                self.cols()
            ));
        }
        if self.rows() == 1 {
            Ok(self.inner[0].clone())
        } else {
            Ok(self.inner.iter().map(|r| r[0].clone()).collect())
        }
    }

    /// Matrix product `self · rhs mod q`.
    ///
    /// The inner-product sum is reduced once per output cell.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless `self.cols == rhs.rows`.
    pub fn mul(&self, rhs: &Matrix, q: &BigUint) -> Result<Matrix> {
        if self.cols() != rhs.rows() {
            return Err(malformed!(
                "matrix with dimensions {}x{} cannot be multiplied with matrix with dimensions {}x{}",
                self.rows(),
                self.cols(),
                rhs.rows(),
                rhs.cols()
            ));
        }

        let compute_row = |i: usize| -> Vec<BigUint> {
            (0..rhs.cols())
                .map(|j| {
                    let mut acc = BigUint::zero();
                    for k in 0..self.cols() {
                        acc += &self.inner[i][k] * &rhs.inner[k][j];
                    }
                    acc % q
                })
                .collect()
        };

        let inner: Vec<Vec<BigUint>> = if self.concurrent {
            (0..self.rows()).into_par_iter().map(compute_row).collect()
        } else {
            (0..self.rows()).map(compute_row).collect()
        };

        Ok(Self::from_inner(inner))
    }

    /// Entrywise product with a constant, `k · self mod q`.
    pub fn scalar_mul(&self, k: &BigUint, q: &BigUint) -> Matrix {
        let scale_row = |row: &Vec<BigUint>| -> Vec<BigUint> {
            row.iter().map(|v| (v * k) % q).collect()
        };

        let inner: Vec<Vec<BigUint>> = if self.concurrent {
            self.inner.par_iter().map(scale_row).collect()
        } else {
            self.inner.iter().map(scale_row).collect()
        };

        Self::from_inner(inner)
    }

    /// Entrywise sum `self + rhs mod q`.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless the shapes match.
    pub fn add(&self, rhs: &Matrix, q: &BigUint) -> Result<Matrix> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(malformed!(
                "matrix with dimensions {}x{} cannot be added to matrix with dimensions {}x{}",
                self.rows(),
                self.cols(),
                rhs.rows(),
                rhs.cols()
            ));
        }

        let add_row = |i: usize| -> Vec<BigUint> {
            self.inner[i]
                .iter()
                .zip(&rhs.inner[i])
                .map(|(a, b)| (a + b) % q)
                .collect()
        };

        let inner: Vec<Vec<BigUint>> = if self.concurrent {
            (0..self.rows()).into_par_iter().map(add_row).collect()
        } else {
            (0..self.rows()).map(add_row).collect()
        };

        Ok(Self::from_inner(inner))
    }

    /// Entrywise difference `self - rhs mod q`, reduced into `[0, q)`.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless the shapes match.
    pub fn sub(&self, rhs: &Matrix, q: &BigUint) -> Result<Matrix> {
        if self.rows() != rhs.rows() || self.cols() != rhs.cols() {
            return Err(malformed!(
                "matrix with dimensions {}x{} cannot be subtracted from matrix with dimensions {}x{}",
                self.rows(),
                self.cols(),
                rhs.rows(),
                rhs.cols()
            ));
        }

        let inner = self
            .inner
            .iter()
            .zip(&rhs.inner)
            .map(|(ra, rb)| {
                ra.iter()
                    .zip(rb)
                    .map(|(a, b)| ((a % q) + q - (b % q)) % q)
                    .collect()
            })
            .collect();

        Ok(Self::from_inner(inner))
    }

    /// Entrywise negation `(-self) mod q`, result in `[0, q)`.
    pub fn neg(&self, q: &BigUint) -> Matrix {
        let neg_row = |row: &Vec<BigUint>| -> Vec<BigUint> {
            row.iter().map(|v| (q - (v % q)) % q).collect()
        };

        let inner: Vec<Vec<BigUint>> = if self.concurrent {
            self.inner.par_iter().map(neg_row).collect()
        } else {
            self.inner.iter().map(neg_row).collect()
        };

        Self::from_inner(inner)
    }

    /// Transpose; a pure permutation of entries, not a modular operation.
    pub fn transpose(&self) -> Matrix {
        let inner = (0..self.cols())
            .map(|j| (0..self.rows()).map(|i| self.inner[i][j].clone()).collect())
            .collect();
        Self::from_inner(inner)
    }

    /// A new matrix with `row` appended underneath.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless `row.len() == cols`.
    pub fn append_row(&self, row: &[BigUint]) -> Result<Matrix> {
        if row.len() != self.cols() {
            return Err(malformed!(
                "new row of length {} does not fit matrix with {} columns",
                row.len(),
                self.cols()
            ));
        }
        let mut inner = self.inner.clone();
        inner.push(row.to_vec());
        Ok(Self::from_inner(inner))
    }

    /// A new matrix with `column` appended on the right.
    ///
    /// # Errors
    ///
    /// Fails with a malformed-matrix error unless `column.len() == rows`.
    pub fn append_column(&self, column: &[BigUint]) -> Result<Matrix> {
        if column.len() != self.rows() {
            return Err(malformed!(
                "new column of length {} does not fit matrix with {} rows",
                column.len(),
                self.rows()
            ));
        }
        let inner = self
            .inner
            .iter()
            .zip(column)
            .map(|(row, v)| {
                let mut r = row.clone();
                r.push(v.clone());
                r
            })
            .collect();
        Ok(Self::from_inner(inner))
    }

    /// Bit decomposition of a non-negative integer into an `len × 1`
    /// column, least significant bit first.
    ///
    /// Satisfies `Σ 2^i · dec[i] = x` whenever `x < 2^len`.
    pub fn decompose(x: &BigUint, len: usize) -> Matrix {
        let one = BigUint::one();
        let inner = (0..len)
            .map(|i| {
                let bit = (x >> i) & &one;
                vec![if bit.is_one() {
                    BigUint::one()
                } else {
                    BigUint::zero()
                }]
            })
            .collect();
        Self::from_inner(inner)
    }

    /// Disables rayon dispatch for this instance only.
    ///
    /// One-way: once off, it stays off. New matrices returned by
    /// operations on this instance run concurrently again. Results are
    /// identical either way.
    pub fn disable_concurrency(&mut self) {
        self.concurrent = false;
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Matrix {}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.inner.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
