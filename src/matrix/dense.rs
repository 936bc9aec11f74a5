//! Dense linear system `A x = b` on top of Faer.
//!
//! A `LinearSystem` owns its coefficient matrix and right-hand side. Construction validates
//! that `A` is square, non-empty and matches the length of `b`, so every solver can index
//! freely without re-checking shapes.

use crate::core::traits::Residual;
use crate::error::{Result, SolverError};
use faer::Mat;

/// Square dense system `A x = b` of dimension `n`.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    a: Mat<f64>,
    b: Vec<f64>,
}

impl LinearSystem {
    /// Build a system from a Faer matrix and a right-hand side.
    ///
    /// # Errors
    /// * `InvalidDimension` if `a` has no rows.
    /// * `DimensionMismatch` if `a` is not square or `b` does not have `a.nrows()` entries.
    pub fn new(a: Mat<f64>, b: Vec<f64>) -> Result<Self> {
        let n = a.nrows();
        if n == 0 {
            return Err(SolverError::InvalidDimension(n));
        }
        if a.ncols() != n {
            return Err(SolverError::DimensionMismatch { expected: n, found: a.ncols() });
        }
        if b.len() != n {
            return Err(SolverError::DimensionMismatch { expected: n, found: b.len() });
        }
        Ok(Self { a, b })
    }

    /// Build a system of declared dimension `n`, checking both operands against it.
    pub fn with_dimension(a: Mat<f64>, b: Vec<f64>, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SolverError::InvalidDimension(n));
        }
        if a.nrows() != n {
            return Err(SolverError::DimensionMismatch { expected: n, found: a.nrows() });
        }
        Self::new(a, b)
    }

    /// Construct from raw row-major storage of length `n * n`.
    pub fn from_row_major(n: usize, data: &[f64], b: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(SolverError::InvalidDimension(n));
        }
        if data.len() != n * n {
            return Err(SolverError::DimensionMismatch { expected: n * n, found: data.len() });
        }
        Self::new(Mat::from_fn(n, n, |i, j| data[i * n + j]), b)
    }

    pub fn dim(&self) -> usize {
        self.b.len()
    }

    pub fn matrix(&self) -> &Mat<f64> {
        &self.a
    }

    pub fn rhs(&self) -> &[f64] {
        &self.b
    }

    /// ‖A x − b‖₁ for a candidate solution `x`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `x` does not have `dim()` entries.
    pub fn residual_norm_l1(&self, x: &[f64]) -> Result<f64> {
        self.check_len(x)?;
        Ok(self.a.residual_norm_l1(x, self.rhs()))
    }

    /// ‖A x − b‖₂ for a candidate solution `x`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `x` does not have `dim()` entries.
    pub fn residual_norm_l2(&self, x: &[f64]) -> Result<f64> {
        self.check_len(x)?;
        Ok(self.a.residual_norm_l2(x, self.rhs()))
    }

    fn check_len(&self, x: &[f64]) -> Result<()> {
        if x.len() != self.dim() {
            return Err(SolverError::DimensionMismatch { expected: self.dim(), found: x.len() });
        }
        Ok(())
    }

    /// First row whose diagonal entry is exactly zero, if any.
    pub fn zero_diagonal(&self) -> Option<usize> {
        (0..self.dim()).find(|&i| self.a[(i, i)] == 0.0)
    }
}
