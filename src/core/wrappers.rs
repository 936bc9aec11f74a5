//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module implements the core linear algebra traits for `faer::Mat`, `faer::MatRef` and `Vec<T>`,
//! so that the solvers and the residual bookkeeping can work on plain faer matrices and Rust vectors.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{Indexing, InnerProduct, MatVec};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        self.as_ref().matvec(x, y)
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'a, T: Float> MatVec<Vec<T>> for MatRef<'a, T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = (0..self.ncols()).fold(T::zero(), |acc, j| acc + self[(i, j)] * x[j]);
        }
    }
}

/// Implements inner product and norms for vectors.
impl<T: Float + From<f64>> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the dot product of two vectors: `x^T y`.
    fn dot(&self, x: &Vec<T>, y: &Vec<T>) -> T {
        assert_eq!(x.len(), y.len(), "Vectors must have the same length");
        x.iter()
            .zip(y.iter())
            .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi)
    }
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        self.dot(x, x).sqrt()
    }
    /// Computes the sum of absolute values: `||x||_1`.
    fn norm_l1(&self, x: &Vec<T>) -> T {
        x.iter().fold(T::zero(), |acc, &xi| acc + xi.abs())
    }
}

/// Implements the `Indexing` trait for `faer::Mat`, returning the number of rows.
impl<T> Indexing for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::Residual;

    #[test]
    fn residual_norms_match_manual_sums() {
        // A = [[2,1],[1,3]], x = [1,1], b = [1,5] → r = [2,-1]
        let a = Mat::from_fn(2, 2, |i, j| [[2.0, 1.0], [1.0, 3.0]][i][j]);
        let x: &[f64] = &[1.0, 1.0];
        let b: &[f64] = &[1.0, 5.0];
        assert_eq!(a.residual(x, b), vec![2.0, -1.0]);
        assert_eq!(a.residual_norm_l1(x, b), 3.0);
        assert!((a.residual_norm_l2(x, b) - 5.0f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn residual_vanishes_at_exact_solution() {
        let a = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [2.0, 3.0]][i][j]);
        let x: &[f64] = &[1.0, -2.0];
        let b: &[f64] = &[2.0, -4.0];
        assert_eq!(a.residual_norm_l1(x, b), 0.0);
        assert_eq!(a.residual_norm_l2(x, b), 0.0);
    }
}
