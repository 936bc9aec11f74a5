//! Deterministic banded test systems.
//!
//! `generate_matrix` builds a symmetric pentadiagonal matrix and `generate_vector` a sinusoidal
//! right-hand side. Both are pure: the same arguments always yield bitwise-identical output.

use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;
use faer::Mat;

/// Pentadiagonal `n × n` matrix with `a1` on the main diagonal, `a2` on the first
/// sub/super-diagonals and `a3` on the second sub/super-diagonals.
///
/// # Errors
/// `InvalidDimension` if `n == 0`.
pub fn generate_matrix(n: usize, a1: f64, a2: f64, a3: f64) -> Result<Mat<f64>> {
    if n == 0 {
        return Err(SolverError::InvalidDimension(n));
    }
    Ok(Mat::from_fn(n, n, |i, j| match i.abs_diff(j) {
        0 => a1,
        1 => a2,
        2 => a3,
        _ => 0.0,
    }))
}

/// Vector of length `n` with entry `i` equal to `sin(i * (f + 1))`.
///
/// # Errors
/// `InvalidDimension` if `n == 0`.
pub fn generate_vector(n: usize, f: f64) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(SolverError::InvalidDimension(n));
    }
    Ok((0..n).map(|i| (i as f64 * (f + 1.0)).sin()).collect())
}

/// Convenience: the generated matrix and vector bundled into a `LinearSystem`.
pub fn generate_system(n: usize, a1: f64, a2: f64, a3: f64, f: f64) -> Result<LinearSystem> {
    LinearSystem::new(generate_matrix(n, a1, a2, a3)?, generate_vector(n, f)?)
}
