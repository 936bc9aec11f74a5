//! Jacobi, Gauss-Seidel and naive LU solvers.
//!
//! `SolvingMethod` is a closed enumeration; `solve` matches on it and runs the
//! corresponding solver on a fresh zero initial guess, timing only the solve itself.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::matrix::LinearSystem;
use crate::utils::convergence::{SolveStats, SolverResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Common interface for the direct and iterative solvers.
pub trait LinearSolver {
    /// Solve A·x = b, writing the result into `x`.
    /// `x` must hold the initial guess on entry and has length `system.dim()`.
    fn solve(&mut self, system: &LinearSystem, x: &mut Vec<f64>) -> Result<SolveStats>;
}

/// The three supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolvingMethod {
    Jacobi,
    GaussSeidel,
    LuDecomposition,
}

impl SolvingMethod {
    pub const ALL: [SolvingMethod; 3] =
        [SolvingMethod::Jacobi, SolvingMethod::GaussSeidel, SolvingMethod::LuDecomposition];

    pub fn is_iterative(self) -> bool {
        !matches!(self, SolvingMethod::LuDecomposition)
    }
}

impl fmt::Display for SolvingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SolvingMethod::Jacobi => "Jacobi",
            SolvingMethod::GaussSeidel => "Gauss-Seidel",
            SolvingMethod::LuDecomposition => "LU decomposition",
        })
    }
}

/// Solve `system` with `method`, starting from the zero vector.
///
/// Elapsed time covers the solver call only and is reported in seconds.
///
/// # Errors
/// * `SingularDiagonal` from Jacobi / Gauss-Seidel.
/// * `SingularPivot` from LU.
pub fn solve(system: &LinearSystem, method: SolvingMethod, config: &SolverConfig) -> Result<SolverResult> {
    let mut x = vec![0.0; system.dim()];
    let start = Instant::now();
    let stats = match method {
        SolvingMethod::Jacobi => JacobiSolver::new(*config).solve(system, &mut x),
        SolvingMethod::GaussSeidel => GaussSeidelSolver::new(*config).solve(system, &mut x),
        SolvingMethod::LuDecomposition => LuSolver::new().solve(system, &mut x),
    }?;
    let elapsed_secs = start.elapsed().as_secs_f64();
    log::debug!(
        "{method}: n = {}, iterations = {}, residual = {:e}, converged = {}, time = {elapsed_secs:.6}s",
        system.dim(),
        stats.iterations,
        stats.final_residual,
        stats.converged
    );
    Ok(SolverResult::from_stats(method, x, stats, elapsed_secs))
}

mod stationary;

pub mod jacobi;
pub use jacobi::JacobiSolver;

pub mod gauss_seidel;
pub use gauss_seidel::GaussSeidelSolver;

pub mod direct_lu;
pub use direct_lu::{LuFactors, LuSolver, lu_factorize};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use faer::Mat;

    #[test]
    fn every_method_solves_scalar_system() {
        let sys = LinearSystem::new(Mat::from_fn(1, 1, |_, _| 4.0), vec![2.0]).unwrap();
        for method in SolvingMethod::ALL {
            let res = solve(&sys, method, &SolverConfig::default()).unwrap();
            assert_eq!(res.method, Some(method));
            assert!((res.x[0] - 0.5).abs() < 1e-15, "{method}: x = {:?}", res.x);
            let expected_iters = if method.is_iterative() { 1 } else { 0 };
            assert_eq!(res.iterations, expected_iters, "{method}");
            assert_eq!(res.residual_history.len(), expected_iters);
            assert!(res.converged);
            assert!(res.elapsed_secs >= 0.0);
        }
    }

    #[test]
    fn zero_diagonal_fails_iterative_methods_only_where_expected() {
        // [[0,1],[1,0]] has a zero diagonal but a valid (swapped) solution.
        let sys = LinearSystem::from_row_major(2, &[0.0, 1.0, 1.0, 0.0], vec![1.0, 2.0]).unwrap();
        let cfg = SolverConfig::default();
        assert_eq!(solve(&sys, SolvingMethod::Jacobi, &cfg).unwrap_err(), SolverError::SingularDiagonal(0));
        assert_eq!(solve(&sys, SolvingMethod::GaussSeidel, &cfg).unwrap_err(), SolverError::SingularDiagonal(0));
        assert_eq!(solve(&sys, SolvingMethod::LuDecomposition, &cfg).unwrap_err(), SolverError::SingularPivot(0));
    }

    #[test]
    fn method_labels_and_serde_names() {
        assert_eq!(SolvingMethod::GaussSeidel.to_string(), "Gauss-Seidel");
        let json = serde_json::to_string(&SolvingMethod::LuDecomposition).unwrap();
        assert_eq!(json, "\"lu_decomposition\"");
    }
}
