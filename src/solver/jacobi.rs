//! Jacobi iteration.
//!
//! Splits `A = D + R` and updates every unknown from the previous full iterate:
//! `x_new[i] = (b[i] − (R·x)[i]) / D[i]`.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::matrix::LinearSystem;
use crate::solver::{LinearSolver, stationary};
use crate::utils::convergence::SolveStats;

/// Jacobi solver: x ← D⁻¹ (b − R x)
pub struct JacobiSolver {
    pub config: SolverConfig,
}

impl JacobiSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Default for JacobiSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl LinearSolver for JacobiSolver {
    fn solve(&mut self, system: &LinearSystem, x: &mut Vec<f64>) -> Result<SolveStats> {
        let n = system.dim();
        let mut x_new = vec![0.0; n];
        stationary::iterate("Jacobi", system, &self.config, x, |sys, x| {
            let a = sys.matrix();
            let b = sys.rhs();
            for i in 0..n {
                let off_diag: f64 = (0..n).filter(|&j| j != i).map(|j| a[(i, j)] * x[j]).sum();
                x_new[i] = (b[i] - off_diag) / a[(i, i)];
            }
            std::mem::swap(x, &mut x_new);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::Mat;

    #[test]
    fn jacobi_uses_previous_iterate_only() {
        // One capped sweep from x = 0 must give b / diag regardless of coupling.
        let a = Mat::from_fn(2, 2, |i, j| [[4.0, 1.0], [1.0, 2.0]][i][j]);
        let sys = LinearSystem::new(a, vec![8.0, 4.0]).unwrap();
        let mut solver = JacobiSolver::new(SolverConfig::default().with_max_iterations(1));
        let mut x = vec![0.0; 2];
        let stats = solver.solve(&sys, &mut x).unwrap();
        assert_eq!(stats.iterations, 1);
        assert_eq!(x, vec![2.0, 2.0]);
        assert!(!stats.converged);
    }

    #[test]
    fn jacobi_converges_on_dominant_system() {
        let a = Mat::from_fn(3, 3, |i, j| [[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]][i][j]);
        // x_true = [1,2,3]
        let sys = LinearSystem::new(a, vec![6.0, 10.0, 8.0]).unwrap();
        let mut x = vec![0.0; 3];
        let stats = JacobiSolver::default().solve(&sys, &mut x).unwrap();
        assert!(stats.converged);
        assert!(stats.final_residual <= 1e-9);
        for (xi, ei) in x.iter().zip([1.0, 2.0, 3.0]) {
            assert!((xi - ei).abs() < 1e-8, "xi = {}, expected = {}", xi, ei);
        }
    }

    #[test]
    fn zero_rhs_needs_no_sweep() {
        let sys = LinearSystem::new(Mat::identity(3, 3), vec![0.0; 3]).unwrap();
        let mut x = vec![0.0; 3];
        let stats = JacobiSolver::default().solve(&sys, &mut x).unwrap();
        assert_eq!(stats.iterations, 0);
        assert!(stats.history.is_empty());
        assert!(stats.converged);
    }
}
