//! Gauss-Seidel iteration: a forward sweep where each updated unknown is
//! immediately visible to the rows after it.

use crate::config::SolverConfig;
use crate::error::Result;
use crate::matrix::LinearSystem;
use crate::solver::{LinearSolver, stationary};
use crate::utils::convergence::SolveStats;
use std::fmt;

pub struct GaussSeidelSolver {
    pub config: SolverConfig,
}

impl GaussSeidelSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

impl Default for GaussSeidelSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl fmt::Display for GaussSeidelSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GaussSeidel(lower={:e}, upper={:e}, max_iterations={:?})",
            self.config.bounds.lower, self.config.bounds.upper, self.config.max_iterations
        )
    }
}

impl LinearSolver for GaussSeidelSolver {
    fn solve(&mut self, system: &LinearSystem, x: &mut Vec<f64>) -> Result<SolveStats> {
        let n = system.dim();
        stationary::iterate("Gauss-Seidel", system, &self.config, x, |sys, x| {
            let a = sys.matrix();
            let b = sys.rhs();
            for i in 0..n {
                let mut sigma = 0.0;
                for j in 0..i {
                    sigma += a[(i, j)] * x[j];
                }
                for j in (i + 1)..n {
                    sigma += a[(i, j)] * x[j];
                }
                x[i] = (b[i] - sigma) / a[(i, i)];
            }
        })
    }
}
