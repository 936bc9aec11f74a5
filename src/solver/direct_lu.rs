//! Direct dense solver: naive LU factorization with forward/backward substitution.
//!
//! The factorization is Doolittle elimination *without pivoting*: `U` starts as a copy of `A`
//! and each row below a pivot has a multiple of the pivot row subtracted from it; the
//! multipliers form the unit lower-triangular `L`. Any zero pivot aborts with `SingularPivot`.
//!
//! # Usage
//! - Suitable for diagonally dominant or positive-definite systems, where naive elimination
//!   is stable.
//! - For general matrices prefer a pivoted factorization (e.g. faer's `FullPivLu`); this
//!   solver deliberately fails on systems that only pivoting would rescue.
//!
//! # References
//! - Golub & Van Loan, Matrix Computations, §3.2

use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;
use crate::solver::LinearSolver;
use crate::utils::convergence::SolveStats;
use faer::Mat;

/// `A = L · U` with `L` unit lower-triangular and `U` upper-triangular.
#[derive(Clone, Debug)]
pub struct LuFactors {
    pub l: Mat<f64>,
    pub u: Mat<f64>,
}

impl LuFactors {
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len != self.dim() {
            return Err(SolverError::DimensionMismatch { expected: self.dim(), found: len });
        }
        Ok(())
    }

    /// Solve `L y = b` by forward substitution. `L` has a unit diagonal, so no division occurs.
    ///
    /// # Errors
    /// `DimensionMismatch` if `b` does not have `dim()` entries.
    pub fn forward_substitute(&self, b: &[f64]) -> Result<Vec<f64>> {
        self.check_len(b.len())?;
        let n = b.len();
        let mut y = vec![0.0; n];
        for i in 0..n {
            let sum: f64 = (0..i).map(|j| self.l[(i, j)] * y[j]).sum();
            y[i] = b[i] - sum;
        }
        Ok(y)
    }

    /// Solve `U x = y` by backward substitution, last row first.
    ///
    /// # Errors
    /// * `DimensionMismatch` if `y` or `x` does not have `dim()` entries.
    /// * `SingularPivot` on a zero diagonal entry of `U`.
    pub fn backward_substitute(&self, y: &[f64], x: &mut [f64]) -> Result<()> {
        self.check_len(y.len())?;
        self.check_len(x.len())?;
        let n = y.len();
        for i in (0..n).rev() {
            let pivot = self.u[(i, i)];
            if pivot == 0.0 {
                return Err(SolverError::SingularPivot(i));
            }
            let sum: f64 = ((i + 1)..n).map(|j| self.u[(i, j)] * x[j]).sum();
            x[i] = (y[i] - sum) / pivot;
        }
        Ok(())
    }
}

/// Factor `a` by Gaussian elimination without pivoting.
///
/// # Errors
/// `SingularPivot(j)` if the pivot `U[j][j]` is zero when row `j` is used to eliminate.
pub fn lu_factorize(a: &Mat<f64>) -> Result<LuFactors> {
    let n = a.nrows();
    let mut u = a.clone();
    let mut l = Mat::<f64>::identity(n, n);
    for i in 1..n {
        for j in 0..i {
            let pivot = u[(j, j)];
            if pivot == 0.0 {
                return Err(SolverError::SingularPivot(j));
            }
            let m = u[(i, j)] / pivot;
            l[(i, j)] = m;
            u[(i, j)] = 0.0;
            for k in (j + 1)..n {
                u[(i, k)] = u[(i, k)] - m * u[(j, k)];
            }
        }
    }
    Ok(LuFactors { l, u })
}

/// LU solver. Keeps the last factorization for reuse with other right-hand sides.
pub struct LuSolver {
    factor: Option<LuFactors>,
}

impl LuSolver {
    /// Create a new LU solver (no factorization yet).
    pub fn new() -> Self {
        LuSolver { factor: None }
    }

    pub fn factors(&self) -> Option<&LuFactors> {
        self.factor.as_ref()
    }

    /// Solve using the cached factorization.
    ///
    /// # Errors
    /// `UninitializedSystem` if no factorization has been computed yet.
    pub fn solve_cached(&self, b: &[f64], x: &mut [f64]) -> Result<()> {
        let factor = self.factor.as_ref().ok_or(SolverError::UninitializedSystem)?;
        let y = factor.forward_substitute(b)?;
        factor.backward_substitute(&y, x)
    }
}

impl Default for LuSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSolver for LuSolver {
    /// Direct solve: no iterations and no residual history are recorded.
    fn solve(&mut self, system: &LinearSystem, x: &mut Vec<f64>) -> Result<SolveStats> {
        self.factor = Some(lu_factorize(system.matrix())?);
        self.solve_cached(system.rhs(), x)?;
        Ok(SolveStats {
            iterations: 0,
            final_residual: system.residual_norm_l1(x)?,
            converged: true,
            history: Vec::new(),
        })
    }
}
