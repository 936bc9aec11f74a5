//! Stateful solver context holding one linear system at a time.
//!
//! `LinearSolverEngine` is an explicit state machine:
//!
//! - `Empty` → `load_system` → `Loaded`
//! - `Loaded` → `solve` → `Solved`
//! - `Solved` → `load_system` → `Loaded` (a new system, all results reset)
//!
//! Solving while `Empty` fails with `UninitializedSystem`. Every solve starts from the
//! zero vector, so nothing carries over between runs. A failed solve leaves the engine
//! `Loaded` with the zeroed result.
//!
//! # Usage
//!
//! 1. Build or generate `A` and `b`, then call `load_system`.
//! 2. Call `solve` with a `SolvingMethod`, and read the snapshot or the accessors.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;
use crate::solver::{self, SolvingMethod};
use crate::utils::convergence::SolverResult;
use faer::Mat;

/// Lifecycle stage of a `LinearSolverEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No system loaded yet.
    Empty,
    /// A system is loaded and results are at their initial values.
    Loaded,
    /// The last `solve` succeeded; results hold its output.
    Solved,
}

/// Engine wrapping the pure `solver::solve` with load/solve bookkeeping.
#[derive(Debug, Default)]
pub struct LinearSolverEngine {
    config: SolverConfig,
    system: Option<LinearSystem>,
    result: SolverResult,
    solved: bool,
}

impl LinearSolverEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        match (&self.system, self.solved) {
            (None, _) => EngineState::Empty,
            (Some(_), false) => EngineState::Loaded,
            (Some(_), true) => EngineState::Solved,
        }
    }

    /// Store `A x = b` of declared dimension `n` and reset every result field.
    ///
    /// # Errors
    /// `InvalidDimension` for `n == 0`, `DimensionMismatch` if `a` or `b` disagree with `n`.
    pub fn load_system(&mut self, a: Mat<f64>, b: Vec<f64>, n: usize) -> Result<()> {
        self.load(LinearSystem::with_dimension(a, b, n)?);
        Ok(())
    }

    /// Take ownership of an already validated system and reset every result field.
    pub fn load(&mut self, system: LinearSystem) {
        self.result = SolverResult::zeroed(system.dim());
        self.solved = false;
        self.system = Some(system);
    }

    /// Run `method` on the loaded system and return a snapshot of the result.
    ///
    /// # Errors
    /// * `UninitializedSystem` if nothing is loaded.
    /// * `SingularDiagonal` / `SingularPivot` from the solver.
    pub fn solve(&mut self, method: SolvingMethod) -> Result<SolverResult> {
        let system = self.system.as_ref().ok_or(SolverError::UninitializedSystem)?;
        self.result = SolverResult::zeroed(system.dim());
        self.solved = false;
        let result = solver::solve(system, method, &self.config)?;
        self.result = result.clone();
        self.solved = true;
        Ok(result)
    }

    /// ‖A x − b‖₁ for the engine's current `x`.
    pub fn residual_norm_l1(&self) -> Result<f64> {
        let system = self.system.as_ref().ok_or(SolverError::UninitializedSystem)?;
        system.residual_norm_l1(&self.result.x)
    }

    /// ‖A x − b‖₂ for the engine's current `x`.
    pub fn residual_norm_l2(&self) -> Result<f64> {
        let system = self.system.as_ref().ok_or(SolverError::UninitializedSystem)?;
        system.residual_norm_l2(&self.result.x)
    }

    pub fn system(&self) -> Option<&LinearSystem> {
        self.system.as_ref()
    }

    /// Last result; zeroed after `load_system`.
    pub fn result(&self) -> &SolverResult {
        &self.result
    }

    pub fn solution(&self) -> &[f64] {
        &self.result.x
    }

    pub fn iterations(&self) -> usize {
        self.result.iterations
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.result.elapsed_secs
    }

    pub fn residual_history(&self) -> &[f64] {
        &self.result.residual_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diag_system(n: usize) -> (Mat<f64>, Vec<f64>) {
        let a = Mat::from_fn(n, n, |i, j| if i == j { 2.0 } else { 0.0 });
        (a, vec![1.0; n])
    }

    #[test]
    fn state_transitions() {
        let mut engine = LinearSolverEngine::new();
        assert_eq!(engine.state(), EngineState::Empty);
        assert_eq!(engine.solve(SolvingMethod::Jacobi).unwrap_err(), SolverError::UninitializedSystem);
        assert_eq!(engine.residual_norm_l1().unwrap_err(), SolverError::UninitializedSystem);

        let (a, b) = diag_system(3);
        engine.load_system(a, b, 3).unwrap();
        assert_eq!(engine.state(), EngineState::Loaded);
        assert_eq!(engine.system().map(LinearSystem::dim), Some(3));

        engine.solve(SolvingMethod::GaussSeidel).unwrap();
        assert_eq!(engine.state(), EngineState::Solved);

        let (a, b) = diag_system(2);
        engine.load_system(a, b, 2).unwrap();
        assert_eq!(engine.state(), EngineState::Loaded);
    }

    #[test]
    fn configured_cap_applies_to_every_solve() {
        let mut engine = LinearSolverEngine::with_config(SolverConfig::default().with_max_iterations(2));
        assert_eq!(engine.config().max_iterations, Some(2));
        let a = Mat::from_fn(3, 3, |i, j| if i == j { 4.0 } else { 1.0 });
        engine.load_system(a, vec![1.0, 2.0, 3.0], 3).unwrap();
        let result = engine.solve(SolvingMethod::Jacobi).unwrap();
        assert_eq!(result.iterations, 2);
        assert!(!result.converged);
        assert!(engine.system().is_some());
    }

    #[test]
    fn loaded_residual_is_norm_of_rhs() {
        let mut engine = LinearSolverEngine::new();
        let (a, b) = diag_system(4);
        engine.load_system(a, b, 4).unwrap();
        assert_eq!(engine.residual_norm_l1().unwrap(), 4.0);
        assert_eq!(engine.residual_norm_l2().unwrap(), 2.0);
    }

    #[test]
    fn failed_solve_leaves_engine_loaded() {
        let mut engine = LinearSolverEngine::new();
        let a = Mat::from_fn(2, 2, |i, j| if i == j { 0.0 } else { 1.0 });
        engine.load_system(a, vec![1.0, 1.0], 2).unwrap();
        assert_eq!(engine.solve(SolvingMethod::Jacobi).unwrap_err(), SolverError::SingularDiagonal(0));
        assert_eq!(engine.state(), EngineState::Loaded);
        assert_eq!(engine.solution(), &[0.0, 0.0]);
    }

    #[test]
    fn invalid_loads_are_rejected_without_state_change() {
        let mut engine = LinearSolverEngine::new();
        assert_eq!(
            engine.load_system(Mat::zeros(0, 0), vec![], 0).unwrap_err(),
            SolverError::InvalidDimension(0)
        );
        let (a, b) = diag_system(3);
        assert!(engine.load_system(a, b, 4).is_err());
        assert_eq!(engine.state(), EngineState::Empty);
    }
}
