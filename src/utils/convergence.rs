//! Termination policy & result bookkeeping for the stationary iterations.

use crate::solver::SolvingMethod;
use serde::{Deserialize, Serialize};

/// Open interval `(lower, upper)` the L1 residual must stay inside for iteration to continue.
///
/// Falling to `lower` or below means convergence; reaching `upper` or above means
/// divergence. Both stop the loop, so a non-convergent matrix cannot iterate forever
/// unless its residual oscillates strictly inside the interval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidualBounds {
    pub lower: f64,
    pub upper: f64,
}

impl Default for ResidualBounds {
    fn default() -> Self {
        Self { lower: 1e-9, upper: 1e9 }
    }
}

impl ResidualBounds {
    /// `true` while `lower < res < upper`. NaN is never inside.
    pub fn keep_iterating(&self, res: f64) -> bool {
        self.lower < res && res < self.upper
    }

    pub fn converged(&self, res: f64) -> bool {
        res <= self.lower
    }

    pub fn diverged(&self, res: f64) -> bool {
        res >= self.upper
    }
}

/// Outcome of one solver run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolveStats {
    pub iterations: usize,
    pub final_residual: f64,
    pub converged: bool,
    /// L1 residual after every sweep, in order. Empty for direct solves.
    pub history: Vec<f64>,
}

/// Snapshot handed back to callers after `solve`.
///
/// Values are owned copies; they stay valid after the engine is reloaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolverResult {
    /// Method that produced this result; `None` until a solve has run.
    pub method: Option<SolvingMethod>,
    pub x: Vec<f64>,
    pub iterations: usize,
    pub elapsed_secs: f64,
    pub residual_history: Vec<f64>,
    pub converged: bool,
}

impl SolverResult {
    /// The state right after loading a system of dimension `n`.
    pub fn zeroed(n: usize) -> Self {
        Self { x: vec![0.0; n], ..Self::default() }
    }

    pub(crate) fn from_stats(method: SolvingMethod, x: Vec<f64>, stats: SolveStats, elapsed_secs: f64) -> Self {
        Self {
            method: Some(method),
            x,
            iterations: stats.iterations,
            elapsed_secs,
            residual_history: stats.history,
            converged: stats.converged,
        }
    }

    /// Residual history as `(iteration, residual)` pairs, iterations counted from 1.
    pub fn history_points(&self) -> Vec<(f64, f64)> {
        self.residual_history
            .iter()
            .enumerate()
            .map(|(k, &r)| ((k + 1) as f64, r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_open_on_both_sides() {
        let bounds = ResidualBounds::default();
        assert!(bounds.keep_iterating(1.0));
        assert!(!bounds.keep_iterating(1e-9));
        assert!(!bounds.keep_iterating(1e9));
        assert!(!bounds.keep_iterating(f64::NAN));
        assert!(!bounds.keep_iterating(f64::INFINITY));
        assert!(bounds.converged(0.0));
        assert!(bounds.diverged(f64::INFINITY));
    }

    #[test]
    fn history_points_start_at_one() {
        let r = SolverResult { residual_history: vec![4.0, 2.0], ..SolverResult::zeroed(1) };
        assert_eq!(r.history_points(), vec![(1.0, 4.0), (2.0, 2.0)]);
    }
}
