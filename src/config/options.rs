//! Solver and experiment configuration.
//!
//! `SolverConfig` carries the termination policy shared by the iterative methods.
//! `ExperimentParams` describes one family of generated systems; the three standard
//! parameter sets are plain constructor functions and can also be loaded from JSON.

use crate::error::{Result, SolverError};
use crate::utils::convergence::ResidualBounds;
use serde::{Deserialize, Serialize};

/// Termination settings for Jacobi and Gauss-Seidel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub bounds: ResidualBounds,
    /// Optional hard cap on sweeps. `None` (the default) iterates until the residual
    /// leaves `bounds`, which never happens if it oscillates strictly inside them.
    #[serde(default)]
    pub max_iterations: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = ResidualBounds { lower, upper };
        self
    }
}

/// Parameters of a generated pentadiagonal experiment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub name: String,
    /// System sizes. Convergence runs use the first entry only.
    pub sizes: Vec<usize>,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub f: f64,
}

impl ExperimentParams {
    /// Strictly diagonally dominant system: both iterations converge.
    pub fn convergent() -> Self {
        Self { name: "Convergence".into(), sizes: vec![1200], a1: 8.0, a2: -1.0, a3: -1.0, f: 1.0 }
    }

    /// Not diagonally dominant: both iterations diverge past the upper bound.
    pub fn non_convergent() -> Self {
        Self { name: "Non Convergence".into(), sizes: vec![1200], a1: 3.0, a2: -1.0, a3: -1.0, f: 1.0 }
    }

    pub fn performance() -> Self {
        Self {
            name: "Performance".into(),
            sizes: vec![100, 300, 500, 1000, 2000, 3000],
            a1: 8.0,
            a2: -1.0,
            a3: -1.0,
            f: 1.0,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| SolverError::InvalidParams(e.to_string()))?;
        if params.sizes.is_empty() {
            return Err(SolverError::InvalidParams("`sizes` must not be empty".into()));
        }
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SolverError::InvalidParams(e.to_string()))
    }
}
