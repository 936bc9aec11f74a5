//! Experiment orchestration: feed generated systems through the engine and chart the results.

use crate::config::{ExperimentParams, SolverConfig};
use crate::context::LinearSolverEngine;
use crate::error::{Result, SolverError};
use crate::experiment::visualizer::{Chart, ResultVisualizer};
use crate::matrix::generate_system;
use crate::solver::SolvingMethod;
use crate::utils::convergence::SolverResult;

/// Drives `LinearSolverEngine` over (system, method) pairs.
///
/// A solver error aborts only its own pair: it is logged and that method is skipped.
pub struct ExperimentRunner<V> {
    engine: LinearSolverEngine,
    visualizer: V,
}

impl<V: ResultVisualizer> ExperimentRunner<V> {
    pub fn new(config: SolverConfig, visualizer: V) -> Self {
        Self { engine: LinearSolverEngine::with_config(config), visualizer }
    }

    pub fn visualizer(&self) -> &V {
        &self.visualizer
    }

    pub fn into_visualizer(self) -> V {
        self.visualizer
    }

    /// Residual-vs-iteration comparison on the first size of `params`.
    ///
    /// # Errors
    /// `InvalidParams` if `params.sizes` is empty, `InvalidDimension` for a zero size.
    pub fn run_convergence(&mut self, methods: &[SolvingMethod], params: &ExperimentParams) -> Result<Chart> {
        let n = *params
            .sizes
            .first()
            .ok_or_else(|| SolverError::InvalidParams("`sizes` must not be empty".into()))?;
        let system = generate_system(n, params.a1, params.a2, params.a3, params.f)?;
        log::info!("experiment {} started (n = {n})", params.name);
        log::debug!("generated system:\nA = {:?}\nb = {:?}", system.matrix(), system.rhs());

        let mut chart = Chart::new(format!("{} Experiment", params.name), "Iteration", "Residual Norm")
            .with_log_axes(false, true);
        for &method in methods {
            self.engine.load(system.clone());
            if let Some(result) = self.solve_and_report(method) {
                let label = result.method.unwrap_or(method).to_string();
                chart.push(label, result.history_points());
            }
        }
        self.visualizer.plot(&chart);
        Ok(chart)
    }

    /// Time-to-solve vs. system size, as a linear and a log-scale chart.
    pub fn run_performance(&mut self, methods: &[SolvingMethod], params: &ExperimentParams) -> Result<Vec<Chart>> {
        log::info!("experiment {} started", params.name);
        let mut times: Vec<Vec<(f64, f64)>> = vec![Vec::new(); methods.len()];
        for &n in &params.sizes {
            let system = generate_system(n, params.a1, params.a2, params.a3, params.f)?;
            log::info!("testing performance for matrix size n = {n}");
            log::trace!("generated system:\nA = {:?}\nb = {:?}", system.matrix(), system.rhs());
            for (slot, &method) in times.iter_mut().zip(methods) {
                self.engine.load(system.clone());
                if let Some(result) = self.solve_and_report(method) {
                    slot.push((n as f64, result.elapsed_secs));
                }
            }
        }

        let mut linear = Chart::new("Algorithms Time Comparison", "Matrix Size N", "Time to Solve [s]")
            .with_filename("algorithms_time_comparison");
        for (points, method) in times.into_iter().zip(methods) {
            linear.push(method.to_string(), points);
        }
        let mut log_scale = linear
            .clone()
            .with_filename("algorithms_log_time_comparison")
            .with_log_axes(false, true);
        log_scale.title = format!("{} Experiment", params.name);

        self.visualizer.plot(&linear);
        self.visualizer.plot(&log_scale);
        Ok(vec![linear, log_scale])
    }

    fn solve_and_report(&mut self, method: SolvingMethod) -> Option<SolverResult> {
        match self.engine.solve(method) {
            Ok(result) => {
                let residual = self.engine.residual_norm_l1().unwrap_or(f64::NAN);
                log::info!("{method} time: {}, {method} residual: {residual:e}", result.elapsed_secs);
                Some(result)
            }
            Err(e) => {
                log::error!("{method} failed: {e}");
                None
            }
        }
    }
}
