//! Sweep loop shared by Jacobi and Gauss-Seidel.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::matrix::LinearSystem;
use crate::utils::convergence::SolveStats;

/// Run `sweep` until the L1 residual leaves `config.bounds` (or the optional cap is hit).
///
/// The residual of the initial guess is checked first, so an already-exact guess
/// (e.g. `b = 0`) performs no sweeps.
pub(crate) fn iterate<F>(
    name: &str,
    system: &LinearSystem,
    config: &SolverConfig,
    x: &mut Vec<f64>,
    mut sweep: F,
) -> Result<SolveStats>
where
    F: FnMut(&LinearSystem, &mut Vec<f64>),
{
    if let Some(row) = system.zero_diagonal() {
        return Err(SolverError::SingularDiagonal(row));
    }
    let bounds = config.bounds;
    let mut res = system.residual_norm_l1(x)?;
    let mut stats = SolveStats { final_residual: res, ..SolveStats::default() };

    while bounds.keep_iterating(res) {
        if config.max_iterations.is_some_and(|cap| stats.iterations >= cap) {
            log::debug!("{name}: stopped at iteration cap {}", stats.iterations);
            break;
        }
        sweep(system, x);
        stats.iterations += 1;
        res = system.residual_norm_l1(x)?;
        stats.history.push(res);
        log::trace!("{name}: iteration {} residual {:e}", stats.iterations, res);
    }

    if bounds.diverged(res) || res.is_nan() {
        log::warn!("{name}: diverged after {} iterations (residual {:e})", stats.iterations, res);
    }
    stats.final_residual = res;
    stats.converged = bounds.converged(res);
    Ok(stats)
}
