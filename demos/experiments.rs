//! Runs the standard convergence and performance experiments and logs the resulting charts.
//!
//! `BANDED_SOLVE_LOG=info cargo run --release --example experiments`

use banded_solve::{ChartLog, ExperimentParams, ExperimentRunner, SolverConfig, SolvingMethod};

fn main() -> Result<(), banded_solve::SolverError> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("BANDED_SOLVE_LOG", "info")).init();

    let iterative = [SolvingMethod::Jacobi, SolvingMethod::GaussSeidel];
    let mut runner = ExperimentRunner::new(SolverConfig::default(), ChartLog);

    runner.run_convergence(&iterative, &ExperimentParams::convergent())?;
    runner.run_convergence(&iterative, &ExperimentParams::non_convergent())?;
    let lu = runner.run_convergence(&[SolvingMethod::LuDecomposition], &ExperimentParams::non_convergent())?;
    println!("LU on the non-convergent system: {} series", lu.series.len());

    let charts = runner.run_performance(&SolvingMethod::ALL, &ExperimentParams::performance())?;
    for chart in &charts {
        println!("{} -> {}", chart.title, chart.filename);
        for s in &chart.series {
            println!("  {}: {:?}", s.label, s.points);
        }
    }
    Ok(())
}
