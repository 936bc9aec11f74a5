pub mod convergence;

pub use convergence::{ResidualBounds, SolveStats, SolverResult};
