pub mod options;

pub use options::{ExperimentParams, SolverConfig};
