//! Solver context: the stateful engine around the pure solve functions.

pub mod engine;

pub use engine::{EngineState, LinearSolverEngine};
