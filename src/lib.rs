//! banded-solve: Jacobi, Gauss-Seidel and naive LU over Faer
//!
//! This crate solves dense linear systems with two stationary iterations and a direct
//! LU factorization, generates deterministic pentadiagonal test systems, and compares the
//! methods' convergence and runtime through a small experiment runner.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod experiment;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use crate::core::*;
pub use error::*;
pub use experiment::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;
