//! Matrix module: the dense linear system type and the banded test-system generator.

pub mod dense;
pub use dense::LinearSystem;
pub mod generator;
pub use generator::{generate_matrix, generate_system, generate_vector};
