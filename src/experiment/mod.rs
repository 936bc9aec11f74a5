//! Experiment orchestration and the chart hand-off to renderers.

pub mod runner;
pub mod visualizer;

pub use runner::ExperimentRunner;
pub use visualizer::{Chart, ChartLog, ChartRecorder, ResultVisualizer, Series};
