//! Batch simulation: configuration, the runner, and summary statistics.

pub mod config;
pub mod runner;
pub mod stats;

pub use config::SimulationConfig;
pub use runner::{BatchReport, Progress, Simulator};
pub use stats::BatchSummary;
