//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkReport, LengthReport, run_benchmark};
pub use solve::{AttemptStep, SolveConfig, SolveReport, solve_target};
