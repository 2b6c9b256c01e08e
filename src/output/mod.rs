//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_report, print_solve_report};
pub use formatters::{distribution_bar, feedback_marks};
