//! Terminal output formatting
//!
//! Display utilities for the text front end and benchmark results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, render_snapshot};
