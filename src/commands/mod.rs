//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkOptions, BenchmarkResult, GameRecord, play_game, run_benchmark};
pub use simple::{SimpleCommand, parse_command, run_simple, run_simple_with, submit_word};
