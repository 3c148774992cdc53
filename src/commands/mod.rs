//! Command implementations

pub mod benchmark;
pub mod repl;
pub mod solve;

pub use benchmark::{BenchmarkLog, BenchmarkOptions, BenchmarkResult, GameLog, run_benchmark, write_log};
pub use repl::{run_repl, run_repl_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
