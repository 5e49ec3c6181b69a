//! Command implementations

pub mod benchmark;
pub mod corpus;
pub mod rank;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use corpus::build_commonality;
pub use rank::{RankResult, rank_word};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, TurnReport, solve_word};
