//! Command implementations

pub mod analyze;
pub mod generate;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use generate::{GenerateSummary, compute_table, run_generate};
pub use simple::{run_session, run_simple};
pub use solve::{GuessStep, SolveConfig, SolveResult, random_target, solve_word};
