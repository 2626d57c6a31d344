//! Wordle solving session
//!
//! Candidate elimination, expected-information ranking and the session that
//! ties them together.

pub mod cache;
mod candidates;
mod config;
mod engine;
pub mod entropy;
mod error;

pub use candidates::CandidateSet;
pub use config::SolverConfig;
pub use engine::Solver;
pub use entropy::{ParallelRanker, Ranking, ScoredWord};
pub use error::SolverError;
