//! Entropy-based guess ranking
//!
//! Implements Shannon entropy calculation over outcome buckets and the
//! parallel ranking of every guess word.

mod calculator;
mod ranker;

pub use calculator::{
    OutcomeMetrics, expected_information, outcome_counts, outcome_metrics, shannon_entropy,
};
pub use ranker::{ParallelRanker, Ranking, ScoredWord};
