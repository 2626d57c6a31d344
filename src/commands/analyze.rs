//! Word analysis command
//!
//! Reports the expected information of a specific guess against the
//! solver's current candidates.

use crate::core::Word;
use crate::solver::Solver;
use crate::solver::entropy::outcome_metrics;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_bucket: usize,
    pub buckets: usize,
    pub total_candidates: usize,
    /// 1-based position in the current ranking
    pub rank: Option<usize>,
}

/// Analyze the expected information of a word against current candidates
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the guess list
pub fn analyze_word(word: &str, solver: &Solver) -> Result<AnalysisResult, String> {
    let word = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    let table = solver.table();
    let guess_id = table
        .guess_id(&word)
        .ok_or_else(|| format!("Word '{word}' not in word list"))?;

    let metrics = outcome_metrics(table, guess_id, solver.candidates());
    let rank = solver
        .ranking()
        .iter()
        .position(|entry| entry.word == word)
        .map(|i| i + 1);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_bucket: metrics.max_bucket,
        buckets: metrics.buckets,
        total_candidates: solver.candidates().len(),
        rank,
    })
}
