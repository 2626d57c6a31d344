//! Shannon entropy calculation for guess outcomes
//!
//! Given a guess and the candidate set, computes the expected information
//! gain by bucketing candidates on the outcome the guess would produce.

use crate::core::OUTCOME_COUNT;
use crate::solver::candidates::CandidateSet;
use crate::table::{AnswerId, OutcomeTable};

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining candidates)
    pub max_bucket: usize,
    /// Number of distinct outcomes the guess can produce
    pub buckets: usize,
}

/// Count candidates per outcome code for one guess
#[must_use]
pub fn outcome_counts(
    table: &OutcomeTable,
    guess_id: usize,
    candidates: &[AnswerId],
) -> [u32; OUTCOME_COUNT] {
    let mut counts = [0u32; OUTCOME_COUNT];
    for &answer_id in candidates {
        counts[table.outcome_at(guess_id, answer_id).index()] += 1;
    }
    counts
}

/// Expected information, in bits, of playing the guess at `guess_id`
///
/// Zero when fewer than two candidates remain or when every candidate
/// lands in the same bucket; `log2(N)` when all N candidates are separated.
///
/// # Panics
/// Panics if `guess_id` is not a guess id of `table`.
///
/// # Examples
/// ```
/// use wordle_information::core::Word;
/// use wordle_information::solver::CandidateSet;
/// use wordle_information::solver::entropy::expected_information;
/// use wordle_information::table::OutcomeTable;
///
/// let words: Vec<Word> = ["slate", "irate"].iter().map(|w| Word::new(w).unwrap()).collect();
/// let table = OutcomeTable::compute(words.clone(), words).unwrap();
/// let candidates = CandidateSet::full(&table);
///
/// let bits = expected_information(&table, 0, &candidates);
/// assert!((bits - 1.0).abs() < 1e-12); // perfect binary split
/// ```
#[must_use]
pub fn expected_information(table: &OutcomeTable, guess_id: usize, candidates: &CandidateSet) -> f64 {
    shannon_entropy(&outcome_counts(table, guess_id, candidates.ids()))
}

/// Calculate Shannon entropy from bucket sizes
///
/// H = Σ p * log₂(1/p) over non-empty buckets
///
/// Buckets are visited in slice order, so the result for a given histogram
/// is bit-for-bit reproducible.
///
/// # Properties
/// - Returns 0.0 for certain outcome (one bucket with p=1) or no data
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n non-empty buckets
///
/// # Examples
/// ```
/// use wordle_information::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy(&[25, 0, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            p * (total / f64::from(count)).log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and bucket shape.
pub fn outcome_metrics(
    table: &OutcomeTable,
    guess_id: usize,
    candidates: &CandidateSet,
) -> OutcomeMetrics {
    if candidates.is_empty() {
        return OutcomeMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_bucket: 0,
            buckets: 0,
        };
    }

    let counts = outcome_counts(table, guess_id, candidates.ids());
    let total = candidates.len() as f64;

    // Σ p * n = Σ n² / N
    let expected_remaining = counts
        .iter()
        .map(|&n| f64::from(n) * f64::from(n))
        .sum::<f64>()
        / total;

    OutcomeMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_bucket: counts.iter().max().map_or(0, |&n| n as usize),
        buckets: counts.iter().filter(|&&n| n > 0).count(),
    }
}
