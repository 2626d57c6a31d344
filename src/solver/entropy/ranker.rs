//! Parallel ranking of the whole guess universe
//!
//! The guess universe is split into one contiguous chunk per worker. Each
//! chunk is scored as an independent task on a dedicated rayon pool against
//! the same read-only candidate snapshot, and the chunk results are joined
//! before sorting.

use super::calculator::expected_information;
use crate::core::Word;
use crate::solver::candidates::CandidateSet;
use crate::table::OutcomeTable;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::cmp::Ordering;
use std::ops::Range;
use std::time::Instant;

/// A guess and the information it is expected to reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    /// Expected information in bits, never negative
    pub bits: f64,
}

impl ScoredWord {
    /// Most informative first, then alphabetical
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .bits
            .total_cmp(&self.bits)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Guesses ordered from most to least informative
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    entries: Vec<ScoredWord>,
}

impl Ranking {
    /// Build a ranking from scores in any order
    #[must_use]
    pub fn from_scores(mut entries: Vec<ScoredWord>) -> Self {
        entries.sort_by(ScoredWord::rank_order);
        Self { entries }
    }

    /// The first `n` entries, or all of them if there are fewer
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredWord] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The most informative guess
    #[must_use]
    pub fn best(&self) -> Option<&ScoredWord> {
        self.entries.first()
    }

    /// Score of a specific word
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<f64> {
        self.entries.iter().find(|e| e.word == *word).map(|e| e.bits)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredWord> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredWord;
    type IntoIter = std::slice::Iter<'a, ScoredWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Scores every guess word with a fixed degree of parallelism
#[derive(Debug)]
pub struct ParallelRanker {
    pool: ThreadPool,
    workers: usize,
}

impl ParallelRanker {
    /// Create a ranker backed by `workers` threads (at least one)
    ///
    /// # Errors
    ///
    /// Returns an error if the thread pool cannot be created.
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("ranker-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    /// Number of chunks (and threads) used per ranking pass
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Rank the whole guess universe against `candidates`
    ///
    /// Blocks until every chunk is scored. The result does not depend on the
    /// worker count. An empty candidate set yields an empty ranking since
    /// there is nothing left to discover.
    ///
    /// # Examples
    /// ```
    /// use wordle_information::core::Word;
    /// use wordle_information::solver::CandidateSet;
    /// use wordle_information::solver::entropy::ParallelRanker;
    /// use wordle_information::table::OutcomeTable;
    ///
    /// let words: Vec<Word> = ["aaaaa", "aeros", "slate", "irate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let table = OutcomeTable::compute(words.clone(), words).unwrap();
    ///
    /// let ranking = ParallelRanker::new(2).unwrap().rank(&table, &CandidateSet::full(&table));
    /// assert_eq!(ranking.len(), 4);
    /// assert!(ranking.top(1)[0].bits >= ranking.top(4)[3].bits);
    /// ```
    #[must_use]
    pub fn rank(&self, table: &OutcomeTable, candidates: &CandidateSet) -> Ranking {
        if candidates.is_empty() {
            return Ranking::default();
        }

        let start = Instant::now();
        let chunks = chunk_bounds(table.guesses().len(), self.workers);

        let scored: Vec<Vec<ScoredWord>> = self.pool.install(|| {
            chunks
                .into_par_iter()
                .map(|chunk| score_chunk(table, chunk, candidates))
                .collect()
        });

        let ranking = Ranking::from_scores(scored.concat());
        log::info!(
            "Ranked {} guesses against {} candidates on {} workers in {:.2?}",
            ranking.len(),
            candidates.len(),
            self.workers,
            start.elapsed()
        );
        ranking
    }
}

/// Score one contiguous run of guess ids
fn score_chunk(
    table: &OutcomeTable,
    chunk: Range<usize>,
    candidates: &CandidateSet,
) -> Vec<ScoredWord> {
    chunk
        .map(|guess_id| ScoredWord {
            word: table.guesses()[guess_id],
            bits: expected_information(table, guess_id, candidates),
        })
        .collect()
}

/// Split `0..len` into `parts` contiguous ranges of near-equal size
fn chunk_bounds(len: usize, parts: usize) -> Vec<Range<usize>> {
    (0..parts)
        .map(|i| (len * i / parts)..(len * (i + 1) / parts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::wordlists::words_from_lines;

    fn table() -> OutcomeTable {
        let guesses = words_from_lines([
            "aaaaa", "aeros", "crane", "slate", "irate", "crate", "grate", "trace", "zzzzz",
        ])
        .unwrap();
        let answers = words_from_lines(["slate", "irate", "crate", "grate", "trace"]).unwrap();
        OutcomeTable::compute(guesses, answers).unwrap()
    }

    fn scored(word: &str, bits: f64) -> ScoredWord {
        ScoredWord {
            word: Word::new(word).unwrap(),
            bits,
        }
    }

    #[test]
    fn chunk_bounds_cover_range() {
        for len in [0, 1, 7, 100] {
            for parts in 1..=9 {
                let chunks = chunk_bounds(len, parts);
                assert_eq!(chunks.len(), parts);
                assert_eq!(chunks[0].start, 0);
                assert_eq!(chunks[parts - 1].end, len);
                for pair in chunks.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }
                let sizes: Vec<usize> = chunks.iter().map(ExactSizeIterator::len).collect();
                let max = sizes.iter().max().unwrap();
                let min = sizes.iter().min().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn ranking_sorted_descending_with_alphabetical_ties() {
        let ranking = Ranking::from_scores(vec![
            scored("zzzzz", 0.5),
            scored("crane", 1.5),
            scored("aaaaa", 0.5),
            scored("slate", 2.0),
        ]);

        let order: Vec<&str> = ranking.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, ["SLATE", "CRANE", "AAAAA", "ZZZZZ"]);
    }

    #[test]
    fn top_never_pads() {
        let ranking = Ranking::from_scores(vec![scored("crane", 1.0), scored("slate", 2.0)]);
        assert_eq!(ranking.top(10).len(), 2);
        assert_eq!(ranking.top(1).len(), 1);
        assert!(ranking.top(0).is_empty());
    }

    #[test]
    fn rank_covers_guess_universe() {
        let table = table();
        let ranking = ParallelRanker::new(3)
            .unwrap()
            .rank(&table, &CandidateSet::full(&table));

        assert_eq!(ranking.len(), table.guesses().len());
        for guess in table.guesses() {
            assert!(ranking.get(guess).is_some(), "{guess} missing");
        }
        for pair in ranking.iter().collect::<Vec<_>>().windows(2) {
            assert!(pair[0].bits >= pair[1].bits);
        }
    }

    #[test]
    fn rank_identical_for_any_worker_count() {
        let table = table();
        let candidates = CandidateSet::full(&table);
        let baseline = ParallelRanker::new(1).unwrap().rank(&table, &candidates);

        for workers in [2, 3, 4, 8, 16] {
            let ranking = ParallelRanker::new(workers).unwrap().rank(&table, &candidates);
            assert_eq!(ranking.len(), baseline.len());
            for (a, b) in ranking.iter().zip(&baseline) {
                assert_eq!(a.word, b.word);
                assert_eq!(a.bits.to_bits(), b.bits.to_bits());
            }
        }
    }

    #[test]
    fn rank_is_idempotent() {
        let table = table();
        let candidates = CandidateSet::full(&table);
        let ranker = ParallelRanker::new(4).unwrap();
        assert_eq!(ranker.rank(&table, &candidates), ranker.rank(&table, &candidates));
    }

    #[test]
    fn rank_prefers_diverse_letters() {
        let table = table();
        let ranking = ParallelRanker::new(2)
            .unwrap()
            .rank(&table, &CandidateSet::full(&table));

        let aeros = ranking.get(&Word::new("aeros").unwrap()).unwrap();
        let aaaaa = ranking.get(&Word::new("aaaaa").unwrap()).unwrap();
        assert!(aeros > aaaaa);
        assert_eq!(ranking.get(&Word::new("zzzzz").unwrap()), Some(0.0));
    }

    #[test]
    fn rank_empty_candidates_is_empty() {
        let table = table();
        let zzzzz = table.guess_id(&Word::new("zzzzz").unwrap()).unwrap();
        let empty = CandidateSet::full(&table).eliminate(&table, zzzzz, Outcome::ALL_EXACT);

        let ranking = ParallelRanker::new(2).unwrap().rank(&table, &empty);
        assert!(ranking.is_empty());
        assert!(ranking.top(10).is_empty());
    }

    #[test]
    fn zero_workers_coerced_to_one() {
        let ranker = ParallelRanker::new(0).unwrap();
        assert_eq!(ranker.workers(), 1);
    }
}
