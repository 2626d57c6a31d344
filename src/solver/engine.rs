//! Main solving session
//!
//! Owns the candidate set and the current ranking for one game. Every
//! observed (guess, outcome) pair shrinks the candidate set and triggers a
//! full re-rank; the previous ranking is discarded.

use super::cache::CachedOpening;
use super::candidates::CandidateSet;
use super::config::SolverConfig;
use super::entropy::{ParallelRanker, Ranking, ScoredWord};
use super::error::SolverError;
use crate::core::{Outcome, Word};
use crate::table::OutcomeTable;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// One game session over a shared outcome table
#[derive(Debug)]
pub struct Solver {
    table: Arc<OutcomeTable>,
    ranker: ParallelRanker,
    opening: Ranking,
    candidates: CandidateSet,
    ranking: Ranking,
    history: Vec<(Word, Outcome)>,
}

impl Solver {
    /// Start a session, computing the opening ranking
    ///
    /// # Errors
    ///
    /// Returns `SolverError::ThreadPool` if the ranking workers cannot start.
    pub fn new(table: Arc<OutcomeTable>, config: &SolverConfig) -> Result<Self, SolverError> {
        let ranker = ParallelRanker::new(config.workers)?;
        let candidates = CandidateSet::full(&table);
        let opening = rank_candidates(&ranker, &table, &candidates);
        Ok(Self::assemble(table, ranker, opening, candidates))
    }

    /// Start a session from a cached opening ranking
    ///
    /// # Errors
    ///
    /// Returns `SolverError::StaleOpening` if `opening` was scored against a
    /// different answer list, `SolverError::OpeningMismatch` if it does not
    /// score exactly the table's guess words, or `SolverError::ThreadPool`.
    pub fn with_opening(
        table: Arc<OutcomeTable>,
        config: &SolverConfig,
        opening: CachedOpening,
    ) -> Result<Self, SolverError> {
        if !opening.matches(&table) {
            return Err(SolverError::StaleOpening);
        }

        let guesses = table.guesses();
        let covered: FxHashSet<Word> = opening.ranking.iter().map(|e| e.word).collect();
        if opening.ranking.len() != guesses.len()
            || covered.len() != guesses.len()
            || !guesses.iter().all(|g| covered.contains(g))
        {
            return Err(SolverError::OpeningMismatch {
                expected: guesses.len(),
                found: covered.len(),
            });
        }

        let ranker = ParallelRanker::new(config.workers)?;
        let candidates = CandidateSet::full(&table);
        let ranking = if candidates.is_solved() {
            rank_candidates(&ranker, &table, &candidates)
        } else {
            opening.ranking
        };
        Ok(Self::assemble(table, ranker, ranking, candidates))
    }

    fn assemble(
        table: Arc<OutcomeTable>,
        ranker: ParallelRanker,
        opening: Ranking,
        candidates: CandidateSet,
    ) -> Self {
        Self {
            table,
            ranker,
            ranking: opening.clone(),
            opening,
            candidates,
            history: Vec::new(),
        }
    }

    /// Apply an observed outcome for `guess`
    ///
    /// # Errors
    ///
    /// Returns `SolverError::UnknownGuess` if `guess` is not in the guess
    /// universe; the session is left unchanged.
    pub fn observe_guess(&mut self, guess: &Word, outcome: Outcome) -> Result<(), SolverError> {
        let guess_id = self
            .table
            .guess_id(guess)
            .ok_or(SolverError::UnknownGuess(*guess))?;

        let candidates = self.candidates.eliminate(&self.table, guess_id, outcome);
        log::debug!(
            "{guess} {outcome}: {} -> {} candidates",
            self.candidates.len(),
            candidates.len()
        );
        if candidates.is_empty() {
            log::warn!("No candidates remain after {guess} {outcome}");
        }

        self.ranking = self.rank(&candidates);
        self.candidates = candidates;
        self.history.push((*guess, outcome));
        Ok(())
    }

    /// Apply an observation given as raw text and outcome code
    ///
    /// Both inputs are validated before anything changes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWord`, `InvalidOutcome` or `UnknownGuess`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use wordle_information::core::Word;
    /// use wordle_information::solver::{Solver, SolverConfig};
    /// use wordle_information::table::OutcomeTable;
    ///
    /// let words: Vec<Word> = ["crane", "slate", "irate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let table = Arc::new(OutcomeTable::compute(words.clone(), words).unwrap());
    /// let mut solver = Solver::new(table, &SolverConfig::new(2)).unwrap();
    ///
    /// solver.observe("slate", 242).unwrap();
    /// assert_eq!(solver.candidate_words(), [Word::new("slate").unwrap()]);
    ///
    /// assert!(solver.observe("slate", 243).is_err());
    /// ```
    pub fn observe(&mut self, guess: &str, code: u16) -> Result<(), SolverError> {
        let guess = Word::new(guess)?;
        let outcome = Outcome::from_code(code)?;
        self.observe_guess(&guess, outcome)
    }

    /// The best `n` guesses of the current ranking (fewer if fewer exist)
    #[must_use]
    pub fn top_recommendations(&self, n: usize) -> &[ScoredWord] {
        self.ranking.top(n)
    }

    /// Forget all observations and start a new game
    ///
    /// Reuses the opening ranking instead of recomputing it.
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::full(&self.table);
        self.ranking = self.opening.clone();
        self.history.clear();
    }

    /// Withdraw the last observation
    ///
    /// Replays the remaining history from the full answer list. Returns the
    /// withdrawn observation, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<(Word, Outcome)> {
        let last = self.history.pop()?;
        let mut candidates = CandidateSet::full(&self.table);
        for (guess, outcome) in &self.history {
            if let Some(guess_id) = self.table.guess_id(guess) {
                candidates = candidates.eliminate(&self.table, guess_id, *outcome);
            }
        }

        self.ranking = if self.history.is_empty() {
            self.opening.clone()
        } else {
            self.rank(&candidates)
        };
        self.candidates = candidates;
        Some(last)
    }

    fn rank(&self, candidates: &CandidateSet) -> Ranking {
        rank_candidates(&self.ranker, &self.table, candidates)
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Remaining candidates as words, in answer-list order
    #[must_use]
    pub fn candidate_words(&self) -> Vec<Word> {
        self.candidates.words(&self.table).copied().collect()
    }

    #[must_use]
    pub const fn ranking(&self) -> &Ranking {
        &self.ranking
    }

    /// The ranking for a fresh game
    #[must_use]
    pub const fn opening(&self) -> &Ranking {
        &self.opening
    }

    /// Observations applied so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Outcome)] {
        &self.history
    }

    #[must_use]
    pub fn table(&self) -> &Arc<OutcomeTable> {
        &self.table
    }
}

/// Rank for a candidate set; a solved set ranks only its last word
fn rank_candidates(
    ranker: &ParallelRanker,
    table: &OutcomeTable,
    candidates: &CandidateSet,
) -> Ranking {
    if candidates.is_solved() {
        let word = *table.answer(candidates.ids()[0]);
        return Ranking::from_scores(vec![ScoredWord { word, bits: 0.0 }]);
    }
    ranker.rank(table, candidates)
}
