//! Precomputed outcome table
//!
//! Maps every (guess, answer) pair of the two word universes to the outcome
//! the guess would produce against that answer. The table is built once,
//! never mutated, and shared by reference (usually behind an `Arc`) between
//! all ranking workers.
//!
//! Storage is a flat row-major `Vec<Outcome>` (one row per guess). The
//! inverse query, "which answers give this outcome for this guess", is
//! precomputed at construction as per-row answer ids grouped by outcome code,
//! so it is a slice lookup instead of a scan.

mod build;
mod persist;

use crate::core::{OUTCOME_COUNT, Outcome, Word};
use crate::error::LoadError;
use rayon::prelude::*;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHasher};
use std::hash::Hasher;

/// Index of a word in the answer universe
pub type AnswerId = u16;

/// Offsets per guess row: one start per outcome code plus the row end
const OFFSETS_PER_ROW: usize = OUTCOME_COUNT + 1;

/// Read-only (guess, answer) → outcome table
#[derive(Debug)]
pub struct OutcomeTable {
    guesses: Vec<Word>,
    answers: Vec<Word>,
    guess_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, AnswerId>,
    outcomes: Vec<Outcome>,
    by_outcome: Vec<AnswerId>,
    offsets: Vec<u32>,
}

impl OutcomeTable {
    /// Assemble a table from row-major outcomes
    ///
    /// `outcomes[g * answers.len() + a]` is the outcome of `guesses[g]`
    /// against `answers[a]`.
    fn from_rows(
        guesses: Vec<Word>,
        answers: Vec<Word>,
        outcomes: Vec<Outcome>,
    ) -> Result<Self, LoadError> {
        let WordIndex {
            guess_index,
            answer_index,
        } = WordIndex::build(&guesses, &answers)?;
        debug_assert_eq!(outcomes.len(), guesses.len() * answers.len());

        let (by_outcome, offsets) = invert_rows(&outcomes, answers.len());

        Ok(Self {
            guesses,
            answers,
            guess_index,
            answer_index,
            outcomes,
            by_outcome,
            offsets,
        })
    }

    /// Order-independent hash of the answer universe
    ///
    /// Scores computed against the full answer list are only valid for a
    /// table whose fingerprint matches.
    #[must_use]
    pub fn answer_fingerprint(&self) -> u64 {
        let mut sorted = self.answers.clone();
        sorted.sort_unstable();

        let mut hasher = FxHasher::default();
        for word in &sorted {
            hasher.write(word.letters());
        }
        hasher.finish()
    }

    /// All guess words, in load order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// All answer words, in load order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Position of `word` in the guess universe
    #[must_use]
    pub fn guess_id(&self, word: &Word) -> Option<usize> {
        self.guess_index.get(word).copied()
    }

    /// Position of `word` in the answer universe
    #[must_use]
    pub fn answer_id(&self, word: &Word) -> Option<AnswerId> {
        self.answer_index.get(word).copied()
    }

    /// Answer word for an id
    ///
    /// # Panics
    /// Panics if `id` is not a valid answer id for this table.
    #[inline]
    #[must_use]
    pub fn answer(&self, id: AnswerId) -> &Word {
        &self.answers[usize::from(id)]
    }

    /// Outcome of `guess` against `answer`
    ///
    /// Returns `None` if either word is outside its universe.
    ///
    /// # Examples
    /// ```
    /// use wordle_information::core::{Outcome, Word};
    /// use wordle_information::table::OutcomeTable;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let table = OutcomeTable::compute(words.clone(), words.clone()).unwrap();
    ///
    /// assert_eq!(table.lookup(&words[1], &words[1]), Some(Outcome::ALL_EXACT));
    /// ```
    #[must_use]
    pub fn lookup(&self, guess: &Word, answer: &Word) -> Option<Outcome> {
        let guess_id = self.guess_id(guess)?;
        let answer_id = self.answer_id(answer)?;
        Some(self.outcome_at(guess_id, answer_id))
    }

    /// Outcome by ids, the hot-path form of `lookup`
    ///
    /// # Panics
    /// Panics if either id is out of range.
    #[inline]
    #[must_use]
    pub fn outcome_at(&self, guess_id: usize, answer_id: AnswerId) -> Outcome {
        self.outcomes[guess_id * self.answers.len() + usize::from(answer_id)]
    }

    /// Answer ids that produce `outcome` for the guess at `guess_id`
    ///
    /// Ids are in ascending (answer universe) order.
    ///
    /// # Panics
    /// Panics if `guess_id` is out of range.
    #[must_use]
    pub fn ids_with_outcome(&self, guess_id: usize, outcome: Outcome) -> &[AnswerId] {
        let row_offsets = &self.offsets[guess_id * OFFSETS_PER_ROW..][..OFFSETS_PER_ROW];
        let start = row_offsets[outcome.index()] as usize;
        let end = row_offsets[outcome.index() + 1] as usize;
        &self.by_outcome[guess_id * self.answers.len()..][start..end]
    }

    /// Answer words that would produce `outcome` if `guess` were played
    ///
    /// Returns `None` if `guess` is not in the guess universe.
    pub fn words_with_outcome(
        &self,
        guess: &Word,
        outcome: Outcome,
    ) -> Option<impl Iterator<Item = &Word> + '_> {
        let guess_id = self.guess_id(guess)?;
        Some(
            self.ids_with_outcome(guess_id, outcome)
                .iter()
                .map(move |&id| self.answer(id)),
        )
    }
}

/// Word → position maps for both universes
struct WordIndex {
    guess_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, AnswerId>,
}

impl WordIndex {
    /// Index both word lists, rejecting lists no table can be built from
    fn build(guesses: &[Word], answers: &[Word]) -> Result<Self, LoadError> {
        if guesses.is_empty() || answers.is_empty() {
            return Err(LoadError::EmptyWordList);
        }
        if answers.len() > usize::from(AnswerId::MAX) {
            return Err(LoadError::TooManyAnswers(answers.len()));
        }

        let mut guess_index =
            FxHashMap::with_capacity_and_hasher(guesses.len(), FxBuildHasher);
        for (i, &word) in guesses.iter().enumerate() {
            if guess_index.insert(word, i).is_some() {
                return Err(LoadError::DuplicateWord(word.to_string()));
            }
        }

        let mut answer_index =
            FxHashMap::with_capacity_and_hasher(answers.len(), FxBuildHasher);
        for (i, &word) in answers.iter().enumerate() {
            if !guess_index.contains_key(&word) {
                return Err(LoadError::AnswerNotGuessable(word.to_string()));
            }
            if answer_index.insert(word, i as AnswerId).is_some() {
                return Err(LoadError::DuplicateWord(word.to_string()));
            }
        }

        Ok(Self {
            guess_index,
            answer_index,
        })
    }
}

/// Group each row's answer ids by outcome code (a per-row counting sort)
fn invert_rows(outcomes: &[Outcome], row_len: usize) -> (Vec<AnswerId>, Vec<u32>) {
    let rows = outcomes.len() / row_len;
    let mut by_outcome = vec![0 as AnswerId; outcomes.len()];
    let mut offsets = vec![0u32; rows * OFFSETS_PER_ROW];

    by_outcome
        .par_chunks_mut(row_len)
        .zip(offsets.par_chunks_mut(OFFSETS_PER_ROW))
        .zip(outcomes.par_chunks(row_len))
        .for_each(|((ids, row_offsets), row)| {
            for outcome in row {
                row_offsets[outcome.index() + 1] += 1;
            }
            for code in 0..OUTCOME_COUNT {
                row_offsets[code + 1] += row_offsets[code];
            }

            let mut cursor: Vec<u32> = row_offsets[..OUTCOME_COUNT].to_vec();
            for (answer_id, outcome) in row.iter().enumerate() {
                let slot = &mut cursor[outcome.index()];
                ids[*slot as usize] = answer_id as AnswerId;
                *slot += 1;
            }
        });

    (by_outcome, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_lines;

    fn small_table() -> OutcomeTable {
        let guesses = words_from_lines(["crane", "slate", "irate", "crate", "grate", "zzzzz"]).unwrap();
        let answers = words_from_lines(["irate", "crate", "grate", "slate"]).unwrap();
        OutcomeTable::compute(guesses, answers).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn lookup_matches_direct_calculation() {
        let table = small_table();
        for guess in table.guesses() {
            for answer in table.answers() {
                assert_eq!(
                    table.lookup(guess, answer),
                    Some(Outcome::calculate(guess, answer)),
                    "{guess} vs {answer}"
                );
            }
        }
    }

    #[test]
    fn lookup_is_deterministic_and_in_range() {
        let table = small_table();
        for guess in table.guesses() {
            for answer in table.answers() {
                let first = table.lookup(guess, answer).unwrap();
                let second = table.lookup(guess, answer).unwrap();
                assert_eq!(first, second);
                assert!(first.index() < OUTCOME_COUNT);
            }
        }
    }

    #[test]
    fn lookup_outside_universe() {
        let table = small_table();
        assert_eq!(table.lookup(&word("aaaaa"), &word("crate")), None);
        // CRANE is a guess but not an answer
        assert_eq!(table.lookup(&word("slate"), &word("crane")), None);
    }

    #[test]
    fn words_with_outcome_inverts_lookup() {
        let table = small_table();
        for guess in table.guesses() {
            for code in 0..OUTCOME_COUNT as u16 {
                let outcome = Outcome::from_code(code).unwrap();
                let inverse: Vec<Word> = table
                    .words_with_outcome(guess, outcome)
                    .unwrap()
                    .copied()
                    .collect();
                let brute: Vec<Word> = table
                    .answers()
                    .iter()
                    .filter(|a| table.lookup(guess, a) == Some(outcome))
                    .copied()
                    .collect();
                assert_eq!(inverse, brute, "{guess} / {outcome}");
            }
        }
    }

    #[test]
    fn words_with_outcome_all_exact() {
        let table = small_table();
        let exact: Vec<Word> = table
            .words_with_outcome(&word("slate"), Outcome::ALL_EXACT)
            .unwrap()
            .copied()
            .collect();
        assert_eq!(exact, [word("slate")]);

        let none = table
            .words_with_outcome(&word("crane"), Outcome::ALL_EXACT)
            .unwrap()
            .count();
        assert_eq!(none, 0);
    }

    #[test]
    fn words_with_outcome_unknown_guess() {
        let table = small_table();
        assert!(
            table
                .words_with_outcome(&word("aaaaa"), Outcome::ALL_ABSENT)
                .is_none()
        );
    }

    #[test]
    fn duplicate_words_rejected() {
        let guesses = vec![word("crane"), word("slate"), word("crane")];
        let answers = vec![word("slate")];
        let result = OutcomeTable::compute(guesses, answers);
        assert!(matches!(result, Err(LoadError::DuplicateWord(w)) if w == "CRANE"));

        let guesses = vec![word("crane"), word("slate")];
        let answers = vec![word("slate"), word("slate")];
        let result = OutcomeTable::compute(guesses, answers);
        assert!(matches!(result, Err(LoadError::DuplicateWord(w)) if w == "SLATE"));
    }

    #[test]
    fn answer_fingerprint_ignores_order() {
        let guesses = words_from_lines(["crane", "slate", "irate"]).unwrap();
        let forward = OutcomeTable::compute(
            guesses.clone(),
            words_from_lines(["slate", "irate"]).unwrap(),
        )
        .unwrap();
        let backward = OutcomeTable::compute(
            guesses.clone(),
            words_from_lines(["irate", "slate"]).unwrap(),
        )
        .unwrap();
        let other =
            OutcomeTable::compute(guesses, words_from_lines(["crane", "irate"]).unwrap()).unwrap();

        assert_eq!(forward.answer_fingerprint(), backward.answer_fingerprint());
        assert_ne!(forward.answer_fingerprint(), other.answer_fingerprint());
    }

    #[test]
    fn answers_must_be_guessable() {
        let guesses = words_from_lines(["crane"]).unwrap();
        let answers = words_from_lines(["slate"]).unwrap();
        let result = OutcomeTable::compute(guesses, answers);
        assert!(matches!(result, Err(LoadError::AnswerNotGuessable(w)) if w == "SLATE"));
    }
}
