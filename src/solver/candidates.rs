//! Candidate set: answers still consistent with every observed outcome

use crate::core::{Outcome, Word};
use crate::table::{AnswerId, OutcomeTable};
use rustc_hash::FxHashSet;

/// Answers that could still be the secret, in answer-universe order
///
/// Only ever shrinks: the sole way to derive a new set is [`CandidateSet::eliminate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    ids: Vec<AnswerId>,
}

impl CandidateSet {
    /// Every answer in the table
    #[must_use]
    pub fn full(table: &OutcomeTable) -> Self {
        Self {
            ids: (0..table.answers().len()).map(|i| i as AnswerId).collect(),
        }
    }

    /// A set of specific answers, in the order given
    ///
    /// Returns `None` if any word is not in the answer universe.
    #[must_use]
    pub fn from_words(table: &OutcomeTable, words: &[Word]) -> Option<Self> {
        let ids = words
            .iter()
            .map(|w| table.answer_id(w))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { ids })
    }

    /// Answer ids in the set
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[AnswerId] {
        &self.ids
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Exactly one answer remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.ids.len() == 1
    }

    /// Resolve the set to words
    pub fn words<'a>(&'a self, table: &'a OutcomeTable) -> impl Iterator<Item = &'a Word> + 'a {
        self.ids.iter().map(move |&id| table.answer(id))
    }

    /// Check whether `word` is still a candidate
    #[must_use]
    pub fn contains(&self, table: &OutcomeTable, word: &Word) -> bool {
        table
            .answer_id(word)
            .is_some_and(|id| self.ids.contains(&id))
    }

    /// Keep only the answers for which `guess_id` produces `outcome`
    ///
    /// Runs in time linear in the current set size (plus the size of the
    /// allowed bucket), preserving relative order. An empty result is valid:
    /// it means the observations contradict each other.
    ///
    /// # Panics
    /// Panics if `guess_id` is not a guess id of `table`.
    #[must_use]
    pub fn eliminate(&self, table: &OutcomeTable, guess_id: usize, outcome: Outcome) -> Self {
        let allowed: FxHashSet<AnswerId> = table
            .ids_with_outcome(guess_id, outcome)
            .iter()
            .copied()
            .collect();

        Self {
            ids: self
                .ids
                .iter()
                .copied()
                .filter(|id| allowed.contains(id))
                .collect(),
        }
    }
}
