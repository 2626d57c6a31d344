//! Outcome table generation
//!
//! Computes every guess × answer outcome from the words themselves. This is
//! the offline step that produces the persisted table; ranking only ever
//! reads the result.

use super::OutcomeTable;
use crate::core::{Outcome, Word};
use crate::error::LoadError;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::time::Instant;

impl OutcomeTable {
    /// Compute a table directly from word lists
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if either list is empty, the answer list is too
    /// large, or an answer is not also a guess.
    pub fn compute(guesses: Vec<Word>, answers: Vec<Word>) -> Result<Self, LoadError> {
        Self::compute_with_progress(guesses, answers, &ProgressBar::hidden())
    }

    /// Compute a table, advancing `progress` once per guess row
    ///
    /// # Errors
    ///
    /// Same as [`OutcomeTable::compute`].
    pub fn compute_with_progress(
        guesses: Vec<Word>,
        answers: Vec<Word>,
        progress: &ProgressBar,
    ) -> Result<Self, LoadError> {
        let start = Instant::now();
        progress.set_length(guesses.len() as u64);

        let outcomes: Vec<Outcome> = guesses
            .par_iter()
            .flat_map_iter(|guess| {
                progress.inc(1);
                answers
                    .iter()
                    .map(move |answer| Outcome::calculate(guess, answer))
            })
            .collect();
        progress.finish_and_clear();

        let table = Self::from_rows(guesses, answers, outcomes)?;
        log::info!(
            "Computed outcome table {}x{} in {:.2?}",
            table.guesses().len(),
            table.answers().len(),
            start.elapsed()
        );
        Ok(table)
    }
}
