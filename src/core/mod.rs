//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words and outcomes are small `Copy` values with fixed dimensions.

mod outcome;
mod word;

pub use outcome::{Mark, OUTCOME_COUNT, Outcome, OutcomeError};
pub use word::{WORD_LENGTH, Word, WordError};
