//! Errors returned by a solving session
//!
//! All of them are recoverable: a rejected observation leaves the session
//! exactly as it was.

use crate::core::{OutcomeError, Word, WordError};
use rayon::ThreadPoolBuildError;
use std::fmt;

#[derive(Debug)]
pub enum SolverError {
    /// The guess text is not a valid word
    InvalidWord(WordError),
    /// The guess is a word but not in the guess universe
    UnknownGuess(Word),
    /// The outcome code or string is invalid
    InvalidOutcome(OutcomeError),
    /// A cached opening ranking does not cover the guess universe
    OpeningMismatch { expected: usize, found: usize },
    /// A cached opening ranking was scored against a different answer list
    StaleOpening,
    /// The ranking thread pool could not be started
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::UnknownGuess(word) => write!(f, "'{word}' is not in the guess list"),
            Self::InvalidOutcome(e) => write!(f, "Invalid outcome: {e}"),
            Self::OpeningMismatch { expected, found } => write!(
                f,
                "Opening ranking covers {found} words but the guess list has {expected}"
            ),
            Self::StaleOpening => {
                write!(f, "Opening ranking was computed for a different answer list")
            }
            Self::ThreadPool(e) => write!(f, "Cannot start ranking workers: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::InvalidOutcome(e) => Some(e),
            Self::ThreadPool(e) => Some(e),
            Self::UnknownGuess(_)
            | Self::OpeningMismatch { .. }
            | Self::StaleOpening => None,
        }
    }
}

impl From<WordError> for SolverError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<OutcomeError> for SolverError {
    fn from(e: OutcomeError) -> Self {
        Self::InvalidOutcome(e)
    }
}

impl From<ThreadPoolBuildError> for SolverError {
    fn from(e: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(e)
    }
}
