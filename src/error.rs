//! Load-time errors
//!
//! Anything that goes wrong while materializing word lists, the outcome
//! table or a cached ranking is fatal for startup and reported as a
//! `LoadError`.

use crate::core::{OutcomeError, WordError};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised while loading persisted solver data
#[derive(Debug)]
pub enum LoadError {
    /// File could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// A word list line is not a valid 5-letter word (line numbers start at 1)
    InvalidWord { line: usize, source: WordError },
    /// A word list contained no words
    EmptyWordList,
    /// A word appears twice in the guess or answer universe
    DuplicateWord(String),
    /// An answer word is missing from the guess universe
    AnswerNotGuessable(String),
    /// The answer universe does not fit the table's answer index type
    TooManyAnswers(usize),
    /// Persisted JSON is malformed
    Json(serde_json::Error),
    /// A key in persisted JSON is not a valid word
    InvalidKey { key: String, source: WordError },
    /// The outcome table has no row for a guess word
    MissingGuess(String),
    /// A guess row has no entry for an answer word
    MissingAnswer { guess: String, answer: String },
    /// A stored outcome code is outside 0..=242
    InvalidOutcome {
        guess: String,
        answer: String,
        source: OutcomeError,
    },
    /// A cached score is negative or not finite
    InvalidScore { word: String, bits: f64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Cannot read {}: {source}", path.display()),
            Self::InvalidWord { line, source } => write!(f, "Line {line}: {source}"),
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::DuplicateWord(word) => write!(f, "Word '{word}' is listed more than once"),
            Self::AnswerNotGuessable(word) => {
                write!(f, "Answer '{word}' is not in the guess list")
            }
            Self::TooManyAnswers(count) => {
                write!(f, "Answer list has {count} words, at most 65535 supported")
            }
            Self::Json(e) => write!(f, "Malformed JSON: {e}"),
            Self::InvalidKey { key, source } => write!(f, "Invalid word key '{key}': {source}"),
            Self::MissingGuess(guess) => write!(f, "Outcome table has no row for '{guess}'"),
            Self::MissingAnswer { guess, answer } => {
                write!(f, "Outcome table row '{guess}' has no entry for '{answer}'")
            }
            Self::InvalidOutcome {
                guess,
                answer,
                source,
            } => write!(f, "Outcome table entry '{guess}'/'{answer}': {source}"),
            Self::InvalidScore { word, bits } => {
                write!(f, "Cached score for '{word}' must be a non-negative number, got {bits}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidWord { source, .. } | Self::InvalidKey { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::InvalidOutcome { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
