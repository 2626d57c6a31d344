//! Word list loading utilities
//!
//! Word lists are flat text, one word per line. Entries are trimmed,
//! uppercased and de-duplicated (first occurrence wins).

use crate::core::Word;
use crate::error::LoadError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, a non-blank line is not a
/// valid 5-letter word, or the file holds no words.
///
/// # Examples
/// ```no_run
/// use wordle_information::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines())?;
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert lines of text to a de-duplicated Word vector
///
/// # Errors
///
/// Returns `LoadError::InvalidWord` for the first bad line and
/// `LoadError::EmptyWordList` if no words remain.
///
/// # Examples
/// ```
/// use wordle_information::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["crane", "SLATE", "crane"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].as_str(), "CRANE");
/// ```
pub fn words_from_lines<'a, I>(lines: I) -> Result<Vec<Word>, LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|source| LoadError::InvalidWord {
            line: idx + 1,
            source,
        })?;

        if seen.insert(word) {
            words.push(word);
        } else {
            log::debug!("Skipping duplicate word {word} on line {}", idx + 1);
        }
    }

    if words.is_empty() {
        return Err(LoadError::EmptyWordList);
    }

    Ok(words)
}
