//! Opening ranking cache
//!
//! The first ranking pass runs against the full answer list and is the same
//! for every session, so it can be computed once and stored as JSON:
//!
//! ```json
//! { "answers": 2315, "fingerprint": 1234567890, "scores": { "SOARE": 5.88, ... } }
//! ```
//!
//! The answer count and fingerprint identify the answer list the scores were
//! computed against; a session refuses a cache made for another list.

use super::entropy::{Ranking, ScoredWord};
use crate::core::Word;
use crate::error::LoadError;
use crate::table::OutcomeTable;
use rustc_hash::FxHashMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// An opening ranking and the answer list it was scored against
#[derive(Debug, Clone, PartialEq)]
pub struct CachedOpening {
    pub answers: usize,
    pub fingerprint: u64,
    pub ranking: Ranking,
}

impl CachedOpening {
    /// Tag `ranking` with the answer list of `table`
    #[must_use]
    pub fn new(table: &OutcomeTable, ranking: Ranking) -> Self {
        Self {
            answers: table.answers().len(),
            fingerprint: table.answer_fingerprint(),
            ranking,
        }
    }

    /// Whether the scores were computed against `table`'s answer list
    #[must_use]
    pub fn matches(&self, table: &OutcomeTable) -> bool {
        self.answers == table.answers().len() && self.fingerprint == table.answer_fingerprint()
    }
}

#[derive(Deserialize)]
struct RawOpening {
    answers: usize,
    fingerprint: u64,
    scores: FxHashMap<String, f64>,
}

#[derive(Serialize)]
struct OpeningView<'a> {
    answers: usize,
    fingerprint: u64,
    scores: ScoresView<'a>,
}

struct ScoresView<'a>(&'a Ranking);

/// Read a cached opening from a JSON file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or is not a valid cache.
pub fn read_opening<P: AsRef<Path>>(path: P) -> Result<CachedOpening, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let opening = opening_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded opening ranking of {} words from {}",
        opening.ranking.len(),
        path.display()
    );
    Ok(opening)
}

/// Parse a cached opening from any JSON source
///
/// # Errors
///
/// Returns `LoadError::Json` for malformed input, `LoadError::InvalidKey`
/// for keys that are not words and `LoadError::InvalidScore` for negative
/// or non-finite scores.
pub fn opening_from_reader<R: Read>(reader: R) -> Result<CachedOpening, LoadError> {
    let raw: RawOpening = serde_json::from_reader(reader)?;
    let entries = raw
        .scores
        .into_iter()
        .map(|(key, bits)| {
            let word = Word::new(&key).map_err(|source| LoadError::InvalidKey { key, source })?;
            if !bits.is_finite() || bits < 0.0 {
                return Err(LoadError::InvalidScore {
                    word: word.to_string(),
                    bits,
                });
            }
            Ok(ScoredWord { word, bits })
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    Ok(CachedOpening {
        answers: raw.answers,
        fingerprint: raw.fingerprint,
        ranking: Ranking::from_scores(entries),
    })
}

/// Write a cached opening to a JSON file, most informative first
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_opening<P: AsRef<Path>>(path: P, opening: &CachedOpening) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    opening_to_writer(&mut writer, opening)?;
    writer.flush()
}

/// Serialize a cached opening as pretty-printed JSON
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn opening_to_writer<W: Write>(writer: W, opening: &CachedOpening) -> std::io::Result<()> {
    let view = OpeningView {
        answers: opening.answers,
        fingerprint: opening.fingerprint,
        scores: ScoresView(&opening.ranking),
    };
    serde_json::to_writer_pretty(writer, &view).map_err(std::io::Error::from)
}

impl Serialize for ScoresView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(entry.word.as_str(), &entry.bits)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_lines;

    fn scored(word: &str, bits: f64) -> ScoredWord {
        ScoredWord {
            word: Word::new(word).unwrap(),
            bits,
        }
    }

    fn opening(ranking: Ranking) -> CachedOpening {
        CachedOpening {
            answers: 2,
            fingerprint: 42,
            ranking,
        }
    }

    #[test]
    fn written_opening_reads_back_in_rank_order() {
        let cached = opening(Ranking::from_scores(vec![
            scored("crane", 1.25),
            scored("slate", 2.5),
            scored("zzzzz", 0.0),
        ]));

        let mut buffer = Vec::new();
        opening_to_writer(&mut buffer, &cached).unwrap();
        let loaded = opening_from_reader(buffer.as_slice()).unwrap();

        assert_eq!(loaded, cached);
    }

    #[test]
    fn reading_sorts_entries() {
        let json = r#"{"answers": 3, "fingerprint": 7,
            "scores": {"zzzzz": 0.0, "aaaaa": 0.5, "crane": 3.0}}"#;
        let cached = opening_from_reader(json.as_bytes()).unwrap();

        let order: Vec<&str> = cached.ranking.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, ["CRANE", "AAAAA", "ZZZZZ"]);
        assert_eq!((cached.answers, cached.fingerprint), (3, 7));
    }

    #[test]
    fn invalid_word_key_is_error() {
        let json = r#"{"answers": 1, "fingerprint": 0, "scores": {"toolong": 1.0}}"#;
        let result = opening_from_reader(json.as_bytes());
        assert!(matches!(result, Err(LoadError::InvalidKey { .. })));
    }

    #[test]
    fn negative_score_is_error() {
        let json = r#"{"answers": 1, "fingerprint": 0, "scores": {"crane": -5.0, "slate": 1.0}}"#;
        let result = opening_from_reader(json.as_bytes());
        assert!(matches!(result, Err(LoadError::InvalidScore { word, .. }) if word == "CRANE"));
    }

    #[test]
    fn bare_score_map_is_error() {
        let result = opening_from_reader(r#"{"crane": 1.0}"#.as_bytes());
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn matches_only_the_scored_answer_list() {
        let guesses = words_from_lines(["crane", "crate", "irate", "slate"]).unwrap();
        let scored_for = OutcomeTable::compute(
            guesses.clone(),
            words_from_lines(["slate", "irate"]).unwrap(),
        )
        .unwrap();
        let other = OutcomeTable::compute(
            guesses,
            words_from_lines(["crate", "irate", "slate", "crane"]).unwrap(),
        )
        .unwrap();

        let cached = CachedOpening::new(&scored_for, Ranking::default());
        assert!(cached.matches(&scored_for));
        assert!(!cached.matches(&other));
    }

    #[test]
    fn missing_file_is_error() {
        assert!(matches!(
            read_opening("definitely/not/here.json"),
            Err(LoadError::Io { .. })
        ));
    }
}
