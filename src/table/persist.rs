//! JSON persistence for outcome tables
//!
//! The persisted form is a nested object keyed by guess, then by answer:
//!
//! ```json
//! { "CRANE": { "SLATE": 20, "IRATE": 47 }, "SLATE": { ... } }
//! ```
//!
//! Loading needs the word lists: every guess must have a row and every row
//! must cover every answer. Extra keys are ignored.

use super::{OutcomeTable, WordIndex};
use crate::core::{Outcome, Word};
use crate::error::LoadError;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::time::Instant;

impl OutcomeTable {
    /// Load a persisted table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read or its contents do not
    /// cover `guesses` × `answers`.
    pub fn load<P: AsRef<Path>>(
        path: P,
        guesses: Vec<Word>,
        answers: Vec<Word>,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_reader(BufReader::new(file), guesses, answers)?;
        log::info!("Loaded outcome table from {}", path.display());
        Ok(table)
    }

    /// Read a persisted table from any JSON source
    ///
    /// Codes are streamed straight into the row-major buffer; no
    /// intermediate map of the document is built.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` for malformed input, `MissingGuess` or
    /// `MissingAnswer` for incomplete input, `InvalidKey` for keys that are
    /// not words, and `InvalidOutcome` for codes above 242.
    pub fn from_json_reader<R: Read>(
        reader: R,
        guesses: Vec<Word>,
        answers: Vec<Word>,
    ) -> Result<Self, LoadError> {
        let start = Instant::now();
        let index = WordIndex::build(&guesses, &answers)?;
        let mut rows = RowBuffer::new(&guesses, &answers, &index);

        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        let parsed = (&mut rows)
            .deserialize(&mut deserializer)
            .and_then(|()| deserializer.end());
        if let Err(e) = parsed {
            return Err(rows.failure.take().unwrap_or(LoadError::Json(e)));
        }

        let outcomes = rows.finish()?;
        let table = Self::from_rows(guesses, answers, outcomes)?;
        log::debug!("Parsed outcome table in {:.2?}", start.elapsed());
        Ok(table)
    }

    /// Write the table to a JSON file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()
    }

    /// Serialize the table in the persisted JSON form
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn write_json<W: Write>(&self, writer: W) -> std::io::Result<()> {
        serde_json::to_writer(writer, &TableView(self)).map_err(std::io::Error::from)
    }
}

/// Destination for streamed table entries
///
/// `covered` has one bit per (guess, answer) cell, so completeness can be
/// checked after parsing without keeping the document around.
struct RowBuffer<'a> {
    guesses: &'a [Word],
    answers: &'a [Word],
    index: &'a WordIndex,
    outcomes: Vec<Outcome>,
    covered: Vec<u64>,
    rows_seen: Vec<bool>,
    extra_rows: usize,
    extra_entries: usize,
    /// Domain error that aborted parsing, reported instead of the JSON error
    failure: Option<LoadError>,
}

impl<'a> RowBuffer<'a> {
    fn new(guesses: &'a [Word], answers: &'a [Word], index: &'a WordIndex) -> Self {
        let cells = guesses.len() * answers.len();
        Self {
            guesses,
            answers,
            index,
            outcomes: vec![Outcome::ALL_ABSENT; cells],
            covered: vec![0; cells.div_ceil(64)],
            rows_seen: vec![false; guesses.len()],
            extra_rows: 0,
            extra_entries: 0,
            failure: None,
        }
    }

    /// Record `error` and turn it into a deserializer error to stop parsing
    fn fail<E: de::Error>(&mut self, error: LoadError) -> E {
        let aborted = E::custom(&error);
        self.failure = Some(error);
        aborted
    }

    fn parse_key<E: de::Error>(&mut self, key: String) -> Result<Word, E> {
        Word::new(&key).map_err(|source| self.fail(LoadError::InvalidKey { key, source }))
    }

    fn store<E: de::Error>(&mut self, guess_id: usize, answer: Word, code: u16) -> Result<(), E> {
        let Some(&answer_id) = self.index.answer_index.get(&answer) else {
            self.extra_entries += 1;
            return Ok(());
        };
        let outcome = match Outcome::from_code(code) {
            Ok(outcome) => outcome,
            Err(source) => {
                let guess = self.guesses[guess_id].to_string();
                return Err(self.fail(LoadError::InvalidOutcome {
                    guess,
                    answer: answer.to_string(),
                    source,
                }));
            }
        };

        let cell = guess_id * self.answers.len() + usize::from(answer_id);
        self.outcomes[cell] = outcome;
        self.covered[cell / 64] |= 1_u64 << (cell % 64);
        Ok(())
    }

    /// Check every (guess, answer) cell was present, in word-list order
    fn finish(self) -> Result<Vec<Outcome>, LoadError> {
        for (guess_id, guess) in self.guesses.iter().enumerate() {
            if !self.rows_seen[guess_id] {
                return Err(LoadError::MissingGuess(guess.to_string()));
            }
            for (answer_id, answer) in self.answers.iter().enumerate() {
                let cell = guess_id * self.answers.len() + answer_id;
                if self.covered[cell / 64] & (1_u64 << (cell % 64)) == 0 {
                    return Err(LoadError::MissingAnswer {
                        guess: guess.to_string(),
                        answer: answer.to_string(),
                    });
                }
            }
        }
        if self.extra_rows > 0 || self.extra_entries > 0 {
            log::debug!(
                "Ignored {} rows and {} entries outside the word lists",
                self.extra_rows,
                self.extra_entries
            );
        }
        Ok(self.outcomes)
    }
}

impl<'de> DeserializeSeed<'de> for &mut RowBuffer<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for &mut RowBuffer<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping guess words to rows")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while let Some(key) = map.next_key::<String>()? {
            let guess = self.parse_key::<A::Error>(key)?;
            match self.index.guess_index.get(&guess).copied() {
                Some(guess_id) => {
                    self.rows_seen[guess_id] = true;
                    map.next_value_seed(RowSeed {
                        rows: &mut *self,
                        guess_id,
                    })?;
                }
                None => {
                    self.extra_rows += 1;
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(())
    }
}

/// One guess row: `{"ANSWER": code, ...}`
struct RowSeed<'r, 'a> {
    rows: &'r mut RowBuffer<'a>,
    guess_id: usize,
}

impl<'de> DeserializeSeed<'de> for RowSeed<'_, '_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for RowSeed<'_, '_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping answer words to outcome codes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while let Some(key) = map.next_key::<String>()? {
            let answer = self.rows.parse_key::<A::Error>(key)?;
            let code: u16 = map.next_value()?;
            self.rows.store::<A::Error>(self.guess_id, answer, code)?;
        }
        Ok(())
    }
}

struct TableView<'a>(&'a OutcomeTable);

struct RowView<'a> {
    table: &'a OutcomeTable,
    guess_id: usize,
}

impl Serialize for TableView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let table = self.0;
        let mut map = serializer.serialize_map(Some(table.guesses().len()))?;
        for (guess_id, guess) in table.guesses().iter().enumerate() {
            map.serialize_entry(guess.as_str(), &RowView { table, guess_id })?;
        }
        map.end()
    }
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let answers = self.table.answers();
        let mut map = serializer.serialize_map(Some(answers.len()))?;
        for (answer_id, answer) in answers.iter().enumerate() {
            let outcome = self.table.outcome_at(self.guess_id, answer_id as u16);
            map.serialize_entry(answer.as_str(), &outcome.code())?;
        }
        map.end()
    }
}
