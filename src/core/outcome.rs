//! Guess outcome calculation and representation
//!
//! An outcome encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not available in the answer)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The outcome is stored as a single u8 value (0-242). Position 0 (the
//! leftmost letter) is the most significant digit, so position `i`
//! contributes digit × 3^(4 - i) to the total.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Number of distinct outcome codes (3^5)
pub const OUTCOME_COUNT: usize = 243;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Error type for outcome codes and outcome strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    OutOfRange(u16),
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(code) => {
                write!(f, "Outcome code must be in 0..=242, got {code}")
            }
            Self::InvalidLength(len) => {
                write!(f, "Outcome must describe exactly 5 positions, got {len}")
            }
            Self::InvalidSymbol(ch) => write!(f, "Unrecognized outcome symbol '{ch}'"),
        }
    }
}

impl std::error::Error for OutcomeError {}

/// Feedback outcome for a Wordle guess
///
/// Represents the per-position feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible outcomes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome(u8);

impl Outcome {
    /// All exact (the guess is the answer)
    pub const ALL_EXACT: Self = Self(242); // 2×81 + 2×27 + 2×9 + 2×3 + 2

    /// All absent
    pub const ALL_ABSENT: Self = Self(0);

    /// Create an outcome from a raw code
    ///
    /// # Errors
    /// Returns `OutcomeError::OutOfRange` if `code` > 242.
    ///
    /// # Examples
    /// ```
    /// use wordle_information::core::Outcome;
    ///
    /// assert_eq!(Outcome::from_code(242).unwrap(), Outcome::ALL_EXACT);
    /// assert!(Outcome::from_code(243).is_err());
    /// ```
    pub fn from_code(code: u16) -> Result<Self, OutcomeError> {
        u8::try_from(code)
            .ok()
            .filter(|&c| usize::from(c) < OUTCOME_COUNT)
            .map(Self)
            .ok_or(OutcomeError::OutOfRange(code))
    }

    /// Create an outcome from per-position marks, leftmost first
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks.iter().fold(0u8, |code, &mark| code * 3 + mark as u8))
    }

    /// Get the raw outcome code (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Index into an outcome-sized array
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_all_exact(self) -> bool {
        self.0 == Self::ALL_EXACT.0
    }

    /// Decode into per-position marks, leftmost first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in marks.iter_mut().rev() {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count the exact-match positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the present-elsewhere positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Calculate the outcome when `guess` is played and `answer` is the secret
    ///
    /// Used to generate outcome tables; ranking never calls it.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume them from the answer's letter counts
    /// 2. Second pass, left to right: mark present while the letter still has remaining count
    /// 3. Encode as base-3 number
    ///
    /// # Examples
    /// ```
    /// use wordle_information::core::{Mark, Outcome, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let outcome = Outcome::calculate(&guess, &answer);
    ///
    /// use Mark::{Absent, Exact};
    /// assert_eq!(outcome.marks(), [Absent, Absent, Exact, Absent, Exact]);
    /// assert_eq!(outcome.code(), 2 * 9 + 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        for (i, (&g, &a)) in guess.iter().zip(answer.letters()).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
                available[usize::from(g - b'A')] -= 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            let count = &mut available[usize::from(g - b'A')];
            if *count > 0 {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Parse an outcome from a string like "GY-GY", "🟩🟨⬜🟩🟨" or "21021"
    ///
    /// Accepts:
    /// - 'G'/'g'/'2'/🟩 for exact
    /// - 'Y'/'y'/'1'/🟨 for present
    /// - '-'/'_'/'.'/'0'/⬜ for absent
    ///
    /// # Errors
    /// Returns `OutcomeError` if the string does not describe five positions
    /// or contains an unrecognized symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_information::core::Outcome;
    ///
    /// let p1 = Outcome::parse("GY-GY").unwrap();
    /// let p2 = Outcome::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Outcome::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, OutcomeError> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(OutcomeError::InvalidLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LENGTH];
        for (mark, &ch) in marks.iter_mut().zip(&symbols) {
            *mark = match ch {
                'G' | 'g' | '2' | '🟩' => Mark::Exact,
                'Y' | 'y' | '1' | '🟨' => Mark::Present,
                '-' | '_' | '.' | '0' | '⬜' => Mark::Absent,
                other => return Err(OutcomeError::InvalidSymbol(other)),
            };
        }

        Ok(Self::from_marks(marks))
    }

    /// Convert outcome to emoji string, leftmost position first
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Outcome {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[Mark; WORD_LENGTH]> for Outcome {
    fn from(marks: [Mark; WORD_LENGTH]) -> Self {
        Self::from_marks(marks)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            let symbol = match mark {
                Mark::Exact => 'G',
                Mark::Present => 'Y',
                Mark::Absent => '-',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Mark::{Absent, Exact, Present};
    use super::*;

    fn outcome(guess: &str, answer: &str) -> Outcome {
        Outcome::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn all_exact_constant() {
        assert_eq!(Outcome::ALL_EXACT.code(), 242);
        assert!(Outcome::ALL_EXACT.is_all_exact());
        assert_eq!(Outcome::ALL_EXACT.count_exact(), 5);
        assert_eq!(Outcome::ALL_EXACT.marks(), [Exact; 5]);
    }

    #[test]
    fn all_absent() {
        let result = outcome("abcde", "fghij");
        assert_eq!(result, Outcome::ALL_ABSENT);
        assert_eq!(result.count_exact(), 0);
        assert_eq!(result.count_present(), 0);
    }

    #[test]
    fn leftmost_position_is_most_significant() {
        let result = Outcome::from_marks([Exact, Absent, Absent, Absent, Absent]);
        assert_eq!(result.code(), 162);

        let result = Outcome::from_marks([Absent, Absent, Absent, Absent, Present]);
        assert_eq!(result.code(), 1);
    }

    #[test]
    fn marks_roundtrip_every_code() {
        for code in 0..243u16 {
            let outcome = Outcome::from_code(code).unwrap();
            assert_eq!(Outcome::from_marks(outcome.marks()), outcome);
        }
    }

    #[test]
    fn from_code_rejects_out_of_range() {
        assert_eq!(Outcome::from_code(243), Err(OutcomeError::OutOfRange(243)));
        assert_eq!(Outcome::from_code(363), Err(OutcomeError::OutOfRange(363)));
        assert!(Outcome::from_code(0).is_ok());
    }

    #[test]
    fn duplicate_letters_exact_takes_priority() {
        // SPEED vs ERASE: S present, both Es present (ERASE has two), P and D absent
        assert_eq!(
            outcome("speed", "erase").marks(),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exact_consumes_before_present() {
        // ROBOT vs FLOOR: second O is exact, first O claims the remaining O
        assert_eq!(
            outcome("robot", "floor").marks(),
            [Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn duplicate_letters_present_limited_by_remaining_count() {
        // EERIE vs THOSE: only one E in the answer, claimed by the exact at position 4
        assert_eq!(
            outcome("eerie", "those").marks(),
            [Absent, Absent, Absent, Absent, Exact]
        );
        // LLAMA vs HELLO: two Ls available, both claimed left to right
        assert_eq!(
            outcome("llama", "hello").marks(),
            [Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn repeated_guess_letters_against_single_occurrence() {
        assert_eq!(
            outcome("aaaaa", "abbbb").marks(),
            [Exact, Absent, Absent, Absent, Absent]
        );
        assert_eq!(
            outcome("aaaaa", "aaaab").marks(),
            [Exact, Exact, Exact, Exact, Absent]
        );
        assert_eq!(
            outcome("abbbb", "aaaab").marks(),
            [Exact, Absent, Absent, Absent, Exact]
        );
    }

    #[test]
    fn parse_valid() {
        let p1 = Outcome::parse("GYG--").unwrap();
        let p2 = Outcome::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Outcome::parse("gyg__").unwrap();
        let p4 = Outcome::parse("21200").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        // 2×81 + 1×27 + 2×9 = 207
        assert_eq!(p1.code(), 207);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            Outcome::parse("GYGGYX"),
            Err(OutcomeError::InvalidLength(6))
        );
        assert_eq!(Outcome::parse("GYG"), Err(OutcomeError::InvalidLength(3)));
        assert_eq!(
            Outcome::parse("GXGGY"),
            Err(OutcomeError::InvalidSymbol('X'))
        );
        assert!(Outcome::parse("").is_err());
    }

    #[test]
    fn display_and_emoji() {
        let result = Outcome::parse("GY-GY").unwrap();
        assert_eq!(result.to_string(), "GY-GY");
        assert_eq!(result.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn self_outcome_is_all_exact() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(outcome(word, word), Outcome::ALL_EXACT);
        }
    }
}
