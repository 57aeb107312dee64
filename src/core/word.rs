//! Game word representation
//!
//! A Word stores a normalized 5-letter Russian word along with its letter set for fast filtering.

use super::alphabet::{self, LetterSet, WORD_LENGTH};
use std::fmt;

/// A normalized 5-letter word
///
/// Always lower-case with `ё` folded into `е`, every letter in `а..=я`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
    letter_set: LetterSet,
}

/// Error type for malformed words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "word must contain only Russian letters, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw input
    ///
    /// The input is normalized first, so `"ГЕРОЙ"` and `"герой"` produce the
    /// same word.
    ///
    /// # Errors
    /// Returns `WordError` if the normalized text is not exactly 5 characters
    /// or contains a character outside `а..=я`.
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::Word;
    ///
    /// let word = Word::new("Полёт").unwrap();
    /// assert_eq!(word.text(), "полет");
    ///
    /// assert!(Word::new("слон").is_err());
    /// assert!(Word::new("hello").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, WordError> {
        let text = alphabet::normalize(raw);

        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        if let Some(bad) = text.chars().find(|&c| !alphabet::is_alphabet_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let mut letters = [alphabet::FIRST_LETTER; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = c;
        }
        let letter_set = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            letter_set,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: char) -> bool {
        self.letter_set.contains(letter)
    }

    /// Number of times `letter` occurs in the word
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
