//! Feedback calculation and representation
//!
//! Feedback holds one [`Mark`] per position. Its text form uses one symbol per
//! position:
//! - `+` = Hit (letter in the correct position)
//! - `^` = Present (letter in the word, wrong position)
//! - `-` = Miss (letter absent, or all its occurrences already accounted for)

use super::Word;
use super::alphabet::WORD_LENGTH;
use std::fmt;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Hit,
    Present,
    Miss,
}

impl Mark {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => '+',
            Self::Present => '^',
            Self::Miss => '-',
        }
    }

    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' | '🟩' => Some(Self::Hit),
            '^' | '🟨' => Some(Self::Present),
            '-' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All hits
    pub const WINNING: Self = Self([Mark::Hit; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is a hit
    #[inline]
    #[must_use]
    pub fn is_winning(self) -> bool {
        self == Self::WINNING
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Duplicate letters are handled with two passes:
    /// 1. Exact position matches become hits and consume both positions
    /// 2. Every remaining guess letter takes the leftmost unconsumed occurrence
    ///    in the answer, becoming present, or becomes a miss if none is left
    ///
    /// # Examples
    /// ```
    /// use wordle_ru::core::{Feedback, Word};
    ///
    /// let guess = Word::new("гонец").unwrap();
    /// let answer = Word::new("герой").unwrap();
    ///
    /// assert_eq!(Feedback::score(&guess, &answer).to_string(), "+^-^-");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut answer_used = [false; WORD_LENGTH];

        // First pass: hits
        // Allow: index needed to compare guess[i] with answer[i] and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                marks[i] = Mark::Hit;
                answer_used[i] = true;
            }
        }

        // Second pass: leftmost unconsumed occurrence
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Hit {
                continue;
            }
            let found = (0..WORD_LENGTH).find(|&j| !answer_used[j] && answer[j] == guess[i]);
            if let Some(j) = found {
                marks[i] = Mark::Present;
                answer_used[j] = true;
            }
        }

        Self(marks)
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as colored-square emoji, e.g. "🟩🟨⬜🟨⬜"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Hit => '🟩',
                Mark::Present => '🟨',
                Mark::Miss => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse "+^-^-" or the emoji form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<Mark> = s
            .trim()
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        let marks: [Mark; WORD_LENGTH] = marks
            .try_into()
            .map_err(|_| format!("Feedback must have {WORD_LENGTH} symbols: {s}"))?;

        Ok(Self(marks))
    }
}
