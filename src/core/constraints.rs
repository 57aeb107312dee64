//! Knowledge accumulated from scored guesses
//!
//! Every (guess, feedback) pair folds into four facts: letters known absent,
//! letters known present, exact positions, and letters ruled out per position.
//! All updates are unions, so the order in which positions or guesses are
//! recorded never changes the result.

use super::alphabet::{LetterSet, WORD_LENGTH};
use super::{Feedback, Mark, Word};

/// Accumulated constraints for one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    excluded: LetterSet,
    required: LetterSet,
    confirmed: [Option<char>; WORD_LENGTH],
    forbidden: [LetterSet; WORD_LENGTH],
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scored guess into the constraints
    pub fn update(&mut self, guess: &Word, feedback: Feedback) {
        for (position, (&letter, &mark)) in guess.letters().iter().zip(feedback.marks()).enumerate()
        {
            self.record(position, letter, mark);
        }
    }

    /// Record the mark seen for one position
    ///
    /// # Panics
    /// Panics if position >= 5
    pub fn record(&mut self, position: usize, letter: char, mark: Mark) {
        match mark {
            Mark::Hit => {
                self.confirmed[position] = Some(letter);
                self.required.insert(letter);
            }
            Mark::Present => {
                self.required.insert(letter);
                self.forbidden[position].insert(letter);
            }
            Mark::Miss => self.excluded.insert(letter),
        }
    }

    /// Check whether `word` is consistent with everything known
    ///
    /// An excluded letter only rejects a word when it is not also required: a
    /// duplicate guess can mark a letter absent in one position while another
    /// position proves it present.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();

        for (position, &letter) in letters.iter().enumerate() {
            if let Some(fixed) = self.confirmed[position]
                && fixed != letter
            {
                return false;
            }

            if self.forbidden[position].contains(letter) {
                return false;
            }
        }

        if !self.required.is_subset(word.letter_set()) {
            return false;
        }

        letters
            .iter()
            .all(|&letter| !self.excluded.contains(letter) || self.required.contains(letter))
    }

    /// True until the first guess is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[must_use]
    pub const fn required(&self) -> LetterSet {
        self.required
    }

    #[must_use]
    pub const fn confirmed(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.confirmed
    }

    #[must_use]
    pub const fn forbidden(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.forbidden
    }
}
