//! Game session and its random source
//!
//! A [`GameSession`] ties a secret answer to a dictionary, scores guesses,
//! accumulates constraints and offers consistent suggestions.

mod picker;
mod session;

pub use picker::{FirstPicker, Picker, RandomPicker};
pub use session::{GameSession, MAX_ATTEMPTS, Outcome, Turn};

use crate::core::{Word, WordError};
use std::fmt;

/// Reasons a guess (or a chosen answer) is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input is not five letters of the alphabet after normalization
    InvalidInput { input: String, source: WordError },
    WordNotInDictionary(Word),
    AlreadyGuessed(Word),
    /// A guess arrived after the game ended
    GameAlreadyOver,
}

impl GameError {
    /// True for mistakes the player can correct by typing another word
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::GameAlreadyOver)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { input, source } => {
                write!(f, "invalid word '{input}': {source}")
            }
            Self::WordNotInDictionary(word) => write!(f, "word '{word}' is not in the dictionary"),
            Self::AlreadyGuessed(word) => write!(f, "word '{word}' was already guessed"),
            Self::GameAlreadyOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput { source, .. } => Some(source),
            _ => None,
        }
    }
}
