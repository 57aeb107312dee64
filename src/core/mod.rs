//! Core domain types for the game
//!
//! Pure, synchronous building blocks: normalization, scoring, constraint
//! tracking and candidate filtering. Nothing here performs I/O.

pub mod alphabet;
mod constraints;
mod feedback;
mod filter;
mod word;

pub use alphabet::{LetterSet, WORD_LENGTH};
pub use constraints::Constraints;
pub use feedback::{Feedback, Mark};
pub use filter::filter_candidates;
pub use word::{Word, WordError};
