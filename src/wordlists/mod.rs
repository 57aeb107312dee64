//! Dictionaries for the game
//!
//! Provides the dictionary type, loaders, and an embedded default word list.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to produce a usable dictionary
///
/// Reported once at startup, before any game session exists.
#[derive(Debug)]
pub enum DictionaryError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: io::Error },
    /// No valid word was found; `path` names the file when there was one
    Empty { path: Option<PathBuf> },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "dictionary file not found: {}", path.display()),
            Self::Io { path, .. } => write!(f, "failed to read dictionary file: {}", path.display()),
            Self::Empty { path: Some(path) } => write!(
                f,
                "dictionary {} contains no valid five-letter words",
                path.display()
            ),
            Self::Empty { path: None } => write!(f, "dictionary contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
