//! Dictionary loading utilities
//!
//! Provides functions to build a dictionary from files, text, or the embedded list.
//! Lines are trimmed and normalized; anything that is not a well-formed word is skipped.

use super::{Dictionary, DictionaryError, WORDS};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a UTF-8 file with one word per line
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if the file does not exist,
/// `DictionaryError::Io` if it cannot be read, and `DictionaryError::Empty`
/// if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use wordle_ru::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words_ru.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    log::info!("loading dictionary from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
        _ => DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    load_from_str(&content).map_err(|err| match err {
        DictionaryError::Empty { .. } => DictionaryError::Empty {
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// Build a dictionary from newline-separated text
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if no line holds a valid word.
///
/// # Examples
/// ```
/// use wordle_ru::wordlists::loader::load_from_str;
///
/// let dictionary = load_from_str("Герой\nслон\nёжики\n").unwrap();
/// assert_eq!(dictionary.len(), 2);
/// ```
pub fn load_from_str(text: &str) -> Result<Dictionary, DictionaryError> {
    Dictionary::new(words_from_lines(text.lines()))
}

/// The dictionary compiled into the binary
///
/// # Errors
///
/// Returns `DictionaryError::Empty` only if the embedded list was built empty.
pub fn embedded() -> Result<Dictionary, DictionaryError> {
    Dictionary::new(words_from_slice(WORDS))
}

/// Convert string slices to words, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied()).collect()
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> impl Iterator<Item = Word> {
    lines.filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    })
}
