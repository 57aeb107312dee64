//! In-memory dictionary of playable words

use super::DictionaryError;
use crate::core::Word;
use crate::game::Picker;
use rustc_hash::FxHashSet;

/// Ordered, duplicate-free list of playable words with O(1) membership
///
/// Never empty: construction fails instead.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, keeping first occurrences in input order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if `words` yields nothing.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty { path: None });
        }

        log::info!("dictionary ready with {} words", words.len());
        Ok(Self { words, index })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw one word using `picker`
    pub fn random_word(&self, picker: &mut impl Picker) -> &Word {
        &self.words[picker.pick(self.words.len())]
    }
}
