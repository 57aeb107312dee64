//! Russian alphabet rules
//!
//! Normalization folds case and the `ё` variant into `е`, so every stored word
//! uses the closed 32-letter range `а..=я`. Letters are also indexed into that
//! range to back the [`LetterSet`] bitset.

use std::fmt;

/// Number of letters in every game word
pub const WORD_LENGTH: usize = 5;

/// First letter of the closed alphabet range
pub const FIRST_LETTER: char = 'а';

/// Last letter of the closed alphabet range
pub const LAST_LETTER: char = 'я';

/// Variant letter accepted on input and folded into [`VARIANT_BASE`]
pub const VARIANT_LETTER: char = 'ё';

/// Letter that [`VARIANT_LETTER`] is folded into
pub const VARIANT_BASE: char = 'е';

/// Number of letters in the closed range
pub const ALPHABET_SIZE: usize = 32;

/// Lower-case `raw` and fold `ё` into `е`
///
/// # Examples
/// ```
/// use wordle_ru::core::alphabet::normalize;
///
/// assert_eq!(normalize("ГЕРОЙ"), "герой");
/// assert_eq!(normalize("ЁЛКА"), "елка");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c == VARIANT_LETTER { VARIANT_BASE } else { c })
        .collect()
}

/// Check whether `word` is a well-formed game word once normalized
///
/// True iff the normalized form has exactly [`WORD_LENGTH`] characters and all
/// of them lie in `а..=я`.
#[must_use]
pub fn is_valid_format(word: &str) -> bool {
    let normalized = normalize(word);
    normalized.chars().count() == WORD_LENGTH && normalized.chars().all(is_alphabet_letter)
}

/// Whether `c` lies in the closed range `а..=я`
#[inline]
#[must_use]
pub const fn is_alphabet_letter(c: char) -> bool {
    c >= FIRST_LETTER && c <= LAST_LETTER
}

/// Position of `c` inside the alphabet, or `None` outside `а..=я`
#[inline]
#[must_use]
pub const fn letter_index(c: char) -> Option<usize> {
    if is_alphabet_letter(c) {
        Some((c as u32 - FIRST_LETTER as u32) as usize)
    } else {
        None
    }
}

/// Set of alphabet letters packed into one `u32`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter. Letters outside the alphabet are ignored.
    #[inline]
    pub fn insert(&mut self, c: char) {
        debug_assert!(is_alphabet_letter(c), "letter {c:?} outside alphabet");
        if let Some(index) = letter_index(c) {
            self.0 |= 1 << index;
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, c: char) -> bool {
        match letter_index(c) {
            Some(index) => self.0 & (1 << index) != 0,
            None => false,
        }
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Letters in alphabet order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_SIZE as u32)
            .filter(move |bit| self.0 & (1 << bit) != 0)
            .filter_map(|bit| char::from_u32(FIRST_LETTER as u32 + bit))
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
