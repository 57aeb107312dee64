//! Candidate filtering
//!
//! Narrows a word list to the words still consistent with the constraints.

use super::{Constraints, Word};
use rustc_hash::FxHashSet;

/// Keep the words that are unused and admitted by `constraints`
///
/// Input order is preserved. An empty result is not an error: it means no
/// hint can be offered.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wordle_ru::core::{Constraints, Feedback, Word, filter_candidates};
///
/// let words: Vec<Word> = ["герой", "гонец", "книга"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let answer = &words[0];
///
/// let mut constraints = Constraints::new();
/// constraints.update(&words[2], Feedback::score(&words[2], answer));
///
/// let mut used = FxHashSet::default();
/// used.insert(words[2].clone());
///
/// let candidates = filter_candidates(&words, &constraints, &used);
/// assert_eq!(candidates, vec![&words[0]]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    words: &'a [Word],
    constraints: &Constraints,
    used: &FxHashSet<Word>,
) -> Vec<&'a Word> {
    let candidates: Vec<&Word> = words
        .iter()
        .filter(|&word| !used.contains(word) && constraints.admits(word))
        .collect();

    log::debug!(
        "{} of {} words remain as candidates",
        candidates.len(),
        words.len()
    );

    candidates
}
