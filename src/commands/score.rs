//! Score a single guess against an answer

use crate::core::{Feedback, Word, WordError};

/// Feedback for one guess/answer pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Normalize both words and score `guess` against `answer`
///
/// Dictionary membership is not required.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::score(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_normalized_words() {
        let result = score_words("ГОРКА", "герой").unwrap();

        assert_eq!(result.guess.text(), "горка");
        assert_eq!(result.feedback.to_string(), "+^+--");
    }

    #[test]
    fn words_outside_any_dictionary_are_scored() {
        let result = score_words("абвгд", "дгвба").unwrap();
        assert_eq!(result.feedback.to_string(), "^^+^^");
    }

    #[test]
    fn malformed_words_are_rejected() {
        assert_eq!(score_words("слон", "герой"), Err(WordError::InvalidLength(4)));
        assert!(matches!(
            score_words("герой", "hello"),
            Err(WordError::InvalidCharacter('h'))
        ));
    }
}
