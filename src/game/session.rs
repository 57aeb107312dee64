//! One play-through from secret draw to outcome
//!
//! # State Machine
//! `Ongoing` → `Won` when a guess scores all hits, `Ongoing` → `Lost` when the
//! last attempt is spent without a win. `Won` and `Lost` are absorbing.

use super::{GameError, Picker};
use crate::core::{Constraints, Feedback, Word, filter_candidates};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;

/// Attempts granted at the start of every session
pub const MAX_ATTEMPTS: usize = 6;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

/// One accepted guess and the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game against a secret answer
///
/// Owns its constraints and used words; borrows the dictionary. Not meant for
/// concurrent callers: a host sharing a session must serialize access.
pub struct GameSession<'a, P: Picker> {
    dictionary: &'a Dictionary,
    answer: Word,
    picker: P,
    attempts_remaining: usize,
    outcome: Outcome,
    constraints: Constraints,
    used_words: FxHashSet<Word>,
    history: Vec<Turn>,
}

impl<'a, P: Picker> GameSession<'a, P> {
    /// Start a game with a secret drawn from the dictionary by `picker`
    pub fn new(dictionary: &'a Dictionary, mut picker: P) -> Self {
        let answer = dictionary.random_word(&mut picker).clone();
        log::info!("game started with a random answer");
        Self::start(dictionary, answer, picker)
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidInput` if `answer` is malformed and
    /// `GameError::WordNotInDictionary` if it could never be guessed.
    pub fn with_answer(
        dictionary: &'a Dictionary,
        answer: &str,
        picker: P,
    ) -> Result<Self, GameError> {
        let answer = Word::new(answer).map_err(|source| GameError::InvalidInput {
            input: answer.to_string(),
            source,
        })?;
        if !dictionary.contains(&answer) {
            return Err(GameError::WordNotInDictionary(answer));
        }

        log::info!("game started with a chosen answer");
        Ok(Self::start(dictionary, answer, picker))
    }

    fn start(dictionary: &'a Dictionary, answer: Word, picker: P) -> Self {
        log::debug!("secret answer: {answer}");
        Self {
            dictionary,
            answer,
            picker,
            attempts_remaining: MAX_ATTEMPTS,
            outcome: Outcome::Ongoing,
            constraints: Constraints::new(),
            used_words: FxHashSet::default(),
            history: Vec::with_capacity(MAX_ATTEMPTS),
        }
    }

    /// Submit raw user input as a guess
    ///
    /// Checks run in order: game over, format, dictionary membership, reuse.
    /// A rejected guess leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns the matching `GameError` kind when the guess is rejected.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let guess = Word::new(raw).map_err(|source| GameError::InvalidInput {
            input: raw.to_string(),
            source,
        })?;

        if !self.dictionary.contains(&guess) {
            return Err(GameError::WordNotInDictionary(guess));
        }

        if self.used_words.contains(&guess) {
            return Err(GameError::AlreadyGuessed(guess));
        }

        self.attempts_remaining -= 1;
        self.used_words.insert(guess.clone());

        let feedback = Feedback::score(&guess, &self.answer);
        self.constraints.update(&guess, feedback);

        log::info!(
            "guess {guess} -> {feedback} ({} attempts left)",
            self.attempts_remaining
        );
        self.history.push(Turn { guess, feedback });

        if feedback.is_winning() {
            self.outcome = Outcome::Won;
            log::info!("game won in {} attempts", self.attempts_used());
        } else if self.attempts_remaining == 0 {
            self.outcome = Outcome::Lost;
            log::info!("game lost, answer was {}", self.answer);
        }

        Ok(feedback)
    }

    /// Suggest an unused dictionary word consistent with all feedback so far
    ///
    /// Returns `None` once the game is over or when no candidate remains.
    pub fn suggest(&mut self) -> Option<&'a Word> {
        if self.is_over() {
            return None;
        }

        let dictionary: &'a Dictionary = self.dictionary;
        let candidates = filter_candidates(dictionary.words(), &self.constraints, &self.used_words);
        if candidates.is_empty() {
            log::debug!("no candidates left for a suggestion");
            return None;
        }

        let suggestion = candidates[self.picker.pick(candidates.len())];
        log::debug!("suggesting {suggestion}");
        Some(suggestion)
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> usize {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        MAX_ATTEMPTS - self.attempts_remaining
    }

    /// The secret, available only once the game has ended
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.is_over().then_some(&self.answer)
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    #[must_use]
    pub const fn used_words(&self) -> &FxHashSet<Word> {
        &self.used_words
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FirstPicker, RandomPicker};
    use crate::wordlists::loader::words_from_slice;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words_from_slice(words)).unwrap()
    }

    fn five_words() -> Dictionary {
        dictionary(&["герой", "гонец", "слово", "книга", "ручка"])
    }

    fn seven_words() -> Dictionary {
        dictionary(&[
            "герой", "слово", "книга", "ручка", "автор", "город", "гроза",
        ])
    }

    #[test]
    fn session_starts_ongoing_with_full_attempts() {
        let dict = seven_words();
        let game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
        assert_eq!(game.attempts_used(), 0);
        assert!(!game.is_over());
        assert!(!game.is_won());
        assert!(game.revealed_answer().is_none());
        assert!(game.history().is_empty());
        assert!(game.constraints().is_empty());
    }

    #[test]
    fn random_answer_drawn_through_picker() {
        let dict = five_words();
        let mut game = GameSession::new(&dict, FirstPicker);

        // FirstPicker draws the first dictionary word
        assert_eq!(game.submit_guess("герой").unwrap(), Feedback::WINNING);
        assert_eq!(game.revealed_answer().map(Word::text), Some("герой"));
    }

    #[test]
    fn wrong_guess_then_win() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        let feedback = game.submit_guess("книга").unwrap();
        assert_eq!(feedback.to_string(), "---^-");
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert_eq!(game.attempts_remaining(), 5);

        let feedback = game.submit_guess("герой").unwrap();
        assert_eq!(feedback.to_string(), "+++++");
        assert_eq!(game.outcome(), Outcome::Won);
        assert!(game.is_won());
        assert_eq!(game.attempts_used(), 2);

        let guesses: Vec<&str> = game.history().iter().map(|t| t.guess.text()).collect();
        assert_eq!(guesses, vec!["книга", "герой"]);
    }

    #[test]
    fn six_misses_lose_the_game() {
        let dict = seven_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        for guess in ["слово", "книга", "ручка", "автор", "город", "гроза"] {
            assert_eq!(game.outcome(), Outcome::Ongoing);
            game.submit_guess(guess).unwrap();
        }

        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.outcome(), Outcome::Lost);
        assert!(!game.is_won());
        assert_eq!(game.revealed_answer().map(Word::text), Some("герой"));
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let dict = seven_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        for guess in ["слово", "книга", "ручка", "автор", "город"] {
            game.submit_guess(guess).unwrap();
        }
        game.submit_guess("герой").unwrap();

        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.outcome(), Outcome::Won);
    }

    #[test]
    fn guesses_after_game_over_are_rejected() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();
        game.submit_guess("герой").unwrap();

        let err = game.submit_guess("книга").unwrap_err();
        assert_eq!(err, GameError::GameAlreadyOver);
        assert!(!err.is_input_error());
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn invalid_input_is_rejected() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        for bad in ["слон", "словарь", "hello", "", "12345"] {
            let err = game.submit_guess(bad).unwrap_err();
            assert!(matches!(err, GameError::InvalidInput { .. }), "{bad}: {err}");
            assert!(err.is_input_error());
        }
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        let err = game.submit_guess("абвгд").unwrap_err();
        assert_eq!(
            err,
            GameError::WordNotInDictionary(Word::new("абвгд").unwrap())
        );
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn repeated_guess_is_rejected_without_changes() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        game.submit_guess("слово").unwrap();
        let constraints = game.constraints().clone();
        let attempts = game.attempts_remaining();

        let err = game.submit_guess("СЛОВО").unwrap_err();
        assert_eq!(err, GameError::AlreadyGuessed(Word::new("слово").unwrap()));
        assert_eq!(game.attempts_remaining(), attempts);
        assert_eq!(game.constraints(), &constraints);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn guesses_are_normalized() {
        let dict = dictionary(&["герой", "полет"]);
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        game.submit_guess("ПОЛЁТ").unwrap();
        assert!(game.used_words().contains(&Word::new("полет").unwrap()));
    }

    #[test]
    fn with_answer_validates_secret() {
        let dict = five_words();

        assert!(matches!(
            GameSession::with_answer(&dict, "слон", FirstPicker),
            Err(GameError::InvalidInput { .. })
        ));
        assert!(matches!(
            GameSession::with_answer(&dict, "гроза", FirstPicker),
            Err(GameError::WordNotInDictionary(_))
        ));
        assert!(GameSession::with_answer(&dict, "ГЕРОЙ", FirstPicker).is_ok());
    }

    #[test]
    fn suggestion_is_a_dictionary_word() {
        let dict = dictionary(&["герой", "слово", "книга"]);
        let mut game = GameSession::with_answer(&dict, "герой", RandomPicker::seeded(1)).unwrap();

        let suggestion = game.suggest().unwrap();
        assert!(dict.contains(suggestion));
    }

    #[test]
    fn suggestion_respects_feedback_and_used_words() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();

        game.submit_guess("книга").unwrap();
        // Only words with г away from position 3 and no к, н, и, а remain
        let suggestion = game.suggest().unwrap();
        assert_eq!(suggestion.text(), "герой");
    }

    #[test]
    fn no_suggestion_when_pool_exhausted() {
        let dict = dictionary(&["герой", "гонец"]);
        let mut game = GameSession::with_answer(&dict, "гонец", FirstPicker).unwrap();

        game.submit_guess("герой").unwrap();
        assert_eq!(game.suggest().map(Word::text), Some("гонец"));

        let dict = dictionary(&["герой", "слово"]);
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();
        game.submit_guess("слово").unwrap();
        game.submit_guess("герой").unwrap();
        assert!(game.suggest().is_none());
    }

    #[test]
    fn no_suggestion_after_game_over() {
        let dict = five_words();
        let mut game = GameSession::with_answer(&dict, "герой", FirstPicker).unwrap();
        game.submit_guess("герой").unwrap();

        assert!(game.suggest().is_none());
    }

    #[test]
    fn following_suggestions_finishes_the_game() {
        let dict = crate::wordlists::loader::embedded().unwrap();

        for seed in 0..20 {
            let mut game = GameSession::new(&dict, RandomPicker::seeded(seed));
            while let Some(suggestion) = game.suggest() {
                game.submit_guess(suggestion.text()).unwrap();
            }
            assert!(game.is_over(), "seed {seed} stalled");
        }
    }
}
