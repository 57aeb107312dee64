//! Russian Wordle
//!
//! Game engine for five-letter Russian words: duplicate-aware feedback,
//! accumulated constraints, candidate filtering and hints.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_ru::game::{FirstPicker, GameSession, Outcome};
//! use wordle_ru::wordlists::loader::load_from_str;
//!
//! let dictionary = load_from_str("герой\nгонец\nкнига").unwrap();
//! let mut game = GameSession::with_answer(&dictionary, "герой", FirstPicker).unwrap();
//!
//! let feedback = game.submit_guess("гонец").unwrap();
//! assert_eq!(feedback.to_string(), "+^-^-");
//!
//! game.submit_guess("Герой").unwrap();
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
