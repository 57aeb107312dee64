//! Command implementations

pub mod autoplay;
pub mod play;
pub mod score;

pub use autoplay::{AutoplayStatistics, GameResult, run_autoplay};
pub use play::run_play;
pub use score::{ScoreResult, score_words};
