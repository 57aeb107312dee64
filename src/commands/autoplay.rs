//! Computer self-play across many secrets
//!
//! Each game follows the session's own suggestions until it ends, so the
//! statistics measure how quickly the hint engine converges.

use crate::core::Word;
use crate::game::{GameSession, MAX_ATTEMPTS, RandomPicker};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// How a single self-played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won { guesses: usize },
    Lost,
    /// No suggestion was available before the game ended
    Stalled,
}

/// Aggregated self-play results
#[derive(Debug, Clone)]
pub struct AutoplayStatistics {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub stalled: usize,
    /// `distribution[n - 1]` counts games won with `n` guesses
    pub distribution: [usize; MAX_ATTEMPTS],
    pub average_guesses: f64,
    pub duration: Duration,
}

impl AutoplayStatistics {
    fn from_results(results: &[GameResult], duration: Duration) -> Self {
        let mut distribution = [0; MAX_ATTEMPTS];
        let mut lost = 0;
        let mut stalled = 0;

        for result in results {
            match *result {
                GameResult::Won { guesses } => distribution[guesses - 1] += 1,
                GameResult::Lost => lost += 1,
                GameResult::Stalled => stalled += 1,
            }
        }

        let won: usize = distribution.iter().sum();
        let total_guesses: usize = distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        let average_guesses = if won > 0 {
            total_guesses as f64 / won as f64
        } else {
            0.0
        };

        Self {
            games: results.len(),
            won,
            lost,
            stalled,
            distribution,
            average_guesses,
            duration,
        }
    }

    /// Share of games won, in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64 * 100.0
        }
    }
}

/// Play one game per secret, always submitting the session's suggestion
///
/// Game `i` draws its suggestions from a picker seeded with `seed + i`, so a
/// run is reproducible regardless of thread scheduling.
#[must_use]
pub fn run_autoplay(
    dictionary: &Dictionary,
    secrets: &[Word],
    seed: u64,
    progress: bool,
) -> AutoplayStatistics {
    log::info!("autoplaying {} games", secrets.len());

    let pb = if progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<GameResult> = secrets
        .par_iter()
        .enumerate()
        .map(|(index, secret)| {
            let result = play_one(dictionary, secret, seed.wrapping_add(index as u64));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let stats = AutoplayStatistics::from_results(&results, start.elapsed());
    log::info!(
        "autoplay finished: {} won, {} lost, {} stalled",
        stats.won,
        stats.lost,
        stats.stalled
    );
    stats
}

/// Self-play a single game against `secret`
#[must_use]
pub fn play_one(dictionary: &Dictionary, secret: &Word, seed: u64) -> GameResult {
    let mut session =
        match GameSession::with_answer(dictionary, secret.text(), RandomPicker::seeded(seed)) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("cannot autoplay {secret}: {err}");
                return GameResult::Stalled;
            }
        };

    while let Some(suggestion) = session.suggest() {
        if let Err(err) = session.submit_guess(suggestion.text()) {
            log::warn!("suggestion {suggestion} rejected: {err}");
            return GameResult::Stalled;
        }
    }

    if session.is_won() {
        GameResult::Won {
            guesses: session.attempts_used(),
        }
    } else if session.is_over() {
        GameResult::Lost
    } else {
        log::debug!("no suggestion left for {secret}");
        GameResult::Stalled
    }
}
