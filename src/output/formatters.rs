//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::game::Turn;
use colored::Colorize;

/// Color each letter of `guess` by its mark: green hit, yellow present, dimmed miss
#[must_use]
pub fn colorize_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let letter = letter.to_uppercase().to_string();
            match mark {
                Mark::Hit => letter.black().on_green().bold().to_string(),
                Mark::Present => letter.black().on_yellow().bold().to_string(),
                Mark::Miss => letter.dimmed().to_string(),
            }
        })
        .collect()
}

/// One history line: colored guess, emoji squares and the plain code
#[must_use]
pub fn format_turn(turn: &Turn) -> String {
    format!(
        "{}  {}  {}",
        colorize_guess(&turn.guess, turn.feedback),
        turn.feedback.to_emoji(),
        turn.feedback
    )
}

/// Horizontal bar proportional to `value / max`
#[must_use]
pub fn distribution_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).max(usize::from(value > 0)).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
