//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_autoplay_statistics, print_score_result};
pub use formatters::{colorize_guess, distribution_bar, format_turn};
