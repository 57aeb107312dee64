//! Display functions for command results

use super::formatters::{colorize_guess, distribution_bar};
use crate::commands::{AutoplayStatistics, ScoreResult};
use crate::core::Mark;
use colored::Colorize;

/// Print the feedback for a scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:    {}",
        colorize_guess(&result.guess, result.feedback)
    );
    println!(
        "Answer:   {}",
        result.answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("Feedback: {}  {}", result.feedback.to_emoji(), result.feedback);
    println!(
        "          {} hit, {} present, {} miss",
        result.feedback.count(Mark::Hit),
        result.feedback.count(Mark::Present),
        result.feedback.count(Mark::Miss)
    );
    println!("{}", "─".repeat(40).cyan());
}

/// Print self-play statistics
pub fn print_autoplay_statistics(stats: &AutoplayStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Won:              {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.lost > 0 {
        println!("   Lost:             {}", stats.lost.to_string().red());
    }
    if stats.stalled > 0 {
        println!("   Stalled:          {}", stats.stalled.to_string().yellow());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let pct = count as f64 / stats.won as f64 * 100.0;
        let bar = distribution_bar(count, max_count, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }
}
