//! Console game loop
//!
//! Reads one line per turn. An empty line asks for a hint, which is then
//! submitted as the guess; anything else is submitted as typed.

use crate::game::{GameSession, Outcome, Picker};
use crate::output::format_turn;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play `session` until it ends or input runs out
///
/// Rejected guesses are reported and the loop continues. Returns the final
/// outcome, which is `Outcome::Ongoing` when input ended mid-game.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<P: Picker>(
    session: &mut GameSession<'_, P>,
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> io::Result<Outcome> {
    writeln!(
        writer,
        "Guess the five-letter word in {} attempts.",
        session.attempts_remaining()
    )?;
    writeln!(writer, "Press Enter on an empty line for a hint.\n")?;

    let mut line = String::new();
    while !session.is_over() {
        write!(
            writer,
            "[{} left] Your guess: ",
            session.attempts_remaining()
        )?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            log::info!("input closed, game abandoned");
            return Ok(session.outcome());
        }

        let input = line.trim();
        let guess = if input.is_empty() {
            if let Some(hint) = session.suggest() {
                writeln!(writer, "Hint: {}", hint.text().to_uppercase().cyan())?;
                hint.text().to_string()
            } else {
                writeln!(writer, "{}", "No hint available.".yellow())?;
                continue;
            }
        } else {
            input.to_string()
        };

        match session.submit_guess(&guess) {
            Ok(_) => {
                if let Some(turn) = session.history().last() {
                    writeln!(writer, "{}", format_turn(turn))?;
                }
            }
            Err(err) => {
                log::warn!("rejected guess {guess:?}: {err}");
                writeln!(writer, "{} {err}", "Error:".red().bold())?;
            }
        }
    }

    print_outcome(session, &mut writer)?;
    Ok(session.outcome())
}

fn print_outcome<P: Picker>(session: &GameSession<'_, P>, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    let answer = session
        .revealed_answer()
        .map(|word| word.text().to_uppercase())
        .unwrap_or_default();

    if session.is_won() {
        let used = session.attempts_used();
        writeln!(
            writer,
            "{}",
            format!(
                "✅ You guessed {answer} in {used} attempt{}!",
                if used == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        )
    } else {
        writeln!(
            writer,
            "{}",
            format!("❌ Out of attempts. The word was {answer}.").red().bold()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FirstPicker;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        colored::control::set_override(false);
        Dictionary::new(words_from_slice(&[
            "герой", "гонец", "слово", "книга", "ручка", "автор", "город", "гроза",
        ]))
        .unwrap()
    }

    fn play(dict: &Dictionary, answer: &str, input: &str) -> (Outcome, String) {
        let mut session = GameSession::with_answer(dict, answer, FirstPicker).unwrap();
        let mut output = Vec::new();
        let outcome = run_play(&mut session, Cursor::new(input), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn typed_guesses_win() {
        let dict = dictionary();
        let (outcome, output) = play(&dict, "герой", "книга\nгерой\n");

        assert_eq!(outcome, Outcome::Won);
        assert!(output.contains("КНИГА"));
        assert!(output.contains("---^-"));
        assert!(output.contains("+++++"));
        assert!(output.contains("in 2 attempts"));
    }

    #[test]
    fn empty_line_plays_the_hint() {
        let dict = dictionary();
        let (outcome, output) = play(&dict, "герой", "\n");

        assert_eq!(outcome, Outcome::Won);
        assert!(output.contains("Hint: ГЕРОЙ"));
        assert!(output.contains("in 1 attempt!"));
    }

    #[test]
    fn rejected_input_does_not_end_the_game() {
        let dict = dictionary();
        let (outcome, output) = play(&dict, "герой", "слон\nабвгд\nкнига\nкнига\nгерой\n");

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(output.matches("Error:").count(), 3);
        assert!(output.contains("already guessed"));
        assert!(output.contains("in 2 attempts"));
    }

    #[test]
    fn loss_reveals_the_answer() {
        let dict = dictionary();
        let (outcome, output) = play(
            &dict,
            "герой",
            "слово\nкнига\nручка\nавтор\nгород\nгроза\n",
        );

        assert_eq!(outcome, Outcome::Lost);
        assert!(output.contains("The word was ГЕРОЙ"));
    }

    #[test]
    fn end_of_input_abandons_the_game() {
        let dict = dictionary();
        let (outcome, output) = play(&dict, "герой", "книга\n");

        assert_eq!(outcome, Outcome::Ongoing);
        assert!(!output.contains("ГЕРОЙ"));
    }
}
