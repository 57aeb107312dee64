//! Russian Wordle - CLI
//!
//! Play in the terminal, let the hint engine play itself, or score a single guess.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::io;
use std::path::{Path, PathBuf};
use wordle_ru::{
    commands::{run_autoplay, run_play, score_words},
    core::Word,
    game::{GameSession, RandomPicker},
    logging,
    output::{print_autoplay_statistics, print_score_result},
    wordlists::{
        Dictionary,
        loader::{embedded, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_ru",
    about = "Russian Wordle with duplicate-aware feedback and constraint-based hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file with one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible secrets and hints
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal (default)
    Play {
        /// Use this secret instead of a random one
        #[arg(short, long)]
        answer: Option<String>,
    },

    /// Let the hint engine play against many secrets
    Autoplay {
        /// Number of secrets drawn from the dictionary (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show the feedback for one guess against one answer
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref()).context("failed to set up logging")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { answer: None });

    match command {
        Commands::Play { answer } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            run_play_command(&dictionary, answer.as_deref(), cli.seed)
        }
        Commands::Autoplay { count } => {
            let dictionary = load_dictionary(cli.dictionary.as_deref())?;
            run_autoplay_command(&dictionary, count, cli.seed);
            Ok(())
        }
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
    }
}

/// Load the dictionary named by `-d`, or the built-in list
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
        None => embedded().context("built-in word list is empty"),
    }
}

fn run_play_command(dictionary: &Dictionary, answer: Option<&str>, seed: Option<u64>) -> Result<()> {
    let picker = seed.map_or_else(RandomPicker::from_os_rng, RandomPicker::seeded);

    let mut session = match answer {
        Some(answer) => GameSession::with_answer(dictionary, answer, picker)
            .with_context(|| format!("cannot start a game with answer '{answer}'"))?,
        None => GameSession::new(dictionary, picker),
    };

    run_play(&mut session, io::stdin().lock(), io::stdout().lock())
        .context("terminal input/output failed")?;
    Ok(())
}

fn run_autoplay_command(dictionary: &Dictionary, count: Option<usize>, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);

    let mut secrets: Vec<Word> = dictionary.words().to_vec();
    if let Some(count) = count {
        secrets.shuffle(&mut StdRng::seed_from_u64(seed));
        secrets.truncate(count);
    }

    println!(
        "Autoplaying {} of {} words (seed {seed})...",
        secrets.len(),
        dictionary.len()
    );

    let stats = run_autoplay(dictionary, &secrets, seed, true);
    print_autoplay_statistics(&stats);
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let result = score_words(guess, answer)
        .with_context(|| format!("cannot score '{guess}' against '{answer}'"))?;

    print_score_result(&result);
    Ok(())
}
