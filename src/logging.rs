//! Logger setup for the command-line binary
//!
//! The library only emits through the `log` facade; this wires `env_logger`
//! to stderr or an append-only file.

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

/// Map repeated `-v` flags to a level: warn, info, debug, then trace
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// `RUST_LOG` takes precedence over `verbosity`. With `log_file` set, records
/// are appended to that file without color codes.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already set.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env();

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }

    builder.try_init().map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Info);
        assert_eq!(level_for_verbosity(2), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let result = init(0, Some(Path::new("/nonexistent/wordle_ru/game.log")));
        assert!(result.is_err());
    }
}
