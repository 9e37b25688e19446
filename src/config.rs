use std::path::{Path, PathBuf};

use crate::error::{PuzzleError, Result};

/// Directory the solvers read from when no path is given.
pub const INPUT_DIR: &str = "input";

/// Run configuration for a puzzle solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Builds the configuration from the process arguments.
    ///
    /// The first item is the program name and is skipped. An optional single
    /// positional argument replaces `input/<default_input>`.
    pub fn from_args<I>(args: I, default_input: &str) -> Result<Config>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| "solver".to_string());

        let input = match args.next() {
            Some(path) => PathBuf::from(path),
            None => Path::new(INPUT_DIR).join(default_input),
        };

        if args.next().is_some() {
            return Err(PuzzleError::Usage(format!("{program} [INPUT]")));
        }

        Ok(Config { input })
    }

    pub fn from_env(default_input: &str) -> Result<Config> {
        Self::from_args(std::env::args(), default_input)
    }
}
