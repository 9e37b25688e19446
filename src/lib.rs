//! # Advent drills
//!
//! Shared plumbing for the small programs under `src/bin/`:
//!
//! - [`error`]: the `PuzzleError` enum every solver returns
//! - [`config`]: positional input-path override
//! - [`input`]: whole-file line loading
//! - [`logging`]: `tracing` subscriber setup (stderr only)
//!
//! The puzzles and demos themselves live in their binaries and never call
//! each other.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;

use colored::Colorize;

pub use error::{PuzzleError, Result};

/// Prints a fatal diagnostic and terminates with status 1 when `result` is an error.
pub fn exit_on_error<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            eprintln!("{} {}", "error:".red().bold(), err);
            std::process::exit(1);
        }
    }
}
