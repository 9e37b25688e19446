use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a drill can fail. All of them are fatal for the binary that hits them.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("no solution: {0}")]
    NoSolution(String),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    #[error("position {position} is outside a password of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("the grid has no rows")]
    EmptyGrid,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("a slope must move down at least one row")]
    InvalidSlope,

    #[error("input ended before an answer was given")]
    UnexpectedEof,

    #[error("usage: {0}")]
    Usage(String),
}

impl PuzzleError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = PuzzleError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_line() {
        let err = PuzzleError::parse(7, "missing ':'");
        assert_eq!(err.to_string(), "line 7: missing ':'");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = PuzzleError::io(
            "input/day01",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "failed to read input/day01: gone");
    }

    #[test]
    fn test_console_error_converts_with_question_mark() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(PuzzleError::Console(_))));
    }
}
