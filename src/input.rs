use std::fs;
use std::path::Path;

use crate::error::{PuzzleError, Result};

/// Reads `path` in one pass and returns its non-blank lines with trailing
/// whitespace removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|err| PuzzleError::io(path, err))?;
    let lines = split_lines(&content);
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded input");
    Ok(lines)
}

pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
