//==============================================================================
// Day 2: Password Philosophy
// Count the passwords that satisfy the corporate policy of their line
//==============================================================================

use advent_drills::config::Config;
use advent_drills::{exit_on_error, input, logging, PuzzleError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info};

lazy_static! {
    static ref ENTRY_RE: Regex =
        Regex::new(r"^\s*(?P<low>\d+)-(?P<high>\d+)\s+(?P<letter>\S):\s*(?P<password>\S*)\s*$")
            .expect("entry pattern is valid");
}

//==============================================================================
// Milestone 1: Parse "<low>-<high> <letter>: <password>"
//==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    pub low: usize,
    pub high: usize,
    pub letter: char,
    pub password: String,
}

impl PasswordEntry {
    /// Parses one line; `line_no` is 1-based and only used for error messages.
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let caps = ENTRY_RE.captures(line).ok_or_else(|| {
            PuzzleError::parse(
                line_no,
                format!("expected '<low>-<high> <letter>: <password>', got '{line}'"),
            )
        })?;

        let bound = |name: &str| -> Result<usize> {
            caps[name]
                .parse::<usize>()
                .map_err(|err| PuzzleError::parse(line_no, format!("bad {name} bound: {err}")))
        };

        let letter = caps["letter"]
            .chars()
            .next()
            .ok_or_else(|| PuzzleError::parse(line_no, "missing letter"))?;

        Ok(Self {
            low: bound("low")?,
            high: bound("high")?,
            letter,
            password: caps["password"].to_string(),
        })
    }

    fn letter_at(&self, position: usize) -> Result<bool> {
        let len = self.password.chars().count();
        position
            .checked_sub(1)
            .and_then(|idx| self.password.chars().nth(idx))
            .map(|c| c == self.letter)
            .ok_or(PuzzleError::PositionOutOfRange { position, len })
    }
}

//==============================================================================
// Milestone 2: Policies
//==============================================================================

/// A policy decides whether a parsed entry is valid.
pub type Policy = fn(&PasswordEntry) -> Result<bool>;

/// The letter occurs between `low` and `high` times, inclusive.
pub fn occurrence_count(entry: &PasswordEntry) -> Result<bool> {
    let count = entry.password.chars().filter(|&c| c == entry.letter).count();
    Ok((entry.low..=entry.high).contains(&count))
}

/// The letter sits at exactly one of the 1-based positions `low` and `high`.
///
/// A position past the end of the password is an error rather than a miss.
pub fn position_xor(entry: &PasswordEntry) -> Result<bool> {
    Ok(entry.letter_at(entry.low)? != entry.letter_at(entry.high)?)
}

//==============================================================================
// Milestone 3: Counting
//==============================================================================

pub fn count_valid<S: AsRef<str>>(lines: &[S], policy: Policy) -> Result<usize> {
    let mut valid = 0;
    for (idx, line) in lines.iter().enumerate() {
        let entry = PasswordEntry::parse(line.as_ref(), idx + 1)?;
        if policy(&entry)? {
            valid += 1;
        }
    }
    Ok(valid)
}

/// The two labeled lines the solver prints.
pub fn answers<S: AsRef<str>>(lines: &[S]) -> Result<[String; 2]> {
    let part1 = count_valid(lines, occurrence_count)?;
    debug!(part1, "occurrence policy done");

    let part2 = count_valid(lines, position_xor)?;
    debug!(part2, "position policy done");

    Ok([format!("Part1: {part1}"), format!("Part2: {part2}")])
}

fn run() -> Result<()> {
    let config = Config::from_env("day02")?;
    let lines = input::read_lines(&config.input)?;
    info!(entries = lines.len(), "password list loaded");

    for line in answers(&lines)? {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    logging::init();
    exit_on_error(run());
}

//==============================================================================
// Tests
//==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 3] = ["1-3 a: abcde", "1-3 b: cdefg", "2-9 c: ccccccccc"];

    fn entry(line: &str) -> PasswordEntry {
        PasswordEntry::parse(line, 1).unwrap()
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            entry("1-3 a: abcde"),
            PasswordEntry {
                low: 1,
                high: 3,
                letter: 'a',
                password: "abcde".to_string(),
            }
        );
    }

    #[test]
    fn test_occurrence_policy() {
        assert!(occurrence_count(&entry(SAMPLE[0])).unwrap());
        assert!(!occurrence_count(&entry(SAMPLE[1])).unwrap());
        assert!(occurrence_count(&entry(SAMPLE[2])).unwrap());
    }

    #[test]
    fn test_position_policy() {
        assert!(position_xor(&entry(SAMPLE[0])).unwrap());
        assert!(!position_xor(&entry(SAMPLE[1])).unwrap());
        assert!(!position_xor(&entry(SAMPLE[2])).unwrap());
    }

    #[test]
    fn test_count_sample() {
        assert_eq!(count_valid(&SAMPLE, occurrence_count).unwrap(), 2);
        assert_eq!(count_valid(&SAMPLE, position_xor).unwrap(), 1);
    }

    #[test]
    fn test_occurrence_bounds_are_inclusive() {
        assert!(occurrence_count(&entry("2-2 x: axbx")).unwrap());
        assert!(!occurrence_count(&entry("2-2 x: xxx")).unwrap());
        assert!(occurrence_count(&entry("0-1 z: abc")).unwrap());
    }

    #[test]
    fn test_position_out_of_range_is_error() {
        match position_xor(&entry("1-9 a: abc")) {
            Err(PuzzleError::PositionOutOfRange { position, len }) => {
                assert_eq!(position, 9);
                assert_eq!(len, 3);
            }
            other => panic!("expected PositionOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_position_zero_is_error() {
        assert!(matches!(
            position_xor(&entry("0-2 a: abc")),
            Err(PuzzleError::PositionOutOfRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let lines = ["1-3 a: abcde", "garbage"];
        match count_valid(&lines, occurrence_count) {
            Err(PuzzleError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_bound_is_parse_error() {
        let result = PasswordEntry::parse("1-99999999999999999999999 a: abc", 4);
        assert!(matches!(result, Err(PuzzleError::Parse { line: 4, .. })));
    }

    #[test]
    fn test_empty_input_counts_zero() {
        let lines: [&str; 0] = [];
        assert_eq!(count_valid(&lines, position_xor).unwrap(), 0);
    }

    #[test]
    fn test_reads_sample_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), SAMPLE.join("\n")).unwrap();

        let lines = input::read_lines(temp.path()).unwrap();
        assert_eq!(count_valid(&lines, occurrence_count).unwrap(), 2);
        assert_eq!(count_valid(&lines, position_xor).unwrap(), 1);
    }

    #[test]
    fn test_answers_for_sample_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("input/day02");
        let lines = input::read_lines(&path).unwrap();

        let first = answers(&lines).unwrap();
        assert_eq!(first, ["Part1: 2", "Part2: 1"]);
        assert_eq!(answers(&lines).unwrap(), first);
    }
}
