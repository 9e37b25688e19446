//==============================================================================
// Day 1: Report Repair
// Find the entries of an expense report that sum to 2020
//==============================================================================

use advent_drills::config::Config;
use advent_drills::{exit_on_error, input, logging, PuzzleError, Result};
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

pub const TARGET: i64 = 2020;

//==============================================================================
// Milestone 1: Load the entries into a set
//==============================================================================

/// The unique entries of the report. Duplicate lines collapse into one value.
#[derive(Debug, Clone, Default)]
pub struct ExpenseReport {
    entries: FxHashSet<i64>,
}

impl ExpenseReport {
    pub fn parse(lines: &[String]) -> Result<Self> {
        let entries = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|err| PuzzleError::parse(idx + 1, format!("'{line}': {err}")))
            })
            .collect::<Result<FxHashSet<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.entries.contains(&value)
    }

    //==========================================================================
    // Milestone 2: Two entries summing to a target
    //==========================================================================

    /// Two distinct entries `(x, y)` with `x + y == target`.
    pub fn find_pair(&self, target: i64) -> Option<(i64, i64)> {
        self.find_pair_excluding(target, None)
    }

    fn find_pair_excluding(&self, target: i64, excluded: Option<i64>) -> Option<(i64, i64)> {
        self.entries
            .iter()
            .copied()
            .filter(|&x| Some(x) != excluded)
            .find_map(|x| {
                // No i64 partner exists when the difference itself overflows.
                let y = target.checked_sub(x)?;
                (y != x && Some(y) != excluded && self.contains(y)).then_some((x, y))
            })
    }

    //==========================================================================
    // Milestone 3: Three entries summing to a target
    //==========================================================================

    /// Three distinct entries `(v, x, y)` with `v + x + y == target`.
    pub fn find_triple(&self, target: i64) -> Option<(i64, i64, i64)> {
        self.entries.iter().copied().find_map(|v| {
            let rest = target.checked_sub(v)?;
            self.find_pair_excluding(rest, Some(v)).map(|(x, y)| (v, x, y))
        })
    }
}

fn product(factors: &[i64]) -> Result<i64> {
    factors
        .iter()
        .try_fold(1i64, |acc, &f| acc.checked_mul(f))
        .ok_or_else(|| PuzzleError::Overflow(format!("product of {factors:?}")))
}

pub fn part1(report: &ExpenseReport) -> Result<i64> {
    let (x, y) = report
        .find_pair(TARGET)
        .ok_or_else(|| PuzzleError::NoSolution(format!("no two entries sum to {TARGET}")))?;
    debug!(x, y, "pair found");
    product(&[x, y])
}

pub fn part2(report: &ExpenseReport) -> Result<i64> {
    let (v, x, y) = report
        .find_triple(TARGET)
        .ok_or_else(|| PuzzleError::NoSolution(format!("no three entries sum to {TARGET}")))?;
    debug!(v, x, y, "triple found");
    product(&[v, x, y])
}

/// The two labeled lines the solver prints.
pub fn answers(report: &ExpenseReport) -> Result<[String; 2]> {
    Ok([
        format!("Part1: {}", part1(report)?),
        format!("Part2: {}", part2(report)?),
    ])
}

fn run() -> Result<()> {
    let config = Config::from_env("day01")?;
    let lines = input::read_lines(&config.input)?;
    let report = ExpenseReport::parse(&lines)?;
    info!(entries = report.len(), "expense report loaded");
    if report.is_empty() {
        warn!(path = %config.input.display(), "expense report has no entries");
    }

    for line in answers(&report)? {
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
