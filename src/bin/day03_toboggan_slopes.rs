//==============================================================================
// Day 3: Toboggan Trajectory
// Count the trees hit while sledding down a horizontally repeating map
//==============================================================================

use advent_drills::config::Config;
use advent_drills::{exit_on_error, input, logging, PuzzleError, Result};
use tracing::{debug, info};

//==============================================================================
// Milestone 1: The map
//==============================================================================

const TREE: char = '#';
const OPEN: char = '.';

/// Rows of equal width; `true` marks a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeMap {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl TreeMap {
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut rows = Vec::with_capacity(lines.len());

        for (idx, line) in lines.iter().enumerate() {
            let row = line
                .as_ref()
                .chars()
                .map(|c| match c {
                    TREE => Ok(true),
                    OPEN => Ok(false),
                    other => Err(PuzzleError::parse(
                        idx + 1,
                        format!("unexpected map symbol '{other}'"),
                    )),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        let width = rows.first().map(Vec::len).ok_or(PuzzleError::EmptyGrid)?;
        if width == 0 {
            return Err(PuzzleError::EmptyGrid);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(PuzzleError::RaggedRow {
                row: row + 1,
                expected: width,
                found,
            });
        }

        Ok(Self { rows, width })
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `(row, col)` holds a tree; the column repeats to the right forever.
    pub fn is_tree(&self, row: usize, col: usize) -> bool {
        self.rows[row][col % self.width]
    }
}

//==============================================================================
// Milestone 2: Walking a slope
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slope {
    down: usize,
    right: usize,
}

impl Slope {
    pub fn new(down: usize, right: usize) -> Result<Self> {
        if down == 0 {
            return Err(PuzzleError::InvalidSlope);
        }
        Ok(Self { down, right })
    }
}

pub fn count_hits(map: &TreeMap, slope: Slope) -> usize {
    (0..map.height())
        .step_by(slope.down)
        .enumerate()
        .filter(|&(step, row)| map.is_tree(row, step * slope.right))
        .count()
}

//==============================================================================
// Milestone 3: The answers
//==============================================================================

/// (down, right) pairs checked in part two.
pub const PART2_SLOPES: [(usize, usize); 5] = [(1, 1), (1, 3), (1, 5), (1, 7), (2, 1)];

pub fn part1(map: &TreeMap) -> Result<usize> {
    Ok(count_hits(map, Slope::new(1, 3)?))
}

pub fn part2(map: &TreeMap) -> Result<u64> {
    let mut product = 1u64;
    for (down, right) in PART2_SLOPES {
        let hits = count_hits(map, Slope::new(down, right)?);
        debug!(down, right, hits, "slope walked");
        product = product
            .checked_mul(hits as u64)
            .ok_or_else(|| PuzzleError::Overflow(format!("slope hit product past {product}")))?;
    }
    Ok(product)
}

/// The two labeled lines the solver prints.
pub fn answers(map: &TreeMap) -> Result<[String; 2]> {
    Ok([
        format!("Part1: {}", part1(map)?),
        format!("Part2: {}", part2(map)?),
    ])
}

fn run() -> Result<()> {
    let config = Config::from_env("day03")?;
    let lines = input::read_lines(&config.input)?;
    let map = TreeMap::parse(&lines)?;
    info!(height = map.height(), width = map.width(), "map loaded");

    for line in answers(&map)? {
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
