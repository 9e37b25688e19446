//==============================================================================
// Temperature converter
// Ask for a scale and a reading, print it in both Fahrenheit and Celsius
//==============================================================================

use advent_drills::{exit_on_error, logging, PuzzleError, Result};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

//==============================================================================
// Milestone 1: Scales and conversion
//==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Fahrenheit,
    Celsius,
}

impl Scale {
    pub fn other(self) -> Self {
        match self {
            Scale::Fahrenheit => Scale::Celsius,
            Scale::Celsius => Scale::Fahrenheit,
        }
    }
}

impl FromStr for Scale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "F" => Ok(Scale::Fahrenheit),
            "C" => Ok(Scale::Celsius),
            other => Err(format!("unknown scale '{other}'")),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Fahrenheit => write!(f, "F"),
            Scale::Celsius => write!(f, "C"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub scale: Scale,
    pub value: i32,
}

impl Temperature {
    /// The reading expressed in the other scale.
    pub fn converted(&self) -> f32 {
        match self.scale {
            Scale::Fahrenheit => (self.value as f32 - 32.0) / 1.8,
            Scale::Celsius => self.value as f32 * 1.8 + 32.0,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}, {}={}",
            self.scale,
            self.value,
            self.scale.other(),
            self.converted()
        )
    }
}

//==============================================================================
// Milestone 2: Prompting until the answer parses
//==============================================================================

/// Asks `question` until `parse` accepts a line. Running out of input is an error.
fn prompt<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    retry: &str,
    parse: F,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PuzzleError::UnexpectedEof);
        }

        match parse(&line) {
            Some(value) => return Ok(value),
            None => {
                debug!(answer = line.trim(), "rejected answer");
                writeln!(output, "{retry}")?;
            }
        }
    }
}

pub fn read_temperature<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Temperature> {
    let scale = prompt(
        input,
        output,
        "Convert temperature from (F or C)?",
        "Pick either (F)ahrenheit or (C)elsius!",
        |line| line.parse::<Scale>().ok(),
    )?;
    let value = prompt(input, output, "Temperature value?", "Not a number!", |line| {
        line.trim().parse::<i32>().ok()
    })?;

    Ok(Temperature { scale, value })
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let temperature = read_temperature(&mut input, &mut output)?;
    writeln!(output, "{temperature}")?;
    Ok(())
}

fn main() {
    logging::init();
    exit_on_error(run());
}

//==============================================================================
// Tests
//==============================================================================
