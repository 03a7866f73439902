#![cfg(feature = "std")]

//! Line-oriented prompts. Every prompt re-asks until the answer parses; only
//! closed input or an I/O failure ends it.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::config::Difficulty;
use crate::score::validate_name;

/// A rejected answer. Shown to the user before asking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    NotANumber(String),
    AgeOutOfRange(u32),
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    WrongArity(usize),
    UnknownChoice(String),
    InvalidName,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "Please enter a value."),
            InputError::NotANumber(s) => write!(f, "{:?} is not a whole number.", s),
            InputError::AgeOutOfRange(age) => {
                write!(f, "{} is not a valid age (1-{}).", age, MAX_AGE)
            }
            InputError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "({}, {}) is off the grid; rows are 0-{} and columns 0-{}.",
                row,
                col,
                rows.saturating_sub(1),
                cols.saturating_sub(1)
            ),
            InputError::WrongArity(n) => {
                write!(f, "Expected a row and a column, got {} value(s).", n)
            }
            InputError::UnknownChoice(s) => write!(f, "{:?} is not one of the options.", s),
            InputError::InvalidName => {
                write!(f, "Names must be non-empty and must not contain commas.")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub const MAX_AGE: u32 = 150;

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Parse `row col` or `row,col` and check it lies on a `rows`×`cols` grid.
pub fn parse_guess(input: &str, rows: usize, cols: usize) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    match tokens.as_slice() {
        [] => Err(InputError::Empty),
        [r, c] => {
            let row = parse_number(r)?;
            let col = parse_number(c)?;
            if row < rows && col < cols {
                Ok((row, col))
            } else {
                Err(InputError::OutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                })
            }
        }
        other => Err(InputError::WrongArity(other.len())),
    }
}

pub fn parse_age(input: &str) -> Result<u32, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    let age = parse_number(input)?;
    if age == 0 || age > MAX_AGE {
        return Err(InputError::AgeOutOfRange(age));
    }
    Ok(age)
}

pub fn parse_name(input: &str) -> Result<String, InputError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(InputError::Empty);
    }
    validate_name(name).map_err(|_| InputError::InvalidName)?;
    Ok(name.to_string())
}

/// Exactly one character naming a preset.
pub fn parse_difficulty(input: &str) -> Result<Difficulty, InputError> {
    let input = input.trim();
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(InputError::Empty),
        (Some(ch), None) => {
            Difficulty::from_choice(ch).ok_or_else(|| InputError::UnknownChoice(input.to_string()))
        }
        _ => Err(InputError::UnknownChoice(input.to_string())),
    }
}

pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(InputError::UnknownChoice(other.to_string())),
    }
}

/// Prompts over any line source and sink.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write `text` as-is and flush.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line)
    }

    /// Ask `question` until `parse` accepts the answer.
    pub fn prompt<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> io::Result<T> {
        loop {
            self.say(question)?;
            let line = self.read_line()?;
            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected input {:?}: {:?}", line.trim(), e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    pub fn read_name(&mut self) -> io::Result<String> {
        self.prompt("Enter your name: ", parse_name)
    }

    pub fn read_age(&mut self) -> io::Result<u32> {
        self.prompt("Enter your age: ", parse_age)
    }

    pub fn read_difficulty(&mut self) -> io::Result<Difficulty> {
        self.prompt(
            "Choose difficulty: (e)asy 5x5, (m)edium 7x7, (h)ard 10x10: ",
            parse_difficulty,
        )
    }

    pub fn read_guess(&mut self, rows: usize, cols: usize) -> io::Result<(usize, usize)> {
        let question = format!("Enter row and column (e.g. `0 {}`): ", cols.saturating_sub(1));
        self.prompt(&question, |s| parse_guess(s, rows, cols))
    }

    pub fn confirm_replay(&mut self) -> io::Result<bool> {
        self.prompt("Play again? (y/n): ", parse_yes_no)
    }
}
