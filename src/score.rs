//! Score records and the stores that keep them.
//!
//! The game only talks to [`ScoreStore`]; the in-memory and file-backed
//! stores are interchangeable behind it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A finished game's (name, age, score) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRecord {
    pub name: String,
    pub age: u32,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, age: u32, score: u32) -> Self {
        Self {
            name: name.into(),
            age,
            score,
        }
    }

    /// Encode as a `name,age,score` line (no trailing newline).
    pub fn to_line(&self) -> Result<String, ScoreError> {
        validate_name(&self.name)?;
        Ok(alloc::format!("{},{},{}", self.name, self.age, self.score))
    }

    /// Decode a `name,age,score` line.
    pub fn parse_line(line: &str) -> Result<Self, ScoreError> {
        let malformed = |reason: &'static str| ScoreError::Malformed {
            line: line.to_string(),
            reason,
        };
        let mut parts = line.trim().split(',');
        let (Some(name), Some(age), Some(score), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed("expected three comma-separated fields"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed("empty name"));
        }
        let age = age.trim().parse().map_err(|_| malformed("age is not a number"))?;
        let score = score
            .trim()
            .parse()
            .map_err(|_| malformed("score is not a number"))?;
        Ok(Self::new(name, age, score))
    }
}

/// Names must survive the comma-separated encoding unchanged.
pub fn validate_name(name: &str) -> Result<(), ScoreError> {
    if name.trim().is_empty() || name.trim() != name || name.contains([',', '\n', '\r']) {
        return Err(ScoreError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Errors returned by score stores.
#[derive(Debug)]
pub enum ScoreError {
    /// Name is empty or contains a separator.
    InvalidName(String),
    /// A persisted line could not be decoded.
    Malformed { line: String, reason: &'static str },
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::InvalidName(name) => write!(f, "Invalid player name {:?}", name),
            ScoreError::Malformed { line, reason } => {
                write!(f, "Malformed score record {:?}: {}", line, reason)
            }
            #[cfg(feature = "std")]
            ScoreError::Io(e) => write!(f, "Score file error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScoreError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for ScoreError {
    fn from(err: std::io::Error) -> Self {
        ScoreError::Io(err)
    }
}

/// Highest `n` scores, best first. Equal scores keep their recorded order.
pub fn top_scores(mut records: Vec<ScoreRecord>, n: usize) -> Vec<ScoreRecord> {
    records.sort_by(|a, b| b.score.cmp(&a.score));
    records.truncate(n);
    records
}

/// Append-only log of finished games.
pub trait ScoreStore {
    fn append_score(&mut self, record: ScoreRecord) -> Result<(), ScoreError>;

    /// Every readable record, in the order it was appended.
    fn read_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError>;

    fn read_top_scores(&self, n: usize) -> Result<Vec<ScoreRecord>, ScoreError> {
        Ok(top_scores(self.read_scores()?, n))
    }
}

/// Store that keeps records in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    records: Vec<ScoreRecord>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append_score(&mut self, record: ScoreRecord) -> Result<(), ScoreError> {
        validate_name(&record.name)?;
        self.records.push(record);
        Ok(())
    }

    fn read_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError> {
        Ok(self.records.clone())
    }
}

#[cfg(feature = "std")]
pub use file::FileScoreStore;

#[cfg(feature = "std")]
mod file {
    use std::fs::{self, OpenOptions};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};
    use std::str;

    use super::{ScoreError, ScoreRecord, ScoreStore};

    /// Store backed by a text file with one `name,age,score` line per game.
    #[derive(Debug, Clone)]
    pub struct FileScoreStore {
        path: PathBuf,
    }

    impl FileScoreStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl ScoreStore for FileScoreStore {
        fn append_score(&mut self, record: ScoreRecord) -> Result<(), ScoreError> {
            let line = record.to_line()?;
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            writeln!(file, "{}", line)?;
            log::debug!("appended score {:?} to {}", record, self.path.display());
            Ok(())
        }

        fn read_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError> {
            let contents = match fs::read(&self.path) {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e.into()),
            };
            let mut records = Vec::new();
            for (n, raw) in contents.split(|&b| b == b'\n').enumerate() {
                let line = match str::from_utf8(raw) {
                    Ok(line) => line,
                    Err(e) => {
                        log::warn!(
                            "{}:{}: skipping score record: {}",
                            self.path.display(),
                            n + 1,
                            e
                        );
                        continue;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }
                match ScoreRecord::parse_line(line) {
                    Ok(rec) => records.push(rec),
                    Err(e) => log::warn!(
                        "{}:{}: skipping score record: {}",
                        self.path.display(),
                        n + 1,
                        e
                    ),
                }
            }
            Ok(records)
        }
    }
}
