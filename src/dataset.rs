//! Structured naming for timing data sets.
//!
//! Input files follow the fixed convention `times-<digit>.txt`; each
//! normalized table is written next to its input as
//! `times-<digit>-normal.txt`. Both names derive from the single-digit
//! index, so a validated [`DataSet`] replaces suffix string rewriting.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// A file name that does not match `times-<digit>.txt`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("not a timing data set name (expected times-<digit>.txt): {name:?}")]
pub struct BadDataSetName {
    /// The rejected file name.
    pub name: String,
}

/// One timing data set, identified by its single-digit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DataSet {
    index: u8,
}

impl DataSet {
    /// Creates a data set for index 0–9.
    ///
    /// Returns `None` when the index has more than one digit.
    pub const fn new(index: u8) -> Option<Self> {
        if index <= 9 {
            Some(Self { index })
        } else {
            None
        }
    }

    /// The single-digit index.
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Input file name, e.g. `times-1.txt`.
    pub fn input_name(&self) -> String {
        format!("times-{}.txt", self.index)
    }

    /// Normalized table file name, e.g. `times-1-normal.txt`.
    pub fn output_name(&self) -> String {
        format!("times-{}-normal.txt", self.index)
    }

    /// Input path within `dir`.
    pub fn input_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.input_name())
    }

    /// Output path within `dir`.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.output_name())
    }
}

impl fmt::Display for DataSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_name())
    }
}

impl FromStr for DataSet {
    type Err = BadDataSetName;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let bad = || BadDataSetName {
            name: name.to_string(),
        };

        let digit = name
            .strip_prefix("times-")
            .and_then(|rest| rest.strip_suffix(".txt"))
            .ok_or_else(bad)?;

        let index = match digit.as_bytes() {
            &[b @ b'0'..=b'9'] => b - b'0',
            _ => return Err(bad()),
        };

        Ok(Self { index })
    }
}
