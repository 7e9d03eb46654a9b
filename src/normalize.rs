//! Cumulative-percentage normalization of timing samples.
//!
//! Each input file holds one floating-point timing value per line.
//! Normalization sorts the samples ascending and replaces each value's
//! position with its cumulative share of the total, as a percentage.
//! The result is written as a `"<value> <percent>"` table consumed by
//! the generated gnuplot script.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dataset::DataSet;

/// Failure while normalizing one data set.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A line did not parse as a floating-point literal.
    #[error("{}:{line}: not a floating-point value: {text:?}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// The offending line, surrounding whitespace trimmed.
        text: String,
    },

    /// The samples sum to zero, so percentages are undefined.
    ///
    /// Covers the empty file and all-zero inputs. Surfaced as an
    /// explicit error rather than dividing by zero.
    #[error("{}: sample total is zero, cannot normalize", path.display())]
    ZeroTotal { path: PathBuf },

    /// Reading the input or writing the table failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NormalizeError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parses one sample per line, rejecting the whole input on the first
/// bad line.
fn parse_samples(content: &str, path: &Path) -> Result<Vec<f64>, NormalizeError> {
    content
        .lines()
        .enumerate()
        .map(|(i, raw)| {
            let text = raw.trim();
            text.parse::<f64>().map_err(|_| NormalizeError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Sorts `samples` ascending and pairs each with its cumulative
/// percentage of the total.
///
/// Returns `None` when the total is exactly zero. The running sum
/// visits the sorted values in the same order as the total, so the
/// last percentage lands on 100.0 to within one rounding step.
pub fn cumulative_table(mut samples: Vec<f64>) -> Option<Vec<(f64, f64)>> {
    samples.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = samples.iter().sum();
    if total == 0.0 {
        return None;
    }

    let mut running = 0.0;
    Some(
        samples
            .into_iter()
            .map(|value| {
                running += value;
                (value, running * 100.0 / total)
            })
            .collect(),
    )
}

/// Renders a cumulative table as `"<value> <percent>\n"` lines.
pub fn render_table(table: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (value, percent) in table {
        let _ = writeln!(out, "{value} {percent}");
    }
    out
}

/// Normalizes one data set: reads `times-N.txt` from `dir`, writes
/// `times-N-normal.txt` next to it (overwriting), and returns the
/// output path.
///
/// Nothing is written when parsing fails or the total is zero.
pub fn normalize(dir: &Path, dataset: DataSet) -> Result<PathBuf, NormalizeError> {
    let input = dataset.input_path(dir);
    let content = fs::read_to_string(&input).map_err(|e| NormalizeError::io(&input, e))?;

    let samples = parse_samples(&content, &input)?;
    let table = cumulative_table(samples).ok_or_else(|| NormalizeError::ZeroTotal {
        path: input.clone(),
    })?;

    let output = dataset.output_path(dir);
    fs::write(&output, render_table(&table)).map_err(|e| NormalizeError::io(&output, e))?;

    Ok(output)
}
