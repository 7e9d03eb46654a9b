//! Per-message parse timing.
//!
//! Replays a FIX body buffer, timing each message parse in
//! nanoseconds while accumulating OrderQty across execution reports.
//! The timings are written one per line as a `times-<digit>.txt`
//! sample set, which is exactly what the normalizer discovers.

#![allow(clippy::cast_precision_loss)]

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::dataset::DataSet;
use crate::fix::{messages, FixError, Message};

/// Failure while capturing a sample set.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The body contained a malformed message.
    #[error(transparent)]
    Fix(#[from] FixError),

    /// Reading the body or writing the sample set failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of replaying one body buffer.
#[derive(Debug, Clone)]
pub struct CaptureReport {
    /// Sum of OrderQty over all execution reports.
    pub total_qty: i64,
    /// Wall time for the whole replay, nanoseconds.
    pub total_ns: u64,
    /// Per-message parse time, nanoseconds, in message order.
    pub samples: Vec<u64>,
}

impl CaptureReport {
    /// Mean parse time per message; NaN when the body was empty.
    pub fn ns_per_message(&self) -> f64 {
        self.total_ns as f64 / self.samples.len() as f64
    }
}

fn elapsed_ns(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Replays `body`, timing each message parse.
///
/// The first malformed message aborts the capture; nothing is written
/// here, so a failed capture leaves no partial sample set behind.
pub fn capture(body: &str) -> Result<CaptureReport, FixError> {
    let start = Instant::now();
    let mut samples = Vec::new();
    let mut total_qty = 0_i64;

    for raw in messages(body) {
        let message_start = Instant::now();

        let message = Message::parse(raw)?;
        if message.is_execution_report() {
            total_qty += message.order_qty()?;
        }

        samples.push(elapsed_ns(message_start));
    }

    Ok(CaptureReport {
        total_qty,
        total_ns: elapsed_ns(start),
        samples,
    })
}

/// Writes `samples` as the `times-<digit>.txt` input for `dataset`,
/// one value per line, overwriting. Returns the written path.
pub fn write_samples(dir: &Path, dataset: DataSet, samples: &[u64]) -> io::Result<PathBuf> {
    let mut out = String::new();
    for sample in samples {
        let _ = writeln!(out, "{sample}");
    }

    let path = dataset.input_path(dir);
    fs::write(&path, out)?;
    Ok(path)
}

/// Reads a body file, captures it, and writes the sample set for
/// `dataset` into `dir`.
pub fn capture_to_dataset(
    body_path: &Path,
    dir: &Path,
    dataset: DataSet,
) -> Result<CaptureReport, CaptureError> {
    let body = fs::read_to_string(body_path).map_err(|e| CaptureError::Io {
        path: body_path.to_path_buf(),
        source: e,
    })?;

    let report = capture(&body)?;

    let path = dataset.input_path(dir);
    write_samples(dir, dataset, &report.samples).map_err(|e| CaptureError::Io {
        path,
        source: e,
    })?;

    Ok(report)
}
