//! fix-times: CLI entry point.
//!
//! Replays a captured FIX message body, timing each message parse and
//! accumulating execution-report order quantities, then writes the
//! per-message timings as a times-<digit>.txt sample set for
//! times-normalize to pick up.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use times_normalize::capture::capture_to_dataset;
use times_normalize::dataset::DataSet;

#[derive(Parser)]
#[command(name = "fix-times")]
#[command(about = "Times FIX message parsing and writes a times-<digit>.txt sample set")]
#[command(version)]
struct Cli {
    /// FIX body file to replay.
    body: PathBuf,

    /// Directory to write the sample set into.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Single-digit index of the sample set (times-<index>.txt).
    #[arg(long, default_value_t = 3)]
    index: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dataset = DataSet::new(cli.index)
        .ok_or_else(|| anyhow::anyhow!("--index must be a single digit, got {}", cli.index))?;

    println!("{}", "fix-times".bold());
    println!("  Body: {}", cli.body.display());
    println!();

    let report = capture_to_dataset(&cli.body, &cli.dir, dataset)
        .with_context(|| format!("Failed to capture {}", cli.body.display()))?;

    println!("  total qty:     {}", report.total_qty);
    println!("  duration(ns):  {}", report.total_ns);
    println!("  ns/msg:        {}", report.ns_per_message());
    println!();
    println!(
        "Wrote {} with {} samples",
        dataset.input_name().bold(),
        report.samples.len()
    );

    Ok(())
}
