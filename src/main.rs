//! times-normalize: CLI entry point.
//!
//! Runs the full pipeline against one directory: discover timing data
//! sets, normalize each into a cumulative-percentage table, then emit
//! the gnuplot script referencing every table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use times_normalize::discover::discover;
use times_normalize::normalize::normalize;
use times_normalize::plot::{emit_plot_script, PLOT_FILE};

#[derive(Parser)]
#[command(name = "times-normalize")]
#[command(about = "Normalizes timing samples into cumulative distributions for gnuplot")]
#[command(version)]
struct Cli {
    /// Directory holding times-<digit>.txt inputs; outputs land there too.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("{}", "times-normalize".bold());
    println!("  Directory: {}", cli.dir.display());
    println!();

    let datasets =
        discover(&cli.dir).with_context(|| format!("Failed to scan {}", cli.dir.display()))?;

    if datasets.is_empty() {
        println!("{}", "No times-<digit>.txt inputs found".yellow());
    }

    for dataset in &datasets {
        normalize(&cli.dir, *dataset)
            .with_context(|| format!("Failed to normalize {dataset}"))?;
        println!("  {} {} -> {}", "✓".green(), dataset, dataset.output_name());
    }

    emit_plot_script(&cli.dir, &datasets).with_context(|| format!("Failed to write {PLOT_FILE}"))?;

    println!();
    println!("Wrote {} with {} series", PLOT_FILE.bold(), datasets.len());

    Ok(())
}
