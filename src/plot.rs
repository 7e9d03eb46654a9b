//! Gnuplot script emission.
//!
//! The script is a fixed textual contract with gnuplot: a styling
//! preamble, one `plot` directive listing every normalized table as a
//! line series, and a `pause -1` so an interactive session stays open.
//! The preamble is reproduced verbatim, not abstracted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::dataset::DataSet;

/// File name of the emitted script.
pub const PLOT_FILE: &str = "plot.gnu";

const PREAMBLE: &str = r#"
set termoption dashed
do for [i=1:10] {
    set style line i linewidth 2
}
set style increment userstyles
set style line 6
set style line 6 linecolor "darkgray"
set xlabel "nanoseconds
set xrange [0:50000]
set yrange [0:100]
set ylabel "%"
plot "#;

/// Renders the full script for the given data sets, in input order.
pub fn render_plot_script(datasets: &[DataSet]) -> String {
    let series: Vec<String> = datasets
        .iter()
        .map(|d| format!("\"{}\" with lines", d.output_name()))
        .collect();

    format!("{PREAMBLE}{}\npause -1\n", series.join(","))
}

/// Writes `plot.gnu` into `dir`, overwriting any existing file.
pub fn emit_plot_script(dir: &Path, datasets: &[DataSet]) -> io::Result<PathBuf> {
    let path = dir.join(PLOT_FILE);
    fs::write(&path, render_plot_script(datasets))?;
    Ok(path)
}
