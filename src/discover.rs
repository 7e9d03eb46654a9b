//! Discovery of timing data sets in a directory.
//!
//! Scans one directory level for names matching `times-<digit>.txt` and
//! returns them in ascending index order, so repeated runs process the
//! same inputs in the same order.

use std::fs;
use std::io;
use std::path::Path;

use crate::dataset::DataSet;

/// Finds all timing data sets directly inside `dir`, sorted ascending.
///
/// Names that do not match the pattern are ignored, as are
/// subdirectories. Zero matches yields an empty vector, not an error.
pub fn discover(dir: &Path) -> io::Result<Vec<DataSet>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if let Ok(dataset) = name.parse::<DataSet>() {
                found.push(dataset);
            }
        }
    }

    found.sort_unstable();
    Ok(found)
}
