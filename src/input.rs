//! Line source for the graph builder
//!
//! Input is read up front; sorting never touches I/O.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::TaskSortError;

/// Read every line, trimmed of surrounding whitespace.
///
/// Blank lines are kept: under the pairing model an empty line is still a
/// task (or dependency) named `""`.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, TaskSortError> {
    reader
        .lines()
        .map(|line| Ok(line?.trim().to_string()))
        .collect()
}

/// Read from `path`, or from stdin when `path` is `None` or `-`
pub fn read_source(path: Option<&Path>) -> Result<Vec<String>, TaskSortError> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).map_err(|source| TaskSortError::ReadFile {
                path: p.to_path_buf(),
                source,
            })?;
            let lines = read_lines(BufReader::new(file))?;
            debug!(path = %p.display(), lines = lines.len(), "read input file");
            Ok(lines)
        }
        _ => {
            let lines = read_lines(io::stdin().lock())?;
            debug!(lines = lines.len(), "read standard input");
            Ok(lines)
        }
    }
}
