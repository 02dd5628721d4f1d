//! Report input for the CLI.
//!
//! Accepts one report per line from a file or stdin (`-`). Blank lines,
//! `#` comments and the `YYYY/MM/DD HH:MM` header lines of NOAA station
//! files are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a file for line reading, or stdin when the path is `-`.
pub fn open_input(path: &Path) -> io::Result<Box<dyn BufRead>> {
    if path.to_str() == Some("-") {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Read all report lines, numbered from 1 by source line.
pub fn read_reports<R: BufRead>(reader: R) -> io::Result<Vec<(usize, String)>> {
    let mut reports = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(report) = clean_report_line(&line) {
            reports.push((i + 1, report.to_string()));
        }
    }
    Ok(reports)
}

/// Extract the report text from a line, or `None` for lines to skip.
pub fn clean_report_line(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || is_noaa_timestamp(line) {
        return None;
    }
    Some(line)
}

fn is_noaa_timestamp(line: &str) -> bool {
    let b = line.as_bytes();
    b.len() == 16
        && b[4] == b'/'
        && b[7] == b'/'
        && b[10] == b' '
        && b[13] == b':'
        && b.iter()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7 | 10 | 13) || c.is_ascii_digit())
}
