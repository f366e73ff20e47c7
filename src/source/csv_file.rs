//! File-backed attendance data in CSV form
//!
//! Layout: first column is the student name, every remaining column is a
//! `0`/`1` presence flag. The header row is optional.
//!
//! ```text
//! Student_Name,Day_1,Day_2,Day_3
//! Aarav,1,0,1
//! Vihaan,1,1,1
//! ```

use super::DataSource;
use crate::error::{AttendanceError, Result};
use crate::record::PresenceRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads records from a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DataSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<PresenceRecord>> {
        let origin = self.path.display().to_string();
        let file = File::open(&self.path).map_err(|e| AttendanceError::unavailable(&origin, e))?;
        parse_records(file, &origin)
    }
}

fn parse_flag(cell: &str) -> Option<bool> {
    match cell {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

/// A leading row is a header only when none of its flag cells is 0/1
fn looks_like_header(row: &StringRecord) -> bool {
    row.len() > 1 && row.iter().skip(1).all(|cell| parse_flag(cell).is_none())
}

/// Parse CSV attendance data from any reader
///
/// `origin` names the data in error messages (usually the file path).
/// Rows are not required to have equal length here; ragged input is passed
/// through so the aggregation step can report the mismatch.
///
/// # Errors
///
/// [`AttendanceError::SourceUnavailable`] if the CSV is malformed or a data
/// row holds a flag other than `0`/`1`.
pub fn parse_records<R: Read>(reader: R, origin: &str) -> Result<Vec<PresenceRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut seen_first = false;

    for row in reader.records() {
        let row = row.map_err(|e| AttendanceError::unavailable(origin, e))?;
        if is_blank(&row) {
            continue;
        }

        let line = row.position().map_or(0, |p| p.line());

        if !seen_first {
            seen_first = true;
            if looks_like_header(&row) {
                debug!("Skipping header row at line {} of {}", line, origin);
                continue;
            }
        }

        let name = row.get(0).unwrap_or_default().to_string();
        let presence = row
            .iter()
            .skip(1)
            .map(|cell| {
                parse_flag(cell).ok_or_else(|| {
                    AttendanceError::unavailable(
                        origin,
                        format!(
                            "line {}: invalid presence flag '{}' for '{}' (expected 0 or 1)",
                            line, cell, name
                        ),
                    )
                })
            })
            .collect::<Result<Vec<bool>>>()?;

        records.push(PresenceRecord::new(name, presence));
    }

    debug!("Parsed {} records from {}", records.len(), origin);
    Ok(records)
}
