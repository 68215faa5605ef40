//! Tab-separated event-log parsing and sliding-window construction.
//!
//! A log file is vectorized row by row, then cut into overlapping windows of
//! [`WINDOW_LEN`] consecutive rows with a step of one. Windows never span
//! file boundaries.

use crate::activity::vectorize::{vectorize, FeatureVector};
use crate::error::{DatasetError, Result};
use csv::ReaderBuilder;
use std::path::Path;

/// Number of consecutive event rows per training window.
pub const WINDOW_LEN: usize = 10;

/// Column holding the sensor identifier in an event row.
const SENSOR_COLUMN: usize = 2;

/// Column holding the raw sensor value in an event row.
const VALUE_COLUMN: usize = 3;

/// Parse a tab-separated event log and vectorize every row in file order.
///
/// Rows have no header and may carry trailing fields beyond the value
/// column, which are ignored. A row missing the sensor or value column is a
/// malformed file.
pub fn vectorize_log(path: &Path) -> Result<Vec<FeatureVector>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index + 1;

        let sensor = field(&record, SENSOR_COLUMN, path, line)?;
        let value = field(&record, VALUE_COLUMN, path, line)?;
        rows.push(vectorize(sensor, value).map_err(|e| e.at(path, line))?);
    }

    Ok(rows)
}

/// Step-1 sliding windows over a file's vectorized rows.
///
/// R rows yield `max(0, R - WINDOW_LEN + 1)` windows; window *i* covers rows
/// `[i, i + WINDOW_LEN)`. A log shorter than one window yields nothing, which
/// is not an error.
pub fn sliding_windows(rows: &[FeatureVector]) -> impl Iterator<Item = &[FeatureVector]> {
    rows.windows(WINDOW_LEN)
}

fn field<'r>(
    record: &'r csv::StringRecord,
    column: usize,
    path: &Path,
    line: usize,
) -> Result<&'r str> {
    record.get(column).ok_or_else(|| DatasetError::MalformedFile {
        path: path.to_path_buf(),
        reason: format!("row {line} has no column {column}"),
    })
}
