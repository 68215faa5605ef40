//! Fixed-length motion-segment parsing and whole-matrix normalization.
//!
//! Every segment file is a comma-separated table of at least 125 rows and 33
//! columns. Two 125×3 sub-matrices are extracted (gyroscope and
//! accelerometer axes) and each is divided by its own scalar L2 norm taken
//! over all 375 entries, not per axis.

use crate::error::{DatasetError, Result};
use csv::ReaderBuilder;
use ndarray::Array2;
use std::path::Path;

/// Rows used from every segment recording.
pub const SEGMENT_ROWS: usize = 125;

/// Number of axes per sensor.
pub const AXIS_COUNT: usize = 3;

/// First column of the gyroscope triple.
const GYROSCOPE_COLUMN: usize = 27;

/// First column of the accelerometer triple.
const ACCELEROMETER_COLUMN: usize = 30;

/// Columns a row must have for both sensor triples to be present.
const MIN_COLUMNS: usize = ACCELEROMETER_COLUMN + AXIS_COUNT;

/// Normalized gyroscope and accelerometer matrices from one segment file.
pub fn process_segment(path: &Path) -> Result<(Array2<f64>, Array2<f64>)> {
    if !path.exists() {
        return Err(DatasetError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut gyroscope = Array2::zeros((SEGMENT_ROWS, AXIS_COUNT));
    let mut accelerometer = Array2::zeros((SEGMENT_ROWS, AXIS_COUNT));
    let mut rows_seen = 0;

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        rows_seen = row + 1;

        if record.len() < MIN_COLUMNS {
            return Err(DatasetError::MalformedFile {
                path: path.to_path_buf(),
                reason: format!(
                    "row {} has {} columns, need at least {MIN_COLUMNS}",
                    row + 1,
                    record.len()
                ),
            });
        }

        for axis in 0..AXIS_COUNT {
            gyroscope[[row, axis]] = cell(&record, row, GYROSCOPE_COLUMN + axis, path)?;
            accelerometer[[row, axis]] = cell(&record, row, ACCELEROMETER_COLUMN + axis, path)?;
        }

        // Rows past the fixed segment length are not part of the recording.
        if rows_seen == SEGMENT_ROWS {
            break;
        }
    }

    if rows_seen < SEGMENT_ROWS {
        return Err(DatasetError::MalformedFile {
            path: path.to_path_buf(),
            reason: format!("{rows_seen} rows, need at least {SEGMENT_ROWS}"),
        });
    }

    Ok((
        normalized(gyroscope, "gyroscope", path)?,
        normalized(accelerometer, "accelerometer", path)?,
    ))
}

fn cell(record: &csv::StringRecord, row: usize, column: usize, path: &Path) -> Result<f64> {
    let raw = record.get(column).unwrap_or("");
    raw.trim()
        .parse()
        .map_err(|_| DatasetError::MalformedFile {
            path: path.to_path_buf(),
            reason: format!("cell ({}, {column}) is not numeric: {raw:?}", row + 1),
        })
}

/// Divide a matrix by its scalar L2 (Frobenius) norm.
///
/// A norm of exactly zero cannot be divided out and is surfaced as an error
/// rather than letting non-finite values reach the store.
fn normalized(matrix: Array2<f64>, kind: &'static str, path: &Path) -> Result<Array2<f64>> {
    let norm = matrix.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        return Err(DatasetError::DegenerateNorm {
            kind,
            path: path.to_path_buf(),
        });
    }
    Ok(matrix / norm)
}
