//! Error taxonomy shared by both dataset pipelines.
//!
//! Every error here is fatal to a build: the feature/label alignment of the
//! output arrays must hold exactly, and a store is only written after the
//! full dataset has been assembled, so an aborted run never leaves a partial
//! store on disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced while vectorizing a single event row.
///
/// The row vectorizer has no knowledge of which file or line it is working
/// on; the file parser wraps these with a location via [`RowError::at`].
#[derive(Debug, Clone, Error)]
pub enum RowError {
    /// The sensor identifier is not in the known-sensor table.
    #[error("unknown sensor id {id:?}")]
    UnknownSensor { id: String },

    /// The value token is neither a categorical token nor a number.
    #[error("malformed value {token:?}")]
    MalformedValue { token: String },
}

impl RowError {
    /// Attach the file and 1-based line the row came from.
    pub fn at(self, path: &Path, line: usize) -> DatasetError {
        let path = path.to_path_buf();
        match self {
            RowError::UnknownSensor { id } => DatasetError::UnknownSensor { id, path, line },
            RowError::MalformedValue { token } => {
                DatasetError::MalformedValue { token, path, line }
            }
        }
    }
}

/// Errors produced while building a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A sensor identifier was not found in the known-sensor table.
    #[error("unknown sensor id {id:?} at {}:{line}", .path.display())]
    UnknownSensor {
        id: String,
        path: PathBuf,
        line: usize,
    },

    /// A value token was neither categorical nor numeric.
    #[error("malformed value {token:?} at {}:{line}", .path.display())]
    MalformedValue {
        token: String,
        path: PathBuf,
        line: usize,
    },

    /// A segment matrix had an exactly-zero L2 norm and cannot be normalized.
    #[error("degenerate zero-norm {kind} matrix in {}", .path.display())]
    DegenerateNorm { kind: &'static str, path: PathBuf },

    /// An expected segment file is absent.
    #[error("missing segment file {}", .path.display())]
    MissingFile { path: PathBuf },

    /// A file had fewer rows or columns than the pipeline requires, or a
    /// cell that could not be read.
    #[error("malformed file {}: {reason}", .path.display())]
    MalformedFile { path: PathBuf, reason: String },

    /// A filename matched the data-file convention but carried no usable
    /// class label.
    #[error("cannot read class label from filename {name:?}: {reason}")]
    BadLabel { name: String, reason: String },

    /// An underlying filesystem error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A delimited input file could not be parsed.
    #[error("parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Aggregated rows did not fit the declared output shape.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// The output store could not be written.
    #[error("array store write error: {0}")]
    Store(#[from] ndarray_npy::WriteNpzError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DatasetError>;
