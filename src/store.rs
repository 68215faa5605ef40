//! Columnar array-store output shared by both pipelines.
//!
//! A finished dataset is three aligned arrays written to a single NPZ file
//! with named members `X`, `y`, and `y_onehot`.

use crate::error::Result;
use ndarray::{Array1, Array2, Array3};
use ndarray_npy::NpzWriter;
use std::fs::File;
use std::path::Path;

/// A finished dataset: feature windows plus aligned label arrays.
///
/// The three arrays always share the leading dimension; every feature window
/// has exactly one integer label and one one-hot row.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature windows, shape `[n, rows, channels]`.
    pub x: Array3<f64>,
    /// Integer class labels, shape `[n]`.
    pub y: Array1<i32>,
    /// One-hot class labels, shape `[n, classes]`.
    pub y_onehot: Array2<f64>,
}

impl Dataset {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.x.shape()[0]
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the three arrays to `path` as a named-array store.
    ///
    /// This is the last step of a build; a run that fails earlier never
    /// creates the file.
    pub fn write_npz(&self, path: &Path) -> Result<()> {
        let mut npz = NpzWriter::new(File::create(path)?);
        npz.add_array("X", &self.x)?;
        npz.add_array("y", &self.y)?;
        npz.add_array("y_onehot", &self.y_onehot)?;
        npz.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, Array3};

    #[test]
    fn test_len_follows_leading_dimension() {
        let dataset = Dataset {
            x: Array3::zeros((4, 10, 40)),
            y: Array1::from_vec(vec![1, 1, 2, 3]),
            y_onehot: Array2::zeros((4, 5)),
        };
        assert_eq!(dataset.len(), 4);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset {
            x: Array3::zeros((0, 10, 40)),
            y: Array1::from_vec(Vec::new()),
            y_onehot: Array2::zeros((0, 5)),
        };
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_write_npz_creates_store() {
        let dataset = Dataset {
            x: Array3::from_elem((2, 3, 4), 0.5),
            y: Array1::from_vec(vec![1, 2]),
            y_onehot: Array2::from_shape_vec(
                (2, 2),
                vec![1.0, 0.0, 0.0, 1.0],
            )
            .unwrap(),
        };

        let path = std::env::temp_dir().join("har-datasets-store-test.npz");
        dataset.write_npz(&path).expect("write should succeed");
        let metadata = std::fs::metadata(&path).expect("store file should exist");
        assert!(metadata.len() > 0);
        let _ = std::fs::remove_file(&path);
    }
}
