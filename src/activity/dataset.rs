//! Aggregation of per-file windows into the activity training dataset.

use crate::activity::vectorize::SENSOR_COUNT;
use crate::activity::windows::{sliding_windows, vectorize_log, WINDOW_LEN};
use crate::error::{DatasetError, Result};
use crate::store::Dataset;
use ndarray::{Array1, Array2, Array3};
use std::fs;
use std::path::Path;

/// Number of activity classes encoded in the one-hot labels.
pub const CLASS_COUNT: usize = 5;

/// Character offset of the class digit in a data filename.
const LABEL_OFFSET: usize = 5;

/// A built activity dataset plus what the directory scan saw.
#[derive(Debug)]
pub struct ActivityBuild {
    pub dataset: Dataset,
    /// Directory entries considered.
    pub files_scanned: usize,
    /// Entries that carried a label and were vectorized.
    pub files_used: usize,
}

/// Class label for a data file, or `None` for entries that hold no event
/// data.
///
/// Data files start with `p` and carry their class digit at a fixed offset
/// (`p13_t4` style names); anything else in the directory is skipped. A name
/// that matches the prefix but has no valid class digit aborts the build, so
/// a broken naming convention cannot silently drop data.
pub fn file_label(name: &str) -> Result<Option<i32>> {
    if !name.starts_with('p') {
        return Ok(None);
    }

    let digit = name.as_bytes().get(LABEL_OFFSET).copied().ok_or_else(|| {
        DatasetError::BadLabel {
            name: name.to_string(),
            reason: format!("shorter than {} characters", LABEL_OFFSET + 1),
        }
    })?;
    if !digit.is_ascii_digit() {
        return Err(DatasetError::BadLabel {
            name: name.to_string(),
            reason: format!("character {LABEL_OFFSET} is not a digit"),
        });
    }

    let label = i32::from(digit - b'0');
    if !(1..=CLASS_COUNT as i32).contains(&label) {
        return Err(DatasetError::BadLabel {
            name: name.to_string(),
            reason: format!("class {label} outside 1..={CLASS_COUNT}"),
        });
    }
    Ok(Some(label))
}

/// Build the activity dataset from every qualifying file in `dir`.
///
/// Filenames are processed in sorted order so repeated runs over the same
/// directory produce identical stores. Each file contributes its sliding
/// windows, with the file's label replicated once per window.
pub fn build(dir: &Path) -> Result<ActivityBuild> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => {
                return Err(DatasetError::BadLabel {
                    name: name.to_string_lossy().into_owned(),
                    reason: "filename is not valid UTF-8".to_string(),
                })
            }
        }
    }
    names.sort();

    let mut window_values: Vec<f64> = Vec::new();
    let mut labels: Vec<i32> = Vec::new();
    let mut files_used = 0;

    for name in &names {
        let Some(label) = file_label(name)? else {
            continue;
        };

        let rows = vectorize_log(&dir.join(name))?;
        for window in sliding_windows(&rows) {
            for row in window {
                window_values.extend_from_slice(row);
            }
            labels.push(label);
        }
        files_used += 1;
    }

    let n = labels.len();
    let x = Array3::from_shape_vec((n, WINDOW_LEN, SENSOR_COUNT), window_values)?;
    let mut y_onehot = Array2::zeros((n, CLASS_COUNT));
    for (i, &label) in labels.iter().enumerate() {
        y_onehot[[i, (label - 1) as usize]] = 1.0;
    }
    let y = Array1::from_vec(labels);

    Ok(ActivityBuild {
        dataset: Dataset { x, y, y_onehot },
        files_scanned: names.len(),
        files_used,
    })
}
