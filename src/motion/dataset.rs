//! Nested traversal of the motion-segment tree into two parallel datasets.

use crate::error::Result;
use crate::motion::segment::{process_segment, AXIS_COUNT, SEGMENT_ROWS};
use crate::store::Dataset;
use ndarray::{Array1, Array2, Array3};
use std::ops::RangeInclusive;
use std::path::Path;

/// Which part of the `a*/p*/s*.txt` tree a build walks.
///
/// The default is the full recording tree: nine activities, eight
/// participants, sixty segments. The first activity number maps to class 0.
#[derive(Debug, Clone)]
pub struct MotionLayout {
    /// Activity directories (`a10` .. `a18`), one class each.
    pub activities: RangeInclusive<u32>,
    /// Participant directories (`p1` .. `p8`) under every activity.
    pub participants: RangeInclusive<u32>,
    /// Segment files (`s01.txt` .. `s60.txt`) under every participant.
    pub segments: RangeInclusive<u32>,
}

impl Default for MotionLayout {
    fn default() -> Self {
        Self {
            activities: 10..=18,
            participants: 1..=8,
            segments: 1..=60,
        }
    }
}

impl MotionLayout {
    /// Number of activity classes, which is also the one-hot width.
    pub fn class_count(&self) -> usize {
        self.activities.clone().count()
    }

    /// Total number of segment files the layout covers.
    pub fn segment_count(&self) -> usize {
        self.class_count() * self.participants.clone().count() * self.segments.clone().count()
    }
}

/// Filename for a segment number, zero-padded to two digits.
pub fn segment_filename(segment: u32) -> String {
    format!("s{segment:02}.txt")
}

/// The two parallel datasets a motion build produces.
#[derive(Debug)]
pub struct MotionBuild {
    pub gyroscope: Dataset,
    pub accelerometer: Dataset,
    /// Segment files processed.
    pub segments: usize,
}

/// Build both motion datasets from the default recording tree under `root`.
pub fn build(root: &Path) -> Result<MotionBuild> {
    build_with_layout(root, &MotionLayout::default())
}

/// Walk `root/a<activity>/p<participant>/s<segment>.txt` in fixed nested
/// order and build the gyroscope and accelerometer datasets.
///
/// The iteration order (activity, then participant, then segment) is part of
/// the output contract: rows in both stores follow it exactly, and both
/// datasets share identical label arrays.
pub fn build_with_layout(root: &Path, layout: &MotionLayout) -> Result<MotionBuild> {
    let first_activity = *layout.activities.start();
    let mut gyroscope_values: Vec<f64> = Vec::new();
    let mut accelerometer_values: Vec<f64> = Vec::new();
    let mut labels: Vec<i32> = Vec::new();

    for activity in layout.activities.clone() {
        let label = (activity - first_activity) as i32;
        for participant in layout.participants.clone() {
            let dir = root
                .join(format!("a{activity}"))
                .join(format!("p{participant}"));
            for segment in layout.segments.clone() {
                let (gyroscope, accelerometer) = process_segment(&dir.join(segment_filename(segment)))?;
                gyroscope_values.extend(gyroscope.iter().copied());
                accelerometer_values.extend(accelerometer.iter().copied());
                labels.push(label);
            }
        }
    }

    let n = labels.len();
    let classes = layout.class_count();
    let mut y_onehot = Array2::zeros((n, classes));
    for (i, &label) in labels.iter().enumerate() {
        y_onehot[[i, label as usize]] = 1.0;
    }
    let y = Array1::from_vec(labels);

    let gyroscope = Dataset {
        x: Array3::from_shape_vec((n, SEGMENT_ROWS, AXIS_COUNT), gyroscope_values)?,
        y: y.clone(),
        y_onehot: y_onehot.clone(),
    };
    let accelerometer = Dataset {
        x: Array3::from_shape_vec((n, SEGMENT_ROWS, AXIS_COUNT), accelerometer_values)?,
        y,
        y_onehot,
    };

    Ok(MotionBuild {
        gyroscope,
        accelerometer,
        segments: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_filename_zero_padding() {
        assert_eq!(segment_filename(1), "s01.txt");
        assert_eq!(segment_filename(9), "s09.txt");
        assert_eq!(segment_filename(10), "s10.txt");
        assert_eq!(segment_filename(60), "s60.txt");
    }

    #[test]
    fn test_default_layout_covers_full_tree() {
        let layout = MotionLayout::default();
        assert_eq!(layout.class_count(), 9);
        assert_eq!(layout.segment_count(), 9 * 8 * 60);
    }
}
