//! Motion-segment pipeline: fixed-length recordings to normalized datasets.
//!
//! This module contains:
//! - Segment-file parsing and whole-matrix L2 normalization
//! - Fixed-order traversal of the activity/participant/segment tree

pub mod dataset;
pub mod segment;

// Re-export commonly used items
pub use dataset::{
    build, build_with_layout, segment_filename, MotionBuild, MotionLayout,
};
pub use segment::{process_segment, AXIS_COUNT, SEGMENT_ROWS};
