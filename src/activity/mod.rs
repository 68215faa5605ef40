//! Activity-log pipeline: event rows to windowed training data.
//!
//! This module contains:
//! - Per-row vectorization against the fixed sensor table
//! - Event-log parsing and sliding-window construction
//! - Directory aggregation into one labeled dataset

pub mod dataset;
pub mod vectorize;
pub mod windows;

// Re-export commonly used items
pub use dataset::{build, file_label, ActivityBuild, CLASS_COUNT};
pub use vectorize::{sensor_index, vectorize, FeatureVector, EPSILON, SENSOR_COUNT, SENSOR_IDS};
pub use windows::{sliding_windows, vectorize_log, WINDOW_LEN};
