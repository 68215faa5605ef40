//! HAR Datasets - fixed-shape training datasets from raw sensor logs.
//!
//! This library converts two kinds of time-series sensor recordings into
//! aligned feature/label arrays and persists them as named-array stores for
//! classifier training.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      HAR Dataset Builder                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  activity pipeline                                           │
//! │  ┌───────────┐   ┌────────────┐   ┌──────────────┐           │
//! │  │ TSV event │──▶│ vectorize  │──▶│ 10-row slide │──┐        │
//! │  │   logs    │   │ (40 slots) │   │   windows    │  │        │
//! │  └───────────┘   └────────────┘   └──────────────┘  ▼        │
//! │                                             ┌─────────────┐  │
//! │                                             │   Dataset   │  │
//! │  motion pipeline                            │ X/y/y_onehot│  │
//! │  ┌───────────┐   ┌────────────┐             │  NPZ store  │  │
//! │  │ a*/p*/s*  │──▶│ 125×3 gyro │────────────▶└─────────────┘  │
//! │  │ segments  │   │ + accel L2 │                              │
//! │  └───────────┘   └────────────┘                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both pipelines are independent, sequential, and hold the whole dataset in
//! memory until a single bulk write at the end; any error aborts the run
//! before a store is created.
//!
//! # Example
//!
//! ```no_run
//! use har_datasets::activity;
//! use std::path::Path;
//!
//! let build = activity::build(Path::new("adlnormal")).expect("build failed");
//! println!(
//!     "{} windows from {} files",
//!     build.dataset.len(),
//!     build.files_used
//! );
//! build
//!     .dataset
//!     .write_npz(Path::new("CASAS_adlnormal_dataset.npz"))
//!     .expect("write failed");
//! ```

pub mod activity;
pub mod config;
pub mod error;
pub mod motion;
pub mod report;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigError};
pub use error::{DatasetError, Result, RowError};
pub use report::{BuildReport, OutputRecord, ReportBuilder};
pub use store::Dataset;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
