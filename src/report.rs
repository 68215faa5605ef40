//! Build reports written alongside exported datasets.
//!
//! A report records what a run read and wrote without duplicating any array
//! data, so a store on disk can always be traced back to the run that
//! produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One output store written by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Store file path
    pub path: PathBuf,
    /// Samples in the store
    pub samples: usize,
}

/// Provenance record for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildReport {
    /// Unique id for this run
    pub run_id: Uuid,
    /// Machine the dataset was built on
    pub host: Option<String>,
    /// Pipeline that produced the stores
    pub pipeline: String,
    /// When the build started
    pub started_at: DateTime<Utc>,
    /// When the build finished
    pub finished_at: DateTime<Utc>,
    /// Input directory the build read from
    pub input: PathBuf,
    /// Stores written, in write order
    pub outputs: Vec<OutputRecord>,
}

impl BuildReport {
    /// Save the report as pretty JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

/// Collects run metadata while a pipeline executes.
pub struct ReportBuilder {
    run_id: Uuid,
    pipeline: String,
    started_at: DateTime<Utc>,
    input: PathBuf,
}

impl ReportBuilder {
    /// Start a report for a pipeline run over `input`.
    pub fn new(pipeline: &str, input: &Path) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            pipeline: pipeline.to_string(),
            started_at: Utc::now(),
            input: input.to_path_buf(),
        }
    }

    /// The run's unique id.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Close the report with the stores the run wrote.
    pub fn finish(self, outputs: Vec<OutputRecord>) -> BuildReport {
        BuildReport {
            run_id: self.run_id,
            host: hostname::get().ok().and_then(|h| h.into_string().ok()),
            pipeline: self.pipeline,
            started_at: self.started_at,
            finished_at: Utc::now(),
            input: self.input,
            outputs,
        }
    }
}

/// Report path for a store: the store path with a `.report.json` suffix.
pub fn report_path_for(store: &Path) -> PathBuf {
    store.with_extension("report.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_closes_the_run() {
        let builder = ReportBuilder::new("activity", Path::new("adlnormal"));
        let run_id = builder.run_id();
        let report = builder.finish(vec![OutputRecord {
            path: PathBuf::from("CASAS_adlnormal_dataset.npz"),
            samples: 120,
        }]);

        assert_eq!(report.run_id, run_id);
        assert_eq!(report.pipeline, "activity");
        assert_eq!(report.outputs.len(), 1);
        assert!(report.finished_at >= report.started_at);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = ReportBuilder::new("motion", Path::new("sportsdata/data")).finish(vec![]);
        let json = serde_json::to_string(&report).unwrap();
        let back: BuildReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, report.run_id);
        assert_eq!(back.pipeline, "motion");
    }

    #[test]
    fn test_report_path_sits_next_to_store() {
        let path = report_path_for(Path::new("out/sports_data_gyroscope.npz"));
        assert_eq!(path, PathBuf::from("out/sports_data_gyroscope.report.json"));
    }
}
