use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Cannot open input table {path}: {source}")]
    MissingSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read header row of {path}: {source}")]
    SourceFormat {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Background load task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

impl PipelineError {
    /// A missing or unreadable input table aborts the run. A failed report
    /// write does not: the run finishes with partial output and a logged
    /// error.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ReportWrite { .. })
    }
}
