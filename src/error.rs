//! Error types. Loading the dataset is the only fallible I/O; everything
//! downstream of a loaded table is infallible except control validation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("dataset not found: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot read dataset {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path} is missing required columns: {}", missing.join(", "))]
    MissingColumns { path: PathBuf, missing: Vec<String> },

    #[error("dataset {path}, line {line}: {reason}")]
    InvalidRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("unknown segment {segment:?} (expected one of: {})", known.join(", "))]
    UnknownSegment { segment: String, known: Vec<String> },
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] DataLoadError),

    #[error(transparent)]
    Control(#[from] ControlError),
}
