//! Error types for the snapshot pipeline.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while fetching a document from the TigerTag API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A list could not be ordered by its sort field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("element {index} has no `{field}` field")]
    MissingField { field: &'static str, index: usize },

    #[error("element {index} has a `{field}` value that cannot be ordered")]
    UnsortableValue { field: &'static str, index: usize },

    #[error("element {index} has a `{field}` value of a different type than element 0")]
    IncomparableValues { field: &'static str, index: usize },
}

/// Failure while writing (or reading, for `pack`) snapshot files.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("input file does not exist: {0}")]
    MissingInput(PathBuf),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
