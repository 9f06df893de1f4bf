#![deny(unsafe_code)]

use std::path::PathBuf;

use fieldfix_model::Category;

/// Fatal ingest failures.
///
/// Reference loading surfaces these before any correction begins; the main
/// input only fails on unreadable/unparsable files. Per-cell conditions are
/// never errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing reference sheet for category '{category}': {path}")]
    MissingSheet { category: Category, path: PathBuf },

    #[error("reference sheet {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Classify a reader-open failure: plain I/O keeps its source error,
    /// anything else is reported as a CSV problem.
    pub(crate) fn open(path: &std::path::Path, error: csv::Error) -> Self {
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Self::io(path, source),
            other => Self::Csv {
                path: path.to_path_buf(),
                message: format!("{other:?}"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
