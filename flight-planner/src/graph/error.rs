//! Route graph loading errors.

use std::path::PathBuf;

use crate::domain::RecordError;

/// Errors that can occur while loading a schedule into a [`RouteGraph`](super::RouteGraph).
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A row could not be parsed (row numbers are 1-based, header excluded)
    #[error("row {row}: {source}")]
    Record {
        row: usize,
        #[source]
        source: RecordError,
    },

    /// The CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The schedule file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
