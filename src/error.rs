//! Error types for the export pipeline.
//!
//! Every fatal condition of a run is a variant of [`ExportError`]. Integrity
//! findings and a failed size read-back are diagnostics only and never
//! surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure of an export run.
///
/// Callers branch on the variant rather than on the rendered message:
///
/// - [`ExportError::NotFound`] - datastore file is absent, nothing was opened
/// - [`ExportError::Connection`] - the file exists but could not be opened as a database
/// - [`ExportError::ReadFault`] - querying one of the tables failed
/// - [`ExportError::WriteFault`] - serializing or saving the output failed
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Database file {} not found!", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to open database {}: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to read table `{table}`: {source}")]
    ReadFault {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFault {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    pub fn read_fault(table: &'static str, source: sqlx::Error) -> Self {
        Self::ReadFault { table, source }
    }

    pub fn write_fault(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteFault {
            path: path.into(),
            source,
        }
    }

    /// Returns true if the run failed before any connection was opened.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
