//! Data access traits for the domain layer.
//!
//! The exporter depends only on [`RecordSource`]; the SQLite implementation
//! lives in `crate::infrastructure::persistence`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod record_source;

pub use record_source::{RecordSource, Table};

#[cfg(test)]
pub use record_source::MockRecordSource;
