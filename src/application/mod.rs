//! Application layer: the steps of an export run.
//!
//! Each module is one stage of the pipeline driven by [`crate::export::run`]:
//!
//! - [`exporter`] - reads both tables through a [`crate::domain::repositories::RecordSource`]
//! - [`integrity`] - advisory orphan and duplicate-URL checks
//! - [`document_builder`] - assembles the export document
//! - [`summary`] - per-catalogue counts and click statistics

pub mod document_builder;
pub mod exporter;
pub mod integrity;
pub mod summary;

pub use document_builder::DocumentBuilder;
pub use integrity::{IntegrityReport, OrphanedLink};
pub use summary::ExportSummary;
