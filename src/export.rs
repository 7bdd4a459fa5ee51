//! The export run: connect, export, verify, build, write, summarize.
//!
//! ```text
//! Start → Connected → Exported → Verified → Built → Written → Summarized → Done
//! ```
//!
//! Any fatal step returns an [`ExportError`]. The database connection is owned
//! by [`run`]'s scope and is released before the error reaches the caller.

use std::path::PathBuf;

use crate::application::exporter::{export_catalogues, export_links};
use crate::application::integrity::{self, IntegrityReport};
use crate::application::summary::{self, ExportSummary};
use crate::application::DocumentBuilder;
use crate::config::Config;
use crate::error::ExportError;
use crate::infrastructure::persistence::SqliteSource;
use crate::infrastructure::writer;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub output_path: PathBuf,
    /// Size of the written file, if it could be read back.
    pub bytes_written: Option<u64>,
    pub integrity: IntegrityReport,
    pub summary: ExportSummary,
}

/// Runs a full export with the given configuration.
///
/// Integrity findings never fail the run; they are logged and returned in
/// [`ExportOutcome::integrity`].
///
/// # Errors
///
/// Returns:
/// - [`ExportError::NotFound`] if the database file does not exist (no output is written)
/// - [`ExportError::Connection`] if the file cannot be opened as a database
/// - [`ExportError::ReadFault`] if either table cannot be read
/// - [`ExportError::WriteFault`] if the output file cannot be written
pub async fn run(config: &Config) -> Result<ExportOutcome, ExportError> {
    tracing::info!("Connecting to database...");
    let mut source = SqliteSource::open(&config.database_path).await?;

    tracing::info!("Exporting catalogues...");
    let catalogues = export_catalogues(&mut source).await?;

    tracing::info!("Exporting links...");
    let links = export_links(&mut source).await?;

    let integrity = integrity::verify(&catalogues, &links);

    tracing::info!("Creating export data...");
    let document = DocumentBuilder::for_database(&config.database_path).build(catalogues, links);

    tracing::info!("Saving JSON file...");
    let written = writer::write(&document, &config.export_path)?;

    let summary = summary::summarize(&document.catalogues, &document.links);

    Ok(ExportOutcome {
        output_path: written.path,
        bytes_written: written.bytes,
        integrity,
        summary,
    })
}
