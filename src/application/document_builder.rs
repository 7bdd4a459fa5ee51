//! Assembles the export document from exported records.

use std::path::Path;

use chrono::Local;

use crate::domain::document::{ExportDocument, ExportInfo, FORMAT_VERSION};
use crate::domain::entities::{Catalogue, Link};

/// Source label used when the database file name is not known.
pub const DEFAULT_SOURCE: &str = "SQLite database.db";

/// Builds [`ExportDocument`]s stamped with a fixed source label.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    source: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl DocumentBuilder {
    /// Creates a builder with the given source label.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Creates a builder labelled after the database file, e.g. `SQLite database.db`.
    pub fn for_database(path: &Path) -> Self {
        match path.file_name() {
            Some(name) => Self::new(format!("SQLite {}", name.to_string_lossy())),
            None => Self::default(),
        }
    }

    /// Builds a document stamped with the current local time.
    pub fn build(&self, catalogues: Vec<Catalogue>, links: Vec<Link>) -> ExportDocument {
        let exported_at = Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        self.build_at(catalogues, links, exported_at)
    }

    /// Builds a document with an explicit `exported_at` value.
    ///
    /// Collections are moved in as received; nothing is reordered or filtered.
    pub fn build_at(
        &self,
        catalogues: Vec<Catalogue>,
        links: Vec<Link>,
        exported_at: impl Into<String>,
    ) -> ExportDocument {
        let export_info = ExportInfo {
            exported_at: exported_at.into(),
            source: self.source.clone(),
            format_version: FORMAT_VERSION.to_string(),
            total_catalogues: catalogues.len(),
            total_links: links.len(),
        };

        ExportDocument {
            catalogues,
            links,
            export_info,
        }
    }
}
