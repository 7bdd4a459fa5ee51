//! The export document written to disk at the end of a run.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Catalogue, Link};

/// Compatibility tag checked by the static site importer.
pub const FORMAT_VERSION: &str = "2.0";

/// Run metadata stored under the `export_info` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    pub exported_at: String,
    pub source: String,
    pub format_version: String,
    pub total_catalogues: usize,
    pub total_links: usize,
}

/// Both record collections plus [`ExportInfo`].
///
/// Built once per run by [`crate::application::document_builder::DocumentBuilder`]
/// and never mutated afterwards. Field order here is the key order in the
/// written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub catalogues: Vec<Catalogue>,
    pub links: Vec<Link>,
    pub export_info: ExportInfo,
}
