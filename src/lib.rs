//! # SQLite Export
//!
//! Exports the `catalogues` and `links` tables of a SQLite database into a
//! single JSON document that the static site admin panel can import into
//! browser local storage.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Record types, the export document, and the source trait
//! - **Application Layer** ([`application`]) - Export, integrity, document and summary steps
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite access and JSON file output
//! - **Run** ([`export`]) - The linear pipeline tying the steps together
//!
//! ## Quick Start
//!
//! ```bash
//! # Reads ./database.db and writes ./sqlite_export.json
//! cargo run
//!
//! # Explicit paths
//! cargo run -- --database data/links.db --output site/import.json
//! ```
//!
//! ## Configuration
//!
//! Paths and logging are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;

pub use error::ExportError;
pub use export::{ExportOutcome, run};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::{DocumentBuilder, ExportSummary, IntegrityReport};
    pub use crate::config::Config;
    pub use crate::domain::document::{ExportDocument, ExportInfo, FORMAT_VERSION};
    pub use crate::domain::entities::{Catalogue, Link};
    pub use crate::error::ExportError;
    pub use crate::export::{ExportOutcome, run};
}
