//! Domain layer: record types, the export document, and the source trait.
//!
//! # Architecture
//!
//! - [`entities`] - Catalogue and link records
//! - [`document`] - The export document and its metadata block
//! - [`repositories`] - Read-side trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on SQLite or the filesystem.

pub mod document;
pub mod entities;
pub mod repositories;
