//! Source trait for reading exportable records.

use crate::domain::entities::{Catalogue, Link};
use crate::error::ExportError;
use async_trait::async_trait;

/// A table the exporter reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Catalogues,
    Links,
}

impl Table {
    /// Table name as it appears in the database.
    pub fn name(self) -> &'static str {
        match self {
            Table::Catalogues => "catalogues",
            Table::Links => "links",
        }
    }

    /// Query returning every row of the table, oldest first.
    pub fn select_by_creation(self) -> &'static str {
        match self {
            Table::Catalogues => "SELECT * FROM catalogues ORDER BY created_at ASC",
            Table::Links => "SELECT * FROM links ORDER BY created_at ASC",
        }
    }
}

/// Read access to the catalogue and link tables.
///
/// Both methods return rows ordered by `created_at` ascending, decoded
/// verbatim into typed records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteSource`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send {
    /// Reads every catalogue, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ReadFault`] if the query fails or a row cannot be decoded.
    async fn fetch_catalogues(&mut self) -> Result<Vec<Catalogue>, ExportError>;

    /// Reads every link, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ReadFault`] if the query fails or a row cannot be decoded.
    async fn fetch_links(&mut self) -> Result<Vec<Link>, ExportError>;
}
