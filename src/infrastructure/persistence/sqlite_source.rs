//! SQLite implementation of the record source.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, FromRow};
use std::path::Path;

use crate::domain::entities::{Catalogue, Link};
use crate::domain::repositories::{RecordSource, Table};
use crate::error::ExportError;

/// Read-only connection to the source database.
///
/// The connection is held for the lifetime of the value and released when it
/// is dropped, so every exit path of the owning scope closes it exactly once.
pub struct SqliteSource {
    conn: SqliteConnection,
}

impl SqliteSource {
    /// Opens `path` read-only.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NotFound`] if the file does not exist; no
    /// connection is attempted in that case.
    /// Returns [`ExportError::Connection`] if SQLite cannot open the file.
    pub async fn open(path: &Path) -> Result<Self, ExportError> {
        if !path.exists() {
            return Err(ExportError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .connect()
            .await
            .map_err(|source| ExportError::Connection {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "Connected to database");

        Ok(Self { conn })
    }

    async fn fetch_table<T>(&mut self, table: Table) -> Result<Vec<T>, ExportError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        sqlx::query_as::<_, T>(table.select_by_creation())
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| ExportError::read_fault(table.name(), source))
    }
}

impl Drop for SqliteSource {
    fn drop(&mut self) {
        tracing::info!("Database connection closed");
    }
}

#[async_trait]
impl RecordSource for SqliteSource {
    async fn fetch_catalogues(&mut self) -> Result<Vec<Catalogue>, ExportError> {
        self.fetch_table(Table::Catalogues).await
    }

    async fn fetch_links(&mut self) -> Result<Vec<Link>, ExportError> {
        self.fetch_table(Table::Links).await
    }
}
