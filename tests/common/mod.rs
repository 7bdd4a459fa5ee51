#![allow(dead_code)]

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use sqlite_export::config::Config;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const CATALOGUES_SCHEMA: &str = "CREATE TABLE catalogues (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    color TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

pub const LINKS_SCHEMA: &str = "CREATE TABLE links (
    id INTEGER PRIMARY KEY,
    catalogue_id INTEGER NOT NULL,
    url TEXT NOT NULL,
    description TEXT NOT NULL,
    clicks INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Creates (or opens) a writable database at `path` without any tables.
pub async fn open_writable(path: &Path) -> SqliteConnection {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .connect()
        .await
        .unwrap()
}

/// Creates a database at `path` with both tables.
pub async fn create_test_database(path: &Path) -> SqliteConnection {
    let mut conn = open_writable(path).await;
    sqlx::query(CATALOGUES_SCHEMA)
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query(LINKS_SCHEMA).execute(&mut conn).await.unwrap();
    conn
}

pub async fn insert_catalogue(
    conn: &mut SqliteConnection,
    id: i64,
    name: &str,
    color: &str,
    created_at: &str,
) {
    sqlx::query(
        "INSERT INTO catalogues (id, name, description, color, created_at) VALUES (?, ?, NULL, ?, ?)",
    )
    .bind(id)
    .bind(name)
    .bind(color)
    .bind(created_at)
    .execute(&mut *conn)
    .await
    .unwrap();
}

pub async fn insert_link(
    conn: &mut SqliteConnection,
    id: i64,
    catalogue_id: i64,
    url: &str,
    description: &str,
    clicks: i64,
    created_at: &str,
) {
    sqlx::query(
        "INSERT INTO links (id, catalogue_id, url, description, clicks, created_at) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(catalogue_id)
    .bind(url)
    .bind(description)
    .bind(clicks)
    .bind(created_at)
    .execute(&mut *conn)
    .await
    .unwrap();
}

/// Two catalogues and three links: catalogue 1 holds links with 5 and 10
/// clicks, catalogue 2 one link with 3 clicks.
pub async fn seed_standard_fixture(conn: &mut SqliteConnection) {
    insert_catalogue(conn, 1, "Work", "#ff0000", "2024-01-01 09:00:00").await;
    insert_catalogue(conn, 2, "Home", "#00ff00", "2024-01-02 09:00:00").await;

    insert_link(conn, 1, 1, "https://a.example", "Alpha", 5, "2024-01-03 09:00:00").await;
    insert_link(conn, 2, 1, "https://b.example", "Beta", 10, "2024-01-04 09:00:00").await;
    insert_link(conn, 3, 2, "https://c.example", "Gamma", 3, "2024-01-05 09:00:00").await;
}

pub async fn close(conn: SqliteConnection) {
    conn.close().await.unwrap();
}

/// Configuration pointing at `database.db` and `sqlite_export.json` inside `dir`.
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        database_path: dir.path().join("database.db"),
        export_path: dir.path().join("sqlite_export.json"),
        ..Config::default()
    }
}

/// Links table whose data columns all accept NULL.
pub const NULLABLE_LINKS_SCHEMA: &str = "CREATE TABLE links (
    id INTEGER PRIMARY KEY,
    catalogue_id INTEGER,
    url TEXT,
    description TEXT,
    clicks INTEGER,
    created_at TIMESTAMP
)";

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    /// Installs a plain-text subscriber writing into this buffer for the
    /// current thread until the guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Number of captured lines containing `needle`.
    pub fn count_lines(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}
