//! Export configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden by command
//! line flags, and validated before the run starts.
//!
//! ```bash
//! export DATABASE_PATH="database.db"
//! export EXPORT_PATH="sqlite_export.json"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_PATH` - Source database file (default: `database.db`)
//! - `EXPORT_PATH` - Output JSON file (default: `sqlite_export.json`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::writer::DEFAULT_EXPORT_PATH;

/// Default source database, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "database.db";

/// Export configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub export_path: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);
        let export_path = env::var("EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_path);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            database_path,
            export_path,
            log_level,
            log_format,
        }
    }

    /// Replaces the paths with explicitly given values.
    pub fn with_overrides(mut self, database: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(database) = database {
            self.database_path = database;
        }
        if let Some(output) = output {
            self.export_path = output;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either path is empty
    /// - the export path is the database path
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.database_path.as_os_str().is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        if self.export_path.as_os_str().is_empty() {
            anyhow::bail!("EXPORT_PATH must not be empty");
        }

        if self.export_path == self.database_path {
            anyhow::bail!(
                "EXPORT_PATH must differ from DATABASE_PATH, both are '{}'",
                self.export_path.display()
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Installs the global tracing subscriber.
    ///
    /// `RUST_LOG` directives win over `log_level` when set.
    pub fn init_tracing(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        match self.log_format.as_str() {
            "json" => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_target(false)
                .init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .init(),
        }
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Database: {}", self.database_path.display());
        tracing::debug!("  Output: {}", self.export_path.display());
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads configuration from the environment, applies overrides and validates it.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(database: Option<PathBuf>, output: Option<PathBuf>) -> Result<Config> {
    let config = Config::from_env().with_overrides(database, output);
    config.validate()?;
    Ok(config)
}
