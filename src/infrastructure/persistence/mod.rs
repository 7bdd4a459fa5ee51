//! SQLite implementation of the domain's record source.
//!
//! - [`SqliteSource`] - read-only connection with scoped release

pub mod sqlite_source;

pub use sqlite_source::SqliteSource;
