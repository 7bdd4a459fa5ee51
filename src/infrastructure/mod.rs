//! Infrastructure layer for filesystem and database access.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite record source
//! - [`writer`] - JSON export file output

pub mod persistence;
pub mod writer;
