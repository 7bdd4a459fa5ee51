//! Record types read from the source database.
//!
//! - [`Catalogue`] - a named, colored grouping of links
//! - [`Link`] - a URL with a click counter belonging to one catalogue
//!
//! Both derive [`sqlx::FromRow`] so rows are decoded by column name at the
//! adapter boundary, and [`serde::Serialize`] so they are written to the
//! export document with their column names unchanged.

pub mod catalogue;
pub mod link;

pub use catalogue::Catalogue;
pub use link::Link;
