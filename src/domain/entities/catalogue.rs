//! Catalogue entity, a named and colored group of links.

use serde::{Deserialize, Serialize};

/// A catalogue row as stored in the `catalogues` table.
///
/// Columns are extracted by name, so the table may declare them in any order.
/// Every column except the primary key may hold NULL in the store; NULL is
/// kept as `None` and written as `null`. `created_at` is kept as the store's
/// text representation and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Catalogue {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: Option<String>,
}

impl Catalogue {
    /// Creates a new Catalogue instance with all non-key columns present
    /// except `description`.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: Option<String>,
        color: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description,
            color: Some(color.into()),
            created_at: Some(created_at.into()),
        }
    }

    /// Name for display, empty when the column is NULL.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
