//! Link entity, a URL with a click counter belonging to one catalogue.

use serde::{Deserialize, Serialize};

/// A link row as stored in the `links` table.
///
/// `catalogue_id` is expected to reference an existing [`super::Catalogue`],
/// but the store does not enforce it. See [`crate::application::integrity`].
/// NULL columns are kept as `None` and written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub catalogue_id: Option<i64>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub clicks: Option<i64>,
    pub created_at: Option<String>,
}

impl Link {
    /// Creates a new Link instance with every column present.
    pub fn new(
        id: i64,
        catalogue_id: i64,
        url: impl Into<String>,
        description: impl Into<String>,
        clicks: i64,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            catalogue_id: Some(catalogue_id),
            url: Some(url.into()),
            description: Some(description.into()),
            clicks: Some(clicks),
            created_at: Some(created_at.into()),
        }
    }

    /// Returns true if the link points at the given catalogue.
    pub fn belongs_to(&self, catalogue_id: i64) -> bool {
        self.catalogue_id == Some(catalogue_id)
    }

    /// Description for display, empty when the column is NULL.
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
