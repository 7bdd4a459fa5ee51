//! Referential and uniqueness checks over exported records.
//!
//! The checks are advisory. Findings are logged and returned as an
//! [`IntegrityReport`], but the records are never modified and the export
//! always continues.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::{Catalogue, Link};

/// A link whose `catalogue_id` matches no exported catalogue.
///
/// A NULL `catalogue_id` never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanedLink {
    pub id: i64,
    pub description: Option<String>,
    pub catalogue_id: Option<i64>,
}

impl fmt::Display for OrphanedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Link ID {}: '{}' -> catalogue_id ",
            self.id,
            self.description.as_deref().unwrap_or("NULL")
        )?;
        match self.catalogue_id {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("NULL"),
        }
    }
}

/// Findings of [`verify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    pub orphaned_links: Vec<OrphanedLink>,
    pub duplicate_urls: bool,
}

impl IntegrityReport {
    /// Returns true if no finding was recorded.
    pub fn is_clean(&self) -> bool {
        self.orphaned_links.is_empty() && !self.duplicate_urls
    }
}

/// Checks that every link references a known catalogue and that link URLs
/// are unique, logging one line per finding group.
pub fn verify(catalogues: &[Catalogue], links: &[Link]) -> IntegrityReport {
    tracing::info!("Verifying data integrity...");

    let catalogue_ids: HashSet<i64> = catalogues.iter().map(|c| c.id).collect();

    let orphaned_links: Vec<OrphanedLink> = links
        .iter()
        .filter(|link| {
            link.catalogue_id
                .is_none_or(|id| !catalogue_ids.contains(&id))
        })
        .map(|link| OrphanedLink {
            id: link.id,
            description: link.description.clone(),
            catalogue_id: link.catalogue_id,
        })
        .collect();

    if orphaned_links.is_empty() {
        tracing::info!("All links have valid catalogue references");
    } else {
        tracing::warn!("{} links have invalid catalogue_id", orphaned_links.len());
        for orphan in &orphaned_links {
            tracing::warn!("{}", orphan);
        }
    }

    // NULL urls compare equal to each other, as two missing values
    let distinct_urls: HashSet<Option<&str>> =
        links.iter().map(|link| link.url.as_deref()).collect();
    let duplicate_urls = distinct_urls.len() < links.len();

    if duplicate_urls {
        tracing::warn!("Duplicate URLs found");
    } else {
        tracing::info!("All URLs are unique");
    }

    IntegrityReport {
        orphaned_links,
        duplicate_urls,
    }
}
