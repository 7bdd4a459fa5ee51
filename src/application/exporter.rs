//! Reads both tables through a [`RecordSource`].

use crate::domain::entities::{Catalogue, Link};
use crate::domain::repositories::RecordSource;
use crate::error::ExportError;

/// Exports every catalogue, oldest first.
///
/// # Errors
///
/// Propagates [`ExportError::ReadFault`] from the source.
pub async fn export_catalogues<S>(source: &mut S) -> Result<Vec<Catalogue>, ExportError>
where
    S: RecordSource + ?Sized,
{
    let catalogues = source.fetch_catalogues().await?;
    tracing::info!("Exported {} catalogues", catalogues.len());
    Ok(catalogues)
}

/// Exports every link, oldest first.
///
/// # Errors
///
/// Propagates [`ExportError::ReadFault`] from the source.
pub async fn export_links<S>(source: &mut S) -> Result<Vec<Link>, ExportError>
where
    S: RecordSource + ?Sized,
{
    let links = source.fetch_links().await?;
    tracing::info!("Exported {} links", links.len());
    Ok(links)
}
