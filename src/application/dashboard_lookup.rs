// Resolve a dashboard title to its full definition
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::error::{Result, TransferError};
use crate::domain::dashboard::{DashboardSummary, DashboardWithMeta};

/// Search for `title` and fetch the first hit whose title matches exactly.
///
/// Fails with [`TransferError::NotFound`] before any fetch when nothing matches.
pub async fn find_dashboard(
    repository: &dyn DashboardRepository,
    title: &str,
) -> Result<(DashboardSummary, DashboardWithMeta)> {
    let hits = repository.search(title).await?;
    tracing::debug!("Search for {:?} returned {} hits", title, hits.len());

    let hit = hits
        .into_iter()
        .find(|hit| hit.title == title)
        .ok_or_else(|| TransferError::NotFound(title.to_string()))?;

    let definition = repository.get_by_uid(&hit.uid).await?;
    tracing::debug!(
        "Fetched {:?} from folder {:?} (provisioned: {})",
        hit.title,
        hit.folder(),
        definition.meta["provisioned"].as_bool().unwrap_or(false)
    );
    Ok((hit, definition))
}
