// Repository trait for dashboard server access
use crate::application::error::Result;
use crate::domain::dashboard::{Dashboard, DashboardSummary, DashboardWithMeta};
use async_trait::async_trait;

/// Body of a create/update request
#[derive(Debug, Clone)]
pub struct SaveDashboardRequest {
    pub dashboard: Dashboard,
    pub message: String,
    pub overwrite: bool,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Search dashboards by free text, in server order
    async fn search(&self, query: &str) -> Result<Vec<DashboardSummary>>;

    /// Fetch the full definition of a dashboard
    async fn get_by_uid(&self, uid: &str) -> Result<DashboardWithMeta>;

    /// Create or update a dashboard in the general folder
    async fn save(&self, request: SaveDashboardRequest) -> Result<()>;
}
