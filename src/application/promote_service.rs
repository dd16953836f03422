// Promote service - Use case for making an editable copy of a reference dashboard
use crate::application::dashboard_lookup::find_dashboard;
use crate::application::dashboard_repository::{DashboardRepository, SaveDashboardRequest};
use crate::application::error::Result;
use crate::domain::dashboard::GENERAL_FOLDER;
use crate::domain::title::WIP_DASHBOARD_SUFFIX;
use std::fmt;
use std::sync::Arc;

/// Where a promoted dashboard came from and where it went
#[derive(Debug, Clone, PartialEq)]
pub struct PromoteReport {
    pub source_folder: String,
    pub source_title: String,
    pub destination_title: String,
}

impl fmt::Display for PromoteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created \"{}/{}\" from \"{}/{}\"",
            GENERAL_FOLDER, self.destination_title, self.source_folder, self.source_title
        )
    }
}

#[derive(Clone)]
pub struct PromoteService {
    repository: Arc<dyn DashboardRepository>,
}

impl PromoteService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Copy the reference dashboard titled `ref_title` into the general folder
    /// as a WIP dashboard, replacing any earlier copy.
    pub async fn promote(&self, ref_title: &str) -> Result<PromoteReport> {
        let (hit, definition) = find_dashboard(self.repository.as_ref(), ref_title).await?;

        let mut dashboard = definition.dashboard;
        let destination_title = format!("{}{}", dashboard.title(), WIP_DASHBOARD_SUFFIX);
        dashboard.set_title(destination_title.clone());
        dashboard.clear_id();
        dashboard.set_uid(None);

        let request = SaveDashboardRequest {
            dashboard,
            message: format!("From {} under {}", ref_title, hit.folder()),
            overwrite: true,
        };
        self.repository.save(request).await?;

        Ok(PromoteReport {
            source_folder: hit.folder().to_string(),
            source_title: ref_title.to_string(),
            destination_title,
        })
    }
}
