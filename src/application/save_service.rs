// Save service - Use case for writing a WIP dashboard back to its provisioned file
use crate::application::dashboard_lookup::find_dashboard;
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::error::Result;
use crate::domain::title::{normalize_title, ref_to_wip_title, wip_to_ref_title};
use crate::infrastructure::dashboard_file::{dashboard_path, write_dashboard};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Folder under `out_dir` the file is grouped into
    pub folder: String,
    /// Title for the saved dashboard; derived from the WIP title when absent
    pub title: Option<String>,
    pub out_dir: PathBuf,
    /// Keep the `instance`/`hostname` selections as they are on the server
    pub keep_selections: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub source_folder: String,
    pub source_title: String,
    pub path: PathBuf,
    pub title: String,
}

impl fmt::Display for SaveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard \"{}/{}\" saved into \"{}\" using \"{}\" title",
            self.source_folder,
            self.source_title,
            self.path.display(),
            self.title
        )
    }
}

#[derive(Clone)]
pub struct SaveService {
    repository: Arc<dyn DashboardRepository>,
}

impl SaveService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the WIP form of `dashboard_title` and write it as a provisioned file.
    pub async fn save_wip(&self, dashboard_title: &str, options: &SaveOptions) -> Result<SaveReport> {
        let wip_title = ref_to_wip_title(dashboard_title);
        let (hit, definition) = find_dashboard(self.repository.as_ref(), &wip_title).await?;
        let mut dashboard = definition.dashboard;

        let title = match &options.title {
            Some(title) => title.clone(),
            None => wip_to_ref_title(dashboard.title()),
        };
        let norm_title = normalize_title(&title);

        if !options.keep_selections {
            let reset = dashboard.reset_host_selections();
            tracing::debug!("Reset {} host variable selections", reset);
        }

        dashboard.clear_id();
        dashboard.set_uid(Some(norm_title.clone()));
        dashboard.set_title(title.clone());
        // Wall-clock stamp; the server only needs it to grow between saves.
        dashboard.set_version(chrono::Utc::now().timestamp());

        let path = dashboard_path(&options.out_dir, &options.folder, &norm_title);
        write_dashboard(&path, &dashboard).await?;

        Ok(SaveReport {
            source_folder: hit.folder().to_string(),
            source_title: wip_title,
            path,
            title,
        })
    }
}
