// Grafana HTTP API repository implementation
use crate::application::dashboard_repository::{DashboardRepository, SaveDashboardRequest};
use crate::application::error::{Result, TransferError};
use crate::domain::dashboard::{Dashboard, DashboardSummary, DashboardWithMeta};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct GrafanaRepository {
    client: reqwest::Client,
    root_url: String,
    user: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct SaveDashboardBody<'a> {
    dashboard: &'a Dashboard,
    message: &'a str,
    overwrite: bool,
}

impl GrafanaRepository {
    pub fn new(root_url: String, user: String, password: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            root_url: root_url.trim_end_matches('/').to_string(),
            user,
            password,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .basic_auth(&self.user, Some(&self.password))
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        match response {
            Ok(response) => response
                .json::<T>()
                .await
                .map_err(|source| TransferError::Transport { url, source }),
            Err(source) => Err(TransferError::Transport { url, source }),
        }
    }
}

#[async_trait]
impl DashboardRepository for GrafanaRepository {
    async fn search(&self, query: &str) -> Result<Vec<DashboardSummary>> {
        let url = self.url(&format!("/api/search?query={}", urlencoding::encode(query)));
        self.get_json(url).await
    }

    async fn get_by_uid(&self, uid: &str) -> Result<DashboardWithMeta> {
        let url = self.url(&format!("/api/dashboards/uid/{}", urlencoding::encode(uid)));
        self.get_json(url).await
    }

    async fn save(&self, request: SaveDashboardRequest) -> Result<()> {
        let url = self.url("/api/dashboards/db");
        let body = SaveDashboardBody {
            dashboard: &request.dashboard,
            message: &request.message,
            overwrite: request.overwrite,
        };

        tracing::debug!("POST {} ({:?})", url, request.dashboard.title());
        let response = self
            .client
            .post(&url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status);

        match response {
            Ok(_) => Ok(()),
            Err(source) => Err(TransferError::Transport { url, source }),
        }
    }
}
