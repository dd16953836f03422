// In-memory dashboard server used by the service tests
use crate::application::dashboard_repository::{DashboardRepository, SaveDashboardRequest};
use crate::application::error::{Result, TransferError};
use crate::domain::dashboard::{DashboardSummary, DashboardWithMeta};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String),
    GetByUid(String),
    Save(String),
}

#[derive(Default)]
pub struct FakeRepository {
    dashboards: Vec<(DashboardSummary, Value)>,
    calls: Mutex<Vec<Call>>,
    saved: Mutex<Vec<SaveDashboardRequest>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dashboard(mut self, uid: &str, title: &str, folder: Option<&str>, dashboard: Value) -> Self {
        let summary = DashboardSummary {
            title: title.to_string(),
            uid: uid.to_string(),
            folder_title: folder.map(str::to_string),
        };
        self.dashboards.push((summary, dashboard));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<SaveDashboardRequest> {
        self.saved.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DashboardRepository for FakeRepository {
    async fn search(&self, query: &str) -> Result<Vec<DashboardSummary>> {
        self.record(Call::Search(query.to_string()));
        let needle = query.to_lowercase();
        Ok(self
            .dashboards
            .iter()
            .filter(|(summary, _)| summary.title.to_lowercase().contains(&needle))
            .map(|(summary, _)| summary.clone())
            .collect())
    }

    async fn get_by_uid(&self, uid: &str) -> Result<DashboardWithMeta> {
        self.record(Call::GetByUid(uid.to_string()));
        let (_, dashboard) = self
            .dashboards
            .iter()
            .find(|(summary, _)| summary.uid == uid)
            .ok_or_else(|| TransferError::NotFound(uid.to_string()))?;
        Ok(serde_json::from_value(json!({
            "dashboard": dashboard,
            "meta": { "provisioned": true }
        }))?)
    }

    async fn save(&self, request: SaveDashboardRequest) -> Result<()> {
        self.record(Call::Save(request.dashboard.title().to_string()));
        self.saved.lock().unwrap().push(request);
        Ok(())
    }
}
