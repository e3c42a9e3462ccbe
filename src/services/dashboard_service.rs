use crate::api::ApiClient;
use crate::error::Result;
use crate::models::dashboard::DashboardStats;

#[derive(Clone)]
pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> Result<DashboardStats> {
        self.api
            .get("dashboard/statistics", "Load dashboard statistics")
            .await
    }
}
