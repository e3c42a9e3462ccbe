use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard landing view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_accounts: i64,
    #[serde(default)]
    pub total_departments: i64,
    #[serde(default)]
    pub active_campaigns: i64,
    #[serde(default)]
    pub open_positions: i64,
    #[serde(default)]
    pub pending_applicants: i64,
    #[serde(default)]
    pub upcoming_interviews: i64,
    #[serde(default)]
    pub pending_onboards: i64,
}
