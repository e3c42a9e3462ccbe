use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Department with its backend-derived headcounts. The `code` is unique,
/// enforced server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub employee_count: i64,
    #[serde(default)]
    pub position_count: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
