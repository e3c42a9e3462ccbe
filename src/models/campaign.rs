use crate::status::{campaign_phase_at, CampaignPhase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-boxed recruitment drive. End ≥ start is assumed, not enforced
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Campaign {
    pub fn phase_at(&self, now: DateTime<Utc>) -> CampaignPhase {
        campaign_phase_at(self.start_date, self.end_date, now)
    }
}

/// A role opening inside a campaign, tied to a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPosition {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub department_id: Uuid,
    #[serde(default)]
    pub department_name: Option<String>,
    pub total_slots: i32,
    #[serde(default)]
    pub criteria: Vec<PositionCriterion>,
}

/// One qualification requirement; criteria sharing a `group_index` render as
/// one group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionCriterion {
    pub group_index: i32,
    pub key: String,
    pub value: String,
}
