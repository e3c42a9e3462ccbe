use crate::models::applicant::decode_status_code;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Approval-workflow status of an onboarding request, wire-encoded as 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Completed,
}

impl OnboardStatus {
    pub fn code(self) -> i64 {
        match self {
            OnboardStatus::Pending => 0,
            OnboardStatus::Approved => 1,
            OnboardStatus::Rejected => 2,
            OnboardStatus::Cancelled => 3,
            OnboardStatus::Completed => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(OnboardStatus::Pending),
            1 => Some(OnboardStatus::Approved),
            2 => Some(OnboardStatus::Rejected),
            3 => Some(OnboardStatus::Cancelled),
            4 => Some(OnboardStatus::Completed),
            _ => None,
        }
    }
}

impl Serialize for OnboardStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for OnboardStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = decode_status_code(deserializer)?;
        OnboardStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("onboard status code out of range: {}", code))
        })
    }
}

/// Post-offer approval record: proposed terms tracked through the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Onboard {
    pub id: Uuid,
    pub applicant_id: Uuid,
    #[serde(default)]
    pub outcome_id: Option<Uuid>,
    pub proposed_salary: Decimal,
    #[serde(default)]
    pub employment_type: Option<String>,
    pub start_date: NaiveDate,
    pub status: OnboardStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
