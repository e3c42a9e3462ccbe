use crate::models::interview::{OutcomeResult, ScheduleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProcessPayload {
    pub department_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), nested)]
    pub stages: Vec<CreateStagePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStagePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    pub order_index: i32,
    #[validate(range(min = 1, message = "Duration must be at least 1 minute"))]
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProcessPayload {
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[validate(length(min = 1), nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<CreateStagePayload>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedulePayload {
    pub applicant_id: Uuid,
    pub stage_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[validate(length(min = 1, message = "At least one interviewer is required"))]
    pub interviewer_ids: Vec<Uuid>,
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[validate(range(min = 1))]
    pub round: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchedulePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_ids: Option<Vec<Uuid>>,
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ScheduleStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordOutcomePayload {
    pub result: OutcomeResult,
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub feedback: Option<String>,
}
