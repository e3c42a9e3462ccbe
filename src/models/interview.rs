use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dictionary entry for interview formats (technical, culture-fit, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewType {
    pub id: Uuid,
    pub name: String,
}

/// Department-specific ordered template of interview stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewProcess {
    pub id: Uuid,
    pub department_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub stages: Vec<InterviewStage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewStage {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order_index: i32,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booked interview instance for one candidate at one stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSchedule {
    pub id: Uuid,
    pub applicant_id: Uuid,
    pub stage_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub interviewer_ids: Vec<Uuid>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ScheduleStatus,
    pub round: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeResult {
    Pending,
    Pass,
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewOutcome {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub result: OutcomeResult,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// One row of the candidate's interview-process view: a stage plus its
/// tri-state completion flag (`null` = not decided yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProgress {
    #[serde(flatten)]
    pub stage: InterviewStage,
    #[serde(default)]
    pub is_completed: Option<bool>,
}
