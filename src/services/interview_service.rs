use crate::api::{ApiClient, CreatedRef};
use crate::dto::interview_dto::{
    CreateProcessPayload, CreateSchedulePayload, RecordOutcomePayload, UpdateProcessPayload,
    UpdateSchedulePayload,
};
use crate::error::Result;
use crate::models::interview::{
    InterviewOutcome, InterviewProcess, InterviewSchedule, InterviewType,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct InterviewService {
    api: ApiClient,
}

impl InterviewService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_types(&self) -> Result<Vec<InterviewType>> {
        self.api.get("interview-types", "Load interview types").await
    }

    pub async fn list_processes(
        &self,
        department_id: Option<Uuid>,
    ) -> Result<Vec<InterviewProcess>> {
        let path = match department_id {
            Some(department_id) => format!("interview-processes?departmentId={}", department_id),
            None => "interview-processes".to_string(),
        };
        self.api.get(&path, "Load interview processes").await
    }

    pub async fn get_process(&self, id: Uuid) -> Result<InterviewProcess> {
        self.api
            .get(&format!("interview-processes/{}", id), "Load interview process")
            .await
    }

    pub async fn create_process(&self, payload: &CreateProcessPayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post("interview-processes", "Create interview process", payload)
            .await?;
        Ok(created.id())
    }

    pub async fn update_process(&self, id: Uuid, payload: &UpdateProcessPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(
                &format!("interview-processes/{}", id),
                "Update interview process",
                payload,
            )
            .await
    }

    pub async fn delete_process(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(
                &format!("interview-processes/{}", id),
                "Delete interview process",
            )
            .await
    }

    pub async fn list_schedules(&self, applicant_id: Uuid) -> Result<Vec<InterviewSchedule>> {
        self.api
            .get(
                &format!("interview-schedules?applicantId={}", applicant_id),
                "Load interview schedules",
            )
            .await
    }

    pub async fn create_schedule(&self, payload: &CreateSchedulePayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post("interview-schedules", "Create interview schedule", payload)
            .await?;
        Ok(created.id())
    }

    pub async fn update_schedule(&self, id: Uuid, payload: &UpdateSchedulePayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(
                &format!("interview-schedules/{}", id),
                "Update interview schedule",
                payload,
            )
            .await
    }

    pub async fn cancel_schedule(&self, id: Uuid) -> Result<()> {
        self.api
            .post_ack(
                &format!("interview-schedules/{}/cancel", id),
                "Cancel interview schedule",
                &serde_json::json!({}),
            )
            .await
    }

    pub async fn record_outcome(
        &self,
        schedule_id: Uuid,
        payload: &RecordOutcomePayload,
    ) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .post_ack(
                &format!("interview-schedules/{}/outcome", schedule_id),
                "Record interview outcome",
                payload,
            )
            .await
    }

    pub async fn get_outcome(&self, schedule_id: Uuid) -> Result<InterviewOutcome> {
        self.api
            .get(
                &format!("interview-schedules/{}/outcome", schedule_id),
                "Load interview outcome",
            )
            .await
    }
}
