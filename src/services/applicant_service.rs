use crate::api::{ApiClient, CreatedRef};
use crate::dto::applicant_dto::{
    ChangeStatusPayload, CreateApplicantPayload, UpdateApplicantPayload,
};
use crate::error::Result;
use crate::models::applicant::{ApplicantStatus, CvApplicant};
use crate::models::interview::StageProgress;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicantService {
    api: ApiClient,
}

impl ApplicantService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, position_id: Option<Uuid>) -> Result<Vec<CvApplicant>> {
        let path = match position_id {
            Some(position_id) => format!("cv-applicants?positionId={}", position_id),
            None => "cv-applicants".to_string(),
        };
        self.api.get(&path, "Load applicants").await
    }

    pub async fn get(&self, id: Uuid) -> Result<CvApplicant> {
        self.api
            .get(&format!("cv-applicants/{}", id), "Load applicant")
            .await
    }

    pub async fn create(&self, payload: &CreateApplicantPayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post("cv-applicants", "Create applicant", payload)
            .await?;
        Ok(created.id())
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateApplicantPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(&format!("cv-applicants/{}", id), "Update applicant", payload)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(&format!("cv-applicants/{}", id), "Delete applicant")
            .await
    }

    pub async fn change_status(&self, id: Uuid, status: ApplicantStatus) -> Result<()> {
        self.api
            .patch_ack(
                &format!("cv-applicants/{}/status", id),
                "Change applicant status",
                &ChangeStatusPayload { status },
            )
            .await
    }

    /// The candidate's stage-by-stage progress through their position's
    /// interview process, in the shape the tracker consumes.
    pub async fn interview_process(&self, id: Uuid) -> Result<Vec<StageProgress>> {
        self.api
            .get(
                &format!("cv-applicants/{}/interview-process", id),
                "Load interview progress",
            )
            .await
    }
}
