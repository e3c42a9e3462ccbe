use crate::api::{ApiClient, CreatedRef};
use crate::dto::onboard_dto::{ChangeOnboardStatusPayload, CreateOnboardPayload};
use crate::error::Result;
use crate::models::onboard::{Onboard, OnboardStatus};
use uuid::Uuid;

#[derive(Clone)]
pub struct OnboardService {
    api: ApiClient,
}

impl OnboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Onboard>> {
        self.api.get("onboards", "Load onboarding records").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Onboard> {
        self.api
            .get(&format!("onboards/{}", id), "Load onboarding record")
            .await
    }

    pub async fn create(&self, payload: &CreateOnboardPayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post("onboards", "Create onboarding request", payload)
            .await?;
        Ok(created.id())
    }

    pub async fn change_status(
        &self,
        id: Uuid,
        status: OnboardStatus,
        reason: Option<String>,
    ) -> Result<()> {
        self.api
            .patch_ack(
                &format!("onboards/{}/status", id),
                "Change onboarding status",
                &ChangeOnboardStatusPayload { status, reason },
            )
            .await
    }

    /// Asks the backend to notify the stakeholders about a fresh request.
    pub async fn send_notice(&self, id: Uuid) -> Result<()> {
        self.api
            .post_ack(
                &format!("onboards/{}/notice", id),
                "Send onboarding notice",
                &serde_json::json!({}),
            )
            .await
    }
}
