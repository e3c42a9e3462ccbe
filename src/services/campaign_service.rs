use crate::api::{ApiClient, CreatedRef};
use crate::dto::campaign_dto::{
    CreateCampaignPayload, CreatePositionPayload, UpdateCampaignPayload, UpdatePositionPayload,
};
use crate::error::Result;
use crate::models::campaign::{Campaign, CampaignPosition};
use uuid::Uuid;

#[derive(Clone)]
pub struct CampaignService {
    api: ApiClient,
}

impl CampaignService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Campaign>> {
        self.api.get("campaigns", "Load campaigns").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Campaign> {
        self.api
            .get(&format!("campaigns/{}", id), "Load campaign")
            .await
    }

    pub async fn create(&self, payload: &CreateCampaignPayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self.api.post("campaigns", "Create campaign", payload).await?;
        Ok(created.id())
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateCampaignPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(&format!("campaigns/{}", id), "Update campaign", payload)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(&format!("campaigns/{}", id), "Delete campaign")
            .await
    }

    pub async fn list_positions(&self, campaign_id: Uuid) -> Result<Vec<CampaignPosition>> {
        self.api
            .get(
                &format!("campaigns/{}/positions", campaign_id),
                "Load campaign positions",
            )
            .await
    }

    pub async fn create_position(
        &self,
        campaign_id: Uuid,
        payload: &CreatePositionPayload,
    ) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post(
                &format!("campaigns/{}/positions", campaign_id),
                "Create position",
                payload,
            )
            .await?;
        Ok(created.id())
    }

    pub async fn update_position(
        &self,
        position_id: Uuid,
        payload: &UpdatePositionPayload,
    ) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(
                &format!("campaign-positions/{}", position_id),
                "Update position",
                payload,
            )
            .await
    }

    pub async fn delete_position(&self, position_id: Uuid) -> Result<()> {
        self.api
            .delete_ack(
                &format!("campaign-positions/{}", position_id),
                "Delete position",
            )
            .await
    }
}
