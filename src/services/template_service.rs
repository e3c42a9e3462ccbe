use crate::api::{ApiClient, CreatedRef};
use crate::dto::template_dto::{CreateEmailTemplatePayload, UpdateEmailTemplatePayload};
use crate::error::Result;
use crate::models::email_template::EmailTemplate;
use uuid::Uuid;

#[derive(Clone)]
pub struct TemplateService {
    api: ApiClient,
}

impl TemplateService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<EmailTemplate>> {
        self.api.get("email-templates", "Load email templates").await
    }

    pub async fn get(&self, id: Uuid) -> Result<EmailTemplate> {
        self.api
            .get(&format!("email-templates/{}", id), "Load email template")
            .await
    }

    pub async fn create(&self, payload: &CreateEmailTemplatePayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self
            .api
            .post("email-templates", "Create email template", payload)
            .await?;
        Ok(created.id())
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateEmailTemplatePayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(
                &format!("email-templates/{}", id),
                "Update email template",
                payload,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(&format!("email-templates/{}", id), "Delete email template")
            .await
    }
}
