use crate::api::{ApiClient, CreatedRef};
use crate::dto::account_dto::{
    AssignDepartmentPayload, CreateAccountPayload, UpdateAccountPayload,
};
use crate::error::Result;
use crate::models::account::Account;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountService {
    api: ApiClient,
}

impl AccountService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Account>> {
        self.api.get("accounts", "Load accounts").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Account> {
        self.api
            .get(&format!("accounts/{}", id), "Load account")
            .await
    }

    pub async fn create(&self, payload: &CreateAccountPayload) -> Result<Uuid> {
        crate::dto::validate(payload)?;
        let created: CreatedRef = self.api.post("accounts", "Create account", payload).await?;
        Ok(created.id())
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateAccountPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .put_ack(&format!("accounts/{}", id), "Update account", payload)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(&format!("accounts/{}", id), "Delete account")
            .await
    }

    pub async fn assign_department(&self, id: Uuid, department_id: Uuid) -> Result<()> {
        self.api
            .put_ack(
                &format!("accounts/{}/department", id),
                "Assign department",
                &AssignDepartmentPayload { department_id },
            )
            .await
    }
}
