use crate::api::{ApiClient, CreatedRef};
use crate::error::Result;
use crate::models::department::Department;
use serde_json::json;
use uuid::Uuid;

#[derive(Clone)]
pub struct DepartmentService {
    api: ApiClient,
}

impl DepartmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        self.api.get("departments", "Load departments").await
    }

    pub async fn get(&self, id: Uuid) -> Result<Department> {
        self.api
            .get(&format!("departments/{}", id), "Load department")
            .await
    }

    pub async fn create(&self, name: &str, code: &str, description: Option<&str>) -> Result<Uuid> {
        let body = json!({
            "name": name,
            "code": code,
            "description": description,
        });
        let created: CreatedRef = self
            .api
            .post("departments", "Create department", &body)
            .await?;
        Ok(created.id())
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<()> {
        let body = json!({
            "name": name,
            "description": description,
        });
        self.api
            .put_ack(&format!("departments/{}", id), "Update department", &body)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.api
            .delete_ack(&format!("departments/{}", id), "Delete department")
            .await
    }
}
