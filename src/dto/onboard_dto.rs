use crate::models::onboard::OnboardStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOnboardPayload {
    pub applicant_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_id: Option<Uuid>,
    #[validate(custom(function = "validate_salary"))]
    pub proposed_salary: Decimal,
    #[serde(
        default,
        deserialize_with = "crate::dto::trim_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub employment_type: Option<String>,
    pub start_date: NaiveDate,
}

fn validate_salary(salary: &Decimal) -> Result<(), ValidationError> {
    if salary.is_sign_negative() || salary.is_zero() {
        return Err(ValidationError::new("salary_not_positive"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeOnboardStatusPayload {
    pub status: OnboardStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
