pub mod account_dto;
pub mod applicant_dto;
pub mod auth_dto;
pub mod campaign_dto;
pub mod interview_dto;
pub mod onboard_dto;
pub mod template_dto;

use serde::Deserialize;
use validator::Validate;

/// Client-side pre-submit validation; failures render inline per field.
pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

// Custom deserializer to trim strings and convert empty strings to None
pub(crate) fn trim_optional_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
