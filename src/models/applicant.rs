use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Candidate lifecycle status, wire-encoded as 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicantStatus {
    Pending,
    Rejected,
    Accepted,
    Failed,
    Onboarded,
}

impl ApplicantStatus {
    pub fn code(self) -> i64 {
        match self {
            ApplicantStatus::Pending => 0,
            ApplicantStatus::Rejected => 1,
            ApplicantStatus::Accepted => 2,
            ApplicantStatus::Failed => 3,
            ApplicantStatus::Onboarded => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ApplicantStatus::Pending),
            1 => Some(ApplicantStatus::Rejected),
            2 => Some(ApplicantStatus::Accepted),
            3 => Some(ApplicantStatus::Failed),
            4 => Some(ApplicantStatus::Onboarded),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicantStatus::Pending => "Pending",
            ApplicantStatus::Rejected => "Rejected",
            ApplicantStatus::Accepted => "Accepted",
            ApplicantStatus::Failed => "Failed",
            ApplicantStatus::Onboarded => "Onboarded",
        }
    }
}

impl Serialize for ApplicantStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for ApplicantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = decode_status_code(deserializer)?;
        ApplicantStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("applicant status code out of range: {}", code))
        })
    }
}

/// Status codes arrive as integers, occasionally as numeric strings.
/// Anything else is rejected.
pub(crate) fn decode_status_code<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        String(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(code) => Ok(code),
        IntOrString::String(raw) => raw.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid status code string: {}", raw))
        }),
    }
}

/// A person who applied to a campaign position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvApplicant {
    pub id: Uuid,
    pub position_id: Uuid,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    pub status: ApplicantStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
