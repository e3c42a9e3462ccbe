use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

/// Uniform response wrapper used by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub code: i64,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload. An envelope without `data` is a malformed
    /// response for endpoints that promise one, and fails loudly.
    pub fn into_data(self, context: &str) -> Result<T> {
        self.data
            .ok_or_else(|| Error::MissingData(context.to_string()))
    }
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8], context: &str) -> Result<Envelope<T>> {
    serde_json::from_slice(bytes).map_err(|e| Error::decode(context, e))
}

/// Reference to a freshly created resource. Creation endpoints answer with
/// either `{"id": ...}` or the bare id; any other shape is rejected.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum CreatedRef {
    Object { id: Uuid },
    Bare(Uuid),
}

impl CreatedRef {
    pub fn id(self) -> Uuid {
        match self {
            CreatedRef::Object { id } => id,
            CreatedRef::Bare(id) => id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// Pulls a human-readable message out of an error body, if it has one.
pub fn error_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.message.or(body.detail))
        .filter(|msg| !msg.trim().is_empty())
}
