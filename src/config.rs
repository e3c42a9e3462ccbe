use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            api_base_url: get_env("API_BASE_URL")?,
            request_timeout_secs: match env::var("REQUEST_TIMEOUT_SECS") {
                Ok(raw) => raw.parse().map_err(|e| {
                    Error::Config(format!("Invalid value for REQUEST_TIMEOUT_SECS: {}", e))
                })?,
                Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        })
    }

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

/// Client-side preferences persisted by the shell as an opaque JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalSettings {
    pub feedback_window_minutes: u32,
    #[serde(default)]
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub dashboard_charts: bool,
    #[serde(default)]
    pub email_templates: bool,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            feedback_window_minutes: 30,
            features: FeatureFlags::default(),
        }
    }
}

impl LocalSettings {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::decode("local settings", e))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
