use crate::api::envelope::{self, Envelope};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::SessionStore;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Thin wrapper over `reqwest` that attaches the bearer token from the
/// session store and decodes the backend's response envelope. JSON headers
/// are only set when a body is sent.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self> {
        Url::parse(&config.api_base_url)
            .map_err(|e| Error::Config(format!("Invalid API_BASE_URL: {}", e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        action: &'static str,
        body: Option<&B>,
    ) -> Result<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(session) = self.session.get() {
            request = request.bearer_auth(session.token());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            tracing::error!(action, status = status.as_u16(), "API call failed");
            return Err(match envelope::error_message(&bytes) {
                Some(message) => Error::Api {
                    status: status.as_u16(),
                    message,
                },
                None => Error::http_fallback(action, status.as_u16()),
            });
        }

        envelope::decode(&bytes, action)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, action: &'static str) -> Result<T> {
        self.send::<(), T>(Method::GET, path, action, None)
            .await?
            .into_data(action)
    }

    pub async fn post<B, T>(&self, path: &str, action: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, action, Some(body))
            .await?
            .into_data(action)
    }

    pub async fn put<B, T>(&self, path: &str, action: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, action, Some(body))
            .await?
            .into_data(action)
    }

    /// POST where the envelope may carry no payload.
    pub async fn post_ack<B>(&self, path: &str, action: &'static str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send::<B, serde_json::Value>(Method::POST, path, action, Some(body))
            .await
            .map(|_| ())
    }

    pub async fn put_ack<B>(&self, path: &str, action: &'static str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send::<B, serde_json::Value>(Method::PUT, path, action, Some(body))
            .await
            .map(|_| ())
    }

    pub async fn patch_ack<B>(&self, path: &str, action: &'static str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send::<B, serde_json::Value>(Method::PATCH, path, action, Some(body))
            .await
            .map(|_| ())
    }

    pub async fn delete_ack(&self, path: &str, action: &'static str) -> Result<()> {
        self.send::<(), serde_json::Value>(Method::DELETE, path, action, None)
            .await
            .map(|_| ())
    }
}
