use crate::api::ApiClient;
use crate::dto::auth_dto::{
    ChangePasswordPayload, ForgotPasswordPayload, ResetPasswordPayload, SignInPayload,
    SignUpPayload, TokenGrant, VerifyEmailPayload,
};
use crate::error::Result;
use crate::session::Session;
use tracing::info;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a token and stores it in the session store.
    pub async fn sign_in(&self, payload: &SignInPayload) -> Result<Session> {
        crate::dto::validate(payload)?;
        let grant: TokenGrant = self.api.post("auth/sign-in", "Sign in", payload).await?;
        let session = self.api.session().set(grant.access_token)?;
        info!(user = ?session.claims().sub, "Signed in");
        Ok(session)
    }

    pub async fn sign_up(&self, payload: &SignUpPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api.post_ack("auth/sign-up", "Sign up", payload).await
    }

    pub async fn verify_email(&self, payload: &VerifyEmailPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .post_ack("auth/verify-email", "Verify email", payload)
            .await
    }

    pub async fn request_password_reset(&self, payload: &ForgotPasswordPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .post_ack("auth/forgot-password", "Request password reset", payload)
            .await
    }

    pub async fn reset_password(&self, payload: &ResetPasswordPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .post_ack("auth/reset-password", "Reset password", payload)
            .await
    }

    pub async fn change_password(&self, payload: &ChangePasswordPayload) -> Result<()> {
        crate::dto::validate(payload)?;
        self.api
            .post_ack("auth/change-password", "Change password", payload)
            .await
    }

    pub fn sign_out(&self) {
        self.api.session().clear();
        info!("Signed out");
    }
}
