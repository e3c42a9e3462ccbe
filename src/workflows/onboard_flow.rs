use crate::dto::onboard_dto::CreateOnboardPayload;
use crate::error::{Error, Result};
use crate::services::onboard_service::OnboardService;
use crate::workflows::{Saga, StepWarning};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait OnboardDesk {
    async fn create_onboard(&self, payload: &CreateOnboardPayload) -> Result<Uuid>;
    async fn send_notice(&self, onboard_id: Uuid) -> Result<()>;
}

#[async_trait]
impl OnboardDesk for OnboardService {
    async fn create_onboard(&self, payload: &CreateOnboardPayload) -> Result<Uuid> {
        self.create(payload).await
    }

    async fn send_notice(&self, onboard_id: Uuid) -> Result<()> {
        OnboardService::send_notice(self, onboard_id).await
    }
}

#[derive(Debug)]
pub struct OnboardCreation {
    pub onboard_id: Uuid,
    pub warnings: Vec<StepWarning>,
}

struct FlowContext<D> {
    desk: D,
    payload: CreateOnboardPayload,
    notify: bool,
    created_id: Option<Uuid>,
}

/// Creates the onboarding request, then (when asked) notifies stakeholders
/// as a best-effort follow-up under the same contract as account creation.
pub async fn create_onboard_with_notice<D>(
    desk: D,
    payload: CreateOnboardPayload,
    notify: bool,
) -> Result<OnboardCreation>
where
    D: OnboardDesk + Send + Sync + 'static,
{
    let ctx = FlowContext {
        desk,
        payload,
        notify,
        created_id: None,
    };

    let saga = Saga::new("create-onboard")
        .required("create onboarding request", |mut ctx: FlowContext<D>| async move {
            match ctx.desk.create_onboard(&ctx.payload).await {
                Ok(id) => {
                    ctx.created_id = Some(id);
                    (ctx, Ok(()))
                }
                Err(err) => (ctx, Err(err)),
            }
        })
        .best_effort("send notice", |ctx: FlowContext<D>| async move {
            let Some(onboard_id) = ctx.created_id.filter(|_| ctx.notify) else {
                return (ctx, Ok(()));
            };
            let result = ctx.desk.send_notice(onboard_id).await;
            (ctx, result)
        });

    let (ctx, report) = saga.run(ctx).await;
    let report = report?;
    let onboard_id = ctx
        .created_id
        .ok_or_else(|| Error::Internal("created onboard id was not captured".to_string()))?;

    Ok(OnboardCreation {
        onboard_id,
        warnings: report.warnings,
    })
}
