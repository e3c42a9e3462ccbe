use crate::dto::account_dto::CreateAccountPayload;
use crate::error::{Error, Result};
use crate::services::account_service::AccountService;
use crate::workflows::{Saga, StepWarning};
use async_trait::async_trait;
use uuid::Uuid;

/// The account endpoints this flow depends on; a seam so the
/// partial-failure contract can be exercised without a live backend.
#[async_trait]
pub trait AccountDirectory {
    async fn create_account(&self, payload: &CreateAccountPayload) -> Result<Uuid>;
    async fn assign_department(&self, account_id: Uuid, department_id: Uuid) -> Result<()>;
}

#[async_trait]
impl AccountDirectory for AccountService {
    async fn create_account(&self, payload: &CreateAccountPayload) -> Result<Uuid> {
        self.create(payload).await
    }

    async fn assign_department(&self, account_id: Uuid, department_id: Uuid) -> Result<()> {
        AccountService::assign_department(self, account_id, department_id).await
    }
}

#[derive(Debug)]
pub struct AccountCreation {
    pub account_id: Uuid,
    pub warnings: Vec<StepWarning>,
}

struct FlowContext<D> {
    directory: D,
    payload: CreateAccountPayload,
    department_id: Option<Uuid>,
    created_id: Option<Uuid>,
}

/// Creates the account, then assigns the requested department as a
/// best-effort follow-up. The creation POST is the success boundary: its
/// failure aborts the flow with the backend's message, while an assignment
/// failure leaves the flow successful and comes back as a warning.
pub async fn create_account_with_department<D>(
    directory: D,
    payload: CreateAccountPayload,
    department_id: Option<Uuid>,
) -> Result<AccountCreation>
where
    D: AccountDirectory + Send + Sync + 'static,
{
    let ctx = FlowContext {
        directory,
        payload,
        department_id,
        created_id: None,
    };

    let saga = Saga::new("create-account")
        .required("create account", |mut ctx: FlowContext<D>| async move {
            match ctx.directory.create_account(&ctx.payload).await {
                Ok(id) => {
                    ctx.created_id = Some(id);
                    (ctx, Ok(()))
                }
                Err(err) => (ctx, Err(err)),
            }
        })
        .best_effort("assign department", |ctx: FlowContext<D>| async move {
            let (Some(account_id), Some(department_id)) = (ctx.created_id, ctx.department_id)
            else {
                return (ctx, Ok(()));
            };
            let result = ctx
                .directory
                .assign_department(account_id, department_id)
                .await;
            (ctx, result)
        });

    let (ctx, report) = saga.run(ctx).await;
    let report = report?;
    let account_id = ctx
        .created_id
        .ok_or_else(|| Error::Internal("created account id was not captured".to_string()))?;

    Ok(AccountCreation {
        account_id,
        warnings: report.warnings,
    })
}
