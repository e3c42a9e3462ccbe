use async_trait::async_trait;
use hr_dashboard_client::dto::account_dto::CreateAccountPayload;
use hr_dashboard_client::dto::onboard_dto::CreateOnboardPayload;
use hr_dashboard_client::error::{Error, Result};
use hr_dashboard_client::models::account::Gender;
use hr_dashboard_client::session::Role;
use hr_dashboard_client::workflows::{
    create_account_with_department, create_onboard_with_notice, AccountDirectory, OnboardDesk,
    Saga, StepPolicy,
};
use mockall::mock;
use mockall::predicate::eq;
use rust_decimal::Decimal;
use uuid::Uuid;

mock! {
    Directory {}

    #[async_trait]
    impl AccountDirectory for Directory {
        async fn create_account(&self, payload: &CreateAccountPayload) -> Result<Uuid>;
        async fn assign_department(&self, account_id: Uuid, department_id: Uuid) -> Result<()>;
    }
}

mock! {
    Desk {}

    #[async_trait]
    impl OnboardDesk for Desk {
        async fn create_onboard(&self, payload: &CreateOnboardPayload) -> Result<Uuid>;
        async fn send_notice(&self, onboard_id: Uuid) -> Result<()>;
    }
}

fn account_payload() -> CreateAccountPayload {
    CreateAccountPayload {
        first_name: "Ana".to_string(),
        last_name: "Petrova".to_string(),
        username: "apetrova".to_string(),
        email: "ana@corp.io".to_string(),
        phone: None,
        gender: Gender::Female,
        dob: None,
        roles: vec![Role::Hr],
    }
}

fn onboard_payload() -> CreateOnboardPayload {
    CreateOnboardPayload {
        applicant_id: Uuid::new_v4(),
        outcome_id: None,
        proposed_salary: Decimal::new(65_000, 0),
        employment_type: Some("full-time".to_string()),
        start_date: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    }
}

#[tokio::test]
async fn primary_failure_aborts_without_touching_the_secondary() {
    let mut directory = MockDirectory::new();
    directory.expect_create_account().times(1).returning(|_| {
        Err(Error::Api {
            status: 409,
            message: "Username already exists".to_string(),
        })
    });
    directory.expect_assign_department().times(0);

    let result =
        create_account_with_department(directory, account_payload(), Some(Uuid::new_v4())).await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Username already exists");
}

#[tokio::test]
async fn secondary_failure_still_counts_as_success() {
    let account_id = Uuid::new_v4();
    let department_id = Uuid::new_v4();

    let mut directory = MockDirectory::new();
    directory
        .expect_create_account()
        .times(1)
        .returning(move |_| Ok(account_id));
    directory
        .expect_assign_department()
        .with(eq(account_id), eq(department_id))
        .times(1)
        .returning(|_, _| {
            Err(Error::Api {
                status: 500,
                message: "Department service unavailable".to_string(),
            })
        });

    let outcome = create_account_with_department(directory, account_payload(), Some(department_id))
        .await
        .unwrap();

    assert_eq!(outcome.account_id, account_id);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].step, "assign department");
}

#[tokio::test]
async fn no_department_means_no_secondary_call_and_no_warnings() {
    let account_id = Uuid::new_v4();

    let mut directory = MockDirectory::new();
    directory
        .expect_create_account()
        .times(1)
        .returning(move |_| Ok(account_id));
    directory.expect_assign_department().times(0);

    let outcome = create_account_with_department(directory, account_payload(), None)
        .await
        .unwrap();

    assert_eq!(outcome.account_id, account_id);
    assert!(outcome.warnings.is_empty());
}

#[tokio::test]
async fn onboard_notice_is_best_effort() {
    let onboard_id = Uuid::new_v4();

    let mut desk = MockDesk::new();
    desk.expect_create_onboard()
        .times(1)
        .returning(move |_| Ok(onboard_id));
    desk.expect_send_notice()
        .with(eq(onboard_id))
        .times(1)
        .returning(|_| {
            Err(Error::Api {
                status: 502,
                message: "Mailer down".to_string(),
            })
        });

    let outcome = create_onboard_with_notice(desk, onboard_payload(), true)
        .await
        .unwrap();

    assert_eq!(outcome.onboard_id, onboard_id);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].step, "send notice");
}

#[tokio::test]
async fn onboard_notice_is_skipped_when_not_requested() {
    let onboard_id = Uuid::new_v4();

    let mut desk = MockDesk::new();
    desk.expect_create_onboard()
        .times(1)
        .returning(move |_| Ok(onboard_id));
    desk.expect_send_notice().times(0);

    let outcome = create_onboard_with_notice(desk, onboard_payload(), false)
        .await
        .unwrap();
    assert!(outcome.warnings.is_empty());
}

#[tokio::test]
async fn saga_stops_at_the_first_required_failure() {
    let saga = Saga::new("test")
        .required("one", |mut ctx: Vec<&'static str>| async move {
            ctx.push("one");
            (ctx, Ok(()))
        })
        .required("two", |ctx: Vec<&'static str>| async move {
            (ctx, Err(Error::Internal("boom".to_string())))
        })
        .required("three", |mut ctx: Vec<&'static str>| async move {
            ctx.push("three");
            (ctx, Ok(()))
        });

    let (ctx, report) = saga.run(Vec::new()).await;
    assert!(report.is_err());
    assert_eq!(ctx, vec!["one"]);
}

#[tokio::test]
async fn saga_records_best_effort_failures_and_continues() {
    let saga = Saga::new("test")
        .step("one", StepPolicy::Required, |mut ctx: Vec<&'static str>| async move {
            ctx.push("one");
            (ctx, Ok(()))
        })
        .step("two", StepPolicy::BestEffort, |ctx: Vec<&'static str>| async move {
            (ctx, Err(Error::Internal("soft failure".to_string())))
        })
        .step("three", StepPolicy::Required, |mut ctx: Vec<&'static str>| async move {
            ctx.push("three");
            (ctx, Ok(()))
        });

    let (ctx, report) = saga.run(Vec::new()).await;
    let report = report.unwrap();
    assert_eq!(ctx, vec!["one", "three"]);
    assert_eq!(report.completed, vec!["one", "three"]);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].step, "two");
}
