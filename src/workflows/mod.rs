//! Multi-step create/assign workflows, formalized as ordered sagas instead
//! of inline try/catch chains. A `Required` step is the success boundary of
//! its flow; `BestEffort` steps may fail without failing the flow.

pub mod account_flow;
pub mod onboard_flow;

pub use account_flow::{create_account_with_department, AccountCreation, AccountDirectory};
pub use onboard_flow::{create_onboard_with_notice, OnboardCreation, OnboardDesk};

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    Required,
    BestEffort,
}

/// A non-fatal step failure, reported to the user as a non-blocking warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWarning {
    pub step: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct SagaReport {
    pub completed: Vec<&'static str>,
    pub warnings: Vec<StepWarning>,
}

impl SagaReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

type StepFuture<C> = Pin<Box<dyn Future<Output = (C, Result<()>)> + Send>>;
type StepRunner<C> = Box<dyn FnOnce(C) -> StepFuture<C> + Send>;

struct Step<C> {
    name: &'static str,
    policy: StepPolicy,
    run: StepRunner<C>,
}

/// Ordered steps run sequentially over an owned context. A `Required`
/// failure aborts the saga and surfaces the step's error unchanged; a
/// `BestEffort` failure is logged, recorded, and skipped over.
pub struct Saga<C> {
    name: &'static str,
    steps: Vec<Step<C>>,
}

impl<C: Send + 'static> Saga<C> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    pub fn step<F, Fut>(mut self, name: &'static str, policy: StepPolicy, run: F) -> Self
    where
        F: FnOnce(C) -> Fut + Send + 'static,
        Fut: Future<Output = (C, Result<()>)> + Send + 'static,
    {
        let runner: StepRunner<C> = Box::new(move |ctx| {
            let fut: StepFuture<C> = Box::pin(run(ctx));
            fut
        });
        self.steps.push(Step {
            name,
            policy,
            run: runner,
        });
        self
    }

    pub fn required<F, Fut>(self, name: &'static str, run: F) -> Self
    where
        F: FnOnce(C) -> Fut + Send + 'static,
        Fut: Future<Output = (C, Result<()>)> + Send + 'static,
    {
        self.step(name, StepPolicy::Required, run)
    }

    pub fn best_effort<F, Fut>(self, name: &'static str, run: F) -> Self
    where
        F: FnOnce(C) -> Fut + Send + 'static,
        Fut: Future<Output = (C, Result<()>)> + Send + 'static,
    {
        self.step(name, StepPolicy::BestEffort, run)
    }

    pub async fn run(self, mut ctx: C) -> (C, Result<SagaReport>) {
        let mut report = SagaReport::default();
        for step in self.steps {
            let (returned, result) = (step.run)(ctx).await;
            ctx = returned;
            match result {
                Ok(()) => {
                    info!(saga = self.name, step = step.name, "Step completed");
                    report.completed.push(step.name);
                }
                Err(err) if step.policy == StepPolicy::BestEffort => {
                    warn!(
                        saga = self.name,
                        step = step.name,
                        error = %err,
                        "Best-effort step failed, continuing"
                    );
                    report.warnings.push(StepWarning {
                        step: step.name,
                        message: err.user_message(),
                    });
                }
                Err(err) => {
                    error!(saga = self.name, step = step.name, error = %err, "Step failed");
                    return (ctx, Err(err));
                }
            }
        }
        (ctx, Ok(report))
    }
}
