pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod fetch;
pub mod models;
pub mod services;
pub mod session;
pub mod status;
pub mod table;
pub mod tracker;
pub mod workflows;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::{
    account_service::AccountService, applicant_service::ApplicantService,
    auth_service::AuthService, campaign_service::CampaignService,
    dashboard_service::DashboardService, department_service::DepartmentService,
    interview_service::InterviewService, onboard_service::OnboardService,
    template_service::TemplateService,
};
use crate::session::SessionStore;

/// One handle per dashboard shell: every endpoint group's service sharing a
/// single HTTP client and session store.
#[derive(Clone)]
pub struct DashboardClient {
    pub session: SessionStore,
    pub auth: AuthService,
    pub accounts: AccountService,
    pub departments: DepartmentService,
    pub campaigns: CampaignService,
    pub applicants: ApplicantService,
    pub interviews: InterviewService,
    pub onboards: OnboardService,
    pub templates: TemplateService,
    pub dashboard: DashboardService,
}

impl DashboardClient {
    pub fn new(config: &Config) -> Result<Self> {
        let session = SessionStore::new();
        let api = ApiClient::new(config, session.clone())?;

        Ok(Self {
            session,
            auth: AuthService::new(api.clone()),
            accounts: AccountService::new(api.clone()),
            departments: DepartmentService::new(api.clone()),
            campaigns: CampaignService::new(api.clone()),
            applicants: ApplicantService::new(api.clone()),
            interviews: InterviewService::new(api.clone()),
            onboards: OnboardService::new(api.clone()),
            templates: TemplateService::new(api.clone()),
            dashboard: DashboardService::new(api),
        })
    }
}
