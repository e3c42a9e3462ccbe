pub mod account_service;
pub mod applicant_service;
pub mod auth_service;
pub mod campaign_service;
pub mod dashboard_service;
pub mod department_service;
pub mod interview_service;
pub mod onboard_service;
pub mod template_service;
