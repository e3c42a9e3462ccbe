use hr_dashboard_client::config::{Config, LocalSettings};

#[test]
fn local_settings_round_trip() {
    let mut settings = LocalSettings::default();
    assert_eq!(settings.feedback_window_minutes, 30);
    assert!(!settings.features.dashboard_charts);

    settings.feedback_window_minutes = 45;
    settings.features.email_templates = true;

    let blob = settings.to_json();
    let restored = LocalSettings::from_json(&blob).unwrap();
    assert_eq!(restored, settings);
}

#[test]
fn local_settings_tolerate_missing_feature_block() {
    let restored = LocalSettings::from_json(r#"{"feedback_window_minutes": 10}"#).unwrap();
    assert_eq!(restored.feedback_window_minutes, 10);
    assert!(!restored.features.email_templates);
}

#[test]
fn malformed_settings_blob_is_an_error() {
    assert!(LocalSettings::from_json("{not json").is_err());
}

#[test]
fn config_reads_environment() {
    std::env::set_var("API_BASE_URL", "https://hr.example.com/api/v1");
    std::env::set_var("REQUEST_TIMEOUT_SECS", "45");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_base_url, "https://hr.example.com/api/v1");
    assert_eq!(config.request_timeout_secs, 45);
}
