use chrono::{NaiveDate, TimeZone, Utc};
use hr_dashboard_client::status::{campaign_phase, campaign_phase_at, CampaignPhase, Tone};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn before_start_is_upcoming() {
    let phase = campaign_phase(date(2025, 1, 5), date(2025, 1, 10), date(2025, 1, 1));
    assert_eq!(phase, CampaignPhase::Upcoming);
    assert_eq!(phase.tone(), Tone::Pending);
    assert_eq!(phase.label(), "Upcoming");
}

#[test]
fn after_end_is_ended() {
    let phase = campaign_phase(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 11));
    assert_eq!(phase, CampaignPhase::Ended);
    assert_eq!(phase.tone(), Tone::Urgent);
    assert_eq!(phase.label(), "Ended");
}

#[test]
fn on_end_date_is_ends_today() {
    let phase = campaign_phase(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 10));
    assert_eq!(phase, CampaignPhase::EndsToday);
    assert_eq!(phase.tone(), Tone::Urgent);
    assert_eq!(phase.label(), "Ends today");
}

#[test]
fn one_day_before_end() {
    let phase = campaign_phase(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 9));
    assert_eq!(phase, CampaignPhase::DaysLeft(1));
    assert_eq!(phase.label(), "1 day left");
    assert_eq!(phase.tone(), Tone::Warning);
}

#[test]
fn running_campaign_counts_whole_days() {
    let phase = campaign_phase(date(2025, 1, 1), date(2025, 1, 10), date(2025, 1, 4));
    assert_eq!(phase, CampaignPhase::DaysLeft(6));
    assert_eq!(phase.label(), "6 days left");
    assert_eq!(phase.tone(), Tone::Active);
}

#[test]
fn two_days_left_is_a_warning_three_is_not() {
    assert_eq!(
        campaign_phase(date(2025, 3, 1), date(2025, 3, 10), date(2025, 3, 8)).tone(),
        Tone::Warning
    );
    assert_eq!(
        campaign_phase(date(2025, 3, 1), date(2025, 3, 10), date(2025, 3, 7)).tone(),
        Tone::Active
    );
}

#[test]
fn single_day_campaign() {
    let day = date(2025, 6, 15);
    assert_eq!(campaign_phase(day, day, date(2025, 6, 14)), CampaignPhase::Upcoming);
    assert_eq!(campaign_phase(day, day, day), CampaignPhase::EndsToday);
    assert_eq!(campaign_phase(day, day, date(2025, 6, 16)), CampaignPhase::Ended);
}

#[test]
fn timestamps_are_midnight_normalized() {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap();
    // Late in the evening of the 9th it is still exactly one day out.
    let now = Utc.with_ymd_and_hms(2025, 1, 9, 23, 59, 59).unwrap();
    assert_eq!(campaign_phase_at(start, end, now), CampaignPhase::DaysLeft(1));
}

#[test]
fn position_creation_is_gated_on_ended_only() {
    assert!(CampaignPhase::Upcoming.allows_new_positions());
    assert!(CampaignPhase::DaysLeft(5).allows_new_positions());
    assert!(CampaignPhase::EndsToday.allows_new_positions());
    assert!(!CampaignPhase::Ended.allows_new_positions());
}
