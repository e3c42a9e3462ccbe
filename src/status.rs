use chrono::{DateTime, NaiveDate, Utc};

/// Where a campaign sits in its lifecycle, relative to a reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignPhase {
    Upcoming,
    Ended,
    EndsToday,
    /// Whole days from the reference day to the end date, inclusive of the
    /// end date itself.
    DaysLeft(i64),
}

pub fn campaign_phase(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> CampaignPhase {
    if today < start {
        CampaignPhase::Upcoming
    } else if today > end {
        CampaignPhase::Ended
    } else if today == end {
        CampaignPhase::EndsToday
    } else {
        CampaignPhase::DaysLeft((end - today).num_days())
    }
}

/// Timestamps are midnight-normalized first so time-of-day never skews the
/// day count.
pub fn campaign_phase_at(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> CampaignPhase {
    campaign_phase(start.date_naive(), end.date_naive(), now.date_naive())
}

impl CampaignPhase {
    pub fn label(&self) -> String {
        match self {
            CampaignPhase::Upcoming => "Upcoming".to_string(),
            CampaignPhase::Ended => "Ended".to_string(),
            CampaignPhase::EndsToday => "Ends today".to_string(),
            CampaignPhase::DaysLeft(1) => "1 day left".to_string(),
            CampaignPhase::DaysLeft(days) => format!("{} days left", days),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            CampaignPhase::Ended | CampaignPhase::EndsToday => Tone::Urgent,
            CampaignPhase::Upcoming => Tone::Pending,
            CampaignPhase::DaysLeft(days) if *days <= 2 => Tone::Warning,
            CampaignPhase::DaysLeft(_) => Tone::Active,
        }
    }

    /// Position creation stays available until the campaign has ended,
    /// including its final day.
    pub fn allows_new_positions(&self) -> bool {
        !matches!(self, CampaignPhase::Ended)
    }
}

/// Styling tone a phase maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Urgent,
    Pending,
    Warning,
    Active,
}
