use battleboard_domain::{Platform, ReminderMethod, ReminderPreference};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPreferenceDTO {
    pub contest_id: i64,
    pub platform: Platform,
    pub method: ReminderMethod,
    /// Minutes before the contest starts
    pub time_before: i64,
    pub contest_time: Option<i64>,
}

impl ReminderPreferenceDTO {
    pub fn new(reminder: ReminderPreference) -> Self {
        Self {
            contest_id: reminder.contest_id,
            platform: reminder.platform,
            method: reminder.method,
            time_before: reminder.minutes_before,
            contest_time: reminder.contest_ts,
        }
    }
}
