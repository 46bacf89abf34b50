use battleboard_domain::ReminderPreference;
use serde::{Deserialize, Serialize};

use crate::dtos::ReminderPreferenceDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemindersResponse {
    pub reminders: Vec<ReminderPreferenceDTO>,
}

impl RemindersResponse {
    pub fn new(reminders: Vec<ReminderPreference>) -> Self {
        Self {
            reminders: reminders
                .into_iter()
                .map(ReminderPreferenceDTO::new)
                .collect(),
        }
    }
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = RemindersResponse;
}

pub mod set_reminder {
    use super::*;
    use battleboard_domain::{Platform, ReminderMethod};

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub contest_id: i64,
        pub platform: Platform,
        #[serde(default)]
        pub method: Option<ReminderMethod>,
        #[serde(default)]
        pub time_before: Option<i64>,
        /// Start of the contest in millis
        pub contest_time: i64,
    }

    pub type APIResponse = RemindersResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub contest_id: i64,
    }

    pub type APIResponse = RemindersResponse;
}
