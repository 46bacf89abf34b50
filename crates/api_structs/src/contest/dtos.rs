use battleboard_domain::{Contest, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestDTO {
    pub id: i64,
    pub event: String,
    pub host: String,
    pub href: String,
    pub platform: Option<Platform>,
    pub start: i64,
    pub end: i64,
    /// Duration in seconds
    pub duration: i64,
}

impl ContestDTO {
    pub fn new(contest: Contest) -> Self {
        Self {
            platform: contest.platform(),
            id: contest.id,
            event: contest.event,
            host: contest.host,
            href: contest.href,
            start: contest.start_ts,
            end: contest.end_ts,
            duration: contest.duration,
        }
    }
}
