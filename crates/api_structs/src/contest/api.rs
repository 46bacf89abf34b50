use battleboard_domain::Contest;
use serde::{Deserialize, Serialize};

use crate::dtos::ContestDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestsResponse {
    pub contests: Vec<ContestDTO>,
}

impl ContestsResponse {
    pub fn new(contests: Vec<Contest>) -> Self {
        Self {
            contests: contests.into_iter().map(ContestDTO::new).collect(),
        }
    }
}

pub mod get_contests {
    use super::*;

    pub type APIResponse = ContestsResponse;
}
