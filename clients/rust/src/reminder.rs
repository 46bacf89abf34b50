use crate::{APIResponse, BaseClient};
use battleboard_api_structs::*;
use battleboard_domain::{Platform, ReminderMethod};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct SetReminderInput {
    pub contest_id: i64,
    pub platform: Platform,
    /// Defaults to email
    pub method: Option<ReminderMethod>,
    /// Defaults to 60 minutes
    pub time_before: Option<i64>,
    pub contest_time: i64,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("reminders".into(), StatusCode::OK).await
    }

    pub async fn set(&self, input: SetReminderInput) -> APIResponse<set_reminder::APIResponse> {
        let body = set_reminder::RequestBody {
            contest_id: input.contest_id,
            platform: input.platform,
            method: input.method,
            time_before: input.time_before,
            contest_time: input.contest_time,
        };
        self.base
            .post(body, "reminders".into(), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, contest_id: i64) -> APIResponse<delete_reminder::APIResponse> {
        self.base
            .delete(format!("reminders/{}", contest_id), StatusCode::OK)
            .await
    }
}
