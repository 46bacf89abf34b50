use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::set_reminder::*;
use battleboard_domain::{
    Platform, ReminderMethod, ReminderPreference, User, DEFAULT_MINUTES_BEFORE,
    MAX_MINUTES_BEFORE,
};
use battleboard_infra::BattleBoardContext;
use tracing::info;

pub async fn set_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = SetReminderUseCase {
        user,
        contest_id: body.contest_id,
        platform: body.platform,
        method: body.method.unwrap_or_default(),
        minutes_before: body.time_before.unwrap_or(DEFAULT_MINUTES_BEFORE),
        contest_ts: body.contest_time,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(BattleBoardError::from)
}

/// Creates the `ReminderPreference` for the contest, or replaces the existing one
#[derive(Debug)]
pub struct SetReminderUseCase {
    pub user: User,
    pub contest_id: i64,
    pub platform: Platform,
    pub method: ReminderMethod,
    pub minutes_before: i64,
    pub contest_ts: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidTimeBefore(i64),
    InvalidContestTime(i64),
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimeBefore(minutes) => Self::BadClientData(format!(
                "Invalid timeBefore: {}. It must be a positive number of minutes no larger than {}",
                minutes, MAX_MINUTES_BEFORE
            )),
            UseCaseError::InvalidContestTime(contest_ts) => {
                Self::BadClientData(format!("Invalid contestTime: {}", contest_ts))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetReminderUseCase {
    /// All the reminders of the `User` after the write
    type Response = Vec<ReminderPreference>;
    type Error = UseCaseError;

    const NAME: &'static str = "SetReminder";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = ReminderPreference::new(self.contest_id, self.platform, self.contest_ts);
        reminder.method = self.method;
        reminder.minutes_before = self.minutes_before;
        if !reminder.has_valid_lead_time() {
            return Err(UseCaseError::InvalidTimeBefore(self.minutes_before));
        }
        if !reminder.has_valid_contest_time() {
            return Err(UseCaseError::InvalidContestTime(self.contest_ts));
        }

        let mut user = self.user.clone();
        let replaced = user.set_reminder(reminder);
        user.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        info!(
            user_id = %user.id,
            contest_id = self.contest_id,
            replaced,
            "Reminder preference saved"
        );
        Ok(user.reminder_preferences)
    }
}
