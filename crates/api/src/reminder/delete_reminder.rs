use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::delete_reminder::*;
use battleboard_domain::{ReminderPreference, User};
use battleboard_infra::BattleBoardContext;

pub async fn delete_reminder_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = DeleteReminderUseCase {
        user,
        contest_id: path.contest_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(BattleBoardError::from)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub user: User,
    pub contest_id: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Vec<ReminderPreference>;
    type Error = UseCaseError;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();
        // Deleting a reminder that does not exist is not an error
        if !user.remove_reminder(self.contest_id) {
            return Ok(user.reminder_preferences);
        }

        user.updated = ctx.sys.get_timestamp_millis();
        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| user.reminder_preferences)
            .map_err(|_| UseCaseError::StorageError)
    }
}
