use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::get_reminders::*;
use battleboard_infra::BattleBoardContext;

pub async fn get_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user.reminder_preferences)))
}
