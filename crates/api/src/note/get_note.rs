use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::{dtos::NoteDTO, get_note::*};
use battleboard_infra::BattleBoardContext;

pub async fn get_note_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    match user.find_note(path.contest_id) {
        Some(note) => {
            let res: APIResponse = NoteDTO::new(note.clone());
            Ok(HttpResponse::Ok().json(res))
        }
        None => Err(BattleBoardError::NotFound(format!(
            "No note found for contest {}",
            path.contest_id
        ))),
    }
}
