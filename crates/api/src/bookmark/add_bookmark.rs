use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::add_bookmark::*;
use battleboard_domain::User;
use battleboard_infra::BattleBoardContext;

pub async fn add_bookmark_controller(
    http_req: HttpRequest,
    path: web::Path<PathParams>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    let usecase = AddBookmarkUseCase {
        user,
        contest_id: path.contest_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|bookmarks| HttpResponse::Ok().json(APIResponse::new(bookmarks)))
        .map_err(BattleBoardError::from)
}

#[derive(Debug)]
pub struct AddBookmarkUseCase {
    pub user: User,
    pub contest_id: i64,
}

#[derive(Debug)]
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
impl UseCase for AddBookmarkUseCase {
    /// The bookmarked contest ids after the write
    type Response = Vec<i64>;
    type Error = UseCaseError;

    const NAME: &'static str = "AddBookmark";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();
        if !user.bookmark(self.contest_id) {
            return Ok(user.bookmarked_contests);
        }

        user.updated = ctx.sys.get_timestamp_millis();
        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| user.bookmarked_contests)
            .map_err(|_| UseCaseError::StorageError)
    }
}
