use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::get_bookmarks::*;
use battleboard_domain::{Contest, User};
use battleboard_infra::{BattleBoardContext, ContestQuery};

pub async fn get_bookmarks_controller(
    http_req: HttpRequest,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    execute(GetBookmarksUseCase { user }, &ctx)
        .await
        .map(|contests| HttpResponse::Ok().json(APIResponse::new(contests)))
        .map_err(BattleBoardError::from)
}

/// The bookmarked contests that are inside the contest listing window
#[derive(Debug)]
pub struct GetBookmarksUseCase {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseError {
    ProviderError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProviderError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookmarksUseCase {
    type Response = Vec<Contest>;
    type Error = UseCaseError;

    const NAME: &'static str = "GetBookmarks";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        if self.user.bookmarked_contests.is_empty() {
            return Ok(Vec::new());
        }

        let query = ContestQuery::around(ctx.sys.get_timestamp_millis());
        let contests = ctx
            .contests
            .list_contests(&query)
            .await
            .map_err(|_| UseCaseError::ProviderError)?;

        Ok(contests
            .into_iter()
            .filter(|c| self.user.bookmarked_contests.contains(&c.id))
            .collect())
    }
}
