use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::update_note::*;
use battleboard_domain::{ContestNote, NoteChange, User};
use battleboard_infra::BattleBoardContext;

pub async fn update_note_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateNoteUseCase {
        user,
        contest_id: body.contest_id,
        note: body.note,
    };

    execute(usecase, &ctx)
        .await
        .map(|note| {
            let res = match note {
                Some(note) => APIResponse::saved(note),
                None => APIResponse::removed(),
            };
            HttpResponse::Ok().json(res)
        })
        .map_err(BattleBoardError::from)
}

/// Writes the note a `User` keeps for a contest. A blank note removes the existing one.
#[derive(Debug)]
pub struct UpdateNoteUseCase {
    pub user: User,
    pub contest_id: i64,
    pub note: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyNote,
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyNote => Self::BadClientData("Note can not be empty".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateNoteUseCase {
    /// The note after the write, `None` if it was removed
    type Response = Option<ContestNote>;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateNote";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();
        let now = ctx.sys.get_timestamp_millis();

        if user.set_note(self.contest_id, self.note.clone(), now) == NoteChange::Rejected {
            return Err(UseCaseError::EmptyNote);
        }
        user.updated = now;

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(user.find_note(self.contest_id).cloned())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use battleboard_infra::StaticTimeSys;
    use std::sync::Arc;

    async fn setup() -> (BattleBoardContext, User) {
        let mut ctx = BattleBoardContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(500));
        let user = User::new(
            "champ".into(),
            "champ@example.com".into(),
            "hash".into(),
            None,
            0,
        );
        ctx.repos.users.insert(&user).await.unwrap();
        (ctx, user)
    }

    fn usecase(user: User, note: &str) -> UpdateNoteUseCase {
        UpdateNoteUseCase {
            user,
            contest_id: 11,
            note: note.into(),
        }
    }

    #[actix_web::test]
    async fn it_creates_and_replaces_note() {
        let (ctx, user) = setup().await;

        let note = usecase(user.clone(), "binary search on answer")
            .execute(&ctx)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.note, "binary search on answer");
        assert_eq!(note.created, 500);

        let user = ctx.repos.users.find(&user.id).await.unwrap();
        let note = usecase(user.clone(), "segment tree")
            .execute(&ctx)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(note.note, "segment tree");

        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(stored.notes.len(), 1);
    }

    #[actix_web::test]
    async fn it_removes_note_when_blank() {
        let (ctx, user) = setup().await;
        usecase(user.clone(), "greedy").execute(&ctx).await.unwrap();

        let user = ctx.repos.users.find(&user.id).await.unwrap();
        assert_eq!(usecase(user.clone(), "   ").execute(&ctx).await.unwrap(), None);
        let stored = ctx.repos.users.find(&user.id).await.unwrap();
        assert!(stored.find_note(11).is_none());
    }

    #[actix_web::test]
    async fn it_rejects_blank_note_without_existing_note() {
        let (ctx, user) = setup().await;
        assert_eq!(
            usecase(user, "").execute(&ctx).await.unwrap_err(),
            UseCaseError::EmptyNote
        );
    }
}
