use crate::shared::usecase::{execute, UseCase};
use crate::{error::BattleBoardError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::update_me::*;
use battleboard_domain::{is_valid_phone_number, User};
use battleboard_infra::BattleBoardContext;

pub async fn update_me_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let user = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateMeUseCase {
        user,
        username: body.username,
        phone_number: body.phone_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(BattleBoardError::from)
}

#[derive(Debug)]
pub struct UpdateMeUseCase {
    pub user: User,
    pub username: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidUsername,
    UsernameTaken,
    InvalidPhoneNumber(String),
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidUsername => Self::BadClientData("Username can not be empty".into()),
            UseCaseError::UsernameTaken => {
                Self::Conflict("A user with that username already exists".into())
            }
            UseCaseError::InvalidPhoneNumber(phone_number) => {
                Self::BadClientData(format!("Invalid phone number provided: {}", phone_number))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateMeUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "UpdateMe";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut user = self.user.clone();

        if let Some(username) = &self.username {
            let username = username.trim();
            if username.is_empty() {
                return Err(UseCaseError::InvalidUsername);
            }
            if username != user.username {
                if let Some(other) = ctx.repos.users.find_by_username(username).await {
                    if other.id != user.id {
                        return Err(UseCaseError::UsernameTaken);
                    }
                }
                user.username = username.to_string();
            }
        }

        if let Some(phone_number) = &self.phone_number {
            let phone_number = phone_number.trim();
            if phone_number.is_empty() {
                user.phone_number = None;
            } else if is_valid_phone_number(phone_number) {
                user.phone_number = Some(phone_number.to_string());
            } else {
                return Err(UseCaseError::InvalidPhoneNumber(phone_number.to_string()));
            }
        }

        user.updated = ctx.sys.get_timestamp_millis();
        ctx.repos
            .users
            .save(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseError::StorageError)
    }
}
