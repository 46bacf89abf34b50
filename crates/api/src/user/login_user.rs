use crate::error::BattleBoardError;
use crate::shared::auth::create_token;
use crate::shared::password::verify_password;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use battleboard_api_structs::login_user::*;
use battleboard_domain::User;
use battleboard_infra::BattleBoardContext;

pub async fn login_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let body = body.0;
    let usecase = LoginUserUseCase {
        email_or_username: body.email_or_username,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.token, res.user)))
        .map_err(BattleBoardError::from)
}

pub struct LoginUserUseCase {
    pub email_or_username: String,
    pub password: String,
}

// The password should never end up in the logs
impl std::fmt::Debug for LoginUserUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUserUseCase")
            .field("email_or_username", &self.email_or_username)
            .finish()
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub token: String,
    pub user: User,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCredentials,
    TokenError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => {
                Self::Unauthorized("Invalid email/username or password".into())
            }
            UseCaseError::TokenError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUserUseCase {
    type Response = UseCaseRes;
    type Error = UseCaseError;

    const NAME: &'static str = "LoginUser";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let identifier = self.email_or_username.trim();
        let user = match ctx
            .repos
            .users
            .find_by_email(&identifier.to_lowercase())
            .await
        {
            Some(user) => user,
            None => ctx
                .repos
                .users
                .find_by_username(identifier)
                .await
                .ok_or(UseCaseError::InvalidCredentials)?,
        };

        if !verify_password(self.password.clone(), user.password_hash.clone()).await {
            return Err(UseCaseError::InvalidCredentials);
        }

        let token = create_token(&user, ctx).map_err(|_| UseCaseError::TokenError)?;
        Ok(UseCaseRes { token, user })
    }
}
