use crate::error::BattleBoardError;
use crate::shared::{
    auth::protect_verified_email,
    password::hash_password,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::reset_password::*;
use battleboard_domain::{is_strong_password, MIN_PASSWORD_LEN};
use battleboard_infra::BattleBoardContext;

/// The account is taken from the email verification token, never from the body
pub async fn reset_password_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let email = protect_verified_email(&http_req, &ctx)?;

    let usecase = ResetPasswordUseCase {
        email,
        new_password: body.0.new_password,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Password reset successfully")))
        .map_err(BattleBoardError::from)
}

pub struct ResetPasswordUseCase {
    pub email: String,
    pub new_password: String,
}

impl std::fmt::Debug for ResetPasswordUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordUseCase")
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    WeakPassword,
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::Unauthorized("Invalid credentials".into()),
            UseCaseError::WeakPassword => Self::BadClientData(format!(
                "Password must be at least {} characters long and contain a lowercase letter, an uppercase letter, a number and a symbol",
                MIN_PASSWORD_LEN
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ResetPasswordUseCase {
    type Response = ();
    type Error = UseCaseError;

    const NAME: &'static str = "ResetPassword";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let mut user = ctx
            .repos
            .users
            .find_by_email(&self.email)
            .await
            .ok_or(UseCaseError::UserNotFound)?;
        if !is_strong_password(&self.new_password) {
            return Err(UseCaseError::WeakPassword);
        }

        user.password_hash = hash_password(self.new_password.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        user.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .users
            .save(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
