use crate::error::BattleBoardError;
use crate::shared::{
    auth::protect_verified_email,
    password::hash_password,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use battleboard_api_structs::register_user::*;
use battleboard_domain::{
    is_strong_password, is_valid_email, is_valid_phone_number, normalize_email, User,
    MIN_PASSWORD_LEN,
};
use battleboard_infra::BattleBoardContext;

/// Registration is only open to emails verified with a one time password
pub async fn register_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let verified_email = protect_verified_email(&http_req, &ctx)?;
    let body = body.0;
    if normalize_email(&body.email) != normalize_email(&verified_email) {
        return Err(BattleBoardError::Unauthorized(
            "The email has not been verified".into(),
        ));
    }

    let usecase = RegisterUserUseCase {
        username: body.username,
        email: body.email,
        password: body.password,
        phone_number: body.phone_number,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(BattleBoardError::from)
}

pub struct RegisterUserUseCase {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

impl std::fmt::Debug for RegisterUserUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserUseCase")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidUsername,
    InvalidEmail(String),
    WeakPassword,
    InvalidPhoneNumber(String),
    EmailTaken,
    UsernameTaken,
    StorageError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidUsername => Self::BadClientData("Username can not be empty".into()),
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("Invalid email provided: {}", email))
            }
            UseCaseError::WeakPassword => Self::BadClientData(format!(
                "Password must be at least {} characters long and contain a lowercase letter, an uppercase letter, a number and a symbol",
                MIN_PASSWORD_LEN
            )),
            UseCaseError::InvalidPhoneNumber(phone_number) => {
                Self::BadClientData(format!("Invalid phone number provided: {}", phone_number))
            }
            UseCaseError::EmailTaken => {
                Self::Conflict("A user with that email already exists".into())
            }
            UseCaseError::UsernameTaken => {
                Self::Conflict("A user with that username already exists".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUserUseCase {
    type Response = User;
    type Error = UseCaseError;

    const NAME: &'static str = "RegisterUser";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        if self.username.trim().is_empty() {
            return Err(UseCaseError::InvalidUsername);
        }
        if !is_valid_email(&self.email) {
            return Err(UseCaseError::InvalidEmail(self.email.clone()));
        }
        if !is_strong_password(&self.password) {
            return Err(UseCaseError::WeakPassword);
        }
        let phone_number = self
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());
        if let Some(phone_number) = phone_number {
            if !is_valid_phone_number(phone_number) {
                return Err(UseCaseError::InvalidPhoneNumber(phone_number.to_string()));
            }
        }

        let password_hash = hash_password(self.password.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let user = User::new(
            self.username.clone(),
            normalize_email(&self.email),
            password_hash,
            phone_number.map(String::from),
            ctx.sys.get_timestamp_millis(),
        );

        if ctx.repos.users.find_by_email(&user.email).await.is_some() {
            return Err(UseCaseError::EmailTaken);
        }
        if ctx.repos.users.find_by_username(&user.username).await.is_some() {
            return Err(UseCaseError::UsernameTaken);
        }

        ctx.repos
            .users
            .insert(&user)
            .await
            .map(|_| user)
            .map_err(|_| UseCaseError::StorageError)
    }
}
