use crate::{APIResponse, BaseClient};
use battleboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct RegisterUserInput {
    /// Issued by `verify_otp` for the same email
    pub email_verification_token: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

pub struct LoginUserInput {
    pub email_or_username: String,
    pub password: String,
}

pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Default)]
pub struct UpdateMeInput {
    pub username: Option<String>,
    /// An empty string removes the phone number
    pub phone_number: Option<String>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn send_otp(&self, email: String) -> APIResponse<send_otp::APIResponse> {
        let body = send_otp::RequestBody { email };
        self.base
            .post(body, "user/send-otp".into(), StatusCode::OK)
            .await
    }

    pub async fn verify_otp(
        &self,
        email: String,
        otp: String,
    ) -> APIResponse<verify_otp::APIResponse> {
        let body = verify_otp::RequestBody { email, otp };
        self.base
            .post(body, "user/verify-otp".into(), StatusCode::OK)
            .await
    }

    pub async fn register(
        &self,
        input: RegisterUserInput,
    ) -> APIResponse<register_user::APIResponse> {
        let body = register_user::RequestBody {
            username: input.username,
            email: input.email,
            password: input.password,
            phone_number: input.phone_number,
        };
        self.base
            .post_with_token(
                &input.email_verification_token,
                body,
                "user/register".into(),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn login(&self, input: LoginUserInput) -> APIResponse<login_user::APIResponse> {
        let body = login_user::RequestBody {
            email_or_username: input.email_or_username,
            password: input.password,
        };
        self.base
            .post(body, "user/login".into(), StatusCode::OK)
            .await
    }

    /// Sets a new password on the account the verification token was issued for
    pub async fn reset_password(
        &self,
        email_verification_token: &str,
        new_password: String,
    ) -> APIResponse<reset_password::APIResponse> {
        let body = reset_password::RequestBody { new_password };
        self.base
            .post_with_token(
                email_verification_token,
                body,
                "user/reset-password".into(),
                StatusCode::OK,
            )
            .await
    }

    pub async fn contact(
        &self,
        input: ContactFormInput,
    ) -> APIResponse<submit_contact_form::APIResponse> {
        let body = submit_contact_form::RequestBody {
            name: input.name,
            email: input.email,
            message: input.message,
        };
        self.base
            .post(body, "user/contact".into(), StatusCode::OK)
            .await
    }

    pub async fn me(&self) -> APIResponse<get_me::APIResponse> {
        self.base.get("me".into(), StatusCode::OK).await
    }

    pub async fn update_me(&self, input: UpdateMeInput) -> APIResponse<update_me::APIResponse> {
        let body = update_me::RequestBody {
            username: input.username,
            phone_number: input.phone_number,
        };
        self.base.put(body, "me".into(), StatusCode::OK).await
    }
}
