use crate::error::BattleBoardError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use battleboard_api_structs::send_otp::*;
use battleboard_domain::{is_valid_email, normalize_email, OneTimePassword, OTP_LEN};
use battleboard_infra::{render_otp_email, BattleBoardContext};
use battleboard_utils::create_random_digits;
use tracing::info;

pub async fn send_otp_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let usecase = SendOtpUseCase {
        email: body.0.email,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("OTP sent successfully")))
        .map_err(BattleBoardError::from)
}

/// Mails a fresh one time password to the address, replacing any earlier one
#[derive(Debug)]
pub struct SendOtpUseCase {
    pub email: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidEmail(String),
    StorageError,
    DeliveryFailed,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("Invalid email provided: {}", email))
            }
            UseCaseError::StorageError | UseCaseError::DeliveryFailed => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendOtpUseCase {
    type Response = ();
    type Error = UseCaseError;

    const NAME: &'static str = "SendOtp";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let email = normalize_email(&self.email);
        if !is_valid_email(&email) {
            return Err(UseCaseError::InvalidEmail(self.email.clone()));
        }

        let now = ctx.sys.get_timestamp_millis();
        let otp = OneTimePassword::new(&email, create_random_digits(OTP_LEN), now);
        ctx.repos
            .otps
            .insert(&otp, now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.mailer
            .send_email(&email, &render_otp_email(&otp.code))
            .await
            .map_err(|e| {
                tracing::error!("Unable to send OTP to {}: {}", email, e);
                UseCaseError::DeliveryFailed
            })?;
        info!("OTP sent to {}", email);
        Ok(())
    }
}
