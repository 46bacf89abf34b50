use crate::error::BattleBoardError;
use crate::shared::{
    auth::create_verification_token,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use battleboard_api_structs::verify_otp::*;
use battleboard_infra::BattleBoardContext;

pub async fn verify_otp_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let body = body.0;
    let usecase = VerifyOtpUseCase {
        email: body.email,
        otp: body.otp,
    };

    execute(usecase, &ctx)
        .await
        .map(|token| {
            HttpResponse::Ok().json(APIResponse {
                message: "OTP verified successfully".into(),
                email_verification_token: token,
            })
        })
        .map_err(BattleBoardError::from)
}

/// Trades a valid one time password for an email verification token.
/// A code can only be used once.
#[derive(Debug)]
pub struct VerifyOtpUseCase {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidOtp,
    TokenError,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidOtp => Self::BadClientData("Invalid or expired OTP".into()),
            UseCaseError::TokenError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for VerifyOtpUseCase {
    type Response = String;
    type Error = UseCaseError;

    const NAME: &'static str = "VerifyOtp";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let otp = ctx
            .repos
            .otps
            .consume(&self.email, &self.otp, now)
            .await
            .ok_or(UseCaseError::InvalidOtp)?;

        create_verification_token(&otp.email, ctx).map_err(|_| UseCaseError::TokenError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::user::send_otp::{
        test::{setup_with_mailer, RecordingMailer},
        SendOtpUseCase,
    };
    use battleboard_domain::OTP_LIFETIME_MILLIS;
    use battleboard_infra::StaticTimeSys;
    use std::sync::Arc;

    const NOW: i64 = 1_700_000_000_000;

    async fn setup() -> (BattleBoardContext, String) {
        let (mut ctx, mailer) = setup_with_mailer(RecordingMailer::default());
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        let mut usecase = SendOtpUseCase {
            email: "champ@example.com".into(),
        };
        usecase.execute(&ctx).await.unwrap();
        let code = mailer.last_code().unwrap();
        (ctx, code)
    }

    fn wrong_code(code: &str) -> String {
        if code == "000000" {
            "111111".into()
        } else {
            "000000".into()
        }
    }

    #[actix_web::test]
    async fn it_issues_verification_token_once() {
        let (ctx, code) = setup().await;
        let mut usecase = VerifyOtpUseCase {
            email: "Champ@Example.com".into(),
            otp: code.clone(),
        };
        let token = usecase.execute(&ctx).await.unwrap();
        assert!(!token.is_empty());

        let mut again = VerifyOtpUseCase {
            email: "champ@example.com".into(),
            otp: code,
        };
        assert_eq!(again.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidOtp);
    }

    #[actix_web::test]
    async fn it_rejects_wrong_code() {
        let (ctx, code) = setup().await;
        let mut usecase = VerifyOtpUseCase {
            email: "champ@example.com".into(),
            otp: wrong_code(&code),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidOtp);
    }

    #[actix_web::test]
    async fn it_rejects_expired_code() {
        let (mut ctx, code) = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(NOW + OTP_LIFETIME_MILLIS + 1));
        let mut usecase = VerifyOtpUseCase {
            email: "champ@example.com".into(),
            otp: code,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseError::InvalidOtp);
    }

    #[actix_web::test]
    async fn it_accepts_code_at_end_of_lifetime() {
        let (mut ctx, code) = setup().await;
        ctx.sys = Arc::new(StaticTimeSys(NOW + OTP_LIFETIME_MILLIS));
        let mut usecase = VerifyOtpUseCase {
            email: "champ@example.com".into(),
            otp: code,
        };
        assert!(usecase.execute(&ctx).await.is_ok());
    }
}
