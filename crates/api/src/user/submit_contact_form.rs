use crate::error::BattleBoardError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use battleboard_api_structs::submit_contact_form::*;
use battleboard_domain::is_valid_email;
use battleboard_infra::{render_contact_email, BattleBoardContext};
use chrono::{TimeZone, Utc};

pub async fn submit_contact_form_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BattleBoardContext>,
) -> Result<HttpResponse, BattleBoardError> {
    let body = body.0;
    let usecase = SubmitContactFormUseCase {
        name: body.name,
        email: body.email,
        message: body.message,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Message sent successfully")))
        .map_err(BattleBoardError::from)
}

/// Forwards a visitor message to the contact recipient
#[derive(Debug)]
pub struct SubmitContactFormUseCase {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingFields,
    InvalidEmail(String),
    DeliveryFailed,
}

impl From<UseCaseError> for BattleBoardError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingFields => {
                Self::BadClientData("Name, email and message are required".into())
            }
            UseCaseError::InvalidEmail(email) => {
                Self::BadClientData(format!("Invalid email provided: {}", email))
            }
            UseCaseError::DeliveryFailed => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubmitContactFormUseCase {
    type Response = ();
    type Error = UseCaseError;

    const NAME: &'static str = "SubmitContactForm";

    async fn execute(&mut self, ctx: &BattleBoardContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(UseCaseError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(UseCaseError::InvalidEmail(email.to_string()));
        }

        let tz = ctx.config.reminders.timezone;
        let received = Utc
            .timestamp_millis_opt(ctx.sys.get_timestamp_millis())
            .single()
            .map(|at| {
                format!(
                    "{} ({})",
                    at.with_timezone(&tz).format("%b %-d, %Y, %I:%M %p"),
                    tz.name()
                )
            })
            .unwrap_or_default();
        let rendered = render_contact_email(name, email, message, &received);

        ctx.mailer
            .send_email(&ctx.config.email.contact_recipient, &rendered)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!("Unable to forward contact form from {}: {}", email, e);
                UseCaseError::DeliveryFailed
            })
    }
}
