mod email;
mod sms;

use crate::config::Config;
use battleboard_domain::{DeliveryTarget, ReminderMethod, ReminderNotification};
use std::sync::Arc;
use thiserror::Error;

pub use email::{
    escape_html, render_contact_email, render_email, render_otp_email, EmailChannel, IEmailSender,
    RenderedEmail,
};
pub use sms::{render_sms, TwilioSmsChannel};

/// Proof that a provider accepted a reminder
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeliveryReceipt {
    /// Identifier the provider gave the message, if it returned one
    pub message_id: Option<String>,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("The {0} channel is not configured")]
    NotConfigured(ReminderMethod),
    #[error("Invalid destination: `{0}`")]
    InvalidDestination(String),
    #[error("Unable to reach the provider: {0}")]
    Network(#[from] reqwest::Error),
    #[error("The provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A delivery mechanism able to send a rendered reminder to one destination
#[async_trait::async_trait]
pub trait ReminderChannel: Send + Sync {
    async fn send(
        &self,
        destination: &str,
        notification: &ReminderNotification,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

/// One channel per `ReminderMethod`
#[derive(Clone)]
pub struct ReminderChannels {
    pub email: Arc<dyn ReminderChannel>,
    pub sms: Arc<dyn ReminderChannel>,
}

impl ReminderChannels {
    /// The email client is shared with the account mails
    pub fn new(config: &Config, email: Arc<EmailChannel>) -> Self {
        Self {
            email,
            sms: Arc::new(TwilioSmsChannel::new(
                config.sms.clone(),
                config.reminders.timezone,
            )),
        }
    }

    pub fn for_method(&self, method: ReminderMethod) -> &Arc<dyn ReminderChannel> {
        match method {
            ReminderMethod::Email => &self.email,
            ReminderMethod::Sms => &self.sms,
        }
    }

    pub async fn deliver(
        &self,
        target: &DeliveryTarget,
        notification: &ReminderNotification,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.for_method(target.method())
            .send(target.destination(), notification)
            .await
    }
}

/// Turns a non success response into a `DeliveryError::Rejected`
async fn check_status(res: reqwest::Response) -> Result<reqwest::Response, DeliveryError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(DeliveryError::Rejected {
        status: status.as_u16(),
        body,
    })
}
