use super::{check_status, DeliveryError, DeliveryReceipt, ReminderChannel};
use crate::config::EmailConfig;
use battleboard_domain::{ReminderMethod, ReminderNotification, Tz, OTP_LIFETIME_MILLIS};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn render_email(notification: &ReminderNotification, tz: &Tz) -> RenderedEmail {
    let platform = notification.platform;
    let contest_id = notification.contest_id;
    let start = notification.format_contest_start(tz);

    RenderedEmail {
        subject: format!(
            "Reminder: Upcoming {} Contest (ID: {}) Starts Soon!",
            platform, contest_id
        ),
        html: format!(
            "<p>Hello Champion!</p>\
             <p>This is a reminder that your contest on <strong>{platform}</strong> \
             (Contest ID: {contest_id}) is scheduled to begin at:</p>\
             <p><strong>Date &amp; Time:</strong> {start} ({tz})</p>\
             <p>Make sure you're ready to give it your best shot!</p>\
             <p><strong>Pro Tip:</strong> Double-check your internet connection and login \
             credentials before the contest starts.</p>\
             <p>Best of luck!<br>Team BattleBoard</p>",
            platform = platform,
            contest_id = contest_id,
            start = start,
            tz = tz.name(),
        ),
    }
}

pub fn render_otp_email(code: &str) -> RenderedEmail {
    RenderedEmail {
        subject: "Your OTP for Email Verification".into(),
        html: format!(
            "<h2>OTP Verification</h2>\
             <p>Your One-Time Password (OTP) is:</p>\
             <h1 style=\"letter-spacing: 10px;\">{}</h1>\
             <p>This OTP will expire in {} minutes.</p>",
            code,
            OTP_LIFETIME_MILLIS / (1000 * 60)
        ),
    }
}

/// A message left through the contact form. Every user provided field is escaped.
pub fn render_contact_email(
    name: &str,
    email: &str,
    message: &str,
    received: &str,
) -> RenderedEmail {
    RenderedEmail {
        subject: format!("New Contact Form Submission from {}", name),
        html: format!(
            "<h2>New Message from Contact Form</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>\
             <p style=\"color: #888; font-size: 12px;\">Received: {}</p>",
            escape_html(name),
            escape_html(email),
            escape_html(message),
            received
        ),
    }
}

pub fn escape_html(unsafe_text: &str) -> String {
    let mut escaped = String::with_capacity(unsafe_text.len());
    for c in unsafe_text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Sends an already rendered email to one address
#[async_trait::async_trait]
pub trait IEmailSender: Send + Sync {
    async fn send_email(
        &self,
        to: &str,
        email: &RenderedEmail,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Client of an email provider accepting `{from, to, subject, html}`. Used
/// both as the email `ReminderChannel` and as the `IEmailSender` for account mails.
pub struct EmailChannel {
    client: Client,
    config: EmailConfig,
    timezone: Tz,
}

impl EmailChannel {
    pub fn new(config: EmailConfig, timezone: Tz) -> Self {
        Self {
            client: Client::new(),
            config,
            timezone,
        }
    }
}

#[async_trait::async_trait]
impl IEmailSender for EmailChannel {
    async fn send_email(
        &self,
        to: &str,
        email: &RenderedEmail,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(DeliveryError::NotConfigured(ReminderMethod::Email))?;
        if to.is_empty() {
            return Err(DeliveryError::InvalidDestination(to.to_string()));
        }

        let body = SendEmailRequest {
            from: &self.config.from,
            to,
            subject: &email.subject,
            html: &email.html,
        };
        let res = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let res = check_status(res).await?;

        // Some providers answer with an empty body
        let message_id = res
            .json::<SendEmailResponse>()
            .await
            .ok()
            .and_then(|r| r.id);
        Ok(DeliveryReceipt { message_id })
    }
}

#[async_trait::async_trait]
impl ReminderChannel for EmailChannel {
    async fn send(
        &self,
        destination: &str,
        notification: &ReminderNotification,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let email = render_email(notification, &self.timezone);
        let receipt = self.send_email(destination, &email).await?;
        info!(
            "Email sent to {} for contest {}",
            destination, notification.contest_id
        );
        Ok(receipt)
    }
}
