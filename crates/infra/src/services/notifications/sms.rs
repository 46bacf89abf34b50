use super::{check_status, DeliveryError, DeliveryReceipt, ReminderChannel};
use crate::config::SmsConfig;
use battleboard_domain::{normalize_phone_number, ReminderMethod, ReminderNotification, Tz};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

pub fn render_sms(notification: &ReminderNotification, tz: &Tz) -> String {
    format!(
        "BattleBoard Reminder!\n{} Contest (ID: {}) starts at {} ({}).\nGood luck!",
        notification.platform,
        notification.contest_id,
        notification.format_contest_start(tz),
        tz.name()
    )
}

#[derive(Debug, Deserialize)]
struct TwilioMessage {
    sid: String,
}

/// Delivers reminders as sms through the Twilio messages api
pub struct TwilioSmsChannel {
    client: Client,
    config: SmsConfig,
    timezone: Tz,
}

impl TwilioSmsChannel {
    pub fn new(config: SmsConfig, timezone: Tz) -> Self {
        Self {
            client: Client::new(),
            config,
            timezone,
        }
    }
}

#[async_trait::async_trait]
impl ReminderChannel for TwilioSmsChannel {
    async fn send(
        &self,
        destination: &str,
        notification: &ReminderNotification,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let (account_sid, auth_token, from_number) = match (
            &self.config.account_sid,
            &self.config.auth_token,
            &self.config.from_number,
        ) {
            (Some(sid), Some(token), Some(from)) => (sid, token, from),
            _ => return Err(DeliveryError::NotConfigured(ReminderMethod::Sms)),
        };
        let to = normalize_phone_number(destination)
            .ok_or_else(|| DeliveryError::InvalidDestination(destination.to_string()))?;

        let body = render_sms(notification, &self.timezone);
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.api_url.trim_end_matches('/'),
            account_sid
        );
        let res = self
            .client
            .post(&url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&[
                ("From", from_number.as_str()),
                ("To", to.as_str()),
                ("Body", body.as_str()),
            ])
            .send()
            .await?;
        let message: TwilioMessage = check_status(res).await?.json().await?;

        info!(
            "Sms sent to {} for contest {}. Message sid: {}",
            to, notification.contest_id, message.sid
        );
        Ok(DeliveryReceipt {
            message_id: Some(message.sid),
        })
    }
}
