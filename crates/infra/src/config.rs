use battleboard_domain::Tz;
use battleboard_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Secret used to sign and verify the json web tokens given to `User`s
    pub jwt_secret: String,
    /// How long a json web token is valid in seconds
    pub token_lifetime_secs: i64,
    /// How long the token proving that an email was verified is valid in seconds
    pub verification_token_lifetime_secs: i64,
    /// Origin allowed to call the api from a browser
    pub cors_origin: String,
    pub reminders: RemindersConfig,
    pub email: EmailConfig,
    pub sms: SmsConfig,
    pub clist: ClistConfig,
}

#[derive(Debug, Clone)]
pub struct RemindersConfig {
    /// Cron expression (with seconds) deciding when the reminder scan runs
    pub cron_expression: String,
    /// Run one scan as soon as the server starts, before the first scheduled one
    pub scan_on_startup: bool,
    /// Timezone contest start times are rendered in
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Endpoint of the email provider accepting `{from, to, subject, html}`
    pub api_url: String,
    pub api_key: Option<String>,
    pub from: String,
    /// Address receiving the contact form messages
    pub contact_recipient: String,
}

#[derive(Debug, Clone)]
pub struct SmsConfig {
    pub api_url: String,
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClistConfig {
    pub api_url: String,
    pub username: Option<String>,
    pub api_key: Option<String>,
}

pub const DEFAULT_REMINDER_CRON: &str = "0 */30 * * * *";
const DEFAULT_PORT: usize = 5000;
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}

fn env_var_or(key: &str, default: &str) -> String {
    env_var(key).unwrap_or_else(|| default.to_string())
}

fn parse_port(port: Option<String>) -> usize {
    let port = match port {
        Some(port) => port,
        None => return DEFAULT_PORT,
    };
    match port.parse::<usize>() {
        Ok(port) => port,
        Err(_) => {
            warn!(
                "The given PORT: {} is not valid, falling back to the default port: {}.",
                port, DEFAULT_PORT
            );
            DEFAULT_PORT
        }
    }
}

fn parse_bool(key: &str, val: Option<String>) -> bool {
    match val.as_deref() {
        None => false,
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        Some(other) => {
            warn!("The given {}: {} is not a boolean, using false.", key, other);
            false
        }
    }
}

fn parse_timezone(tz: Option<String>) -> Tz {
    match tz {
        Some(tz) => tz.parse::<Tz>().unwrap_or_else(|_| {
            warn!(
                "The given REMINDER_TIMEZONE: {} is not valid, falling back to: {}.",
                tz, DEFAULT_TIMEZONE
            );
            DEFAULT_TIMEZONE
        }),
        None => DEFAULT_TIMEZONE,
    }
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match env_var("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(32);
                warn!("Tokens signed with the generated JWT_SECRET will not survive a restart");
                secret
            }
        };

        let email_from = env_var_or("EMAIL_FROM", "reminders@battleboard.dev");
        let email = EmailConfig {
            api_url: env_var_or("EMAIL_API_URL", "https://api.resend.com/emails"),
            api_key: env_var("EMAIL_API_KEY"),
            contact_recipient: env_var("CONTACT_RECIPIENT_EMAIL")
                .unwrap_or_else(|| email_from.clone()),
            from: email_from,
        };
        if email.api_key.is_none() {
            warn!("EMAIL_API_KEY is not set, email reminders will fail to be delivered");
        }

        let sms = SmsConfig {
            api_url: env_var_or("TWILIO_API_URL", "https://api.twilio.com"),
            account_sid: env_var("TWILIO_ACCOUNT_SID"),
            auth_token: env_var("TWILIO_AUTH_TOKEN"),
            from_number: env_var("TWILIO_PHONE_NUMBER"),
        };
        if sms.account_sid.is_none() || sms.auth_token.is_none() || sms.from_number.is_none() {
            warn!("Twilio credentials are not set, sms reminders will fail to be delivered");
        }

        Self {
            port: parse_port(env_var("PORT")),
            jwt_secret,
            token_lifetime_secs: 60 * 60, // 1 hour
            verification_token_lifetime_secs: 60 * 10, // 10 minutes
            cors_origin: env_var_or("CORS_ORIGIN", "http://localhost:5173"),
            reminders: RemindersConfig {
                cron_expression: env_var_or("REMINDER_CRON", DEFAULT_REMINDER_CRON),
                scan_on_startup: parse_bool(
                    "REMINDER_SCAN_ON_STARTUP",
                    env_var("REMINDER_SCAN_ON_STARTUP"),
                ),
                timezone: parse_timezone(env_var("REMINDER_TIMEZONE")),
            },
            email,
            sms,
            clist: ClistConfig {
                api_url: env_var_or("CLIST_API_URL", "https://clist.by/api/v4/contest/"),
                username: env_var("CLIST_USERNAME"),
                api_key: env_var("CLIST_API_KEY"),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
