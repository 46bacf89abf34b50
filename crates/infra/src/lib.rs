mod config;
mod repos;
mod services;
mod system;

pub use config::{ClistConfig, Config, EmailConfig, RemindersConfig, SmsConfig};
pub use repos::{IOtpRepo, IUserRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct BattleBoardContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub channels: ReminderChannels,
    /// Sends the account mails, one time passwords and contact form messages
    pub mailer: Arc<dyn IEmailSender>,
    pub contests: Arc<dyn IContestProvider>,
}

impl BattleBoardContext {
    fn create(repos: Repos, config: Config) -> Self {
        let email = Arc::new(EmailChannel::new(
            config.email.clone(),
            config.reminders.timezone,
        ));
        Self {
            repos,
            channels: ReminderChannels::new(&config, email.clone()),
            mailer: email,
            contests: Arc::new(ClistContestApi::new(config.clist.clone())),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// Context backed by inmemory repositories, mostly useful for testing
    pub fn create_inmemory() -> Self {
        Self::create(Repos::create_inmemory(), Config::new())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<BattleBoardContext> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    let config = Config::new();
    let repos = match std::env::var(PSQL_CONNECTION_STRING) {
        Ok(connection_string) => Repos::create_postgres(&connection_string).await?,
        Err(_) => {
            warn!(
                "{} env var is not set, data will be kept in memory and lost on restart",
                PSQL_CONNECTION_STRING
            );
            Repos::create_inmemory()
        }
    };
    Ok(BattleBoardContext::create(repos, config))
}
