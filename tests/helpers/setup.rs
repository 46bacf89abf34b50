use battleboard_api::Application;
use battleboard_domain::Contest;
use battleboard_infra::{
    BattleBoardContext, Config, ContestQuery, DeliveryError, DeliveryReceipt, IContestProvider,
    IEmailSender, RenderedEmail,
};
use battleboard_sdk::{BattleBoardSDK, LoginUserInput, RegisterUserInput};
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub config: Config,
    pub address: String,
    pub mailer: Arc<RecordingMailer>,
}

/// Mailer keeping every account email instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, RenderedEmail)>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(String, RenderedEmail)> {
        self.sent.lock().unwrap().clone()
    }

    /// The code in the last one time password mailed to `to`
    pub fn last_code_for(&self, to: &str) -> Option<String> {
        let (_, email) = self.sent().into_iter().rev().find(|(rcpt, _)| rcpt == to)?;
        let start = email.html.find("px;\">")? + "px;\">".len();
        let end = start + email.html[start..].find("</h1>")?;
        Some(email.html[start..end].to_string())
    }
}

#[async_trait::async_trait]
impl IEmailSender for RecordingMailer {
    async fn send_email(
        &self,
        to: &str,
        email: &RenderedEmail,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), email.clone()));
        Ok(DeliveryReceipt::default())
    }
}

/// Contest provider serving a fixed set of contests
pub struct StaticContests(pub Vec<Contest>);

#[async_trait::async_trait]
impl IContestProvider for StaticContests {
    async fn list_contests(&self, _query: &ContestQuery) -> anyhow::Result<Vec<Contest>> {
        Ok(self.0.clone())
    }
}

pub fn contest(id: i64, host: &str) -> Contest {
    Contest {
        id,
        event: format!("Round #{}", id),
        host: host.into(),
        href: format!("https://{}/contest/{}", host, id),
        start_ts: 1741527000000 + id * 1000,
        end_ts: 1741534200000 + id * 1000,
        duration: 7200,
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BattleBoardSDK) {
    let mut ctx = BattleBoardContext::create_inmemory();
    ctx.config.port = 0; // Random port
    // Keep the reminder job out of the way
    ctx.config.reminders.cron_expression = "0 0 0 1 1 *".into();
    ctx.config.reminders.scan_on_startup = false;
    ctx.contests = Arc::new(StaticContests(vec![
        contest(1, "codeforces.com"),
        contest(2, "leetcode.com"),
        contest(3, "atcoder.jp"),
    ]));
    let mailer = Arc::new(RecordingMailer::default());
    ctx.mailer = mailer.clone();

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
        mailer,
    };
    let sdk = BattleBoardSDK::new(address);
    (app, sdk)
}

/// Runs the one time password flow for `email` and returns the verification token
pub async fn verify_email(app: &TestApp, sdk: &BattleBoardSDK, email: &str) -> String {
    sdk.user
        .send_otp(email.into())
        .await
        .expect("Expected to send OTP");
    let code = app
        .mailer
        .last_code_for(email)
        .expect("Expected an OTP email");

    sdk.user
        .verify_otp(email.into(), code)
        .await
        .expect("Expected to verify OTP")
        .email_verification_token
}

/// Registers a `User` and returns an sdk acting as that `User`
pub async fn register_and_login(
    app: &TestApp,
    sdk: &BattleBoardSDK,
    name: &str,
) -> BattleBoardSDK {
    let email = format!("{}@example.com", name);
    let email_verification_token = verify_email(app, sdk, &email).await;
    sdk.user
        .register(RegisterUserInput {
            email_verification_token,
            username: name.into(),
            email,
            password: "Str0ng!Passw0rd".into(),
            phone_number: None,
        })
        .await
        .expect("Expected to register user");

    let res = sdk
        .user
        .login(LoginUserInput {
            email_or_username: name.into(),
            password: "Str0ng!Passw0rd".into(),
        })
        .await
        .expect("Expected to login");

    BattleBoardSDK::with_token(app.address.clone(), res.token)
}
