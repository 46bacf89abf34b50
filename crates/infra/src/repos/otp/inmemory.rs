use super::IOtpRepo;
use battleboard_domain::{normalize_email, OneTimePassword};
use std::collections::HashMap;

pub struct InMemoryOtpRepo {
    otps: std::sync::Mutex<HashMap<String, OneTimePassword>>,
}

impl InMemoryOtpRepo {
    pub fn new() -> Self {
        Self {
            otps: std::sync::Mutex::new(HashMap::new()),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.otps.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IOtpRepo for InMemoryOtpRepo {
    async fn insert(&self, otp: &OneTimePassword, now: i64) -> anyhow::Result<()> {
        let mut otps = self.otps.lock().unwrap();
        otps.retain(|_, stored| !stored.is_expired(now));
        otps.insert(otp.email.clone(), otp.clone());
        Ok(())
    }

    async fn consume(&self, email: &str, code: &str, now: i64) -> Option<OneTimePassword> {
        let email = normalize_email(email);
        let mut otps = self.otps.lock().unwrap();
        if otps.get(&email)?.accepts(code, now) {
            otps.remove(&email)
        } else {
            None
        }
    }
}
