use crate::credentials::normalize_email;

/// Number of digits in a one time password
pub const OTP_LEN: usize = 6;
/// How long a one time password can be used, 5 minutes
pub const OTP_LIFETIME_MILLIS: i64 = 1000 * 60 * 5;

/// A code mailed to an address to prove that the owner can read it
#[derive(Debug, Clone, PartialEq)]
pub struct OneTimePassword {
    pub email: String,
    pub code: String,
    /// Timestamp in millis after which the code is rejected
    pub expires_at: i64,
}

impl OneTimePassword {
    pub fn new(email: &str, code: String, now: i64) -> Self {
        Self {
            email: normalize_email(email),
            code,
            expires_at: now + OTP_LIFETIME_MILLIS,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    pub fn accepts(&self, code: &str, now: i64) -> bool {
        !self.is_expired(now) && self.code == code.trim()
    }
}
