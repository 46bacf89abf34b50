mod inmemory;

use battleboard_domain::OneTimePassword;
pub use inmemory::InMemoryOtpRepo;

/// Pending one time passwords, at most one per email.
///
/// Callers pass the current time from `ISys` so expiry follows the context clock.
#[async_trait::async_trait]
pub trait IOtpRepo: Send + Sync {
    /// Stores the code, replacing any earlier code for the same email. Codes
    /// that expired before `now` are dropped.
    async fn insert(&self, otp: &OneTimePassword, now: i64) -> anyhow::Result<()>;
    /// Removes and returns the code for the email if it accepts `code` at `now`.
    /// A wrong code leaves the stored one in place.
    async fn consume(&self, email: &str, code: &str, now: i64) -> Option<OneTimePassword>;
}
